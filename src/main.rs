mod auth;
mod command;
mod document;
mod editor;
mod lexicon;
mod session;
mod spell;
mod undo;
mod word_graph;

use auth::{RegisterOutcome, UserStore};
use clap::Parser;
use crossterm::style::Stylize;
use session::Session;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const BANNER: &str = r#"
 _                   _
| | _____  _____  __| |
| |/ _ \ \/ / _ \/ _` |
| |  __/>  <  __/ (_| |
|_|\___/_/\_\___|\__,_|
"#;

/// Line-oriented text editor with spell checking and word relationships.
#[derive(Parser)]
#[command(name = "lexed", version)]
struct Args {
    /// Credential file holding `username password` pairs, one per line
    #[arg(long, default_value = "users.txt")]
    users_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let store = UserStore::new(args.users_file);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    writeln!(output, "{}", BANNER.cyan())?;
    writeln!(output, "{}", "Welcome to the lexed text editor!".yellow())?;

    if !login(&store, &mut input, &mut output)? {
        return Ok(());
    }

    let mut session = Session::new(input, output);
    session.run()?;
    Ok(())
}

/// Registration/login gate. The editor session is only entered after a
/// successful login; the username never crosses into it.
fn login(
    store: &UserStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<bool> {
    let choice = prompt_word(input, output, "Do you have an account? (yes/no): ")?;
    if choice == "no" {
        register(store, input, output)?;
    }

    let username = prompt_word(input, output, "Enter your username: ")?;
    let password = prompt_word(input, output, "Enter your password: ")?;
    if store.validate(&username, &password)? {
        writeln!(output, "{}", "Login successful!".green())?;
        Ok(true)
    } else {
        writeln!(output, "{}", "Invalid credentials. Exiting...".red())?;
        Ok(false)
    }
}

fn register(
    store: &UserStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let username = prompt_word(input, output, "Enter a username: ")?;
    if store.user_exists(&username)? {
        writeln!(output, "User already exists. Please log in.")?;
        return Ok(());
    }
    let password = prompt_word(input, output, "Enter a password: ")?;
    match store.register(&username, &password)? {
        RegisterOutcome::Created => writeln!(output, "Registration successful!")?,
        RegisterOutcome::AlreadyExists => writeln!(output, "User already exists. Please log in.")?,
    }
    Ok(())
}

/// Prompt and read the first whitespace-delimited token of the reply.
fn prompt_word(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string())
}
