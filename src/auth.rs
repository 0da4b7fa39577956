use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    AlreadyExists,
}

/// Flat-file credential store: one `username password` pair per line,
/// space-delimited. A missing file is an empty store; it is created on the
/// first registration.
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn user_exists(&self, username: &str) -> io::Result<bool> {
        Ok(self
            .read_pairs()?
            .iter()
            .any(|(stored, _)| stored == username))
    }

    /// Append the new pair unless the username is already taken.
    pub fn register(&self, username: &str, password: &str) -> io::Result<RegisterOutcome> {
        if self.user_exists(username)? {
            return Ok(RegisterOutcome::AlreadyExists);
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{username} {password}")?;
        Ok(RegisterOutcome::Created)
    }

    /// Login check: the exact username/password pair must be on file.
    pub fn validate(&self, username: &str, password: &str) -> io::Result<bool> {
        Ok(self
            .read_pairs()?
            .iter()
            .any(|(u, p)| u == username && p == password))
    }

    fn read_pairs(&self) -> io::Result<Vec<(String, String)>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        Ok(content
            .lines()
            .filter_map(|line| {
                let mut tokens = line.split_whitespace();
                match (tokens.next(), tokens.next()) {
                    (Some(user), Some(pass)) => Some((user.to_string(), pass.to_string())),
                    _ => None,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> UserStore {
        UserStore::new(dir.path().join("users.txt"))
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert!(!store.user_exists("anyone").unwrap());
        assert!(!store.validate("anyone", "secret").unwrap());
    }

    #[test]
    fn register_then_login_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert_eq!(
            store.register("alice", "hunter2").unwrap(),
            RegisterOutcome::Created
        );
        assert!(store.user_exists("alice").unwrap());
        assert!(store.validate("alice", "hunter2").unwrap());
        assert!(!store.validate("alice", "wrong").unwrap());
        assert!(!store.validate("bob", "hunter2").unwrap());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.register("alice", "first").unwrap();
        assert_eq!(
            store.register("alice", "second").unwrap(),
            RegisterOutcome::AlreadyExists
        );
        // The original password still wins.
        assert!(store.validate("alice", "first").unwrap());
        assert!(!store.validate("alice", "second").unwrap());
    }

    #[test]
    fn multiple_users_share_the_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.register("alice", "a").unwrap();
        store.register("bob", "b").unwrap();
        assert!(store.validate("alice", "a").unwrap());
        assert!(store.validate("bob", "b").unwrap());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.txt");
        fs::write(&path, "lonelyuser\n\nalice secret\n").unwrap();
        let store = UserStore::new(path);
        assert!(!store.user_exists("lonelyuser").unwrap());
        assert!(store.validate("alice", "secret").unwrap());
    }
}
