use std::collections::{HashMap, HashSet};

/// Known-word set plus the misspelling -> correction map. Loaded once from the
/// static tables below; the only mutation afterwards is `add_word` (the user's
/// personal dictionary).
#[derive(Debug, Clone)]
pub struct Lexicon {
    known: HashSet<String>,
    corrections: HashMap<String, String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            known: KNOWN_WORDS.iter().map(|w| w.to_string()).collect(),
            corrections: MISSPELLINGS
                .iter()
                .map(|(bad, good)| (bad.to_string(), good.to_string()))
                .collect(),
        }
    }

    /// Lowercase and drop everything that is not an ASCII letter, so
    /// "don't" and "Dont" both become "dont".
    pub fn normalize(word: &str) -> String {
        word.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }

    /// Membership test on the normalized form.
    pub fn contains(&self, word: &str) -> bool {
        self.known.contains(word)
    }

    /// Curated correction for a known misspelling, if there is one.
    pub fn correction_for(&self, word: &str) -> Option<&str> {
        self.corrections.get(word).map(String::as_str)
    }

    /// Add to the known-word set (normalized). Idempotent.
    pub fn add_word(&mut self, word: &str) {
        let normalized = Self::normalize(word);
        if !normalized.is_empty() {
            self.known.insert(normalized);
        }
    }

    /// Every known word containing `needle` as a substring, sorted for
    /// deterministic output.
    pub fn words_containing(&self, needle: &str) -> Vec<String> {
        let mut matches: Vec<String> = self
            .known
            .iter()
            .filter(|w| w.contains(needle))
            .cloned()
            .collect();
        matches.sort_unstable();
        matches
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

const KNOWN_WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog",
    "apple", "banana", "cherry", "date", "elderberry", "fig", "grape",
    "house", "island", "jungle", "kite", "lemon", "mountain", "notebook",
    "ocean", "parrot", "queen", "river", "sun", "tree", "umbrella",
    "village", "water", "xylophone", "yellow", "zebra", "computer",
    "laptop", "keyboard", "mouse", "screen", "speaker", "microphone",
    "camera", "software", "hardware", "network", "internet", "router",
    "algorithm", "function", "variable", "loop", "condition", "program",
    "engineer", "developer", "scientist", "doctor", "artist", "writer",
    "teacher", "student", "school", "university", "hospital", "library",
    "road", "car", "bicycle", "train", "airplane", "ship", "satellite",
    "earth", "moon", "star", "galaxy", "planet", "space", "astronaut",
    "energy", "power", "electricity", "battery", "current", "voltage",
    "circuit", "resistor", "capacitor", "inductor", "transistor",
    "processor", "memory", "storage", "file", "folder", "database",
    "server", "client", "protocol", "encryption", "password", "security",
    "health", "fitness", "exercise", "nutrition", "protein", "vitamin",
    "mineral", "hydration", "sleep", "mental", "wellness",
    "happiness", "motivation", "goal", "success", "achievement",
    "growth", "progress", "development", "knowledge", "wisdom",
    "curiosity", "imagination", "creativity", "innovation", "discovery",
    "exploration", "adventure", "journey", "destination", "purpose",
    "freedom", "justice", "equality", "community", "friendship",
    "family", "love", "compassion", "kindness", "patience", "peace",
    "respect", "gratitude", "forgiveness", "courage", "strength",
    "determination", "resilience", "faith", "hope", "trust", "truth",
    "honesty", "integrity", "responsibility", "loyalty", "humility",
    "generosity", "empathy", "dignity", "pride", "humor", "harmony",
    "balance", "simplicity", "beauty", "elegance", "quality", "excellence",
    "precision", "accuracy", "clarity", "focus", "vision", "ambition",
    "strategy", "planning", "execution", "analysis", "research",
    "evaluation", "measurement", "optimization", "performance",
    "efficiency", "effectiveness", "productivity", "teamwork",
    "collaboration", "communication", "leadership", "management",
    "organization", "coordination", "decision", "solution", "opportunity",
    "challenge", "problem", "risk", "reward", "benefit", "value",
    "impact", "outcome", "result", "failure", "lesson", "experience",
    "understanding", "awareness", "insight", "perspective", "learning",
    "advancement", "milestone", "mission", "direction", "consistency",
    "reliability", "durability", "stability", "flexibility",
    "adaptability", "scalability", "capability", "competence",
    "expertise", "skill", "intelligence", "invention", "design",
    "engineering", "implementation", "operation", "maintenance",
    "support", "service", "delivery", "customer", "user", "stakeholder",
    "society",
];

const MISSPELLINGS: &[(&str, &str)] = &[
    ("teh", "the"), ("quik", "quick"), ("brwn", "brown"), ("fok", "fox"),
    ("jmps", "jumps"), ("ovr", "over"), ("lzy", "lazy"), ("dg", "dog"),
    ("aplpe", "apple"), ("bananna", "banana"), ("cheery", "cherry"),
    ("dat", "date"), ("elderbery", "elderberry"), ("figg", "fig"),
    ("grap", "grape"), ("huse", "house"), ("islend", "island"),
    ("jungel", "jungle"), ("kiet", "kite"), ("lemmon", "lemon"),
    ("mountin", "mountain"), ("noteook", "notebook"), ("ocan", "ocean"),
    ("parot", "parrot"), ("quene", "queen"), ("rivver", "river"),
    ("sunn", "sun"), ("trea", "tree"), ("umbrelle", "umbrella"),
    ("villige", "village"), ("watter", "water"), ("xylophonne", "xylophone"),
    ("yelo", "yellow"), ("zebbra", "zebra"), ("computor", "computer"),
    ("lapptop", "laptop"), ("keybord", "keyboard"), ("mose", "mouse"),
    ("scereen", "screen"), ("speeker", "speaker"),
    ("microphonne", "microphone"), ("cammera", "camera"),
    ("softwere", "software"), ("hardwere", "hardware"),
    ("netwrok", "network"), ("internt", "internet"), ("routr", "router"),
    ("algoritm", "algorithm"), ("funtion", "function"),
    ("varible", "variable"), ("looop", "loop"), ("conditon", "condition"),
    ("progam", "program"), ("enginer", "engineer"),
    ("develper", "developer"), ("scientiest", "scientist"),
    ("docter", "doctor"), ("artst", "artist"), ("writor", "writer"),
    ("techer", "teacher"), ("studnt", "student"), ("schhol", "school"),
    ("unversity", "university"), ("hosptal", "hospital"),
    ("libary", "library"), ("rode", "road"), ("carr", "car"),
    ("bicycal", "bicycle"), ("trane", "train"), ("airplne", "airplane"),
    ("shipt", "ship"), ("satlitte", "satellite"), ("erth", "earth"),
    ("mon", "moon"), ("str", "star"), ("galxy", "galaxy"),
    ("plannet", "planet"), ("spce", "space"), ("astronot", "astronaut"),
    ("enerjy", "energy"), ("powr", "power"), ("electricty", "electricity"),
    ("battary", "battery"), ("currnt", "current"), ("voltge", "voltage"),
    ("circut", "circuit"), ("resistorr", "resistor"),
    ("capaciter", "capacitor"), ("indctor", "inductor"),
    ("transister", "transistor"), ("procesor", "processor"),
    ("memmory", "memory"), ("storag", "storage"), ("fyle", "file"),
    ("foldor", "folder"), ("datbase", "database"), ("sevrer", "server"),
    ("cliant", "client"), ("protocal", "protocol"),
    ("encriptian", "encryption"), ("passward", "password"),
    ("securty", "security"), ("helth", "health"), ("fitnes", "fitness"),
    ("excercise", "exercise"), ("nutriton", "nutrition"),
    ("protin", "protein"), ("vitamn", "vitamin"), ("minerel", "mineral"),
    ("waterr", "water"), ("hydrationn", "hydration"), ("slep", "sleep"),
    ("mentel", "mental"), ("wellnes", "wellness"),
    ("hapiness", "happiness"), ("motvtion", "motivation"),
    ("gaol", "goal"), ("succcess", "success"),
    ("achievment", "achievement"), ("growh", "growth"),
    ("prgress", "progress"), ("developmnt", "development"),
    ("knowlege", "knowledge"), ("wisdome", "wisdom"),
    ("curiostiy", "curiosity"), ("imaginnation", "imagination"),
    ("creativty", "creativity"), ("innovaton", "innovation"),
    ("discovry", "discovery"), ("explortion", "exploration"),
    ("advnture", "adventure"), ("journy", "journey"),
    ("destinaton", "destination"), ("purpse", "purpose"),
    ("freedm", "freedom"), ("justce", "justice"), ("equaity", "equality"),
    ("commnity", "community"), ("freindship", "friendship"),
    ("famly", "family"), ("lve", "love"), ("compasion", "compassion"),
    ("kindeness", "kindness"), ("patince", "patience"), ("pice", "peace"),
    ("respet", "respect"), ("gratitud", "gratitude"),
    ("forgivnes", "forgiveness"), ("courge", "courage"),
    ("strenght", "strength"), ("determnation", "determination"),
    ("resilence", "resilience"), ("fauth", "faith"), ("hop", "hope"),
    ("trst", "trust"), ("thruth", "truth"), ("honsty", "honesty"),
    ("integrty", "integrity"), ("responsbilty", "responsibility"),
    ("loyality", "loyalty"), ("humilty", "humility"),
    ("generosityy", "generosity"), ("empthy", "empathy"),
    ("dignityy", "dignity"), ("pridee", "pride"), ("humorrr", "humor"),
    ("harmny", "harmony"), ("balnce", "balance"),
    ("simplicityy", "simplicity"), ("beuty", "beauty"),
    ("elegancee", "elegance"), ("qualty", "quality"),
    ("excellnce", "excellence"), ("precison", "precision"),
    ("accurracy", "accuracy"), ("claritty", "clarity"),
    ("focusss", "focus"), ("vison", "vision"), ("ambtion", "ambition"),
    ("strtegy", "strategy"), ("planing", "planning"),
    ("executin", "execution"), ("analysiss", "analysis"),
    ("reasearch", "research"), ("evalution", "evaluation"),
    ("measurment", "measurement"), ("optimzation", "optimization"),
    ("performnce", "performance"), ("efficincy", "efficiency"),
    ("effectivness", "effectiveness"), ("productivty", "productivity"),
    ("innvaton", "innovation"), ("teamwrk", "teamwork"),
    ("collabration", "collaboration"), ("communicatn", "communication"),
    ("leadershipp", "leadership"), ("managment", "management"),
    ("organiztion", "organization"), ("coordnation", "coordination"),
    ("decison", "decision"), ("soluton", "solution"),
    ("opportnity", "opportunity"), ("challnge", "challenge"),
    ("problm", "problem"), ("rik", "risk"), ("rewrd", "reward"),
    ("benfit", "benefit"), ("valeu", "value"), ("impct", "impact"),
    ("outcom", "outcome"), ("reslt", "result"), ("sucess", "success"),
    ("failre", "failure"), ("lessn", "lesson"),
    ("experince", "experience"), ("understnding", "understanding"),
    ("awarness", "awareness"), ("insigt", "insight"),
    ("perspectve", "perspective"), ("learng", "learning"),
    ("grwoth", "growth"), ("advancemnt", "advancement"),
    ("mileston", "milestone"), ("goaal", "goal"), ("visin", "vision"),
    ("missin", "mission"), ("directon", "direction"),
    ("clarityy", "clarity"), ("simplicty", "simplicity"),
    ("elegnce", "elegance"), ("qulity", "quality"),
    ("excellece", "excellence"), ("preciion", "precision"),
    ("accurcy", "accuracy"), ("consistncy", "consistency"),
    ("reliablity", "reliability"), ("durabilty", "durability"),
    ("stablity", "stability"), ("flexiblity", "flexibility"),
    ("adaptabilty", "adaptability"), ("scalabilty", "scalability"),
    ("efficiecy", "efficiency"), ("effectivenss", "effectiveness"),
    ("productvity", "productivity"), ("performane", "performance"),
    ("capabilty", "capability"), ("competnce", "competence"),
    ("expertie", "expertise"), ("skil", "skill"),
    ("knowldge", "knowledge"), ("intellgence", "intelligence"),
    ("creatvity", "creativity"), ("innvation", "innovation"),
    ("imagnation", "imagination"), ("curiosiy", "curiosity"),
    ("explorationn", "exploration"), ("discover", "discovery"),
    ("invetion", "invention"), ("designn", "design"),
    ("engneering", "engineering"), ("implemntation", "implementation"),
    ("execuion", "execution"), ("operaton", "operation"),
    ("maintnance", "maintenance"), ("suport", "support"),
    ("servce", "service"), ("delvery", "delivery"),
    ("customr", "customer"), ("clent", "client"), ("userr", "user"),
    ("stakehlder", "stakeholder"), ("socety", "society"),
];
