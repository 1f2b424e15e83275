use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

/// Source of human-readable candidate identifiers.
pub trait NameSource {
    fn next_name(&mut self) -> String;
}

const ADJECTIVES: &[&str] = &[
    "admiring", "adoring", "affectionate", "agitated", "amazing", "angry", "awesome",
    "blissful", "bold", "boring", "brave", "charming", "clever", "cool", "compassionate",
    "competent", "confident", "crazy", "dazzling", "determined", "distracted", "dreamy",
    "eager", "ecstatic", "elastic", "elated", "elegant", "eloquent", "epic", "fervent",
    "festive", "flamboyant", "focused", "friendly", "frosty", "gallant", "gifted", "goofy",
    "gracious", "happy", "hardcore", "heuristic", "hopeful", "hungry", "infallible",
    "inspiring", "jolly", "jovial", "keen", "kind", "laughing", "loving", "lucid", "magical",
    "modest", "musing", "mystifying", "naughty", "nervous", "nice", "nifty", "nostalgic",
    "objective", "optimistic", "peaceful", "pedantic", "pensive", "practical", "priceless",
    "quirky", "quizzical", "relaxed", "reverent", "romantic", "sad", "serene", "sharp",
    "silly", "sleepy", "stoic", "stupefied", "suspicious", "sweet", "tender", "thirsty",
    "trusting", "upbeat", "vibrant", "vigilant", "vigorous", "wizardly", "wonderful",
    "xenodochial", "youthful", "zealous", "zen",
];

const SURNAMES: &[&str] = &[
    "agnesi", "albattani", "allen", "archimedes", "babbage", "banach", "bardeen", "bartik",
    "bell", "bhabha", "blackwell", "bohr", "booth", "borg", "bose", "brahmagupta", "brattain",
    "cannon", "carson", "cerf", "chandrasekhar", "chaplygin", "chebyshev", "clarke", "colden",
    "cori", "curie", "darwin", "diffie", "dijkstra", "dirac", "einstein", "elion", "euclid",
    "euler", "fermat", "fermi", "feynman", "franklin", "galileo", "gauss", "goldberg",
    "goodall", "hamilton", "hawking", "heisenberg", "hermann", "hodgkin", "hopper", "hypatia",
    "jang", "jennings", "kalam", "kapitsa", "kepler", "khorana", "knuth", "kowalevski",
    "lalande", "lamarr", "leakey", "leavitt", "lovelace", "lumiere", "mayer", "mccarthy",
    "mcclintock", "meitner", "mendel", "mendeleev", "minsky", "mirzakhani", "morse", "napier",
    "nash", "neumann", "newton", "nobel", "noether", "pascal", "pasteur", "payne", "perlman",
    "pike", "poincare", "ptolemy", "raman", "ramanujan", "ritchie", "rosalind", "saha",
    "sammet", "shannon", "shockley", "sinoussi", "stonebraker", "swartz", "tesla", "thompson",
    "torvalds", "turing", "varahamihira", "villani", "wescoff", "wiles", "williams", "wing",
    "wozniak", "wright", "yalow", "yonath",
];

/// Docker-style `adjective_surname` names. Repeats within one generator
/// get a numeric suffix, so every issued name is unique.
#[derive(Debug)]
pub struct MobyNames<R> {
    rng: R,
    issued: HashMap<String, usize>,
}

impl<R: Rng> MobyNames<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            issued: HashMap::new(),
        }
    }
}

impl<R: Rng> NameSource for MobyNames<R> {
    fn next_name(&mut self) -> String {
        let adjective = ADJECTIVES.choose(&mut self.rng).copied().unwrap_or("curious");
        let surname = SURNAMES.choose(&mut self.rng).copied().unwrap_or("fibonacci");
        let base = format!("{adjective}_{surname}");

        let seen = self.issued.entry(base.clone()).or_insert(0);
        *seen += 1;
        if *seen == 1 {
            base
        } else {
            format!("{base}_{seen}")
        }
    }
}
