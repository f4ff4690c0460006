use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Source of synthetic person attributes.
pub trait FakeData: Send {
    fn uuid(&mut self) -> Uuid;
    fn name(&mut self) -> String;
    /// In `1..=100`.
    fn age(&mut self) -> i32;
    fn email(&mut self) -> String;
    fn country(&mut self) -> String;
}

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Hedy", "Ivan",
    "John", "Katherine", "Linus", "Margaret", "Niklaus", "Radia", "Shafi", "Tim", "Whitfield",
    "Yukihiro",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Babbage", "Backus", "Dijkstra", "Hamilton", "Hopper", "Johnson", "Kay", "Knuth",
    "Lamarr", "Liskov", "Lovelace", "McCarthy", "Perlman", "Ritchie", "Shannon", "Sutherland",
    "Thompson", "Turing", "Wirth",
];

const DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test", "inbox.test"];

const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Brazil", "Canada", "Chile", "Denmark", "Egypt", "Finland",
    "France", "Germany", "Greece", "India", "Ireland", "Italy", "Japan", "Kenya", "Mexico",
    "Netherlands", "New Zealand", "Nigeria", "Norway", "Poland", "Portugal", "South Korea",
    "Spain", "Sweden", "Switzerland", "United Kingdom", "United States of America", "Vietnam",
];

/// [`FakeData`] drawn from fixed vocabularies with a seedable RNG.
pub struct RandomFakeData<R = StdRng> {
    rng: R,
}

impl RandomFakeData<StdRng> {
    pub fn from_entropy() -> Self {
        RandomFakeData {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic output for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomFakeData {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomFakeData<R> {
    fn pick(&mut self, words: &[&'static str]) -> &'static str {
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

impl<R: Rng + Send> FakeData for RandomFakeData<R> {
    fn uuid(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    fn name(&mut self) -> String {
        let first = self.pick(FIRST_NAMES);
        let last = self.pick(LAST_NAMES);
        format!("{} {}", first, last)
    }

    fn age(&mut self) -> i32 {
        self.rng.gen_range(1..=100)
    }

    fn email(&mut self) -> String {
        let user = self.pick(FIRST_NAMES).to_lowercase();
        let n: u16 = self.rng.gen_range(0..10_000);
        let domain = self.pick(DOMAINS);
        format!("{}{}@{}", user, n, domain)
    }

    fn country(&mut self) -> String {
        self.pick(COUNTRIES).to_string()
    }
}
