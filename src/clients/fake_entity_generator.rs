use chrono::{Month, NaiveTime};
use rand::{Rng, RngCore};

use crate::{clients::EntitySynthesizer, models::domain::Label};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Priya", "Hiroshi", "Amara", "Mateo", "Ingrid", "Olu", "Chen", "Fatima",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Taylor", "Moore", "Jackson", "Martin",
    "Lee", "Thompson", "White", "Harris", "Clark", "Lewis", "Nakamura", "Okafor", "Novak", "Lindqvist",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Ltd", "Holdings", "Partners"];

const FACILITY_KINDS: &[&str] = &[
    "Bridge", "International Airport", "Memorial Stadium", "Tower", "Highway", "Library", "Hall",
];

const NORPS: &[&str] = &[
    "American", "British", "French", "German", "Japanese", "Indian", "Brazilian", "Nigerian",
    "Buddhist", "Catholic", "Muslim", "Hindu", "Republican", "Democrat", "Socialist", "Canadian",
];

const GPES: &[&str] = &[
    "Paris", "Tokyo", "Lagos", "Lima", "Toronto", "Mumbai", "Berlin", "Cairo", "Sydney", "Denver",
    "France", "Japan", "Nigeria", "Peru", "Canada", "India", "Germany", "Egypt", "Australia",
    "California", "Texas", "Ontario", "Bavaria", "Queensland", "Kerala",
];

const LOCATIONS: &[&str] = &[
    "Pacific Ocean", "Atlantic Ocean", "Mount Everest", "Sahara", "Amazon River", "Lake Victoria",
    "Rocky Mountains", "Andes", "Gobi Desert", "Mediterranean Sea", "Alps", "Nile",
];

const PRODUCTS: &[&str] = &[
    "Model T", "Walkman", "PlayStation", "Kindle", "Boeing 747", "Game Boy", "Polaroid",
    "Concorde", "Macintosh", "Rubik's Cube", "Vespa", "Thermos",
];

const EVENTS: &[&str] = &[
    "World War I", "World War II", "the Cold War", "the French Revolution", "the Olympic Games",
    "the Great Depression", "Hurricane Katrina", "the Battle of Hastings", "the World Cup",
    "the Industrial Revolution",
];

const ADJECTIVES: &[&str] = &[
    "Silent", "Golden", "Last", "Hidden", "Broken", "Endless", "Crimson", "Distant", "Lost",
];

const NOUNS: &[&str] = &[
    "River", "Garden", "Empire", "Symphony", "Harvest", "Lighthouse", "Winter", "Voyage", "Kingdom",
];

const LAW_SUBJECTS: &[&str] = &[
    "Civil Rights", "Clean Air", "Patriot", "Affordable Care", "Freedom of Information",
    "Social Security", "Homestead", "Fair Labor Standards",
];

const LANGUAGES: &[&str] = &[
    "English", "Spanish", "Mandarin", "Hindi", "Arabic", "Portuguese", "Bengali", "Russian",
    "Japanese", "Swahili", "French", "German", "Korean", "Turkish",
];

const UNITS: &[&str] = &[
    "kilometers", "miles", "kilograms", "pounds", "liters", "gallons", "acres", "tons", "feet",
];

const ORDINALS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
    "eleventh", "twelfth", "twentieth", "hundredth",
];

fn pick(rng: &mut dyn RngCore, items: &[&'static str]) -> &'static str {
    items[rng.gen_range(0..items.len())]
}

/// Generates realistic values for every label from word lists and number ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeEntityGenerator;

impl FakeEntityGenerator {
    pub fn new() -> Self {
        Self
    }

    /// `Month D, YYYY`, e.g. `June 7, 1984`.
    pub fn date(rng: &mut dyn RngCore) -> String {
        let month = Month::try_from(rng.gen_range(1..=12u8)).unwrap_or(Month::January);
        format!(
            "{} {}, {}",
            month.name(),
            rng.gen_range(1..=28),
            rng.gen_range(1950..=2020)
        )
    }

    /// Twelve hour time, e.g. `03:47 PM`.
    pub fn time(rng: &mut dyn RngCore) -> String {
        NaiveTime::from_hms_opt(rng.gen_range(0..24), rng.gen_range(0..60), 0)
            .unwrap_or_default()
            .format("%I:%M %p")
            .to_string()
    }

    /// Either a whole or a two-decimal percentage up to `100%`.
    pub fn percent(rng: &mut dyn RngCore) -> String {
        let whole = rng.gen_range(1..=100);
        if whole == 100 || rng.gen_bool(0.5) {
            format!("{whole}%")
        } else {
            format!("{whole}.{}%", rng.gen_range(0..100))
        }
    }

    fn person(rng: &mut dyn RngCore) -> String {
        format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
    }
}

impl EntitySynthesizer for FakeEntityGenerator {
    fn synthesize(&self, label: Label, rng: &mut dyn RngCore) -> String {
        match label {
            Label::Person => Self::person(rng),
            Label::Norp => pick(rng, NORPS).to_string(),
            Label::Fac => format!("{} {}", pick(rng, LAST_NAMES), pick(rng, FACILITY_KINDS)),
            Label::Org => {
                if rng.gen_bool(0.3) {
                    format!("{}-{}", pick(rng, LAST_NAMES), pick(rng, LAST_NAMES))
                } else {
                    format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES))
                }
            }
            Label::Gpe => pick(rng, GPES).to_string(),
            Label::Loc => pick(rng, LOCATIONS).to_string(),
            Label::Product => pick(rng, PRODUCTS).to_string(),
            Label::Event => pick(rng, EVENTS).to_string(),
            Label::WorkOfArt => format!("The {} {}", pick(rng, ADJECTIVES), pick(rng, NOUNS)),
            Label::Law => format!(
                "{} Act of {}",
                pick(rng, LAW_SUBJECTS),
                rng.gen_range(1900..=2020)
            ),
            Label::Language => pick(rng, LANGUAGES).to_string(),
            Label::Date => Self::date(rng),
            Label::Time => Self::time(rng),
            Label::Percent => Self::percent(rng),
            Label::Money => format!("${}.{:02}", rng.gen_range(1..1000), rng.gen_range(0..100)),
            Label::Quantity => format!("{} {}", rng.gen_range(2..500), pick(rng, UNITS)),
            Label::Ordinal => pick(rng, ORDINALS).to_string(),
            Label::Cardinal => rng.gen_range(2..10_000).to_string(),
        }
    }
}
