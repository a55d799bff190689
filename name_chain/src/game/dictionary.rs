//! The fixed set of names a player may submit.

use log::warn;
use std::{collections::HashSet, sync::LazyLock};

use super::constants::NAME_LENGTH;

/// Built-in five-letter names, deduplicated.
const STANDARD_NAMES: &[&str] = &[
    "Arjun", "Aisha", "Rohan", "Kiran", "Priya", "Rahul", "Sonia", "Meera", "Ashok", "Kavya",
    "Sunil", "Manoj", "Pooja", "Anita", "Divya", "Nisha", "Rekha", "Mohit", "Geeta", "Vivek",
    "Seema", "Radha", "Suman", "Jatin", "Lalit", "Prema", "Nitin", "Pavan", "Nanda", "Raman",
    "Sudha", "Leela", "Mohan", "Niraj", "Sarla", "Tarun", "Varun", "Yatin", "Parag", "Samir",
    "Rajni", "Swati", "Umang", "Wasim", "Mamta", "Xitij", "Zubin", "Anuja", "Abhay", "Beena",
    "Deepa", "Eshan", "Harsh", "Jagan", "Kunal", "Lucky", "Minal", "Omkar", "Queen", "Rishi",
    "Sagar", "Tejas",
];

static STANDARD: LazyLock<Dictionary> = LazyLock::new(|| Dictionary::from_names(STANDARD_NAMES));

/// Normalized lookup key for a name.
///
/// Only ASCII letters are folded, so look-alikes such as the Kelvin sign
/// never match a dictionary entry.
pub(crate) fn name_key(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Immutable, case-insensitive set of admissible names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    keys: HashSet<String>,
}

impl Dictionary {
    /// The built-in dictionary, shared for the lifetime of the process.
    pub fn standard() -> &'static Dictionary {
        &STANDARD
    }

    /// Build a dictionary from an arbitrary list.
    ///
    /// Entries that aren't exactly [`NAME_LENGTH`] characters after trimming
    /// can never be played, so they're dropped. Case-insensitive duplicates
    /// collapse into one entry.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys = HashSet::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.chars().count() != NAME_LENGTH {
                warn!("dropping dictionary entry {name:?}: not {NAME_LENGTH} letters");
                continue;
            }
            keys.insert(name_key(name));
        }
        Self { keys }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(&name_key(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
