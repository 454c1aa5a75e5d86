use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Canonical driver identifier (trimmed, upper-case).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Driver(String);

impl Driver {
    pub fn new(raw: &str) -> Self {
        Driver(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a driver name the way it is matched against the roster.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Fixed, ordered set of drivers. The first one is the primary driver: its
/// row for a date carries that date's shared expense and note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRoster {
    drivers: Vec<Driver>,
}

impl DriverRoster {
    /// Build a roster from raw names; blanks are skipped and duplicates keep
    /// their first position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut drivers: Vec<Driver> = Vec::new();
        for name in names {
            let d = Driver::new(name.as_ref());
            if d.as_str().is_empty() || drivers.contains(&d) {
                continue;
            }
            drivers.push(d);
        }
        Self { drivers }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    pub fn primary(&self) -> Option<&Driver> {
        self.drivers.first()
    }

    pub fn is_primary(&self, driver: &Driver) -> bool {
        self.primary() == Some(driver)
    }

    pub fn position(&self, driver: &Driver) -> Option<usize> {
        self.drivers.iter().position(|d| d == driver)
    }

    /// Look up a raw (user-typed) name in the roster.
    pub fn resolve(&self, raw: &str) -> Option<&Driver> {
        let wanted = normalize(raw);
        self.drivers.iter().find(|d| d.as_str() == wanted)
    }

    /// Canonical order: roster position first, then drivers outside the
    /// roster alphabetically.
    pub fn compare(&self, a: &Driver, b: &Driver) -> Ordering {
        match (self.position(a), self.position(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }
}

impl Default for DriverRoster {
    fn default() -> Self {
        DriverRoster::new(["JORGE", "ERIK"])
    }
}
