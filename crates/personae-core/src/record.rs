use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cohort::Sex;

/// A generated person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonRecord {
    pub last_name: String,
    pub first_name: String,
    pub patronymic: String,
    pub sex: Sex,
    pub birth_date: NaiveDate,
}

impl PersonRecord {
    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }

    /// `YYYY-MM-DD`.
    pub fn birth_date_iso(&self) -> String {
        self.birth_date.format("%Y-%m-%d").to_string()
    }
}

/// Phone and email aligned by row index with a [`PersonRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub phone: String,
    pub email: String,
}

/// Region and locality aligned by row index with a [`PersonRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub region: String,
    pub locality: String,
}

/// Which column groups a run produces on top of the base person data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataGroups {
    #[default]
    Base,
    Contacts,
    Locations,
    Full,
}

impl DataGroups {
    pub fn includes_contacts(self) -> bool {
        matches!(self, Self::Contacts | Self::Full)
    }

    pub fn includes_locations(self) -> bool {
        matches!(self, Self::Locations | Self::Full)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Contacts => "contacts",
            Self::Locations => "locations",
            Self::Full => "full",
        }
    }
}

/// Positionally aligned column sets produced by one generation run.
///
/// `contacts` and `locations`, when present, have exactly as many entries as
/// `persons`; row `i` of each describes the same person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub persons: Vec<PersonRecord>,
    pub contacts: Option<Vec<ContactRecord>>,
    pub locations: Option<Vec<LocationRecord>>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn groups(&self) -> DataGroups {
        match (self.contacts.is_some(), self.locations.is_some()) {
            (false, false) => DataGroups::Base,
            (true, false) => DataGroups::Contacts,
            (false, true) => DataGroups::Locations,
            (true, true) => DataGroups::Full,
        }
    }

    /// True when every present column set has one entry per person.
    pub fn is_aligned(&self) -> bool {
        let len = self.persons.len();
        self.contacts.as_ref().is_none_or(|rows| rows.len() == len)
            && self.locations.as_ref().is_none_or(|rows| rows.len() == len)
    }
}
