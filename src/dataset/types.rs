use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::initial;

/// On-disk layout of the dataset file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MunicipalityFile {
    pub municipalities: Vec<Municipality>,
}

/// A native-script name/suffix pair plus its romanized form
///
/// e.g. `北海` / `道` romanized as `Hokkai` / `Do`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DivisionName {
    pub name: String,
    pub suffix: String,
    pub rome: String,
    pub rome_suffix: String,
}

impl DivisionName {
    /// Native-script name with its suffix attached (`北海道`)
    pub fn full_name(&self) -> String {
        format!("{}{}", self.name, self.suffix)
    }

    /// Romanized name and suffix separated by a space (`Hokkai Do`)
    pub fn full_rome(&self) -> String {
        if self.rome_suffix.is_empty() {
            self.rome.clone()
        } else {
            format!("{} {}", self.rome, self.rome_suffix)
        }
    }

    /// Upper-cased first character of the romanized name
    pub fn initial(&self) -> Option<char> {
        initial::normalize(&self.rome)
    }

    fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.suffix.is_empty()
            && self.rome.is_empty()
            && self.rome_suffix.is_empty()
    }
}

/// One administrative unit
///
/// `district` (郡) and `ward` (区 of a designated city) are informational only.
/// Lookups and deduplication look at `prefecture` and `municipality` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    pub prefecture: DivisionName,
    pub municipality: DivisionName,
    #[serde(
        default,
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub district: Option<DivisionName>,
    #[serde(
        default,
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub ward: Option<DivisionName>,
}

impl Municipality {
    pub fn new(prefecture: DivisionName, municipality: DivisionName) -> Self {
        Self {
            prefecture,
            municipality,
            district: None,
            ward: None,
        }
    }

    pub fn prefecture_initial(&self) -> Option<char> {
        self.prefecture.initial()
    }

    pub fn municipality_initial(&self) -> Option<char> {
        self.municipality.initial()
    }

    /// Identity used when collapsing duplicate records
    pub fn key(&self) -> (&str, &str) {
        (&self.prefecture.rome, &self.municipality.rome)
    }

    /// Copy of this record at municipality granularity
    ///
    /// A designated city appears once per ward in the dataset; once collapsed to
    /// a single entry, no one ward describes it.
    pub fn without_ward(&self) -> Self {
        Self {
            ward: None,
            ..self.clone()
        }
    }
}

impl fmt::Display for Municipality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} / {})",
            self.prefecture.full_name(),
            self.municipality.full_name(),
            self.prefecture.full_rome(),
            self.municipality.full_rome()
        )
    }
}

// The data-preparation step writes all-empty objects for missing districts/wards.
fn non_blank<'de, D>(deserializer: D) -> Result<Option<DivisionName>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DivisionName>::deserialize(deserializer)?;
    Ok(value.filter(|d| !d.is_blank()))
}
