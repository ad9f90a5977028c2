use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::types::{DivisionName, Municipality, MunicipalityFile};
use crate::error::DatasetError;
use crate::initial;

/// Index for initial-letter lookups
#[derive(Debug)]
pub struct MunicipalityIndex {
    /// Map from prefecture initial to record positions, in dataset order
    by_prefecture: BTreeMap<char, Vec<usize>>,
    /// The records, in dataset order
    records: Vec<Municipality>,
}

impl MunicipalityIndex {
    /// Validate the records and build the index
    pub fn build(file: MunicipalityFile) -> Result<Self, DatasetError> {
        let records = file.municipalities;
        let mut by_prefecture: BTreeMap<char, Vec<usize>> = BTreeMap::new();

        for (idx, record) in records.iter().enumerate() {
            validate(idx, record)?;

            // validate() guarantees a non-empty rome
            if let Some(initial) = record.prefecture_initial() {
                by_prefecture.entry(initial).or_default().push(idx);
            }
        }

        debug!(
            records = records.len(),
            prefecture_initials = by_prefecture.len(),
            "municipality index built"
        );

        Ok(MunicipalityIndex {
            by_prefecture,
            records,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let file: MunicipalityFile = serde_json::from_str(json)?;
        Self::build(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let file: MunicipalityFile = serde_json::from_reader(reader)?;
        Self::build(file)
    }

    /// Load an external dataset file produced by the data-preparation step
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let json = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = json.len(), "loading dataset file");
        Self::from_json_str(&json)
    }

    pub fn records(&self) -> &[Municipality] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct upper-cased initials of every prefecture, ascending
    pub fn prefecture_initials(&self) -> BTreeSet<char> {
        self.by_prefecture.keys().copied().collect()
    }

    /// Distinct upper-cased municipality initials under the given prefecture initial
    ///
    /// Only the first character of `prefecture_initial` is used, case-insensitively.
    pub fn municipality_initials(&self, prefecture_initial: &str) -> BTreeSet<char> {
        self.under_prefecture(initial::normalize(prefecture_initial))
            .filter_map(Municipality::municipality_initial)
            .collect()
    }

    /// Municipalities matching both initials, in dataset order
    ///
    /// The first occurrence of each `(prefecture.rome, municipality.rome)` pair
    /// is kept and returned without its ward.
    pub fn municipalities_by_initial(
        &self,
        prefecture_initial: &str,
        municipality_initial: &str,
    ) -> Vec<Municipality> {
        let Some(wanted) = initial::normalize(municipality_initial) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        self.under_prefecture(initial::normalize(prefecture_initial))
            .filter(|record| record.municipality_initial() == Some(wanted))
            .filter(|&record| seen.insert(record.key()))
            .map(Municipality::without_ward)
            .collect()
    }

    fn under_prefecture(&self, prefecture: Option<char>) -> impl Iterator<Item = &Municipality> {
        prefecture
            .and_then(|p| self.by_prefecture.get(&p))
            .into_iter()
            .flatten()
            .map(|&idx| &self.records[idx])
    }
}

fn validate(index: usize, record: &Municipality) -> Result<(), DatasetError> {
    check_rome(index, &record.prefecture, "prefecture.rome", "prefecture.rome_suffix")?;
    check_rome(
        index,
        &record.municipality,
        "municipality.rome",
        "municipality.rome_suffix",
    )
}

fn check_rome(
    index: usize,
    division: &DivisionName,
    rome_field: &'static str,
    suffix_field: &'static str,
) -> Result<(), DatasetError> {
    let invalid = |field, reason| DatasetError::InvalidRecord {
        index,
        field,
        reason,
    };

    if division.rome.is_empty() {
        return Err(invalid(rome_field, "is empty"));
    }
    if !division.rome.is_ascii() {
        return Err(invalid(rome_field, "is not ASCII"));
    }
    if !division.rome_suffix.is_ascii() {
        return Err(invalid(suffix_field, "is not ASCII"));
    }
    Ok(())
}
