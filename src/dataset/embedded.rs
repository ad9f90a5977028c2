use super::index::MunicipalityIndex;
use crate::error::DatasetError;
use flate2::read::GzDecoder;
use lazy_static::lazy_static;
use std::io::Read;
use std::time::Instant;
use tracing::debug;

// Compressed by build.rs from data/municipalities.json
static COMPRESSED_DATASET: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/municipalities.json.gz"));

lazy_static! {
    /// Global dataset, loaded and validated on first access
    static ref DATASET: Result<MunicipalityIndex, DatasetError> = load_dataset();
}

/// Decompress the embedded dataset, then validate and index it
fn load_dataset() -> Result<MunicipalityIndex, DatasetError> {
    let start = Instant::now();

    let mut decoder = GzDecoder::new(COMPRESSED_DATASET);
    let mut json_str = String::new();
    decoder
        .read_to_string(&mut json_str)
        .map_err(DatasetError::Decompress)?;
    let decompress_time = start.elapsed();

    let index_start = Instant::now();
    let index = MunicipalityIndex::from_json_str(&json_str)?;
    let index_time = index_start.elapsed();

    debug!(
        ?decompress_time,
        ?index_time,
        total_time = ?start.elapsed(),
        records = index.len(),
        "embedded dataset loaded"
    );

    Ok(index)
}

/// Force the embedded dataset to load, reporting a malformed one as an error
///
/// Call this at startup to fail before the first query rather than inside it.
pub fn init_dataset() -> Result<&'static MunicipalityIndex, &'static DatasetError> {
    DATASET.as_ref()
}

/// Get a reference to the global dataset
///
/// # Panics
///
/// Panics if the embedded dataset does not decompress or validate.
pub fn get_dataset() -> &'static MunicipalityIndex {
    match init_dataset() {
        Ok(index) => index,
        Err(e) => panic!("embedded municipality dataset is invalid: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_loads() {
        let index = init_dataset().expect("embedded dataset should be valid");
        assert!(!index.is_empty(), "Dataset should contain records");
    }

    #[test]
    fn test_same_instance_every_call() {
        assert!(std::ptr::eq(get_dataset(), get_dataset()));
    }

    #[test]
    fn test_every_prefecture_present() {
        let prefectures: std::collections::HashSet<&str> = get_dataset()
            .records()
            .iter()
            .map(|m| m.prefecture.rome.as_str())
            .collect();
        assert_eq!(prefectures.len(), 47);
    }

    #[test]
    fn test_designated_cities_split_per_ward() {
        let index = get_dataset();
        assert_eq!(index.len(), 1892);

        let wards = index.records().iter().filter(|m| m.ward.is_some()).count();
        assert_eq!(wards, 171);
    }
}
