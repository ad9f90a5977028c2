//! muni - Japanese municipality lookup
//!
//! Pick a prefecture by the initial of its romanized name, then a municipality
//! by its initial, and get the matching administrative-division records from an
//! embedded, read-only dataset.

pub mod dataset;
pub mod error;
pub mod initial;

use std::collections::BTreeSet;

// Re-export commonly used types
pub use dataset::{DivisionName, Municipality, MunicipalityIndex, get_dataset, init_dataset};
pub use error::DatasetError;

/// Sorted initials of every prefecture in the embedded dataset
pub fn get_prefecture_initials() -> BTreeSet<char> {
    get_dataset().prefecture_initials()
}

/// Sorted municipality initials under `prefecture_initial`
///
/// Only the first character of the argument matters, case-insensitively.
pub fn get_municipality_initials(prefecture_initial: &str) -> BTreeSet<char> {
    get_dataset().municipality_initials(prefecture_initial)
}

/// Unique municipalities matching both initials, in dataset order
///
/// Designated cities come back once, without a ward.
pub fn get_municipalities_by_initial(
    prefecture_initial: &str,
    municipality_initial: &str,
) -> Vec<Municipality> {
    get_dataset().municipalities_by_initial(prefecture_initial, municipality_initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn division(name: &str, suffix: &str, rome: &str, rome_suffix: &str) -> DivisionName {
        DivisionName {
            name: name.to_string(),
            suffix: suffix.to_string(),
            rome: rome.to_string(),
            rome_suffix: rome_suffix.to_string(),
        }
    }

    fn pairs(records: &[Municipality]) -> Vec<(DivisionName, DivisionName)> {
        records
            .iter()
            .map(|m| (m.prefecture.clone(), m.municipality.clone()))
            .collect()
    }

    #[test]
    fn test_prefecture_initials() {
        let expected = BTreeSet::from([
            'A', 'C', 'E', 'F', 'G', 'H', 'I', 'K', 'M', 'N', 'O', 'S', 'T', 'W', 'Y',
        ]);
        assert_eq!(get_prefecture_initials(), expected);
        assert_eq!(get_prefecture_initials(), get_prefecture_initials());
    }

    #[test]
    fn test_wakayama_municipality_initials() {
        let expected = BTreeSet::from(['A', 'G', 'H', 'I', 'K', 'M', 'N', 'S', 'T', 'W', 'Y']);
        assert_eq!(get_municipality_initials("W"), expected);
    }

    #[test]
    fn test_fukushima_fukui_fukuoka_municipality_initials() {
        let expected = BTreeSet::from([
            'A', 'B', 'C', 'D', 'E', 'F', 'H', 'I', 'K', 'M', 'N', 'O', 'S', 'T', 'U', 'W', 'Y',
        ]);
        assert_eq!(get_municipality_initials("F"), expected);
    }

    #[test]
    fn test_tochigi_tokyo_toyama_tottori_tokushima_municipality_initials() {
        let expected = BTreeSet::from([
            'A', 'B', 'C', 'D', 'E', 'F', 'H', 'I', 'K', 'M', 'N', 'O', 'S', 'T', 'U', 'W', 'Y',
        ]);
        assert_eq!(get_municipality_initials("T"), expected);
    }

    #[test]
    fn test_municipality_initials_normalize_input() {
        let upper = get_municipality_initials("W");
        assert_eq!(get_municipality_initials("w"), upper);
        assert_eq!(get_municipality_initials("Wakayama"), upper);
        assert_eq!(get_municipality_initials("ıbaraki"), get_municipality_initials("I"));

        for initial in get_prefecture_initials() {
            let single = initial.to_string();
            let lower = initial.to_ascii_lowercase().to_string();
            let longer = format!("{}xyz", lower);
            assert_eq!(get_municipality_initials(&lower), get_municipality_initials(&single));
            assert_eq!(get_municipality_initials(&longer), get_municipality_initials(&single));
        }
    }

    #[test]
    fn test_municipality_initials_unmatched() {
        assert!(get_municipality_initials("").is_empty());
        assert!(get_municipality_initials("Q").is_empty());
        assert!(get_municipality_initials("北").is_empty());
    }

    #[test]
    fn test_municipality_initials_match_records() {
        for p in get_prefecture_initials() {
            let expected: BTreeSet<char> = get_dataset()
                .records()
                .iter()
                .filter(|m| m.prefecture_initial() == Some(p))
                .filter_map(|m| m.municipality_initial())
                .collect();
            assert_eq!(get_municipality_initials(&p.to_string()), expected);
        }
    }

    #[test]
    fn test_hokkaido_c() {
        let hokkaido = division("北海", "道", "Hokkai", "Do");
        let expected = vec![
            (hokkaido.clone(), division("千歳", "市", "Chitose", "Shi")),
            (hokkaido, division("秩父別", "町", "Chippubetsu", "Cho")),
        ];
        assert_eq!(pairs(&get_municipalities_by_initial("H", "C")), expected);
    }

    #[test]
    fn test_tokyo_b() {
        let expected = vec![(
            division("東京", "都", "Tokyo", "To"),
            division("文京", "区", "Bunkyo", "Ku"),
        )];
        assert_eq!(pairs(&get_municipalities_by_initial("T", "B")), expected);
    }

    #[test]
    fn test_lowercase_multi_character_across_prefectures() {
        let results = get_municipalities_by_initial("none", "gigant");
        let names: Vec<(&str, &str)> = results.iter().map(|m| m.key()).collect();
        assert_eq!(
            names,
            vec![
                ("Niigata", "Gosen"),
                ("Nara", "Gojo"),
                ("Nara", "Gose"),
                ("Nagasaki", "Goto"),
            ]
        );
    }

    #[test]
    fn test_designated_city_collapses_wards() {
        let wards = get_dataset()
            .records()
            .iter()
            .filter(|m| m.key() == ("Hokkai", "Sapporo"))
            .count();
        assert!(wards > 1, "Sapporo should appear once per ward");

        let results = get_municipalities_by_initial("H", "S");
        let sapporo: Vec<&Municipality> = results
            .iter()
            .filter(|m| m.key() == ("Hokkai", "Sapporo"))
            .collect();
        assert_eq!(sapporo.len(), 1);
        assert!(sapporo[0].ward.is_none());

        let json = serde_json::to_string(&results).unwrap();
        assert!(!json.contains("\"ward\""));
    }

    #[test]
    fn test_by_initial_never_returns_duplicates() {
        for p in get_prefecture_initials() {
            for m in get_municipality_initials(&p.to_string()) {
                let results = get_municipalities_by_initial(&p.to_string(), &m.to_string());
                assert!(!results.is_empty());
                let unique: HashSet<(&str, &str)> = results.iter().map(|r| r.key()).collect();
                assert_eq!(unique.len(), results.len());
            }
        }
    }

    #[test]
    fn test_by_initial_empty_inputs() {
        assert!(get_municipalities_by_initial("", "").is_empty());
    }
}
