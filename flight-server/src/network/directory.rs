//! Airport code lookup.

use std::collections::HashMap;

use crate::domain::{Airport, AirportIndex, DomainError, is_real_code};

/// Bidirectional mapping between airport codes and dense indices.
///
/// Both IATA and ICAO codes resolve to the same index. Lookup is
/// case-insensitive. The directory is read-only once built and can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    airports: Vec<Airport>,

    /// Upper-cased IATA and ICAO codes to index.
    codes: HashMap<String, AirportIndex>,
}

impl AirportDirectory {
    /// Build a directory from airports in index order.
    ///
    /// Each airport's index must equal its position. When two airports
    /// share a code, the later one wins.
    pub fn new(airports: Vec<Airport>) -> Result<Self, DomainError> {
        if airports.len() > AirportIndex::MAX_COUNT {
            return Err(DomainError::TooManyAirports(airports.len()));
        }

        let mut codes = HashMap::with_capacity(airports.len() * 2);
        for (position, airport) in airports.iter().enumerate() {
            if airport.index.get() != position {
                return Err(DomainError::NonDenseIndex {
                    position,
                    found: u32::from(airport.index),
                });
            }
            for code in [&airport.iata, &airport.icao] {
                if is_real_code(code) {
                    codes.insert(code.to_ascii_uppercase(), airport.index);
                }
            }
        }

        Ok(Self { airports, codes })
    }

    /// Resolve a code (IATA or ICAO, any case) to an index.
    ///
    /// The `\N` marker never resolves.
    pub fn index_of(&self, code: &str) -> Option<AirportIndex> {
        if !is_real_code(code) {
            return None;
        }
        self.codes.get(&code.to_ascii_uppercase()).copied()
    }

    /// The display code for an index: IATA if present, otherwise ICAO.
    ///
    /// # Panics
    ///
    /// Panics if `index` did not come from this directory.
    pub fn code_of(&self, index: AirportIndex) -> &str {
        self.airports[index.get()].display_code()
    }

    /// Iterate airports in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }

    /// Number of airports.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// True if no airports are loaded.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: u32) -> AirportIndex {
        AirportIndex::new(i).unwrap()
    }

    fn sample() -> AirportDirectory {
        AirportDirectory::new(vec![
            Airport::new(idx(0), "GKA", "AYGA"),
            Airport::new(idx(1), "MAG", "AYMD"),
            Airport::new(idx(2), "\\N", "EFHF"),
            Airport::new(idx(3), "HEL", "EFHK"),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_by_iata_and_icao() {
        let dir = sample();
        assert_eq!(dir.index_of("MAG"), Some(idx(1)));
        assert_eq!(dir.index_of("AYMD"), Some(idx(1)));
        assert_eq!(dir.index_of("EFHK"), Some(idx(3)));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dir = sample();
        assert_eq!(dir.index_of("hel"), Some(idx(3)));
        assert_eq!(dir.index_of("eFhK"), Some(idx(3)));
    }

    #[test]
    fn missing_code_marker_never_resolves() {
        let dir = sample();
        assert_eq!(dir.index_of("\\N"), None);
        assert_eq!(dir.index_of("\\n"), None);
        assert_eq!(dir.index_of(""), None);
    }

    #[test]
    fn unknown_code() {
        assert_eq!(sample().index_of("XXX"), None);
    }

    #[test]
    fn code_of_prefers_iata() {
        let dir = sample();
        assert_eq!(dir.code_of(idx(1)), "MAG");
        assert_eq!(dir.code_of(idx(2)), "EFHF");
    }

    #[test]
    #[should_panic]
    fn code_of_out_of_range_panics() {
        sample().code_of(idx(99));
    }

    #[test]
    fn later_airport_wins_shared_code() {
        let dir = AirportDirectory::new(vec![
            Airport::new(idx(0), "AAA", "KAAA"),
            Airport::new(idx(1), "AAA", "KBBB"),
        ])
        .unwrap();
        assert_eq!(dir.index_of("AAA"), Some(idx(1)));
        assert_eq!(dir.index_of("KAAA"), Some(idx(0)));
    }

    #[test]
    fn rejects_non_dense_indices() {
        let err = AirportDirectory::new(vec![
            Airport::new(idx(0), "AAA", "KAAA"),
            Airport::new(idx(2), "BBB", "KBBB"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::NonDenseIndex {
                position: 1,
                found: 2
            }
        );
    }

    #[test]
    fn len_and_iter() {
        let dir = sample();
        assert_eq!(dir.len(), 4);
        assert!(!dir.is_empty());
        let codes: Vec<_> = dir.iter().map(|a| a.display_code()).collect();
        assert_eq!(codes, ["GKA", "MAG", "EFHF", "HEL"]);
        assert!(AirportDirectory::default().is_empty());
    }
}
