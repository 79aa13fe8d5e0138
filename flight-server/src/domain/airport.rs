//! Airport identity types.

use std::fmt;

use super::DomainError;

/// Dense, 0-based index of an airport in the loaded dataset.
///
/// The search packs indices into 16 bits, so at most
/// [`AirportIndex::MAX_COUNT`] airports can exist. Index `0xFFFF` is never
/// valid because it collides with the predecessor bits of the unreached
/// sentinel.
///
/// # Examples
///
/// ```
/// use flight_server::domain::AirportIndex;
///
/// let hel = AirportIndex::new(417).unwrap();
/// assert_eq!(hel.get(), 417);
/// assert_eq!(u32::from(hel), 417);
///
/// assert!(AirportIndex::new(0xFFFF).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AirportIndex(u16);

impl AirportIndex {
    /// Maximum number of airports a dataset may hold.
    pub const MAX_COUNT: usize = 0xFFFF;

    /// Create an index, rejecting values that do not fit the packed layout.
    pub fn new(index: u32) -> Result<Self, DomainError> {
        if index as usize >= Self::MAX_COUNT {
            return Err(DomainError::IndexOutOfRange(index));
        }
        Ok(AirportIndex(index as u16))
    }

    /// Unchecked construction from the high bits of a packed state.
    pub(crate) fn from_packed(bits: u16) -> Self {
        AirportIndex(bits)
    }

    /// The index as a `usize`, for slice access.
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl From<AirportIndex> for u32 {
    fn from(index: AirportIndex) -> u32 {
        u32::from(index.0)
    }
}

impl fmt::Debug for AirportIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportIndex({})", self.0)
    }
}

impl fmt::Display for AirportIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An airport as loaded from the generated dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    /// Position in the dataset
    pub index: AirportIndex,

    /// IATA code (3 letters), or [`Airport::NO_CODE`]
    pub iata: String,

    /// ICAO code (4 letters), or [`Airport::NO_CODE`]
    pub icao: String,
}

impl Airport {
    /// Marker the source data uses for a missing code.
    pub const NO_CODE: &'static str = "\\N";

    /// Create an airport record.
    pub fn new(index: AirportIndex, iata: impl Into<String>, icao: impl Into<String>) -> Self {
        Self {
            index,
            iata: iata.into(),
            icao: icao.into(),
        }
    }

    /// The code shown to users: IATA when available, otherwise ICAO.
    pub fn display_code(&self) -> &str {
        if is_real_code(&self.iata) {
            &self.iata
        } else {
            &self.icao
        }
    }
}

/// True unless the code is empty or the `\N` marker.
pub fn is_real_code(code: &str) -> bool {
    !code.is_empty() && code != Airport::NO_CODE
}
