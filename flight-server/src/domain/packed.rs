//! Packed (airport, distance) search state.

use std::fmt;

use super::AirportIndex;

/// A predecessor airport and a cumulative distance packed into one `u32`.
///
/// The high 16 bits hold the airport index, the low 16 bits the distance
/// in kilometres. The search keeps one of these per airport per layer, so
/// the whole layer is a flat `Vec<u32>` in disguise.
///
/// Two values are reserved:
///
/// - [`PackedState::UNREACHED`] (all ones) marks a slot that has not been
///   reached yet.
/// - A distance of [`PackedState::DISTANCE_CAP`] is never produced by
///   relaxation; totals that would reach it are discarded.
///
/// # Examples
///
/// ```
/// use flight_server::domain::{AirportIndex, PackedState};
///
/// let from = AirportIndex::new(2810).unwrap();
/// let state = PackedState::pack(from, 1040);
/// assert_eq!(state.airport(), from);
/// assert_eq!(state.distance(), 1040);
/// assert!(state.is_reachable());
///
/// // The origin's own zero-distance slot is deliberately not "reachable"
/// assert!(!PackedState::pack(from, 0).is_reachable());
/// assert!(!PackedState::UNREACHED.is_reachable());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedState(u32);

impl PackedState {
    /// Slot not yet reached by the search.
    pub const UNREACHED: PackedState = PackedState(u32::MAX);

    /// First distance that cannot be represented. Relaxed totals must stay
    /// strictly below this.
    pub const DISTANCE_CAP: u32 = 0xFFFF;

    const AIRPORT_SHIFT: u32 = 16;
    const DISTANCE_MASK: u32 = 0xFFFF;

    /// Combine an airport and a distance.
    pub fn pack(airport: AirportIndex, distance: u16) -> Self {
        PackedState((u32::from(airport) << Self::AIRPORT_SHIFT) | u32::from(distance))
    }

    #[cfg(test)]
    pub(crate) fn from_raw(raw: u32) -> Self {
        PackedState(raw)
    }

    #[cfg(test)]
    pub(crate) fn raw(self) -> u32 {
        self.0
    }

    /// The airport stored in the high 16 bits.
    pub fn airport(self) -> AirportIndex {
        AirportIndex::from_packed((self.0 >> Self::AIRPORT_SHIFT) as u16)
    }

    /// The distance stored in the low 16 bits.
    pub fn distance(self) -> u16 {
        (self.0 & Self::DISTANCE_MASK) as u16
    }

    /// True if this is the [`UNREACHED`](Self::UNREACHED) sentinel.
    pub fn is_unreached(self) -> bool {
        self == Self::UNREACHED
    }

    /// True if the slot holds a real airport and a nonzero distance.
    ///
    /// Only the search origin carries distance zero, so this excludes it.
    /// A zero-length edge between two distinct airports would also be
    /// excluded; the relaxation relies on this exact test.
    pub fn is_reachable(self) -> bool {
        (self.0 >> Self::AIRPORT_SHIFT) != Self::DISTANCE_MASK && (self.0 & Self::DISTANCE_MASK) != 0
    }
}

impl fmt::Debug for PackedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unreached() {
            f.write_str("PackedState(UNREACHED)")
        } else {
            write!(
                f,
                "PackedState({} @ {}km)",
                self.0 >> Self::AIRPORT_SHIFT,
                self.distance()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: u32) -> AirportIndex {
        AirportIndex::new(i).unwrap()
    }

    #[test]
    fn pack_layout() {
        let state = PackedState::pack(idx(2810), 448);
        assert_eq!(state.raw(), (2810 << 16) | 448);
        assert_eq!(state.airport(), idx(2810));
        assert_eq!(state.distance(), 448);
    }

    #[test]
    fn unreached_sentinel() {
        assert!(PackedState::UNREACHED.is_unreached());
        assert!(!PackedState::UNREACHED.is_reachable());
        assert_eq!(PackedState::UNREACHED.distance(), 0xFFFF);
        assert!(!PackedState::pack(idx(0), 1).is_unreached());
    }

    #[test]
    fn zero_distance_is_not_reachable() {
        assert!(!PackedState::pack(idx(417), 0).is_reachable());
        assert!(PackedState::pack(idx(417), 1).is_reachable());
    }

    #[test]
    fn all_ones_airport_is_not_reachable() {
        // Airport bits all ones with a real distance still counts as unreached
        let state = PackedState::from_raw(0xFFFF_0010);
        assert!(!state.is_reachable());
        assert!(!state.is_unreached());
    }

    #[test]
    fn largest_representable_values() {
        let state = PackedState::pack(idx(0xFFFE), 0xFFFE);
        assert_eq!(state.airport(), idx(0xFFFE));
        assert_eq!(state.distance(), 0xFFFE);
        assert!(state.is_reachable());
    }

    #[test]
    fn debug_format() {
        assert_eq!(
            format!("{:?}", PackedState::pack(idx(3), 120)),
            "PackedState(3 @ 120km)"
        );
        assert_eq!(
            format!("{:?}", PackedState::UNREACHED),
            "PackedState(UNREACHED)"
        );
    }
}
