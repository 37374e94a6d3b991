//! Crossing-pattern classifier.
//!
//! Pure mapping from (chronological crossing kinds, prior terminal
//! state) to a day state. The whole mapping lives in one exhaustive
//! match per body so the tables stay auditable; nothing downstream
//! re-derives states from raw crossings.

use crate::types::{EventKind, LunarDayState, SolarDayState};

/// Whether the body was above or below the threshold when the day began.
///
/// For a continuous altitude signal this equals the previous day's
/// terminal state, which is how the engines derive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalState {
    /// At or above the threshold.
    Up,
    /// Below the threshold.
    Down,
}

impl TerminalState {
    /// From an above-threshold flag.
    pub fn from_above(above: bool) -> Self {
        if above { Self::Up } else { Self::Down }
    }
}

/// Classify a solar day.
///
/// The solar state set is closed over four values, so single-crossing
/// days resolve through the prior state instead of erroring: a day with
/// only a Set event was risen at midnight and set.
pub fn classify_solar(pattern: &[EventKind], prior: TerminalState) -> SolarDayState {
    use EventKind::{Rise, Set};
    match (pattern, prior) {
        ([], TerminalState::Up) => SolarDayState::PolarDay,
        ([], TerminalState::Down) => SolarDayState::PolarNight,
        ([Rise, Set], _) => SolarDayState::RisenAndSet,
        ([Set, Rise], _) => SolarDayState::SetAndRisen,
        ([Set], _) => SolarDayState::RisenAndSet,
        ([Rise], _) => SolarDayState::SetAndRisen,
        // The Sun cannot cross more than twice in a civil day; if a
        // degenerate configuration produces more, the first crossing's
        // direction still determines the day shape.
        ([Rise, ..], _) => SolarDayState::SetAndRisen,
        ([Set, ..], _) => SolarDayState::RisenAndSet,
    }
}

/// Classify a lunar day.
///
/// Combinations outside the defined table yield [`LunarDayState::Error`]
/// as a value — downstream callers still receive a well-typed result.
pub fn classify_lunar(pattern: &[EventKind], prior: TerminalState) -> LunarDayState {
    use EventKind::{Rise, Set};
    match (pattern, prior) {
        ([], TerminalState::Up) => LunarDayState::FullDay,
        ([], TerminalState::Down) => LunarDayState::FullNight,
        ([Rise, Set], _) => LunarDayState::RisenAndSet,
        ([Set, Rise], _) => LunarDayState::SetAndRisen,
        ([Set, Rise, Set], _) => LunarDayState::SetRiseSet,
        ([Rise], TerminalState::Down) => LunarDayState::OnlyRisen,
        ([Set], TerminalState::Up) => LunarDayState::OnlySet,
        _ => LunarDayState::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EventKind::{Rise, Set};
    use TerminalState::{Down, Up};

    #[test]
    fn solar_polar_cases() {
        assert_eq!(classify_solar(&[], Up), SolarDayState::PolarDay);
        assert_eq!(classify_solar(&[], Down), SolarDayState::PolarNight);
    }

    #[test]
    fn solar_normal_day() {
        assert_eq!(classify_solar(&[Rise, Set], Down), SolarDayState::RisenAndSet);
    }

    #[test]
    fn solar_inverted_day() {
        assert_eq!(classify_solar(&[Set, Rise], Up), SolarDayState::SetAndRisen);
    }

    #[test]
    fn solar_single_set_was_risen() {
        // Transition out of polar day: the sun was up at midnight and set.
        assert_eq!(classify_solar(&[Set], Up), SolarDayState::RisenAndSet);
    }

    #[test]
    fn solar_single_rise_was_down() {
        assert_eq!(classify_solar(&[Rise], Down), SolarDayState::SetAndRisen);
    }

    #[test]
    fn lunar_full_coverage_cases() {
        assert_eq!(classify_lunar(&[], Up), LunarDayState::FullDay);
        assert_eq!(classify_lunar(&[], Down), LunarDayState::FullNight);
    }

    #[test]
    fn lunar_two_crossing_cases() {
        assert_eq!(classify_lunar(&[Rise, Set], Down), LunarDayState::RisenAndSet);
        assert_eq!(classify_lunar(&[Set, Rise], Up), LunarDayState::SetAndRisen);
    }

    #[test]
    fn lunar_triple_crossing() {
        assert_eq!(
            classify_lunar(&[Set, Rise, Set], Up),
            LunarDayState::SetRiseSet
        );
    }

    #[test]
    fn lunar_single_crossings() {
        assert_eq!(classify_lunar(&[Rise], Down), LunarDayState::OnlyRisen);
        assert_eq!(classify_lunar(&[Set], Up), LunarDayState::OnlySet);
    }

    #[test]
    fn lunar_contradictions_are_error() {
        // A lone rise while already up (or set while down) has no row.
        assert_eq!(classify_lunar(&[Rise], Up), LunarDayState::Error);
        assert_eq!(classify_lunar(&[Set], Down), LunarDayState::Error);
    }

    #[test]
    fn lunar_undefined_triples_are_error() {
        assert_eq!(classify_lunar(&[Rise, Set, Rise], Down), LunarDayState::Error);
    }
}
