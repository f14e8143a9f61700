use crate::types::{Drop, Phase};

/// Maps a drop's schedule and a wall-clock time to its admission phase.
///
/// Lower boundaries are inclusive, upper boundaries exclusive. Equal
/// boundaries collapse the phase between them to zero duration, which
/// simply skips it. Pure: no storage access, no failure modes.
pub fn resolve_phase(drop: &Drop, now: u64) -> Phase {
    if now < drop.phase_start {
        Phase::NotStarted
    } else if now < drop.phase_extend {
        Phase::RestrictedOnly
    } else if now < drop.phase_open {
        Phase::ExtendedAndRestricted
    } else {
        Phase::Open
    }
}
