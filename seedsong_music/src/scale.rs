// Scale expansion: root pitch + step signature -> ascending pitch run.
//
// No octave folding and no range clamping. Results are `u16`; callers
// convert to MIDI pitches (and get an `OutOfRange` error) when they place
// notes. A step list long enough to overflow `u16` is an error too.

use crate::catalog::Scale;
use crate::error::{MusicError, Result};

/// Expand `steps` from `root`: `[root, root+s0, root+s0+s1, ...]`.
///
/// Returns `steps.len() + 1` pitches.
pub fn expand_scale(root: u8, steps: &[u8]) -> Result<Vec<u16>> {
    let mut pitches = Vec::with_capacity(steps.len() + 1);
    let mut current = u16::from(root);
    pitches.push(current);
    for &step in steps {
        current = current
            .checked_add(u16::from(step))
            .ok_or(MusicError::OutOfRange {
                what: "scale pitch",
                value: u64::from(current) + u64::from(step),
                max: u64::from(u16::MAX),
            })?;
        pitches.push(current);
    }
    Ok(pitches)
}

/// Two-octave pitch pool for the melody walk: the scale expanded from one
/// octave below `start`, followed by the scale expanded from `start`.
///
/// Fails if `start` is below 12, since the lower octave would go negative.
pub fn pitch_pool(start: u8, scale: Scale) -> Result<Vec<u16>> {
    let lower = start.checked_sub(12).ok_or(MusicError::OutOfRange {
        what: "melody start pitch (below 12)",
        value: u64::from(start),
        max: 127,
    })?;
    let mut pool = expand_scale(lower, scale.steps())?;
    pool.extend(expand_scale(start, scale.steps())?);
    Ok(pool)
}
