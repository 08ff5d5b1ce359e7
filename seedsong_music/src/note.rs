// Note name <-> MIDI pitch conversion.
//
// Names are a chromatic tone ("C", "F#", ...) followed by a single-digit
// octave, with octave 0 starting at pitch 0: "C4" = 48, "F#4" = 54. Output
// always spells with sharps. Flat spellings are rejected on input.
//
// `IntoPitch` lets `Track::add_note` take either a number or a name.

use crate::error::{MusicError, Result};

/// The twelve pitch classes starting at C, sharps only.
pub const NOTE_SEQUENCE: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Parse a note name such as `"G5"` or `"F#4"` into a pitch number.
pub fn note_to_pitch(name: &str) -> Result<u8> {
    let invalid = || MusicError::InvalidNoteName(name.to_string());

    let (split, last) = name.char_indices().last().ok_or_else(invalid)?;
    let octave = last.to_digit(10).ok_or_else(invalid)?;
    let tone = &name[..split];
    let position = NOTE_SEQUENCE
        .iter()
        .position(|&t| t == tone)
        .ok_or_else(invalid)?;

    // Max is 9 * 12 + 11 = 119, always a valid u8.
    Ok((octave as usize * 12 + position) as u8)
}

/// Render a pitch number as a sharp-spelled note name.
///
/// Pitches 120..=127 render with a two-digit octave ("C10") and so do not
/// parse back through `note_to_pitch`.
pub fn pitch_to_name(pitch: u8) -> String {
    format!(
        "{}{}",
        NOTE_SEQUENCE[(pitch % 12) as usize],
        pitch / 12
    )
}

/// Anything accepted where a pitch is expected.
pub trait IntoPitch {
    fn into_pitch(self) -> Result<u8>;
}

impl IntoPitch for u8 {
    fn into_pitch(self) -> Result<u8> {
        Ok(self)
    }
}

impl IntoPitch for u16 {
    fn into_pitch(self) -> Result<u8> {
        if self > 127 {
            return Err(MusicError::OutOfRange {
                what: "pitch",
                value: u64::from(self),
                max: 127,
            });
        }
        Ok(self as u8)
    }
}

impl IntoPitch for &str {
    fn into_pitch(self) -> Result<u8> {
        note_to_pitch(self)
    }
}

impl IntoPitch for &String {
    fn into_pitch(self) -> Result<u8> {
        note_to_pitch(self)
    }
}
