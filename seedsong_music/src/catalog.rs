// Static lookup tables: instruments, percussion keys, scales, chords.
//
// Each table is an enum whose variants map to a numeric payload and carry
// no other behavior. Variants serialize by snake_case name so configs can
// say `"snare_acoustic"` or `"harmonic_minor"`.
//
// Instrument numbers follow General MIDI program numbering (1-based) in
// `gm_number()`; `program()` is the 0-based value that goes on the wire.
// Percussion values are key numbers on the percussion channel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    PianoAcousticGrand,
    PianoAcousticBright,
    PianoElectricGrand,
    PianoHonkyTonk,
    PianoElectric1,
    PianoElectric2,
    Harpsichord,
    Clavinet,
    GuitarAcousticNylon,
    GuitarAcousticSteel,
    GuitarElectricJazz,
    GuitarElectricClean,
    GuitarElectricMuted,
    GuitarElectricOverdriven,
    GuitarElectricDistorted,
    GuitarHarmonics,
}

impl Instrument {
    pub const ALL: [Instrument; 16] = [
        Instrument::PianoAcousticGrand,
        Instrument::PianoAcousticBright,
        Instrument::PianoElectricGrand,
        Instrument::PianoHonkyTonk,
        Instrument::PianoElectric1,
        Instrument::PianoElectric2,
        Instrument::Harpsichord,
        Instrument::Clavinet,
        Instrument::GuitarAcousticNylon,
        Instrument::GuitarAcousticSteel,
        Instrument::GuitarElectricJazz,
        Instrument::GuitarElectricClean,
        Instrument::GuitarElectricMuted,
        Instrument::GuitarElectricOverdriven,
        Instrument::GuitarElectricDistorted,
        Instrument::GuitarHarmonics,
    ];

    /// General MIDI program number, 1-based as printed in the GM tables.
    pub fn gm_number(self) -> u8 {
        match self {
            Instrument::PianoAcousticGrand => 1,
            Instrument::PianoAcousticBright => 2,
            Instrument::PianoElectricGrand => 3,
            Instrument::PianoHonkyTonk => 4,
            Instrument::PianoElectric1 => 5,
            Instrument::PianoElectric2 => 6,
            Instrument::Harpsichord => 7,
            Instrument::Clavinet => 8,
            Instrument::GuitarAcousticNylon => 25,
            Instrument::GuitarAcousticSteel => 26,
            Instrument::GuitarElectricJazz => 27,
            Instrument::GuitarElectricClean => 28,
            Instrument::GuitarElectricMuted => 29,
            Instrument::GuitarElectricOverdriven => 30,
            Instrument::GuitarElectricDistorted => 31,
            Instrument::GuitarHarmonics => 32,
        }
    }

    /// Program-change value as sent on the wire (0-127).
    pub fn program(self) -> u8 {
        self.gm_number() - 1
    }
}

/// General MIDI percussion key map (keys 35-81).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Percussion {
    BassDrumAcoustic = 35,
    BassDrum1 = 36,
    Rimshot = 37,
    SnareAcoustic = 38,
    HandClap = 39,
    SnareElectric = 40,
    LowFloorTom = 41,
    ClosedHiHat = 42,
    HighFloorTom = 43,
    PedalHiHat = 44,
    LowTom = 45,
    OpenHiHat = 46,
    LowMidTom = 47,
    HiMidTom = 48,
    CrashCymbal1 = 49,
    HighTom = 50,
    RideCymbal1 = 51,
    ChineseCymbal = 52,
    RideBell = 53,
    Tambourine = 54,
    SplashCymbal = 55,
    Cowbell = 56,
    CrashCymbal2 = 57,
    VibraSlap = 58,
    RideCymbal2 = 59,
    HighBongo = 60,
    LowBongo = 61,
    MuteHighConga = 62,
    OpenHighConga = 63,
    LowConga = 64,
    HighTimbale = 65,
    LowTimbale = 66,
    HighAgogo = 67,
    LowAgogo = 68,
    Cabasa = 69,
    Maracas = 70,
    ShortWhistle = 71,
    LongWhistle = 72,
    ShortGuiro = 73,
    LongGuiro = 74,
    Claves = 75,
    HighWoodBlock = 76,
    LowWoodBlock = 77,
    MuteCuica = 78,
    OpenCuica = 79,
    MuteTriangle = 80,
    OpenTriangle = 81,
}

impl Percussion {
    /// Key number on the percussion channel.
    pub fn key(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Percussion::BassDrumAcoustic => "BASS_DRUM_ACOUSTIC",
            Percussion::BassDrum1 => "BASS_DRUM_1",
            Percussion::Rimshot => "RIMSHOT",
            Percussion::SnareAcoustic => "SNARE_ACOUSTIC",
            Percussion::HandClap => "HAND_CLAP",
            Percussion::SnareElectric => "SNARE_ELECTRIC",
            Percussion::LowFloorTom => "LOW_FLOOR_TOM",
            Percussion::ClosedHiHat => "CLOSED_HI_HAT",
            Percussion::HighFloorTom => "HIGH_FLOOR_TOM",
            Percussion::PedalHiHat => "PEDAL_HI_HAT",
            Percussion::LowTom => "LOW_TOM",
            Percussion::OpenHiHat => "OPEN_HI_HAT",
            Percussion::LowMidTom => "LOW_MID_TOM",
            Percussion::HiMidTom => "HI_MID_TOM",
            Percussion::CrashCymbal1 => "CRASH_CYMBAL_1",
            Percussion::HighTom => "HIGH_TOM",
            Percussion::RideCymbal1 => "RIDE_CYMBAL_1",
            Percussion::ChineseCymbal => "CHINESE_CYMBAL",
            Percussion::RideBell => "RIDE_BELL",
            Percussion::Tambourine => "TAMBOURINE",
            Percussion::SplashCymbal => "SPLASH_CYMBAL",
            Percussion::Cowbell => "COWBELL",
            Percussion::CrashCymbal2 => "CRASH_CYMBAL_2",
            Percussion::VibraSlap => "VIBRA_SLAP",
            Percussion::RideCymbal2 => "RIDE_CYMBAL_2",
            Percussion::HighBongo => "HIGH_BONGO",
            Percussion::LowBongo => "LOW_BONGO",
            Percussion::MuteHighConga => "MUTE_HIGH_CONGA",
            Percussion::OpenHighConga => "OPEN_HIGH_CONGA",
            Percussion::LowConga => "LOW_CONGA",
            Percussion::HighTimbale => "HIGH_TIMBALE",
            Percussion::LowTimbale => "LOW_TIMBALE",
            Percussion::HighAgogo => "HIGH_AGOGO",
            Percussion::LowAgogo => "LOW_AGOGO",
            Percussion::Cabasa => "CABASA",
            Percussion::Maracas => "MARACAS",
            Percussion::ShortWhistle => "SHORT_WHISTLE",
            Percussion::LongWhistle => "LONG_WHISTLE",
            Percussion::ShortGuiro => "SHORT_GUIRO",
            Percussion::LongGuiro => "LONG_GUIRO",
            Percussion::Claves => "CLAVES",
            Percussion::HighWoodBlock => "HIGH_WOOD_BLOCK",
            Percussion::LowWoodBlock => "LOW_WOOD_BLOCK",
            Percussion::MuteCuica => "MUTE_CUICA",
            Percussion::OpenCuica => "OPEN_CUICA",
            Percussion::MuteTriangle => "MUTE_TRIANGLE",
            Percussion::OpenTriangle => "OPEN_TRIANGLE",
        }
    }
}

/// Scale signatures as ordered semitone steps from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Major,
    HarmonicMinor,
    MinorPentatonic,
    NaturalMinor,
    MelodicMinorUp,
    Dorian,
    Mixolydian,
    AhavaRaba,
    MajorPentatonic,
    Diatonic,
}

impl Scale {
    pub const ALL: [Scale; 10] = [
        Scale::Major,
        Scale::HarmonicMinor,
        Scale::MinorPentatonic,
        Scale::NaturalMinor,
        Scale::MelodicMinorUp,
        Scale::Dorian,
        Scale::Mixolydian,
        Scale::AhavaRaba,
        Scale::MajorPentatonic,
        Scale::Diatonic,
    ];

    pub fn steps(self) -> &'static [u8] {
        match self {
            Scale::Major => &[2, 2, 1, 2, 2, 2],           // happy
            Scale::HarmonicMinor => &[2, 1, 2, 2, 1, 3],   // haunting
            Scale::MinorPentatonic => &[3, 2, 2, 3],       // blues, rock
            Scale::NaturalMinor => &[2, 1, 2, 2, 1, 2],    // epic
            Scale::MelodicMinorUp => &[2, 1, 2, 2, 2, 2],  // wistful
            Scale::Dorian => &[2, 1, 2, 2, 2, 1],          // jazzy
            Scale::Mixolydian => &[2, 2, 1, 2, 2, 1],      // progressive
            Scale::AhavaRaba => &[1, 3, 1, 2, 1, 2],       // exotic
            Scale::MajorPentatonic => &[2, 2, 3, 2],       // country
            Scale::Diatonic => &[2, 2, 2, 2, 2],           // whole-tone
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scale::Major => "MAJOR",
            Scale::HarmonicMinor => "HARMONIC_MINOR",
            Scale::MinorPentatonic => "MINOR_PENTATONIC",
            Scale::NaturalMinor => "NATURAL_MINOR",
            Scale::MelodicMinorUp => "MELODIC_MINOR_UP",
            Scale::Dorian => "DORIAN",
            Scale::Mixolydian => "MIXOLYDIAN",
            Scale::AhavaRaba => "AHAVA_RABA",
            Scale::MajorPentatonic => "MAJOR_PENTATONIC",
            Scale::Diatonic => "DIATONIC",
        }
    }
}

/// Chord shapes as semitone offsets from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chord {
    Major,
    Minor,
    RelMinor1stInv,
    Subdominant2ndInv,
    Major7th,
    Minor7th,
    Major9th,
    Minor9th,
    Major6th,
    Minor6th,
    Major7th9th,
    Minor7th9th,
    Major7th11th,
    Minor7th11th,
}

impl Chord {
    pub const ALL: [Chord; 14] = [
        Chord::Major,
        Chord::Minor,
        Chord::RelMinor1stInv,
        Chord::Subdominant2ndInv,
        Chord::Major7th,
        Chord::Minor7th,
        Chord::Major9th,
        Chord::Minor9th,
        Chord::Major6th,
        Chord::Minor6th,
        Chord::Major7th9th,
        Chord::Minor7th9th,
        Chord::Major7th11th,
        Chord::Minor7th11th,
    ];

    pub fn offsets(self) -> &'static [u8] {
        match self {
            Chord::Major => &[0, 4, 7],
            Chord::Minor => &[0, 3, 7],
            Chord::RelMinor1stInv => &[0, 4, 9],
            Chord::Subdominant2ndInv => &[0, 5, 9],
            Chord::Major7th => &[0, 4, 7, 11],
            Chord::Minor7th => &[0, 3, 7, 10],
            Chord::Major9th => &[0, 4, 7, 14],
            Chord::Minor9th => &[0, 3, 7, 13],
            Chord::Major6th => &[0, 4, 9],
            Chord::Minor6th => &[0, 3, 8],
            Chord::Major7th9th => &[0, 4, 7, 11, 14],
            Chord::Minor7th9th => &[0, 3, 7, 10, 13],
            Chord::Major7th11th => &[0, 4, 7, 11, 18],
            Chord::Minor7th11th => &[0, 3, 7, 10, 17],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Chord::Major => "MAJOR",
            Chord::Minor => "MINOR",
            Chord::RelMinor1stInv => "REL_MINOR_1ST_INV",
            Chord::Subdominant2ndInv => "SUBDOMINANT_2ND_INV",
            Chord::Major7th => "MAJOR_7TH",
            Chord::Minor7th => "MINOR_7TH",
            Chord::Major9th => "MAJOR_9TH",
            Chord::Minor9th => "MINOR_9TH",
            Chord::Major6th => "MAJOR_6TH",
            Chord::Minor6th => "MINOR_6TH",
            Chord::Major7th9th => "MAJOR_7TH_9TH",
            Chord::Minor7th9th => "MINOR_7TH_9TH",
            Chord::Major7th11th => "MAJOR_7TH_11TH",
            Chord::Minor7th11th => "MINOR_7TH_11TH",
        }
    }

    /// Chord pitches built on `root`.
    pub fn pitches(self, root: u8) -> Vec<u16> {
        self.offsets()
            .iter()
            .map(|&o| u16::from(root) + u16::from(o))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_is_zero_based() {
        assert_eq!(Instrument::PianoAcousticGrand.program(), 0);
        assert_eq!(Instrument::GuitarHarmonics.program(), 31);
        for inst in Instrument::ALL {
            assert!(inst.program() < 128);
        }
    }

    #[test]
    fn test_percussion_keys() {
        assert_eq!(Percussion::BassDrum1.key(), 36);
        assert_eq!(Percussion::SnareAcoustic.key(), 38);
        assert_eq!(Percussion::HighWoodBlock.key(), 76);
        assert_eq!(Percussion::OpenTriangle.key(), 81);
    }

    #[test]
    fn test_names_for_logging() {
        assert_eq!(Percussion::BassDrum1.name(), "BASS_DRUM_1");
        assert_eq!(Percussion::HighWoodBlock.name(), "HIGH_WOOD_BLOCK");
        assert_eq!(Chord::Major7th9th.name(), "MAJOR_7TH_9TH");
        assert_eq!(Chord::RelMinor1stInv.name(), "REL_MINOR_1ST_INV");
        let chord_names: std::collections::BTreeSet<&str> =
            Chord::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(chord_names.len(), Chord::ALL.len());
    }

    #[test]
    fn test_scale_steps_positive() {
        for scale in Scale::ALL {
            assert!(!scale.steps().is_empty());
            assert!(scale.steps().iter().all(|&s| s > 0), "{}", scale.name());
        }
    }

    #[test]
    fn test_scales_stay_within_an_octave() {
        // The last listed step stops short of the octave; the root above
        // closes it.
        for scale in Scale::ALL {
            let span: u8 = scale.steps().iter().sum();
            assert!(span < 12, "{} spans {span}", scale.name());
        }
    }

    #[test]
    fn test_chord_pitches() {
        assert_eq!(Chord::Major.pitches(60), vec![60, 64, 67]);
        for chord in Chord::ALL {
            assert_eq!(chord.offsets()[0], 0);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Percussion::SnareAcoustic).unwrap();
        assert_eq!(json, "\"snare_acoustic\"");
        let scale: Scale = serde_json::from_str("\"ahava_raba\"").unwrap();
        assert_eq!(scale, Scale::AhavaRaba);
        let inst: Instrument = serde_json::from_str("\"piano_acoustic_grand\"").unwrap();
        assert_eq!(inst, Instrument::PianoAcousticGrand);
    }
}
