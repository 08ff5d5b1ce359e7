// Data-driven generator configuration.
//
// Every table and constant the generator reads lives in `GeneratorConfig`,
// loadable from JSON. Missing fields take their defaults, so a config file
// only needs the values it changes. The defaults reproduce the stock
// generator: 240 bpm, one bar of lead-in drums, an 8-step drum pattern
// tiled 8 times, and a 17-slot melody phrase played twice after 16 silent
// beats.
//
// Two configs that compare equal yield identical pieces for the same seed.

use crate::catalog::{Instrument, Percussion, Scale};
use crate::error::{MusicError, Result};
use crate::note::note_to_pitch;
use crate::stream::EventOrder;
use crate::track::MIN_BPM;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Tempo of the whole piece.
    pub bpm: u16,
    /// Seeds are drawn uniformly from `[0, seed_range)`.
    pub seed_range: u64,

    pub drum_instrument: Instrument,
    /// Fixed hits of the drum pattern before any random fill.
    pub drum_pattern_base: [Option<Percussion>; 8],
    /// Per-step chance of replacing a step with a random candidate.
    pub drum_probabilities: [f64; 8],
    pub drum_candidates: Vec<Percussion>,
    /// Silent steps before the pattern starts.
    pub drum_lead_in_steps: u32,
    pub drum_pattern_repeats: u32,

    pub melody_instrument: Instrument,
    /// Note name the start pitch is offset from.
    pub reference_note: String,
    /// Start pitch = reference + uniform offset in `[0, pitch_offset_range)`.
    pub pitch_offset_range: u8,
    pub usable_scales: Vec<Scale>,
    /// Per-step chance of the walk sounding a note.
    pub note_probabilities: [f64; 16],
    /// Candidate moves of the pool-index walk.
    pub walk_steps: Vec<i32>,
    pub melody_lead_in_beats: u32,
    pub phrase_repeats: u32,

    /// Length of every placed note and drum hit, in beats.
    pub note_length_beats: u32,
    /// Tie-break for events sharing a tick.
    pub event_order: EventOrder,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            bpm: 240,
            seed_range: 1_000_000,
            drum_instrument: Instrument::PianoAcousticGrand,
            drum_pattern_base: [Some(Percussion::BassDrum1), None, None, None, None, None, None, None],
            drum_probabilities: [0.0, 0.0, 0.5, 0.0, 0.5, 0.0, 0.5, 0.5],
            drum_candidates: vec![
                Percussion::BassDrum1,
                Percussion::SnareAcoustic,
                Percussion::Rimshot,
                Percussion::SnareElectric,
                Percussion::HighWoodBlock,
                Percussion::LowWoodBlock,
            ],
            drum_lead_in_steps: 8,
            drum_pattern_repeats: 8,
            melody_instrument: Instrument::PianoAcousticGrand,
            reference_note: "C4".to_string(),
            pitch_offset_range: 12,
            usable_scales: vec![
                Scale::Major,
                Scale::HarmonicMinor,
                Scale::MinorPentatonic,
                Scale::NaturalMinor,
                Scale::Dorian,
                Scale::AhavaRaba,
            ],
            note_probabilities: [
                0.0, 0.4, 0.7, 0.4, 0.7, 0.4, 0.7, 0.4, 0.5, 0.4, 0.7, 0.4, 0.7, 0.4, 0.7, 0.4,
            ],
            walk_steps: vec![-2, -1, 0, 1, 2],
            melody_lead_in_beats: 16,
            phrase_repeats: 2,
            note_length_beats: 1,
            event_order: EventOrder::Insertion,
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reference pitch the melody start is offset from.
    pub fn reference_pitch(&self) -> Result<u8> {
        note_to_pitch(&self.reference_note)
    }

    /// Fail fast on tables the generator would choke on mid-run.
    pub fn validate(&self) -> Result<()> {
        if self.bpm < MIN_BPM {
            return Err(MusicError::InvalidTempo(self.bpm));
        }
        if self.seed_range == 0 {
            return Err(MusicError::EmptyTable("seed_range"));
        }
        if self.drum_candidates.is_empty() && self.drum_probabilities.iter().any(|&p| p > 0.0) {
            return Err(MusicError::EmptyTable("drum_candidates"));
        }
        if self.usable_scales.is_empty() {
            return Err(MusicError::EmptyTable("usable_scales"));
        }
        if self.walk_steps.is_empty() {
            return Err(MusicError::EmptyTable("walk_steps"));
        }
        if self.pitch_offset_range == 0 {
            return Err(MusicError::EmptyTable("pitch_offset_range"));
        }
        self.reference_pitch()?;
        Ok(())
    }
}
