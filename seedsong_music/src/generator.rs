// Procedural drum + melody generation.
//
// One pass, no backtracking. A run owns a single `SongRng`, seeded from
// the piece seed, and draws from it in this fixed order:
//
// 1. Drums: for each of the 8 pattern steps, one `next_f64()`; if it falls
//    under the step's probability, one `choose()` among the candidates.
//    The draw happens even for probability-0 steps.
// 2. Melody: one `range_u64()` for the start offset, one `choose()` for the
//    scale, then for each of the 16 walk steps one `next_f64()` and, on a
//    hit, one `choose()` among the walk steps.
//
// Changing this order changes every piece for every seed.
//
// Drum layout: `drum_lead_in_steps` silent steps, then the 8-step pattern
// tiled `drum_pattern_repeats` times, one beat per step.
//
// Melody layout: a 17-slot phrase whose slot 0 is the start pitch and whose
// slots 1..=16 are filled by the walk (a silent step leaves its slot empty).
// The phrase is played `phrase_repeats` times after `melody_lead_in_beats`
// silent beats. The walk moves an index over a two-octave pitch pool and
// saturates at both ends.

use crate::catalog::{Percussion, Scale};
use crate::config::GeneratorConfig;
use crate::error::{MusicError, Result};
use crate::names::WordLists;
use crate::note::{IntoPitch, pitch_to_name};
use crate::scale::pitch_pool;
use crate::track::Composition;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seedsong_prng::SongRng;

/// Number of slots in a melody phrase (start pitch + one per walk step).
pub const PHRASE_SLOTS: usize = 17;

/// A finished piece and the choices that produced it.
#[derive(Debug, Clone)]
pub struct Piece {
    pub seed: u64,
    pub name: String,
    pub scale: Scale,
    pub start_pitch: u8,
    pub drum_pattern: [Option<Percussion>; 8],
    pub phrase: Vec<Option<u16>>,
    pub composition: Composition,
}

/// Generator bound to a config and a name provider.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    words: WordLists,
}

impl Generator {
    pub fn new(config: GeneratorConfig, words: WordLists) -> Result<Self> {
        config.validate()?;
        Ok(Generator { config, words })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the piece for a known seed.
    pub fn generate(&self, seed: u64) -> Result<Piece> {
        let mut rng = SongRng::new(seed);
        self.compose(seed, &mut rng)
    }

    /// Draw a fresh seed from OS entropy, then generate from it.
    ///
    /// The OS generator only picks the seed; every musical decision still
    /// comes from the `SongRng` built from that seed.
    pub fn generate_random(&self) -> Result<Piece> {
        let seed = StdRng::from_os_rng().random_range(0..self.config.seed_range);
        self.generate(seed)
    }

    fn compose(&self, seed: u64, rng: &mut SongRng) -> Result<Piece> {
        let config = &self.config;
        let name = self.words.name_from_seed(seed);
        info!("seed = {seed}");
        info!("name = {name}");

        let mut composition = Composition::new(config.bpm)?;

        let drum_pattern = fill_drum_pattern(config, rng)?;
        debug!("drum pattern = {drum_pattern:?}");
        let drums = composition.new_track(config.drum_instrument);
        for (beat, hit) in (0u32..).zip(tile_drums(config, &drum_pattern)) {
            if let Some(drum) = hit {
                drums.add_percussion_hit(drum, beat, config.note_length_beats)?;
            }
        }

        let (scale, start_pitch, phrase) = melody_phrase(config, rng)?;
        info!("scale = {}", scale.name());
        info!("start_note = {} {}", start_pitch, pitch_to_name(start_pitch));
        debug!("phrase = {phrase:?}");
        let melody = composition.new_track(config.melody_instrument);
        for (beat, slot) in (0u32..).zip(tile_melody(config, &phrase)) {
            if let Some(pitch) = slot {
                melody.add_note(pitch, beat, config.note_length_beats)?;
            }
        }

        Ok(Piece {
            seed,
            name,
            scale,
            start_pitch,
            drum_pattern,
            phrase,
            composition,
        })
    }
}

/// Fill the 8-step drum pattern.
fn fill_drum_pattern(config: &GeneratorConfig, rng: &mut SongRng) -> Result<[Option<Percussion>; 8]> {
    let mut pattern = config.drum_pattern_base;
    for (step, &prob) in config.drum_probabilities.iter().enumerate() {
        if rng.random_bool(prob) {
            let drum = rng
                .choose(&config.drum_candidates)
                .ok_or(MusicError::EmptyTable("drum_candidates"))?;
            trace!("drum step {step}: {}", drum.name());
            pattern[step] = Some(*drum);
        }
    }
    Ok(pattern)
}

fn tile_drums(
    config: &GeneratorConfig,
    pattern: &[Option<Percussion>; 8],
) -> Vec<Option<Percussion>> {
    let mut steps = vec![None; config.drum_lead_in_steps as usize];
    for _ in 0..config.drum_pattern_repeats {
        steps.extend_from_slice(pattern);
    }
    steps
}

/// Pick scale and start pitch, then walk the pitch pool.
fn melody_phrase(
    config: &GeneratorConfig,
    rng: &mut SongRng,
) -> Result<(Scale, u8, Vec<Option<u16>>)> {
    // Both terms are below 256, so the sum fits a u16.
    let offset = rng.range_u64(0, u64::from(config.pitch_offset_range)) as u16;
    let start_pitch = (u16::from(config.reference_pitch()?) + offset).into_pitch()?;

    let scale = *rng
        .choose(&config.usable_scales)
        .ok_or(MusicError::EmptyTable("usable_scales"))?;

    let pool = pitch_pool(start_pitch, scale)?;
    let mut index = pool
        .iter()
        .position(|&p| p == u16::from(start_pitch))
        .ok_or(MusicError::PitchNotInPool(start_pitch))? as i64;
    let last = pool.len() as i64 - 1;

    let mut phrase = vec![None; PHRASE_SLOTS];
    phrase[0] = Some(u16::from(start_pitch));
    for (step, &prob) in config.note_probabilities.iter().enumerate() {
        if rng.random_bool(prob) {
            let delta = *rng
                .choose(&config.walk_steps)
                .ok_or(MusicError::EmptyTable("walk_steps"))?;
            index = (index + i64::from(delta)).clamp(0, last);
            phrase[step + 1] = Some(pool[index as usize]);
            trace!("walk step {step}: {delta:+} -> index {index}");
        }
    }

    Ok((scale, start_pitch, phrase))
}

fn tile_melody(config: &GeneratorConfig, phrase: &[Option<u16>]) -> Vec<Option<u16>> {
    let mut slots = vec![None; config.melody_lead_in_beats as usize];
    for _ in 0..config.phrase_repeats {
        slots.extend_from_slice(phrase);
    }
    slots
}
