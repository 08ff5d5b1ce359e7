// Seedsong: seeded procedural music generator.
//
// Produces a short two-track piece (drum pattern + melody) from a single
// seed and writes it as a Standard MIDI File. The same seed and config
// always produce byte-identical output.
//
// Architecture:
// - note.rs: Note name <-> pitch number codec ("F#4" <-> 54)
// - catalog.rs: Instrument, percussion, scale, and chord lookup tables
// - scale.rs: Scale expansion and the melody's two-octave pitch pool
// - track.rs: Composition / Track / Event model (absolute ticks)
// - stream.rs: Tick-sorted, delta-timed message stream per track
// - midi.rs: SMF encoding via `midly`
// - config.rs: JSON-loadable generator tables and constants
// - names.rs: Display name derived from the seed
// - generator.rs: The drum pattern + melody random walk
// - error.rs: `MusicError` and the crate `Result`
//
// All randomness comes from one `seedsong_prng::SongRng` per run.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod midi;
pub mod names;
pub mod note;
pub mod scale;
pub mod stream;
pub mod track;

pub use error::{MusicError, Result};
