// Event-based composition model.
//
// A `Composition` owns an ordered list of `Track`s (order = output order).
// Each track stores unordered note Start/Stop `Event`s at absolute ticks
// from the track start. Events are appended and never mutated or removed;
// `stream.rs` sorts a view of them into a delta-time message stream.
//
// Every note placed through `add_note`/`add_percussion_hit` appends exactly
// one Start and one Stop. Both are validated before either is pushed, so a
// rejected note leaves the track unchanged.

use crate::catalog::{Instrument, Percussion};
use crate::error::{MusicError, Result};
use crate::note::IntoPitch;

/// Resolution of the event clock. Shared by generation and serialization.
pub const TICKS_PER_BEAT: u16 = 480;

/// Reserved channel for percussion (channel 10 in 1-based numbering).
pub const PERCUSSION_CHANNEL: u8 = 9;

/// Largest absolute tick that still fits a MIDI delta (28 bits).
pub const MAX_TICK: u32 = 0x0FFF_FFFF;

/// Slowest tempo whose microseconds-per-beat fits the 24-bit tempo field.
pub const MIN_BPM: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    Stop,
}

/// One key press or release. Fields are checked at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    pitch: u8,
    tick: u32,
    channel: u8,
}

impl Event {
    pub fn new(kind: EventKind, pitch: u8, tick: u32, channel: u8) -> Result<Self> {
        check_range("pitch", u64::from(pitch), 127)?;
        check_range("channel", u64::from(channel), 15)?;
        check_range("tick", u64::from(tick), u64::from(MAX_TICK))?;
        Ok(Event {
            kind,
            pitch,
            tick,
            channel,
        })
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn pitch(&self) -> u8 {
        self.pitch
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }
}

pub(crate) fn check_range(what: &'static str, value: u64, max: u64) -> Result<()> {
    if value > max {
        return Err(MusicError::OutOfRange { what, value, max });
    }
    Ok(())
}

/// A single instrument part.
#[derive(Debug, Clone)]
pub struct Track {
    bpm: u16,
    instrument: Instrument,
    ticks_per_beat: u16,
    events: Vec<Event>,
}

impl Track {
    fn new(bpm: u16, instrument: Instrument, ticks_per_beat: u16) -> Self {
        Track {
            bpm,
            instrument,
            ticks_per_beat,
            events: Vec::new(),
        }
    }

    pub fn bpm(&self) -> u16 {
        self.bpm
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    pub fn ticks_per_beat(&self) -> u16 {
        self.ticks_per_beat
    }

    /// Events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Add a note on channel 0. `pitch` is a number or a name like `"F#4"`.
    pub fn add_note(
        &mut self,
        pitch: impl IntoPitch,
        start_beat: u32,
        duration_beats: u32,
    ) -> Result<()> {
        self.add_note_on_channel(pitch, start_beat, duration_beats, 0)
    }

    pub fn add_note_on_channel(
        &mut self,
        pitch: impl IntoPitch,
        start_beat: u32,
        duration_beats: u32,
        channel: u8,
    ) -> Result<()> {
        let pitch = pitch.into_pitch()?;
        let end_beat = start_beat
            .checked_add(duration_beats)
            .ok_or(MusicError::OutOfRange {
                what: "beat",
                value: u64::from(start_beat) + u64::from(duration_beats),
                max: u64::from(u32::MAX),
            })?;

        let start = Event::new(EventKind::Start, pitch, self.beat_to_tick(start_beat)?, channel)?;
        let stop = Event::new(EventKind::Stop, pitch, self.beat_to_tick(end_beat)?, channel)?;
        self.events.push(start);
        self.events.push(stop);
        Ok(())
    }

    /// Add a drum hit on the percussion channel.
    pub fn add_percussion_hit(
        &mut self,
        drum: Percussion,
        start_beat: u32,
        duration_beats: u32,
    ) -> Result<()> {
        self.add_note_on_channel(drum.key(), start_beat, duration_beats, PERCUSSION_CHANNEL)
    }

    fn beat_to_tick(&self, beat: u32) -> Result<u32> {
        let tick = u64::from(beat) * u64::from(self.ticks_per_beat);
        check_range("tick", tick, u64::from(MAX_TICK))?;
        Ok(tick as u32)
    }
}

/// A piece: a tempo plus its tracks in output order.
#[derive(Debug, Clone)]
pub struct Composition {
    bpm: u16,
    tracks: Vec<Track>,
}

impl Composition {
    pub fn new(bpm: u16) -> Result<Self> {
        if bpm < MIN_BPM {
            return Err(MusicError::InvalidTempo(bpm));
        }
        Ok(Composition {
            bpm,
            tracks: Vec::new(),
        })
    }

    pub fn bpm(&self) -> u16 {
        self.bpm
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Append a new, empty track and return it for filling.
    pub fn new_track(&mut self, instrument: Instrument) -> &mut Track {
        self.tracks
            .push(Track::new(self.bpm, instrument, TICKS_PER_BEAT));
        let last = self.tracks.len() - 1;
        &mut self.tracks[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piano_track(comp: &mut Composition) -> &mut Track {
        comp.new_track(Instrument::PianoAcousticGrand)
    }

    #[test]
    fn test_add_note_appends_start_and_stop() {
        let mut comp = Composition::new(120).unwrap();
        let track = piano_track(&mut comp);
        track.add_note(60u8, 2, 3).unwrap();

        let events = track.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind(), EventKind::Start);
        assert_eq!(events[0].tick(), 2 * 480);
        assert_eq!(events[1].kind(), EventKind::Stop);
        assert_eq!(events[1].tick(), 5 * 480);
        assert_eq!(events[0].channel(), 0);
        assert_eq!(events[1].pitch(), 60);
    }

    #[test]
    fn test_add_note_by_name() {
        let mut comp = Composition::new(120).unwrap();
        let track = piano_track(&mut comp);
        track.add_note("F#4", 0, 1).unwrap();
        assert_eq!(track.events()[0].pitch(), 54);
    }

    #[test]
    fn test_each_call_grows_by_two_and_stop_after_start() {
        let mut comp = Composition::new(120).unwrap();
        let track = piano_track(&mut comp);
        for (i, dur) in [1u32, 2, 4, 1].into_iter().enumerate() {
            let before = track.events().len();
            track.add_note(60u8 + i as u8, i as u32, dur).unwrap();
            assert_eq!(track.events().len(), before + 2);
            let start = track.events()[before];
            let stop = track.events()[before + 1];
            assert!(stop.tick() > start.tick());
        }
    }

    #[test]
    fn test_percussion_hit_uses_percussion_channel() {
        let mut comp = Composition::new(120).unwrap();
        let track = piano_track(&mut comp);
        track.add_percussion_hit(Percussion::SnareAcoustic, 4, 1).unwrap();
        assert_eq!(track.events().len(), 2);
        assert_eq!(track.events()[0].kind(), EventKind::Start);
        assert_eq!(track.events()[0].tick(), 4 * 480);
        assert_eq!(track.events()[1].kind(), EventKind::Stop);
        assert_eq!(track.events()[1].tick(), 5 * 480);
        for ev in track.events() {
            assert_eq!(ev.channel(), PERCUSSION_CHANNEL);
            assert_eq!(ev.pitch(), 38);
        }
    }

    #[test]
    fn test_invalid_note_leaves_track_untouched() {
        let mut comp = Composition::new(120).unwrap();
        let track = piano_track(&mut comp);
        assert!(matches!(
            track.add_note("Q4", 0, 1),
            Err(MusicError::InvalidNoteName(_))
        ));
        assert!(matches!(
            track.add_note(128u8, 0, 1),
            Err(MusicError::OutOfRange { what: "pitch", .. })
        ));
        assert!(matches!(
            track.add_note_on_channel(60u8, 0, 1, 16),
            Err(MusicError::OutOfRange { what: "channel", .. })
        ));
        // Start tick fits, stop tick does not.
        let last_beat = MAX_TICK / u32::from(TICKS_PER_BEAT);
        assert!(track.add_note(60u8, last_beat, 1).is_err());
        assert!(track.events().is_empty());
    }

    #[test]
    fn test_event_constructor_validates() {
        assert!(Event::new(EventKind::Start, 127, 0, 15).is_ok());
        assert!(Event::new(EventKind::Start, 128, 0, 0).is_err());
        assert!(Event::new(EventKind::Stop, 0, MAX_TICK + 1, 0).is_err());
    }

    #[test]
    fn test_tracks_share_tempo_not_events() {
        let mut comp = Composition::new(240).unwrap();
        comp.new_track(Instrument::PianoAcousticGrand)
            .add_note(60u8, 0, 1)
            .unwrap();
        comp.new_track(Instrument::Harpsichord);

        assert_eq!(comp.tracks().len(), 2);
        assert_eq!(comp.tracks()[0].events().len(), 2);
        assert!(comp.tracks()[1].events().is_empty());
        for track in comp.tracks() {
            assert_eq!(track.bpm(), 240);
            assert_eq!(track.ticks_per_beat(), TICKS_PER_BEAT);
        }
        assert_eq!(comp.tracks()[1].instrument(), Instrument::Harpsichord);
    }

    #[test]
    fn test_tempo_too_slow_rejected() {
        assert!(matches!(Composition::new(0), Err(MusicError::InvalidTempo(0))));
        assert!(Composition::new(MIN_BPM).is_ok());
    }
}
