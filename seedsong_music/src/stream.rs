// Delta-time serialization of a track.
//
// Turns a track's unordered absolute-tick events into the message stream a
// MIDI track holds: a tempo declaration and a program change at delta 0,
// then one NoteOn/NoteOff per event in tick order, each tagged with the
// ticks elapsed since the previous message of the same track.
//
// Ordering of events sharing a tick is chosen by `EventOrder`:
// - `Insertion` (default): stable sort on tick alone, so equal-tick events
//   keep the order they were added in. A Stop may follow a Start at the
//   same tick.
// - `StopBeforeStart`: at equal ticks all Stops come first, then Starts,
//   each group still in insertion order. Avoids a repeated pitch being
//   released right after it is re-struck.
//
// Invariant: accumulating the deltas reproduces the sorted absolute ticks,
// and the final sum equals the largest tick in the track.

use crate::track::{Event, EventKind, Track};
use serde::{Deserialize, Serialize};

/// Velocity used for every note message.
pub const NOTE_VELOCITY: u8 = 64;

/// Tie-break for events at the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOrder {
    #[default]
    Insertion,
    StopBeforeStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Tempo { micros_per_beat: u32 },
    ProgramChange { channel: u8, program: u8 },
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8, velocity: u8 },
}

/// One message of a track stream. `delta` is relative to the previous
/// message in the same track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackMessage {
    pub delta: u32,
    pub kind: MessageKind,
}

/// Microseconds per beat for a tempo, rounded to nearest.
pub fn bpm_to_tempo(bpm: u16) -> u32 {
    let bpm = u32::from(bpm);
    (60_000_000 + bpm / 2) / bpm
}

impl Track {
    /// Events sorted by tick under the given tie-break.
    pub fn sorted_events(&self, order: EventOrder) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events().iter().collect();
        // `sort_by_key` is stable, so insertion order survives within a key.
        match order {
            EventOrder::Insertion => sorted.sort_by_key(|ev| ev.tick()),
            EventOrder::StopBeforeStart => sorted.sort_by_key(|ev| {
                let rank = match ev.kind() {
                    EventKind::Stop => 0u8,
                    EventKind::Start => 1u8,
                };
                (ev.tick(), rank)
            }),
        }
        sorted
    }

    /// Serialize into tempo + program change + delta-timed note messages.
    pub fn to_messages(&self, order: EventOrder) -> Vec<TrackMessage> {
        let mut messages = Vec::with_capacity(self.events().len() + 2);
        messages.push(TrackMessage {
            delta: 0,
            kind: MessageKind::Tempo {
                micros_per_beat: bpm_to_tempo(self.bpm()),
            },
        });
        messages.push(TrackMessage {
            delta: 0,
            kind: MessageKind::ProgramChange {
                channel: 0,
                program: self.instrument().program(),
            },
        });

        let mut last_tick = 0u32;
        for event in self.sorted_events(order) {
            let delta = event.tick() - last_tick;
            last_tick = event.tick();

            let (channel, key, velocity) = (event.channel(), event.pitch(), NOTE_VELOCITY);
            let kind = match event.kind() {
                EventKind::Start => MessageKind::NoteOn {
                    channel,
                    key,
                    velocity,
                },
                EventKind::Stop => MessageKind::NoteOff {
                    channel,
                    key,
                    velocity,
                },
            };
            messages.push(TrackMessage { delta, kind });
        }
        messages
    }
}
