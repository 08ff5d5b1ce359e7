// MIDI file output from a composition.
//
// Each composition track becomes one SMF track holding its delta-time
// message stream (see stream.rs) followed by End-of-Track. Output is SMF
// Format 1 (parallel tracks) with metrical timing at `TICKS_PER_BEAT`.
//
// Uses the `midly` crate for encoding.

use crate::error::Result;
use crate::stream::{EventOrder, MessageKind, TrackMessage};
use crate::track::{Composition, TICKS_PER_BEAT};
use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use std::path::Path;

/// Convert one message into a midly track event.
fn to_track_event(message: &TrackMessage) -> TrackEvent<'static> {
    let kind = match message.kind {
        MessageKind::Tempo { micros_per_beat } => {
            TrackEventKind::Meta(MetaMessage::Tempo(u24::new(micros_per_beat)))
        }
        MessageKind::ProgramChange { channel, program } => TrackEventKind::Midi {
            channel: u4::new(channel),
            message: MidiMessage::ProgramChange {
                program: u7::new(program),
            },
        },
        MessageKind::NoteOn {
            channel,
            key,
            velocity,
        } => TrackEventKind::Midi {
            channel: u4::new(channel),
            message: MidiMessage::NoteOn {
                key: u7::new(key),
                vel: u7::new(velocity),
            },
        },
        MessageKind::NoteOff {
            channel,
            key,
            velocity,
        } => TrackEventKind::Midi {
            channel: u4::new(channel),
            message: MidiMessage::NoteOff {
                key: u7::new(key),
                vel: u7::new(velocity),
            },
        },
    };
    TrackEvent {
        delta: u28::new(message.delta),
        kind,
    }
}

impl Composition {
    /// Build an in-memory SMF.
    pub fn to_smf(&self, order: EventOrder) -> Smf<'static> {
        let mut smf = Smf::new(Header::new(
            Format::Parallel,
            Timing::Metrical(u15::new(TICKS_PER_BEAT)),
        ));

        for track in self.tracks() {
            let mut events: Vec<TrackEvent<'static>> = track
                .to_messages(order)
                .iter()
                .map(to_track_event)
                .collect();
            events.push(TrackEvent {
                delta: u28::new(0),
                kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
            });
            smf.tracks.push(events);
        }

        smf
    }

    /// Encode as Standard MIDI File bytes.
    pub fn to_midi_bytes(&self, order: EventOrder) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.to_smf(order).write_std(&mut buf)?;
        Ok(buf)
    }

    /// Encode and write to `path`.
    pub fn save(&self, path: &Path, order: EventOrder) -> Result<()> {
        let buf = self.to_midi_bytes(order)?;
        std::fs::write(path, &buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Instrument, Percussion};

    fn two_track_composition() -> Composition {
        let mut comp = Composition::new(240).unwrap();
        let drums = comp.new_track(Instrument::PianoAcousticGrand);
        drums.add_percussion_hit(Percussion::BassDrum1, 8, 1).unwrap();
        let melody = comp.new_track(Instrument::GuitarAcousticNylon);
        melody.add_note("C4", 16, 1).unwrap();
        melody.add_note("E4", 17, 2).unwrap();
        comp
    }

    #[test]
    fn test_smf_layout() {
        let smf = two_track_composition().to_smf(EventOrder::Insertion);
        assert_eq!(smf.header.format, Format::Parallel);
        assert_eq!(smf.header.timing, Timing::Metrical(u15::new(480)));
        assert_eq!(smf.tracks.len(), 2);
        // tempo + program + 2 notes + end
        assert_eq!(smf.tracks[0].len(), 5);
        // tempo + program + 4 notes + end
        assert_eq!(smf.tracks[1].len(), 7);
        for track in &smf.tracks {
            assert_eq!(
                track.last().unwrap().kind,
                TrackEventKind::Meta(MetaMessage::EndOfTrack)
            );
        }
    }

    #[test]
    fn test_bytes_parse_back() {
        let bytes = two_track_composition()
            .to_midi_bytes(EventOrder::Insertion)
            .unwrap();
        assert_eq!(&bytes[..4], b"MThd");

        let smf = Smf::parse(&bytes).unwrap();
        assert_eq!(smf.tracks.len(), 2);
        let melody = &smf.tracks[1];
        assert_eq!(
            melody[1].kind,
            TrackEventKind::Midi {
                channel: u4::new(0),
                message: MidiMessage::ProgramChange {
                    program: u7::new(24)
                },
            }
        );
        assert_eq!(melody[2].delta, u28::new(16 * 480));
        assert_eq!(
            melody[2].kind,
            TrackEventKind::Midi {
                channel: u4::new(0),
                message: MidiMessage::NoteOn {
                    key: u7::new(48),
                    vel: u7::new(64)
                },
            }
        );
    }

    #[test]
    fn test_save_writes_file() {
        let dir = std::env::temp_dir().join(format!("seedsong_midi_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.mid");
        let comp = two_track_composition();
        comp.save(&path, EventOrder::Insertion).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, comp.to_midi_bytes(EventOrder::Insertion).unwrap());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
