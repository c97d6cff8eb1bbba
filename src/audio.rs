//! Fire-and-forget sound triggers.
//!
//! The simulation reports game events through [`AudioSink`] at the moment
//! they happen; what a sink does with them is its own business. The terminal
//! build ships a bell-based sink and a silent one.

use std::io::Write;

/// The three game events with an audible cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    /// A jump input was accepted.
    Flap,
    /// One or more obstacles were passed this tick.
    Point,
    /// The bird hit a barrier or a field boundary.
    Hit,
}

/// Receiver for game sound events. Calls must not block or fail visibly.
pub trait AudioSink {
    fn play(&mut self, kind: SoundKind);
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _kind: SoundKind) {}
}

/// Rings the terminal bell on point and hit events. Flaps are too frequent
/// to chime without being obnoxious.
#[derive(Debug, Default)]
pub struct BellAudio;

impl AudioSink for BellAudio {
    fn play(&mut self, kind: SoundKind) {
        if matches!(kind, SoundKind::Point | SoundKind::Hit) {
            let mut out = std::io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}

/// Records every event in order. Used by tests to assert on sound sequences.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub played: Vec<SoundKind>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, kind: SoundKind) {
        self.played.push(kind);
    }
}
