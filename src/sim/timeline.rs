//! Timed step scheduler
//!
//! Presentations, feedback flashes and round pauses are chains of
//! "wait, then act" steps. Each chain is a `Track`; the `Timeline` runs any
//! number of tracks side by side on a simulated millisecond clock that only
//! moves when the caller advances it.

use std::collections::VecDeque;

use super::symbol::Symbol;

/// An action fired by the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Light a pad and play its tone
    Highlight(Symbol),
    /// Turn a pad back off
    Release(Symbol),
    /// Light every pad (no tone)
    LightAll,
    /// Turn every pad off
    DarkenAll,
    /// Sequence fully shown, hand over to the player
    PresentationDone,
    /// Round pause elapsed, extend the sequence
    BeginRound,
}

impl Cue {
    /// Whether firing this cue mutates game state (as opposed to only the display)
    pub fn changes_state(&self) -> bool {
        matches!(self, Cue::PresentationDone | Cue::BeginRound)
    }
}

#[derive(Debug, Clone)]
struct Step {
    wait_ms: u64,
    cue: Cue,
}

/// A sequential chain of timed cues
#[derive(Debug, Clone)]
pub struct Track {
    label: &'static str,
    epoch: u64,
    steps: VecDeque<Step>,
    pending_wait: u64,
}

impl Track {
    /// Start an empty track tagged with the game epoch it belongs to
    pub fn new(label: &'static str, epoch: u64) -> Self {
        Self {
            label,
            epoch,
            steps: VecDeque::new(),
            pending_wait: 0,
        }
    }

    /// Wait before the next cue (waits accumulate)
    pub fn wait(mut self, ms: u64) -> Self {
        self.pending_wait += ms;
        self
    }

    /// Fire a cue once the pending wait has elapsed
    pub fn then(mut self, cue: Cue) -> Self {
        let wait_ms = std::mem::take(&mut self.pending_wait);
        self.steps.push_back(Step { wait_ms, cue });
        self
    }

    /// Number of cues left
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Time from scheduling to the last cue. A trailing wait with no cue is ignored.
    pub fn duration_ms(&self) -> u64 {
        self.steps.iter().map(|s| s.wait_ms).sum()
    }
}

#[derive(Debug, Clone)]
struct Running {
    id: u64,
    track: Track,
    due_at: u64,
}

/// A fired cue, with the epoch its track was scheduled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub at_ms: u64,
    pub epoch: u64,
    pub cue: Cue,
}

/// Runs tracks concurrently on a simulated clock
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    now_ms: u64,
    running: Vec<Running>,
    next_id: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Start a track; its first cue is due after its first wait from now
    pub fn schedule(&mut self, track: Track) {
        let Some(first) = track.steps.front() else {
            return;
        };
        let due_at = self.now_ms + first.wait_ms;
        log::trace!(
            "Scheduled track '{}' ({} cues, {} ms)",
            track.label,
            track.len(),
            track.duration_ms()
        );
        let id = self.next_id;
        self.next_id += 1;
        self.running.push(Running { id, track, due_at });
    }

    /// Pop the earliest cue due at or before `until_ms`, moving the clock to its due time.
    ///
    /// Ties go to the track scheduled first. Tracks scheduled while draining
    /// are picked up by later calls with the same bound.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired> {
        let idx = self
            .running
            .iter()
            .enumerate()
            .filter(|(_, r)| r.due_at <= until_ms)
            .min_by_key(|(_, r)| (r.due_at, r.id))
            .map(|(i, _)| i)?;

        let running = &mut self.running[idx];
        let step = running.track.steps.pop_front()?;
        self.now_ms = self.now_ms.max(running.due_at);
        let fired = Fired {
            at_ms: self.now_ms,
            epoch: running.track.epoch,
            cue: step.cue,
        };

        match running.track.steps.front().map(|s| s.wait_ms) {
            Some(wait_ms) => running.due_at = self.now_ms + wait_ms,
            None => {
                log::trace!("Track '{}' finished", running.track.label);
                self.running.remove(idx);
            }
        }

        Some(fired)
    }

    /// Move the clock forward to `until_ms` once every due cue has been popped
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    /// Pop every cue due within the next `elapsed_ms` and settle the clock
    #[cfg(test)]
    fn drain(&mut self, elapsed_ms: u64) -> Vec<Fired> {
        let until = self.now_ms + elapsed_ms;
        let mut fired = Vec::new();
        while let Some(f) = self.pop_due(until) {
            fired.push(f);
        }
        self.settle(until);
        fired
    }

    /// No tracks left to run
    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    /// Tracks still running
    pub fn active_tracks(&self) -> usize {
        self.running.len()
    }

    /// Time until the next cue is due, if any
    pub fn next_due_in(&self) -> Option<u64> {
        self.running
            .iter()
            .map(|r| r.due_at.saturating_sub(self.now_ms))
            .min()
    }
}
