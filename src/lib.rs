use log::{debug, info};
use std::fmt;

/// Timing parameters shared by the engine and the view layer.
pub mod defaults {
    /// One tick per second; the countdown has no sub-second precision.
    pub const TICK_INTERVAL_MS: u32 = 1000;
}

/// Three-way mode of the timer.
///
/// There is no distinct "Finished" state: a countdown that reaches zero
/// returns to `Idle`, the same state `reset` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Not started, finished, or reset.
    Idle,
    /// Actively ticking.
    Running,
    /// Stopped mid-countdown, resumable.
    Paused,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => write!(f, "idle"),
            RunState::Running => write!(f, "running"),
            RunState::Paused => write!(f, "paused"),
        }
    }
}

/// Parse raw user text as a duration in whole seconds.
///
/// Accepts a positive integer only; everything else (empty text, `0`,
/// negative numbers, non-numeric input) yields `None`. Rejection is silent
/// at the engine level, so there is no error type to carry a message.
pub fn parse_duration_secs(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|&secs| secs > 0)
}

/// Format whole seconds as zero-padded `MM:SS`.
///
/// Minutes are not clamped and never roll over into hours: 3661 seconds
/// formats as `61:01`.
pub fn format_secs_to_minsec(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// The countdown state machine.
///
/// Owns the confirmed duration, the remaining seconds, the run state, and
/// the single tick-handle slot. `H` is the opaque handle for the live
/// periodic tick source; dropping it must cancel the source (in the browser
/// this is `gloo_timers::callback::Interval`). Exactly one handle is live
/// while `Running`, zero otherwise — every transition that leaves `Running`
/// drops the slot.
///
/// All out-of-precondition calls are no-ops rather than errors: the widget
/// has no irrecoverable failure modes.
pub struct CountdownEngine<H> {
    duration: Option<u32>,
    remaining: u32,
    run_state: RunState,
    ticker: Option<H>,
}

impl<H> Default for CountdownEngine<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> CountdownEngine<H> {
    pub fn new() -> Self {
        Self {
            duration: None,
            remaining: 0,
            run_state: RunState::Idle,
            ticker: None,
        }
    }

    /// Confirm a new duration from raw input text.
    ///
    /// Valid input (a positive integer) sets both the duration and the
    /// remaining time, forces `Idle`, and cancels any live tick. Invalid
    /// input changes nothing and returns `false`.
    pub fn set_duration(&mut self, input: &str) -> bool {
        let Some(secs) = parse_duration_secs(input) else {
            debug!("Rejected duration input: {:?}", input);
            return false;
        };
        self.duration = Some(secs);
        self.remaining = secs;
        self.run_state = RunState::Idle;
        self.ticker = None;
        debug!("Duration set to {}s", secs);
        true
    }

    /// Start or resume the countdown.
    ///
    /// `spawn_tick` is invoked to acquire a fresh tick handle; any previous
    /// handle is dropped first so at most one tick source is ever live.
    /// No-op when nothing remains to count down.
    pub fn start(&mut self, spawn_tick: impl FnOnce() -> H) {
        if self.remaining == 0 {
            debug!("Start ignored: nothing to run");
            return;
        }
        // Cancel before spawning so the old interval can never outlive this
        // transition.
        self.ticker = None;
        self.ticker = Some(spawn_tick());
        debug!("{} -> running ({}s remaining)", self.run_state, self.remaining);
        self.run_state = RunState::Running;
    }

    /// Pause a running countdown, cancelling the tick. No-op otherwise.
    pub fn pause(&mut self) {
        if self.run_state != RunState::Running {
            return;
        }
        self.run_state = RunState::Paused;
        self.ticker = None;
        debug!("Paused at {}s", self.remaining);
    }

    /// Stop the countdown and restore the remaining time from the confirmed
    /// duration (0 when unset). Always succeeds.
    pub fn reset(&mut self) {
        self.run_state = RunState::Idle;
        self.remaining = self.duration.unwrap_or(0);
        self.ticker = None;
        debug!("Reset to {}s", self.remaining);
    }

    /// Advance the countdown by one elapsed interval.
    ///
    /// Guarded: a tick arriving in any state other than `Running` (a stale
    /// interval firing after a transition) mutates nothing. Reaching zero
    /// releases the handle and returns to `Idle`.
    pub fn tick(&mut self) {
        if self.run_state != RunState::Running {
            debug!("Stale tick ignored in state {}", self.run_state);
            return;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.ticker = None;
            self.run_state = RunState::Idle;
            info!("Countdown complete");
        } else {
            self.remaining -= 1;
        }
    }

    /// Release the tick handle on component teardown.
    ///
    /// A `Running` engine degrades to `Paused` so the handle invariant
    /// (`Running` implies one live handle) still holds afterwards.
    pub fn shutdown(&mut self) {
        self.ticker = None;
        if self.run_state == RunState::Running {
            self.run_state = RunState::Paused;
        }
        debug!("Engine shut down");
    }

    /// Current remaining time formatted as `MM:SS`.
    pub fn display(&self) -> String {
        format_secs_to_minsec(self.remaining)
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn duration(&self) -> Option<u32> {
        self.duration
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Whether a tick source is currently live.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }
}
