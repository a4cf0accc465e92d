//! Kontroll animation sequencer
//!
//! Drives the inspection pulse on the validity card: three concurrent
//! tracks (card background, overlay text, button background) advanced
//! on a single timeline. Modeled as an explicit state machine driven by
//! elapsed-time thresholds; the fade-out state is the sole predecessor
//! of idle, so no track can be left mid-flight when the sequencer
//! re-arms.
//!
//! The sequencer is the only writer of the progress values. The
//! presentation layer samples them on every tick and maps them through
//! color ramps.

use std::time::{Duration, Instant};

use super::easing::ease_in_out;

/// One leg of the card color ramp (forward or backward).
pub const CARD_LEG: Duration = Duration::from_millis(500);
/// One fade leg of the overlay text.
pub const TEXT_FADE: Duration = Duration::from_millis(250);
/// Hold phase of the overlay text between its fades.
pub const TEXT_HOLD: Duration = Duration::from_millis(500);
/// One-shot button fade-in at sequence start.
pub const BUTTON_FADE_IN: Duration = Duration::from_millis(180);
/// Button fade-out after the joint card/text unit completes.
pub const BUTTON_FADE_OUT: Duration = Duration::from_millis(220);
/// Repetitions of the joint card/text unit.
pub const REPEATS: u32 = 3;

/// One repetition of either repeating track. Card and text legs are
/// structured differently but add up to the same cycle length, so the
/// two tracks complete in lockstep.
const CYCLE: Duration = Duration::from_millis(1000);
/// Total run time of the joint repeating unit.
const JOINT_TOTAL: Duration = Duration::from_millis(1000 * REPEATS as u64);

/// Current interpolation position of each track, in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackProgress {
    pub card: f32,
    pub text: f32,
    pub button: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// Card and text repeating together, button fading in alongside.
    RunningJoint { since: Instant },
    /// Joint unit done; only the button is settling back down.
    FadingOutButton { since: Instant },
}

/// Guarded, fixed-length inspection animation.
#[derive(Debug)]
pub struct KontrollSequencer {
    phase: Phase,
    progress: TrackProgress,
}

impl KontrollSequencer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            progress: TrackProgress::default(),
        }
    }

    /// Start a run anchored at `now`. A trigger while a run is active is
    /// a silent no-op and returns `false`.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Idle {
            tracing::debug!("kontroll trigger ignored, sequence already running");
            return false;
        }
        tracing::debug!("kontroll sequence started");
        self.phase = Phase::RunningJoint { since: now };
        self.progress = TrackProgress::default();
        true
    }

    /// Advance all tracks to `now`. Phase boundaries are anchored to the
    /// trigger instant, so late ticks land on the same timeline instead
    /// of stretching it.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Idle => {}
            Phase::RunningJoint { since } => {
                let elapsed = now.duration_since(since);
                if elapsed >= JOINT_TOTAL {
                    self.phase = Phase::FadingOutButton {
                        since: since + JOINT_TOTAL,
                    };
                    self.progress.card = 0.0;
                    self.progress.text = 0.0;
                    // Re-dispatch so a late tick settles the fade-out too
                    self.tick(now);
                    return;
                }
                let ms = elapsed.as_secs_f32() * 1000.0;
                let cycle = ms % CYCLE.as_millis() as f32;
                self.progress.card = card_progress(cycle);
                self.progress.text = text_progress(cycle);
                self.progress.button = (ms / BUTTON_FADE_IN.as_millis() as f32).min(1.0);
            }
            Phase::FadingOutButton { since } => {
                let elapsed = now.duration_since(since);
                if elapsed >= BUTTON_FADE_OUT {
                    tracing::debug!("kontroll sequence finished");
                    self.phase = Phase::Idle;
                    self.progress = TrackProgress::default();
                } else {
                    let ms = elapsed.as_secs_f32() * 1000.0;
                    self.progress.card = 0.0;
                    self.progress.text = 0.0;
                    self.progress.button = 1.0 - ms / BUTTON_FADE_OUT.as_millis() as f32;
                }
            }
        }
    }

    /// True from the accepted trigger until the button fade-out ends.
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn progress(&self) -> TrackProgress {
        self.progress
    }
}

impl Default for KontrollSequencer {
    fn default() -> Self {
        Self::new()
    }
}

/// Card track within one cycle: eased forward leg, eased backward leg.
fn card_progress(cycle_ms: f32) -> f32 {
    let leg = CARD_LEG.as_millis() as f32;
    if cycle_ms < leg {
        ease_in_out(cycle_ms / leg)
    } else {
        1.0 - ease_in_out((cycle_ms - leg) / leg)
    }
}

/// Text track within one cycle: eased fade-in, hold at 1, eased fade-out.
fn text_progress(cycle_ms: f32) -> f32 {
    let fade = TEXT_FADE.as_millis() as f32;
    let hold_end = fade + TEXT_HOLD.as_millis() as f32;
    if cycle_ms < fade {
        ease_in_out(cycle_ms / fade)
    } else if cycle_ms < hold_end {
        1.0
    } else {
        1.0 - ease_in_out((cycle_ms - hold_end) / fade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    fn running_seq(t0: Instant) -> KontrollSequencer {
        let mut seq = KontrollSequencer::new();
        assert!(seq.trigger(t0));
        seq
    }

    #[test]
    fn test_trigger_from_idle_starts_synchronously() {
        let t0 = Instant::now();
        let mut seq = KontrollSequencer::new();
        assert!(!seq.is_running());
        assert!(seq.trigger(t0));
        assert!(seq.is_running());
    }

    #[test]
    fn test_trigger_while_running_is_noop() {
        let t0 = Instant::now();
        let mut seq = running_seq(t0);
        seq.tick(at(t0, 400));
        let before = seq.progress();

        assert!(!seq.trigger(at(t0, 400)));
        assert!(seq.is_running());
        assert_eq!(seq.progress(), before);
    }

    #[test]
    fn test_trigger_rejected_during_button_fade_out() {
        let t0 = Instant::now();
        let mut seq = running_seq(t0);
        seq.tick(at(t0, 3100));
        assert!(seq.is_running());
        assert!(!seq.trigger(at(t0, 3100)));
    }

    #[test]
    fn test_card_track_hits_ramp_ends_and_returns() {
        let t0 = Instant::now();
        let mut seq = running_seq(t0);

        seq.tick(t0);
        assert_eq!(seq.progress().card, 0.0);

        seq.tick(at(t0, 500));
        assert_eq!(seq.progress().card, 1.0);

        seq.tick(at(t0, 1000));
        assert_eq!(seq.progress().card, 0.0);

        seq.tick(at(t0, 2000));
        assert_eq!(seq.progress().card, 0.0);

        seq.tick(at(t0, 2500));
        assert_eq!(seq.progress().card, 1.0);
    }

    #[test]
    fn test_card_track_continuous_across_repetitions() {
        let t0 = Instant::now();
        let mut seq = running_seq(t0);

        // Sampling just before and just after a cycle boundary must not jump
        seq.tick(at(t0, 995));
        let before = seq.progress().card;
        seq.tick(at(t0, 1005));
        let after = seq.progress().card;
        assert!(before < 0.01, "card should be near zero before boundary");
        assert!(after < 0.01, "card should be near zero after boundary");
    }

    #[test]
    fn test_text_track_fades_holds_and_releases() {
        let t0 = Instant::now();
        let mut seq = running_seq(t0);

        seq.tick(t0);
        assert_eq!(seq.progress().text, 0.0);

        seq.tick(at(t0, 250));
        assert_eq!(seq.progress().text, 1.0);

        seq.tick(at(t0, 500));
        assert_eq!(seq.progress().text, 1.0);

        seq.tick(at(t0, 749));
        assert_eq!(seq.progress().text, 1.0);

        seq.tick(at(t0, 1000));
        assert_eq!(seq.progress().text, 0.0);

        // Second repetition behaves identically
        seq.tick(at(t0, 1250));
        assert_eq!(seq.progress().text, 1.0);
    }

    #[test]
    fn test_button_fades_in_then_holds() {
        let t0 = Instant::now();
        let mut seq = running_seq(t0);

        seq.tick(t0);
        assert_eq!(seq.progress().button, 0.0);

        seq.tick(at(t0, 90));
        assert!((seq.progress().button - 0.5).abs() < 1e-4);

        seq.tick(at(t0, 180));
        assert_eq!(seq.progress().button, 1.0);

        seq.tick(at(t0, 2999));
        assert_eq!(seq.progress().button, 1.0);
    }

    #[test]
    fn test_button_fade_out_is_ordered_after_joint_completion() {
        let t0 = Instant::now();
        let mut seq = running_seq(t0);

        // At the joint boundary the button is still fully up
        seq.tick(at(t0, 3000));
        assert!(seq.is_running());
        let p = seq.progress();
        assert_eq!(p.card, 0.0);
        assert_eq!(p.text, 0.0);
        assert_eq!(p.button, 1.0);

        // Halfway through the fade-out
        seq.tick(at(t0, 3110));
        assert!(seq.is_running());
        assert!((seq.progress().button - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_idle_reentered_only_after_fade_out() {
        let t0 = Instant::now();
        let mut seq = running_seq(t0);

        seq.tick(at(t0, 3219));
        assert!(seq.is_running());

        seq.tick(at(t0, 3220));
        assert!(!seq.is_running());
        assert_eq!(seq.progress(), TrackProgress::default());
    }

    #[test]
    fn test_late_tick_collapses_through_both_transitions() {
        let t0 = Instant::now();
        let mut seq = running_seq(t0);

        // A single tick long after the whole run must settle everything
        seq.tick(at(t0, 10_000));
        assert!(!seq.is_running());
        assert_eq!(seq.progress(), TrackProgress::default());
    }

    #[test]
    fn test_retrigger_after_completion_is_accepted() {
        let t0 = Instant::now();
        let mut seq = running_seq(t0);
        seq.tick(at(t0, 4000));
        assert!(!seq.is_running());

        let t1 = at(t0, 5000);
        assert!(seq.trigger(t1));
        seq.tick(at(t0, 5500));
        assert_eq!(seq.progress().card, 1.0);
    }

    #[test]
    fn test_tick_while_idle_keeps_terminal_values() {
        let t0 = Instant::now();
        let mut seq = KontrollSequencer::new();
        seq.tick(at(t0, 100));
        assert!(!seq.is_running());
        assert_eq!(seq.progress(), TrackProgress::default());
    }

    #[test]
    fn test_eased_legs_pass_through_midpoints() {
        let t0 = Instant::now();
        let mut seq = running_seq(t0);

        // Halfway through an eased leg the eased progress is exactly 0.5
        seq.tick(at(t0, 250));
        assert!((seq.progress().card - 0.5).abs() < 1e-4);

        seq.tick(at(t0, 125));
        assert!((seq.progress().text - 0.5).abs() < 1e-4);
    }
}
