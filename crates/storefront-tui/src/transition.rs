//! Enter/exit animation state for a mountable widget.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Hidden,
    Entering,
    Shown,
    Exiting,
}

/// Tracks whether a widget is mounted and how far its slide animation has run.
#[derive(Debug, Clone)]
pub struct Transition {
    duration: Duration,
    phase: TransitionPhase,
    started_at: Option<Instant>,
}

impl Transition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            phase: TransitionPhase::Hidden,
            started_at: None,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.phase, TransitionPhase::Entering | TransitionPhase::Shown)
    }

    /// Whether the widget occupies space on screen (including while exiting).
    pub fn is_rendered(&self) -> bool {
        self.phase != TransitionPhase::Hidden
    }

    pub fn set_mounted(&mut self, mounted: bool, now: Instant) {
        if mounted == self.is_mounted() {
            return;
        }
        if self.duration.is_zero() {
            self.phase = if mounted {
                TransitionPhase::Shown
            } else {
                TransitionPhase::Hidden
            };
            self.started_at = None;
            return;
        }
        self.phase = match (mounted, self.phase) {
            (true, _) => TransitionPhase::Entering,
            (false, TransitionPhase::Hidden) => TransitionPhase::Hidden,
            (false, _) => TransitionPhase::Exiting,
        };
        self.started_at = Some(now);
    }

    /// Settle a finished animation.
    pub fn tick(&mut self, now: Instant) {
        let Some(started_at) = self.started_at else {
            return;
        };
        if now.saturating_duration_since(started_at) < self.duration {
            return;
        }
        self.phase = match self.phase {
            TransitionPhase::Entering => TransitionPhase::Shown,
            TransitionPhase::Exiting => TransitionPhase::Hidden,
            settled => settled,
        };
        self.started_at = None;
    }

    /// How far the widget has slid in, from 0.0 (hidden) to 1.0 (in place).
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = self
            .started_at
            .map(|started_at| now.saturating_duration_since(started_at))
            .unwrap_or_default();
        let ratio = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        match self.phase {
            TransitionPhase::Hidden => 0.0,
            TransitionPhase::Shown => 1.0,
            TransitionPhase::Entering => ratio,
            TransitionPhase::Exiting => 1.0 - ratio,
        }
    }

    /// Rows to push the widget down by for a slide-up effect over `travel` rows.
    pub fn slide_offset(&self, now: Instant, travel: u16) -> u16 {
        let remaining = 1.0 - self.progress(now);
        (remaining * f32::from(travel)).round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(500);

    #[test]
    fn test_starts_hidden() {
        let transition = Transition::new(DURATION);
        assert_eq!(transition.phase(), TransitionPhase::Hidden);
        assert!(!transition.is_rendered());
    }

    #[test]
    fn test_enter_then_settle() {
        let start = Instant::now();
        let mut transition = Transition::new(DURATION);

        transition.set_mounted(true, start);
        assert_eq!(transition.phase(), TransitionPhase::Entering);
        assert!(transition.is_rendered());

        transition.tick(start + Duration::from_millis(250));
        assert_eq!(transition.phase(), TransitionPhase::Entering);
        let halfway = transition.progress(start + Duration::from_millis(250));
        assert!((halfway - 0.5).abs() < 0.01);

        transition.tick(start + DURATION);
        assert_eq!(transition.phase(), TransitionPhase::Shown);
        assert_eq!(transition.progress(start + DURATION), 1.0);
    }

    #[test]
    fn test_exit_keeps_rendering_until_done() {
        let start = Instant::now();
        let mut transition = Transition::new(DURATION);
        transition.set_mounted(true, start);
        transition.tick(start + DURATION);

        let exit_at = start + Duration::from_secs(2);
        transition.set_mounted(false, exit_at);
        assert_eq!(transition.phase(), TransitionPhase::Exiting);
        assert!(transition.is_rendered());
        assert!(!transition.is_mounted());

        transition.tick(exit_at + DURATION);
        assert_eq!(transition.phase(), TransitionPhase::Hidden);
    }

    #[test]
    fn test_unmount_while_hidden_is_noop() {
        let mut transition = Transition::new(DURATION);
        transition.set_mounted(false, Instant::now());
        assert_eq!(transition.phase(), TransitionPhase::Hidden);
    }

    #[test]
    fn test_remount_while_exiting() {
        let start = Instant::now();
        let mut transition = Transition::new(DURATION);
        transition.set_mounted(true, start);
        transition.tick(start + DURATION);
        transition.set_mounted(false, start + DURATION);
        transition.set_mounted(true, start + DURATION + Duration::from_millis(100));

        assert_eq!(transition.phase(), TransitionPhase::Entering);
    }

    #[test]
    fn test_zero_duration_switches_immediately() {
        let mut transition = Transition::new(Duration::ZERO);
        transition.set_mounted(true, Instant::now());
        assert_eq!(transition.phase(), TransitionPhase::Shown);
        transition.set_mounted(false, Instant::now());
        assert_eq!(transition.phase(), TransitionPhase::Hidden);
    }

    #[test]
    fn test_slide_offset() {
        let start = Instant::now();
        let mut transition = Transition::new(DURATION);
        transition.set_mounted(true, start);

        assert_eq!(transition.slide_offset(start, 2), 2);
        assert_eq!(transition.slide_offset(start + DURATION, 2), 0);
    }
}
