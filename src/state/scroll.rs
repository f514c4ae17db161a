//! Scroll position state for the page's vertical scroll surface.
//!
//! The scroll offset is owned here and pinned onto the egui scroll area each
//! frame; navigation requests become an animation target that the frame loop
//! eases toward. The animation is fire-and-forget: a newer target supersedes
//! an in-flight one, and a user scroll cancels it.

/// Per-second exponential approach rate toward the target offset.
const EASE_RATE: f32 = 10.0;

/// Distance below which the animation snaps to its target, in layout units.
const SNAP_DISTANCE: f32 = 0.5;

/// State of the vertical scroll surface.
///
/// Responsibilities:
/// - Tracking the current scroll offset
/// - Easing toward a requested navigation target
/// - Yielding to user scrolling
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current vertical offset of the scroll surface
    offset: f32,
    /// Animation target, if a navigation is in flight
    target: Option<f32>,
}

impl ScrollState {
    /// Creates a scroll state resting at the top of the page.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    /// Returns the current scroll offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns whether a navigation animation is in flight.
    pub fn animating(&self) -> bool {
        self.target.is_some()
    }

    // ===== Mutations =====

    /// Requests a smooth scroll to the given offset.
    ///
    /// Supersedes any in-flight animation; the offset is clamped to be
    /// non-negative.
    pub fn request(&mut self, target: f32) {
        self.target = Some(target.max(0.0));
    }

    /// Advances the animation by `dt` seconds.
    ///
    /// Returns true if the offset changed (the caller should request a
    /// repaint while this keeps returning true).
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let step = 1.0 - (-dt.max(0.0) * EASE_RATE).exp();
        self.offset += (target - self.offset) * step;

        if (target - self.offset).abs() < SNAP_DISTANCE {
            self.offset = target;
            self.target = None;
        }
        true
    }

    /// Adopts the offset actually applied by the scroll area this frame.
    ///
    /// If it differs from the pinned offset the user scrolled by hand, which
    /// cancels any in-flight animation.
    pub fn sync_from_ui(&mut self, applied: f32) {
        if (applied - self.offset).abs() > SNAP_DISTANCE {
            self.offset = applied.max(0.0);
            self.target = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs the animation with 60 fps frames until it settles.
    fn settle(scroll: &mut ScrollState) -> usize {
        let mut frames = 0;
        while scroll.animating() {
            scroll.advance(1.0 / 60.0);
            frames += 1;
            assert!(frames < 1000, "animation failed to converge");
        }
        frames
    }

    #[test]
    fn animation_converges_on_target() {
        let mut scroll = ScrollState::new();
        scroll.request(484.0);
        let frames = settle(&mut scroll);
        assert_eq!(scroll.offset(), 484.0);
        assert!(frames > 1, "smooth scroll should take several frames");
    }

    #[test]
    fn newer_target_supersedes_inflight_animation() {
        let mut scroll = ScrollState::new();
        scroll.request(1000.0);
        scroll.advance(1.0 / 60.0);
        scroll.request(50.0);
        settle(&mut scroll);
        assert_eq!(scroll.offset(), 50.0);
    }

    #[test]
    fn user_scroll_cancels_animation() {
        let mut scroll = ScrollState::new();
        scroll.request(800.0);
        scroll.advance(1.0 / 60.0);
        scroll.sync_from_ui(120.0);
        assert!(!scroll.animating());
        assert_eq!(scroll.offset(), 120.0);
    }

    #[test]
    fn matching_ui_offset_keeps_animation_alive() {
        let mut scroll = ScrollState::new();
        scroll.request(300.0);
        scroll.advance(1.0 / 60.0);
        let pinned = scroll.offset();
        scroll.sync_from_ui(pinned);
        assert!(scroll.animating());
    }

    #[test]
    fn targets_clamp_to_non_negative() {
        let mut scroll = ScrollState::new();
        scroll.request(-40.0);
        settle(&mut scroll);
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn idle_state_reports_no_motion() {
        let mut scroll = ScrollState::new();
        assert!(!scroll.advance(1.0 / 60.0));
    }
}
