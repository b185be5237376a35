//! Time-based interpolation between two visual states

use std::time::{Duration, Instant};

use super::easing::EasingType;
use super::timing::{is_complete_at, progress_at};
use super::visual::VisualState;

/// One running transition of the active item's visual state
#[derive(Debug, Clone)]
pub struct Transition {
    start: Instant,
    from: VisualState,
    to: VisualState,
    duration: Duration,
    easing: EasingType,
}

impl Transition {
    pub fn new(
        start: Instant,
        from: VisualState,
        to: VisualState,
        duration: Duration,
        easing: EasingType,
    ) -> Self {
        Self {
            start,
            from,
            to,
            duration,
            easing,
        }
    }

    /// Interpolated state at `now`; exactly the target once complete
    pub fn sample(&self, now: Instant) -> VisualState {
        if self.is_complete(now) {
            return self.to;
        }
        let t = progress_at(self.start, self.duration, now);
        VisualState::lerp(&self.from, &self.to, self.easing.apply(t))
    }

    #[inline]
    pub fn is_complete(&self, now: Instant) -> bool {
        is_complete_at(self.start, self.duration, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::visual::Offset;

    #[test]
    fn test_sample_lands_on_target() {
        let start = Instant::now();
        let from = VisualState::settled().with_offset(Offset::vertical(120.0));
        let to = VisualState::settled();
        let transition =
            Transition::new(start, from, to, Duration::from_millis(250), EasingType::Cubic);

        assert_eq!(transition.sample(start), from);
        let mid = transition.sample(start + Duration::from_millis(125));
        assert!(mid.offset.y > 0.0 && mid.offset.y < 120.0);
        assert_eq!(transition.sample(start + Duration::from_millis(250)), to);
        assert!(transition.is_complete(start + Duration::from_millis(300)));
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let start = Instant::now();
        let to = VisualState::settled();
        let transition = Transition::new(
            start,
            VisualState { offset: Offset::ZERO, scale: 0.0, opacity: 0.0 },
            to,
            Duration::ZERO,
            EasingType::EaseInOut,
        );
        assert!(transition.is_complete(start));
        assert_eq!(transition.sample(start), to);
    }
}
