//! Time calculation utilities for slider transitions
//!
//! Pure functions over explicit instants so transitions can be sampled
//! deterministically.

use std::time::{Duration, Instant};

/// Calculate transition progress (0.0 to 1.0) at `now`
///
/// # Arguments
/// * `start` - Transition start time
/// * `duration` - Total transition duration
/// * `now` - Sample time
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress_at(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if a transition is complete at `now`
#[inline]
pub fn is_complete_at(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(-800.0, 0.0, 1.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress_at(start, Duration::ZERO, start) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_midway_and_clamped() {
        let start = Instant::now();
        let duration = Duration::from_millis(500);
        let mid = progress_at(start, duration, start + Duration::from_millis(250));
        assert!((mid - 0.5).abs() < 0.001);
        assert_eq!(progress_at(start, duration, start + Duration::from_secs(2)), 1.0);
        // Sampling before the start never goes negative
        assert_eq!(progress_at(start + duration, duration, start), 0.0);
    }

    #[test]
    fn test_is_complete_at() {
        let start = Instant::now();
        let duration = Duration::from_millis(100);
        assert!(!is_complete_at(start, duration, start + Duration::from_millis(99)));
        assert!(is_complete_at(start, duration, start + duration));
    }
}
