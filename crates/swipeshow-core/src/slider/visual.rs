//! Transient visual state of the active item

use super::timing::lerp;

/// Signed 2D displacement in viewport units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vertical-only offset, as produced by a drag
    pub const fn vertical(y: f64) -> Self {
        Self { x: 0.0, y }
    }
}

/// Size of the display area, in the same units as drag deltas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Drags beyond this vertical distance dismiss the active item
    #[inline]
    pub fn dismiss_threshold(&self) -> f64 {
        self.height / 3.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80.0, 24.0)
    }
}

/// Offset, scale and opacity applied when rendering the active item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub offset: Offset,
    /// 0.0 (collapsed) ..= 1.0 (full size)
    pub scale: f64,
    /// 0.0 (invisible) ..= 1.0 (opaque)
    pub opacity: f64,
}

impl VisualState {
    /// Resting state of the active item
    pub const fn settled() -> Self {
        Self {
            offset: Offset::ZERO,
            scale: 1.0,
            opacity: 1.0,
        }
    }

    pub fn is_settled(&self) -> bool {
        *self == Self::settled()
    }

    /// Copy with a different offset
    pub fn with_offset(self, offset: Offset) -> Self {
        Self { offset, ..self }
    }

    /// Component-wise interpolation between two states
    pub fn lerp(from: &VisualState, to: &VisualState, t: f64) -> VisualState {
        VisualState {
            offset: Offset::new(
                lerp(from.offset.x, to.offset.x, t),
                lerp(from.offset.y, to.offset.y, t),
            ),
            scale: lerp(from.scale, to.scale, t),
            opacity: lerp(from.opacity, to.opacity, t),
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_one_third_of_height() {
        let viewport = Viewport::new(400.0, 800.0);
        assert!((viewport.dismiss_threshold() - 266.666).abs() < 0.01);
    }

    #[test]
    fn test_lerp_endpoints() {
        let from = VisualState {
            offset: Offset::new(400.0, -50.0),
            scale: 0.0,
            opacity: 0.0,
        };
        let to = VisualState::settled();

        assert_eq!(VisualState::lerp(&from, &to, 0.0), from);
        assert_eq!(VisualState::lerp(&from, &to, 1.0), to);

        let mid = VisualState::lerp(&from, &to, 0.5);
        assert_eq!(mid.offset, Offset::new(200.0, -25.0));
        assert_eq!(mid.scale, 0.5);
        assert_eq!(mid.opacity, 0.5);
    }
}
