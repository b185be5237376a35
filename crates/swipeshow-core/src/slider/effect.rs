//! Entrance effects and their off-stage poses
//!
//! Each effect maps to a row of [`POSE_TABLE`]. The pose only defines where
//! the incoming item starts; every entrance ends at the settled state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::visual::{Offset, Viewport, VisualState};

/// Animation used when the next item enters after a dismiss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationEffect {
    SlideInFromRight,
    SlideInFromLeft,
    SlideInFromTop,
    SlideInFromBottom,
    #[default]
    ScaleFromCenter,
    FadeIn,
    Rotate,
    ElasticSlideIn,
    Flip,
    DiagonalSlideIn,
    CombinedEffect,
}

/// Offset expressed in multiples of the viewport size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseOffset {
    /// Multiple of the viewport width
    pub x: f64,
    /// Multiple of the viewport height
    pub y: f64,
}

/// Starting values for an entrance; `None` keeps the current value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffStagePose {
    pub offset: Option<PoseOffset>,
    pub scale: Option<f64>,
    pub opacity: Option<f64>,
}

const fn pose(offset: Option<(f64, f64)>, scale: Option<f64>, opacity: Option<f64>) -> OffStagePose {
    let offset = match offset {
        Some((x, y)) => Some(PoseOffset { x, y }),
        None => None,
    };
    OffStagePose { offset, scale, opacity }
}

/// Indexed by `AnimationEffect as usize`; order must follow the enum.
pub const POSE_TABLE: [OffStagePose; 11] = [
    // SlideInFromRight
    pose(Some((1.0, 0.0)), Some(0.0), Some(0.0)),
    // SlideInFromLeft
    pose(Some((-1.0, 0.0)), Some(0.0), Some(0.0)),
    // SlideInFromTop
    pose(Some((0.0, -1.0)), Some(0.0), Some(0.0)),
    // SlideInFromBottom
    pose(Some((0.0, 1.0)), Some(0.0), Some(0.0)),
    // ScaleFromCenter
    pose(Some((0.0, 0.0)), Some(0.0), Some(0.0)),
    // FadeIn
    pose(None, None, Some(0.0)),
    // Rotate
    pose(None, Some(0.5), Some(0.0)),
    // ElasticSlideIn
    pose(Some((1.0, 0.0)), None, None),
    // Flip
    pose(None, None, Some(0.0)),
    // DiagonalSlideIn
    pose(Some((1.0, 1.0)), None, None),
    // CombinedEffect
    pose(Some((1.0, 0.0)), Some(0.5), Some(0.0)),
];

impl AnimationEffect {
    pub const ALL: [AnimationEffect; 11] = [
        AnimationEffect::SlideInFromRight,
        AnimationEffect::SlideInFromLeft,
        AnimationEffect::SlideInFromTop,
        AnimationEffect::SlideInFromBottom,
        AnimationEffect::ScaleFromCenter,
        AnimationEffect::FadeIn,
        AnimationEffect::Rotate,
        AnimationEffect::ElasticSlideIn,
        AnimationEffect::Flip,
        AnimationEffect::DiagonalSlideIn,
        AnimationEffect::CombinedEffect,
    ];

    /// Off-stage pose for this effect
    #[inline]
    pub fn pose(self) -> OffStagePose {
        POSE_TABLE[self as usize]
    }

    /// Kebab-case name used in config files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            AnimationEffect::SlideInFromRight => "slide-in-from-right",
            AnimationEffect::SlideInFromLeft => "slide-in-from-left",
            AnimationEffect::SlideInFromTop => "slide-in-from-top",
            AnimationEffect::SlideInFromBottom => "slide-in-from-bottom",
            AnimationEffect::ScaleFromCenter => "scale-from-center",
            AnimationEffect::FadeIn => "fade-in",
            AnimationEffect::Rotate => "rotate",
            AnimationEffect::ElasticSlideIn => "elastic-slide-in",
            AnimationEffect::Flip => "flip",
            AnimationEffect::DiagonalSlideIn => "diagonal-slide-in",
            AnimationEffect::CombinedEffect => "combined-effect",
        }
    }
}

impl fmt::Display for AnimationEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationEffect {
    type Err = crate::Error;

    /// Accepts kebab-case, snake_case and camelCase spellings
    fn from_str(s: &str) -> crate::Result<Self> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|effect| effect.name().replace('-', "") == wanted)
            .ok_or_else(|| crate::Error::UnknownEffect(s.to_string()))
    }
}

impl OffStagePose {
    /// Apply the pose on top of `current`, resolving offsets against `viewport`
    pub fn apply(&self, current: VisualState, viewport: Viewport) -> VisualState {
        VisualState {
            offset: self
                .offset
                .map(|o| Offset::new(o.x * viewport.width, o.y * viewport.height))
                .unwrap_or(current.offset),
            scale: self.scale.unwrap_or(current.scale),
            opacity: self.opacity.unwrap_or(current.opacity),
        }
    }
}
