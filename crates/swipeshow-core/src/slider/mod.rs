//! Swipe-to-dismiss slider core
//!
//! # Layout
//!
//! ## Atoms
//! - `easing` - Pure easing functions
//! - `timing` - Progress and interpolation over explicit instants
//! - `visual` - Offset, viewport and visual state values
//! - `effect` - Entrance effects and the off-stage pose table
//! - `schedule` - Cancellable deadline task
//!
//! ## Molecules
//! - `transition` - Eased interpolation between two visual states
//! - `controller` - The dismiss/advance state machine
//!
//! # Usage
//!
//! ```ignore
//! use swipeshow_core::slider::{SliderController, SwipeDirection};
//!
//! let mut slider = SliderController::new(config.slider.clone());
//! slider.set_viewport(80.0, 24.0);
//! slider.reset(vec!["Pic 1", "Pic 2"]);
//!
//! slider.on_drag_changed(12.0, Instant::now());
//! slider.on_drag_ended(12.0, Instant::now());
//!
//! // In main loop
//! for event in slider.tick(Instant::now()) { /* fetch display data */ }
//! ```

pub mod easing;
pub mod timing;
pub mod visual;
pub mod effect;
pub mod schedule;

pub mod transition;
pub mod controller;

pub use controller::{Phase, SliderController, SliderEvent, SwipeDirection};
pub use effect::{AnimationEffect, OffStagePose, PoseOffset, POSE_TABLE};
pub use schedule::ScheduledTask;
pub use transition::Transition;
pub use visual::{Offset, Viewport, VisualState};
