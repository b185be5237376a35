pub mod config;
pub mod error;
pub mod slider;
pub mod source;

pub use config::{AppConfig, EasingType, SliderConfig, SourceKind};
pub use error::{Error, Result};
pub use slider::{AnimationEffect, SliderController, SliderEvent};
pub use source::{Authorization, ItemSource, LibrarySource, Photo, PlaceholderSource};
