mod popup;
mod slider;
mod status_bar;

pub use popup::PopupWidget;
pub use slider::{blend, paint_halfblocks, Placement, SliderWidget};
pub use status_bar::StatusBarWidget;
