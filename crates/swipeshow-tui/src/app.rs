use std::sync::Arc;
use std::time::Instant;

use image::RgbaImage;
use swipeshow_core::{
    source::{Authorization, SourceLoad},
    AppConfig, ItemSource, SliderController, SliderEvent,
};
use tracing::debug;

use crate::theme::Theme;

/// Current application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Slider interaction
    Normal,
    /// Help overlay
    Help,
}

/// Display data of the active item
#[derive(Debug, Clone)]
pub enum DisplayState {
    /// Fetch in flight
    Loading,
    /// Pixels ready to paint
    Ready(Arc<RgbaImage>),
    /// Fetch returned nothing; the slot stays empty
    Blank,
}

/// A display fetch the host should start
#[derive(Debug, Clone)]
pub struct FetchRequest<T> {
    pub item: T,
    pub generation: u64,
}

/// Application state
pub struct App<S: ItemSource> {
    /// Where items and their pixels come from
    pub source: Arc<S>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Active color theme
    pub theme: Theme,
    /// Swipe state machine over the source's items
    pub slider: SliderController<S::Item>,
    /// Pixels of the active item
    pub display: DisplayState,
    /// Current application mode
    pub mode: Mode,
    /// Whether the collection is being (re)loaded
    pub is_loading: bool,
    /// Outcome of the last authorization request
    pub authorization: Option<Authorization>,
    /// Terminal row where the current mouse drag started
    pub drag_origin: Option<u16>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl<S: ItemSource> App<S> {
    pub fn new(source: Arc<S>, config: Arc<AppConfig>, theme: Theme) -> Self {
        let slider = SliderController::new(config.slider.clone());
        Self {
            source,
            config,
            theme,
            slider,
            display: DisplayState::Blank,
            mode: Mode::Normal,
            is_loading: false,
            authorization: None,
            drag_origin: None,
            should_quit: false,
            status_message: None,
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Help => Mode::Normal,
            Mode::Normal => Mode::Help,
        };
    }

    /// Label of the active item, if any
    pub fn active_label(&self) -> Option<String> {
        self.slider.active().map(|item| self.source.label(item))
    }

    /// Install a freshly loaded collection
    pub fn apply_load(&mut self, load: SourceLoad<S::Item>) -> Option<FetchRequest<S::Item>> {
        self.is_loading = false;
        self.authorization = Some(load.authorization);

        match load.authorization {
            Authorization::Denied => {
                self.set_status(format!("Access denied: {}", self.source.describe()));
            }
            Authorization::Limited => {
                self.set_status(format!(
                    "Limited access: {} ({} items)",
                    self.source.describe(),
                    load.items.len()
                ));
            }
            Authorization::Granted => {
                self.set_status(format!("Loaded {} items", load.items.len()));
            }
        }

        let events = self.slider.reset(load.items);
        self.apply_events(&events)
    }

    /// Store fetched pixels unless a newer item became active meanwhile.
    /// An item that entered after a removal replays its entrance now that
    /// there is something to paint.
    pub fn apply_fetch(&mut self, generation: u64, image: Option<RgbaImage>, now: Instant) {
        if generation != self.slider.generation() {
            debug!(
                "Discarding display for generation {} (current {})",
                generation,
                self.slider.generation()
            );
            return;
        }
        self.display = match image {
            Some(image) => {
                self.slider.restart_entrance(now);
                DisplayState::Ready(Arc::new(image))
            }
            None => DisplayState::Blank,
        };
    }

    /// React to controller events; returns the fetch to start, if any
    pub fn apply_events(&mut self, events: &[SliderEvent]) -> Option<FetchRequest<S::Item>> {
        let mut request = None;
        for event in events {
            match *event {
                SliderEvent::ActiveChanged { index, generation } => {
                    self.display = DisplayState::Loading;
                    request = self.slider.items().get(index).cloned().map(|item| FetchRequest {
                        item,
                        generation,
                    });
                }
                SliderEvent::Emptied => {
                    self.display = DisplayState::Blank;
                    request = None;
                }
                SliderEvent::Removed { index } => {
                    debug!("Host saw removal of item {}", index);
                }
                SliderEvent::Dismissed { .. } => self.clear_status(),
                SliderEvent::Settled => {}
            }
        }
        request
    }

    /// Advance animations
    pub fn tick(&mut self, now: Instant) -> Option<FetchRequest<S::Item>> {
        let events = self.slider.tick(now);
        self.apply_events(&events)
    }

    pub fn start_drag(&mut self, row: u16, now: Instant) -> Option<FetchRequest<S::Item>> {
        self.drag_origin = Some(row);
        let events = self.slider.on_drag_changed(0.0, now);
        self.apply_events(&events)
    }

    pub fn drag_to(&mut self, row: u16, now: Instant) -> Option<FetchRequest<S::Item>> {
        let origin = self.drag_origin?;
        let events = self.slider.on_drag_changed(row_delta(origin, row), now);
        self.apply_events(&events)
    }

    pub fn end_drag(&mut self, row: u16, now: Instant) -> Option<FetchRequest<S::Item>> {
        let origin = self.drag_origin.take()?;
        let events = self.slider.on_drag_ended(row_delta(origin, row), now);
        self.apply_events(&events)
    }

    /// Browse forward or backward, wrapping at the ends
    pub fn browse(&mut self, forward: bool, now: Instant) -> Option<FetchRequest<S::Item>> {
        let len = self.slider.len();
        if len == 0 {
            return None;
        }
        let current = self.slider.current_index();
        let target = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        let events = self.slider.select(target, now);
        self.apply_events(&events)
    }

    /// Open the active item in the system viewer
    pub fn open_external(&mut self) {
        let Some(path) = self.slider.active().and_then(|item| self.source.location(item)) else {
            self.set_status("Nothing to open for this item");
            return;
        };
        match open::that(&path) {
            Ok(()) => self.set_status("Opening image in external viewer..."),
            Err(e) => self.set_status(format!("Failed to open image: {}", e)),
        }
    }

    /// Whether the event loop should poll at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.slider.needs_update()
    }
}

fn row_delta(origin: u16, row: u16) -> f64 {
    row as f64 - origin as f64
}
