use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use image::RgbaImage;
use swipeshow_core::source::SourceLoad;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    animation_rate: Duration,
}

/// Result of an async collection load
pub struct LoadResult<T> {
    pub load: SourceLoad<T>,
}

/// Result of an async display fetch for the active item
pub struct FetchResult {
    /// Generation the fetch was requested for
    pub generation: u64,
    /// Pixels scaled for the terminal, `None` when the source had nothing
    pub image: Option<RgbaImage>,
}

impl EventHandler {
    /// Idle polling at `tick_rate_ms`, animation polling at `fps`
    pub fn with_animation_fps(tick_rate_ms: u64, fps: u32) -> Self {
        let fps = fps.clamp(1, 240);
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
            animation_rate: Duration::from_micros(1_000_000 / fps as u64),
        }
    }

    /// Poll for the next event at the idle tick rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at the animation frame rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_rate)
    }

    pub fn animation_rate(&self) -> Duration {
        self.animation_rate
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(_) | MouseEventKind::Drag(_) | MouseEventKind::Up(_) => {
                        Ok(Some(AppEvent::Mouse(mouse)))
                    }
                    _ => Ok(None),
                },
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse button pressed, dragged or released
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_rate_from_fps() {
        let handler = EventHandler::with_animation_fps(100, 50);
        assert_eq!(handler.animation_rate(), Duration::from_millis(20));
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let handler = EventHandler::with_animation_fps(100, 0);
        assert_eq!(handler.animation_rate(), Duration::from_secs(1));
    }
}
