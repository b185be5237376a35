//! Theme registry and loader

mod dracula;
mod nord;

use crate::theme::Theme;

/// Names accepted by [`load_theme`]
pub const THEME_NAMES: &[&str] = &["gruvbox-dark", "nord", "dracula"];

/// Load a theme by name; unknown names fall back to Gruvbox Dark
pub fn load_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "dracula" => dracula::default(),
        "nord" => nord::default(),
        "gruvbox-dark" | "gruvbox" => Theme::default(),
        other => {
            tracing::warn!("Unknown theme '{}', using gruvbox-dark", other);
            Theme::default()
        }
    }
}
