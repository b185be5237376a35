use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use swipeshow_core::{slider::Phase, ItemSource};

use crate::app::App;
use crate::input::Action;
use crate::keymap::Keymap;

pub struct StatusBarWidget;

impl StatusBarWidget {
    /// Top overlay: index / count readout plus the active item's label
    pub fn render_readout<S: ItemSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
        let theme = &app.theme;
        let mut spans = vec![Span::styled(
            readout_text(app.slider.current_index(), app.slider.len()),
            Style::default()
                .fg(theme.bg0)
                .bg(theme.yellow)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(label) = app.active_label() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, Style::default().fg(theme.fg0)));
        }
        spans.push(Span::styled(
            format!("  {}", app.slider.effect()),
            Style::default().fg(theme.grey1).add_modifier(Modifier::ITALIC),
        ));

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg1));
        frame.render_widget(paragraph, area);
    }

    /// Bottom bar: status message or phase, then key hints
    pub fn render<S: ItemSource>(frame: &mut Frame, area: Rect, app: &App<S>, keymap: &Keymap) {
        let theme = &app.theme;

        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => format!(" {}", phase_label(app.slider.phase())),
        };

        let hints = [
            (Action::SwipeUp, "swipe up"),
            (Action::SwipeDown, "swipe down"),
            (Action::Reset, "reset"),
            (Action::ToggleHelp, "help"),
            (Action::Quit, "quit"),
        ];
        let mut hint_spans = Vec::with_capacity(hints.len() * 2);
        let mut hint_len = 0;
        for (action, text) in hints {
            let key = keymap.label(action).to_string();
            let text = format!(":{} ", text);
            hint_len += key.chars().count() + text.chars().count();
            hint_spans.push(Span::styled(key, Style::default().fg(theme.aqua).bg(theme.bg2)));
            hint_spans.push(Span::styled(text, Style::default().fg(theme.grey2).bg(theme.bg2)));
        }

        let padding_len = (area.width as usize)
            .saturating_sub(status_text.chars().count() + hint_len);

        let mut spans = vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
        ];
        spans.extend(hint_spans);

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Readout text for the active position
pub fn readout_text(index: usize, count: usize) -> String {
    format!(" index {} / count {} ", index, count)
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "READY",
        Phase::Dragging => "DRAG",
        Phase::Returning => "RETURN",
        Phase::Dismissing => "DISMISS",
        Phase::Entering => "ENTER",
        Phase::Empty => "EMPTY",
    }
}
