use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::input::Action;
use crate::keymap::Keymap;
use crate::theme::Theme;

pub struct PopupWidget;

const HELP_ENTRIES: [(Action, &str); 8] = [
    (Action::SwipeUp, "Dismiss upwards"),
    (Action::SwipeDown, "Dismiss downwards"),
    (Action::Next, "Next image"),
    (Action::Prev, "Previous image"),
    (Action::Reset, "Reload images"),
    (Action::OpenExternal, "Open in system viewer"),
    (Action::ToggleHelp, "Toggle this help"),
    (Action::Quit, "Quit"),
];

impl PopupWidget {
    /// Render the key binding overlay
    pub fn render_help(frame: &mut Frame, keymap: &Keymap, theme: &Theme) {
        let area = frame.area();

        let mut lines: Vec<Line> = HELP_ENTRIES
            .iter()
            .map(|(action, text)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>8}  ", keymap.label(*action)),
                        Style::default().fg(theme.aqua).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*text, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();
        lines.push(Line::from(vec![
            Span::styled(format!("{:>8}  ", "mouse"), Style::default().fg(theme.aqua)),
            Span::styled("Drag vertically past 1/3 to dismiss", Style::default().fg(theme.fg0)),
        ]));
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                Style::default().fg(theme.grey1).add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
        );

        let popup_width = 50u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
