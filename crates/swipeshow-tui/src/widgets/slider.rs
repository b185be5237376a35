use image::RgbaImage;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use swipeshow_core::{slider::VisualState, ItemSource};

use crate::app::{App, DisplayState};
use crate::input::Action;
use crate::keymap::Keymap;
use crate::theme::{rgb_components, Theme};

/// Where the scaled, offset image lands, in halfblock pixels
/// (one column wide, half a row tall) relative to the area origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// Fit `image` into `cols` x `rows` cells, then apply scale and offset.
    /// Offsets are in cells; `None` when nothing would be visible.
    pub fn compute(image: (u32, u32), cols: u16, rows: u16, visual: &VisualState) -> Option<Self> {
        let (iw, ih) = image;
        if iw == 0 || ih == 0 || cols == 0 || rows == 0 {
            return None;
        }
        let target_w = cols as f64;
        let target_h = rows as f64 * 2.0;
        let fit = (target_w / iw as f64).min(target_h / ih as f64);

        let width = iw as f64 * fit * visual.scale;
        let height = ih as f64 * fit * visual.scale;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }

        let center_x = target_w / 2.0 + visual.offset.x;
        let center_y = target_h / 2.0 + visual.offset.y * 2.0;
        Some(Self {
            left: center_x - width / 2.0,
            top: center_y - height / 2.0,
            width,
            height,
        })
    }

    /// Image pixel shown at halfblock pixel (`px`, `py`), if covered
    pub fn sample(&self, image: &RgbaImage, px: u32, py: u32) -> Option<[u8; 4]> {
        let u = (px as f64 + 0.5 - self.left) / self.width;
        let v = (py as f64 + 0.5 - self.top) / self.height;
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        let x = ((u * image.width() as f64) as u32).min(image.width() - 1);
        let y = ((v * image.height() as f64) as u32).min(image.height() - 1);
        Some(image.get_pixel(x, y).0)
    }
}

/// Mix `fg` over `bg` with weight `alpha` in 0..=1
pub fn blend(fg: [u8; 3], bg: [u8; 3], alpha: f64) -> [u8; 3] {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (b as f64 + (f as f64 - b as f64) * alpha).round() as u8;
    [mix(fg[0], bg[0]), mix(fg[1], bg[1]), mix(fg[2], bg[2])]
}

/// Paint `image` with halfblocks (top pixel as fg, bottom as bg), clipped to `area`
pub fn paint_halfblocks(
    buf: &mut Buffer,
    area: Rect,
    image: &RgbaImage,
    visual: &VisualState,
    background: [u8; 3],
) {
    let Some(placement) = Placement::compute(image.dimensions(), area.width, area.height, visual)
    else {
        return;
    };
    let opacity = visual.opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }

    let shade = |pixel: Option<[u8; 4]>| -> Option<Color> {
        pixel.map(|[r, g, b, a]| {
            let [r, g, b] = blend([r, g, b], background, opacity * a as f64 / 255.0);
            Color::Rgb(r, g, b)
        })
    };
    let bg = Color::Rgb(background[0], background[1], background[2]);

    for row in 0..area.height {
        for col in 0..area.width {
            let py = row as u32 * 2;
            let top = shade(placement.sample(image, col as u32, py));
            let bottom = shade(placement.sample(image, col as u32, py + 1));
            if top.is_none() && bottom.is_none() {
                continue;
            }
            if let Some(cell) = buf.cell_mut(Position::new(area.x + col, area.y + row)) {
                cell.set_char('▀')
                    .set_fg(top.unwrap_or(bg))
                    .set_bg(bottom.unwrap_or(bg));
            }
        }
    }
}

pub struct SliderWidget;

impl SliderWidget {
    /// Render the active item, or the loading / empty state
    pub fn render<S: ItemSource>(frame: &mut Frame, area: Rect, app: &App<S>, keymap: &Keymap) {
        let theme = &app.theme;
        let block = Block::default()
            .style(Style::default().bg(theme.bg0))
            .borders(Borders::NONE);
        frame.render_widget(block, area);

        if app.slider.is_empty() {
            if app.is_loading {
                Self::render_message(frame, area, "Loading images...", theme.yellow, theme);
            } else {
                Self::render_empty(frame, area, keymap, theme);
            }
            return;
        }

        match &app.display {
            DisplayState::Ready(image) => {
                let visual = app.slider.visual();
                paint_halfblocks(frame.buffer_mut(), area, image, &visual, rgb_components(theme.bg0));
            }
            DisplayState::Loading => {
                Self::render_message(frame, area, "Loading image...", theme.yellow, theme);
            }
            DisplayState::Blank => {}
        }
    }

    /// Render "no more images" with the reload hint
    fn render_empty(frame: &mut Frame, area: Rect, keymap: &Keymap, theme: &Theme) {
        let lines = vec![
            Line::from(Span::styled(
                "No more images",
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("press ", Style::default().fg(theme.grey1)),
                Span::styled(keymap.label(Action::Reset).to_string(), Style::default().fg(theme.aqua)),
                Span::styled(" to reload", Style::default().fg(theme.grey1)),
            ]),
        ];
        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.bg0))
            .alignment(Alignment::Center);

        let y_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + y_offset,
            width: area.width,
            height: 2u16.min(area.height),
        };
        frame.render_widget(paragraph, centered_area);
    }

    /// Render a single centered message
    fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color, theme: &Theme) {
        let message = Line::from(Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        let paragraph = Paragraph::new(message)
            .style(Style::default().bg(theme.bg0))
            .alignment(Alignment::Center);

        // Center vertically
        let y_offset = area.height / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + y_offset,
            width: area.width,
            height: 1u16.min(area.height),
        };
        frame.render_widget(paragraph, centered_area);
    }
}
