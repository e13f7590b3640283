//! Full-screen overlay component: dimmed backdrop with a centered card

use super::button::render_button;
use crate::ui::layout::PopupLayout;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering an overlay
pub struct OverlayConfig<'a> {
    /// Glyph shown above the title
    pub icon: &'a str,
    pub title: &'a str,
    /// Accent color of icon, title and border at full opacity
    pub accent: (u8, u8, u8),
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Label of the dismiss button
    pub button_label: &'a str,
    /// 0.0 (invisible) to 1.0 (fully shown)
    pub opacity: f32,
}

impl<'a> Default for OverlayConfig<'a> {
    fn default() -> Self {
        Self {
            icon: "",
            title: "",
            accent: (255, 255, 255),
            message: "",
            button_label: "OK",
            opacity: 1.0,
        }
    }
}

/// Scale an RGB color toward black by `opacity`
pub fn fade((r, g, b): (u8, u8, u8), opacity: f32) -> Color {
    let o = opacity.clamp(0.0, 1.0);
    Color::Rgb(
        (r as f32 * o).round() as u8,
        (g as f32 * o).round() as u8,
        (b as f32 * o).round() as u8,
    )
}

/// Render an overlay on top of everything drawn so far
pub fn render_overlay(frame: &mut Frame, layout: &PopupLayout, config: OverlayConfig) {
    // Backdrop: dim the whole screen
    let backdrop = Block::default().style(Style::default().bg(fade((24, 24, 24), config.opacity)));
    frame.render_widget(backdrop, layout.backdrop);

    if config.opacity <= 0.0 {
        return;
    }

    frame.render_widget(Clear, layout.content);

    let accent = fade(config.accent, config.opacity);
    let text = fade((230, 230, 230), config.opacity);

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(card, layout.content);

    let body = layout.body();
    let mut content = vec![
        Line::from(Span::styled(
            config.icon,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            config.title,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for line in wrap_text(config.message, body.width as usize) {
        content.push(Line::from(Span::styled(line, Style::default().fg(text))));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, body);

    render_button(frame, layout.ok_button, config.button_label, true, true);
}

/// Wrap text to fit within a maximum width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
