//! Landing page: header with the "Let's talk" trigger and a scrollable body

use super::components::render_button;
use super::layout::LandingLayout;
use crate::app::App;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PAGE_TEXT: &[&str] = &[
    "We build small, sharp software.",
    "",
    "What we do",
    "  - Command line tools that stay out of your way",
    "  - Network services with boring, predictable failure modes",
    "  - Parsers, codecs and the glue between them",
    "",
    "How we work",
    "  Short iterations, written designs, and tests before release.",
    "  Every project ships with its documentation and a runbook.",
    "",
    "Recent work",
    "  - A log shipper that survives disk-full and network partitions",
    "  - A terminal dashboard for a fleet of build machines",
    "  - An import pipeline moving ten million rows a night",
    "",
    "Pricing",
    "  Fixed-scope projects or monthly retainers. Ask for a quote.",
    "",
    "Have something in mind? Press t or click \"Let's talk\" above.",
];

/// Number of rows the page body can be scrolled
pub fn max_scroll(body_height: u16) -> u16 {
    // 2 rows of border
    let visible = body_height.saturating_sub(2);
    (PAGE_TEXT.len() as u16).saturating_sub(visible)
}

/// Draw the landing page
pub fn draw(frame: &mut Frame, layout: &LandingLayout, app: &App) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Northwind Software ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("| studio", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.header);

    render_button(
        frame,
        layout.talk_button,
        "Let's talk",
        !app.state.modal.visible,
        true,
    );

    let lines: Vec<Line> = PAGE_TEXT.iter().map(|l| Line::from(*l)).collect();
    let border_style = if app.state.page.locked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };
    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.state.page.offset, 0));
    frame.render_widget(body, layout.body);
}
