//! Contact modal rendering

use super::field_renderer::{draw_field, draw_field_error, draw_help_text};
use crate::state::{ContactForm, FieldName, FormFocus};
use crate::ui::components::render_button;
use crate::ui::layout::ModalLayout;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the contact modal with its fields, errors and submit control
pub fn draw_contact_modal(frame: &mut Frame, layout: &ModalLayout, form: &ContactForm) {
    frame.render_widget(Clear, layout.modal);

    let block = Block::default()
        .title(Span::styled(
            " Let's talk ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, layout.modal);

    let close = Paragraph::new("[x]").style(Style::default().fg(Color::Red));
    frame.render_widget(close, layout.close_button);

    for name in FieldName::ALL {
        let error = form.errors.displayed(name);
        let is_active = form.focus == FormFocus::Field(name);
        draw_field(
            frame,
            layout.field(name),
            form.field(name),
            is_active,
            error.is_some(),
        );
        draw_field_error(frame, layout.error(name), error);
    }

    render_button(
        frame,
        layout.submit,
        &form.submit.label,
        form.is_submit_focused(),
        !form.submit.disabled,
    );

    draw_help_text(
        frame,
        layout.help,
        " Tab:next field  Enter:send  click outside or [x]:close",
    );
}
