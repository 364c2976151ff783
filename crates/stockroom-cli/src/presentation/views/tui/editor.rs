//! Modal editor drawn over the current view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::view_models::EditorViewModel;

use super::centered_rect;

const LABEL_WIDTH: usize = 14;
const MODAL_WIDTH: u16 = 64;

pub struct EditorView<'a> {
    model: &'a EditorViewModel,
}

impl<'a> EditorView<'a> {
    pub fn new(model: &'a EditorViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for EditorView<'a> {
    /// `area` is the whole screen; the modal centres itself inside it.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = self
            .model
            .fields
            .iter()
            .map(|field| {
                let label_style = if field.has_error {
                    Style::default().fg(Color::Red)
                } else if field.is_focused {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let marker = if field.is_focused { "› " } else { "  " };
                let cursor = if field.is_focused { "█" } else { "" };

                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Yellow)),
                    Span::styled(
                        format!("{:<width$}", field.label, width = LABEL_WIDTH),
                        label_style,
                    ),
                    Span::raw(format!("{}{}", field.value, cursor)),
                ])
            })
            .collect();

        if !self.model.errors.is_empty() {
            lines.push(Line::default());
            for error in &self.model.errors {
                lines.push(Line::from(Span::styled(
                    format!("  ✗ {}", error),
                    Style::default().fg(Color::Red),
                )));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("  [Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" save  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" cancel"),
        ]));

        // borders add two rows
        let height = lines.len() as u16 + 2;
        let popup = centered_rect(MODAL_WIDTH, height, area);

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", self.model.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(popup, buf);
    }
}
