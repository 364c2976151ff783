use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::HeaderViewModel;

pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.model.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let [search_area, hint_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(15)]).areas(inner);

        if let Some(search) = &self.model.search {
            let (label_style, cursor) = if self.model.search_focused {
                (Style::default().fg(Color::Yellow), "█")
            } else {
                (Style::default().fg(Color::DarkGray), "")
            };
            let placeholder = search.is_empty() && !self.model.search_focused;
            let text = if placeholder {
                Span::styled("name, SKU or category", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(format!("{}{}", search, cursor))
            };
            Paragraph::new(Line::from(vec![
                Span::styled("Search [/]: ", label_style),
                text,
            ]))
            .render(search_area, buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled("[n]", Style::default().fg(Color::Yellow)),
            Span::raw(" New product"),
        ]))
        .alignment(Alignment::Right)
        .render(hint_area, buf);
    }
}
