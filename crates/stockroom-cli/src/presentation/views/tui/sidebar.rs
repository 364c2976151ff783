use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

use crate::presentation::view_models::NavItemViewModel;

pub struct SidebarView<'a> {
    items: &'a [NavItemViewModel],
}

impl<'a> SidebarView<'a> {
    pub fn new(items: &'a [NavItemViewModel]) -> Self {
        Self { items }
    }
}

impl<'a> Widget for SidebarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(" Stockroom ").borders(Borders::ALL);

        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                let (marker, style) = if item.is_active {
                    (
                        "▸ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ("  ", Style::default())
                };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("[{}] ", item.key), Style::default().fg(Color::Yellow)),
                    Span::styled(item.label.as_str(), style),
                ]))
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
