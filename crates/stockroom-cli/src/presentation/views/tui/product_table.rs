use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::presentation::view_models::ProductTableViewModel;

use super::status_level_to_color;

pub struct ProductTableView<'a> {
    model: &'a ProductTableViewModel,
}

impl<'a> ProductTableView<'a> {
    pub fn new(model: &'a ProductTableViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ProductTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(
                " Products ({} of {}) ",
                self.model.rows.len(),
                self.model.total_products
            ))
            .borders(Borders::ALL);

        if self.model.rows.is_empty() {
            Paragraph::new(Span::styled(
                "No products found",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let header = Row::new(vec!["Name", "SKU", "Category", "Qty", "Price"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .model
            .rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.name.as_str()),
                    Cell::from(row.sku.as_str()),
                    Cell::from(row.category.as_str()),
                    Cell::from(format!("{:>5}", row.quantity))
                        .style(Style::default().fg(status_level_to_color(row.stock_level))),
                    Cell::from(row.price.as_str()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(5),
            Constraint::Length(18),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");

        let mut state = TableState::default().with_selected(self.model.selected);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
