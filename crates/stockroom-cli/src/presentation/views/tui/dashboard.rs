//! Metric cards above a per-category quantity chart.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{
    CategoryBarViewModel, DashboardViewModel, MetricCardViewModel,
};

use super::status_level_to_color;

const LABEL_MAX: usize = 20;

pub struct DashboardView<'a> {
    model: &'a DashboardViewModel,
}

impl<'a> DashboardView<'a> {
    pub fn new(model: &'a DashboardViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for DashboardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [cards_area, chart_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(3)]).areas(area);

        let count = self.model.cards.len();
        let constraints = vec![Constraint::Ratio(1, count.max(1) as u32); count];
        let card_areas = Layout::horizontal(constraints).split(cards_area);
        for (card, card_area) in self.model.cards.iter().zip(card_areas.iter()) {
            render_card(card, *card_area, buf);
        }

        render_chart(&self.model.categories, chart_area, buf);
    }
}

fn render_card(card: &MetricCardViewModel, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(format!(" {} ", card.title))
        .borders(Borders::ALL);

    Paragraph::new(Span::styled(
        card.value.as_str(),
        Style::default()
            .fg(status_level_to_color(card.level))
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block)
    .render(area, buf);
}

fn render_chart(categories: &[CategoryBarViewModel], area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(" Quantity by category ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    block.render(area, buf);

    if categories.is_empty() {
        Paragraph::new("No products yet")
            .style(Style::default().fg(Color::DarkGray))
            .render(inner, buf);
        return;
    }

    let label_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .min(LABEL_MAX);
    // label, space, bar, space, quantity
    let bar_space = (inner.width as usize).saturating_sub(label_width + 8);

    let lines: Vec<Line> = categories
        .iter()
        .map(|category| {
            let mut bar_len = (bar_space as f64 * category.fill).round() as usize;
            if category.quantity > 0 {
                bar_len = bar_len.max(1);
            }
            Line::from(vec![
                Span::raw(format!(
                    "{:<width$} ",
                    truncate(&category.name, label_width),
                    width = label_width
                )),
                Span::styled("█".repeat(bar_len), Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {}", category.quantity)),
            ])
        })
        .collect();

    Paragraph::new(lines).render(inner, buf);
}
