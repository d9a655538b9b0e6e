use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};

use crate::{catalog::Section, util::colors};

pub struct Sidebar {
    selected: Section,
    counts: [usize; 3],
}

impl Sidebar {
    pub fn new(selected: Section, counts: [usize; 3]) -> Self {
        Self { selected, counts }
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = Section::ALL
            .iter()
            .map(|section| {
                let style = if *section == self.selected {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };
                let label = format!(
                    " {} {} ({})",
                    section.index() + 1,
                    section.title(),
                    self.counts[section.index()]
                );
                ListItem::new(label).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
