use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{
    ui::app::{Status, StatusKind},
    util::colors,
};

const HINTS: &str = "enter play  space pause  n/p skip  l like  r rate  d delete  u upload  a admin  q quit";

pub struct StatusLine<'a> {
    status: Option<&'a Status>,
    is_admin: bool,
}

impl<'a> StatusLine<'a> {
    pub fn new(status: Option<&'a Status>, is_admin: bool) -> Self {
        Self { status, is_admin }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let badge = if self.is_admin {
            Span::from(" ADMIN ").fg(colors::BACKGROUND).bg(colors::ACCENT)
        } else {
            Span::from(" GUEST ").fg(colors::BACKGROUND).bg(colors::NEUTRAL)
        };

        let message = match self.status {
            Some(status) => {
                let color = match status.kind {
                    StatusKind::Info => colors::NEUTRAL,
                    StatusKind::Success => colors::PRIMARY,
                    StatusKind::Error => colors::ERROR,
                };
                Span::from(status.text.as_str()).fg(color)
            }
            None => Span::from(HINTS).fg(colors::NEUTRAL),
        };

        Paragraph::new(Line::from(vec![badge, Span::raw(" "), message])).render(area, buf);
    }
}
