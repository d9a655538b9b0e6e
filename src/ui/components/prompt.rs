use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::{
    actions::ALLOWED_EXTENSIONS,
    ui::prompt::{Prompt, TextField},
    util::colors,
};

pub struct PromptWidget<'a> {
    prompt: &'a Prompt,
}

impl<'a> PromptWidget<'a> {
    pub fn new(prompt: &'a Prompt) -> Self {
        Self { prompt }
    }

    /// Rows the dialog needs inside its border.
    fn body_height(&self) -> u16 {
        match self.prompt {
            Prompt::Upload { .. } => 5,
            _ => 3,
        }
    }
}

fn field_line(field: &TextField, focused: bool) -> Line<'_> {
    let label_style = if focused {
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::NEUTRAL)
    };
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(format!("{:>8}: ", field.label), label_style),
        Span::raw(field.display()),
        Span::raw(cursor).fg(colors::PRIMARY),
    ])
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, cell, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(row);
    cell
}

impl Widget for PromptWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = centered(area, area.width.min(60), self.body_height() + 2);
        Clear.render(dialog, buf);

        let hint = match self.prompt {
            Prompt::ConfirmDelete { .. } => "y confirm · n cancel",
            Prompt::Upload { .. } => "tab next field · enter submit · esc cancel",
            _ => "enter submit · esc cancel",
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::PRIMARY))
            .bg(colors::BACKGROUND)
            .title_top(Line::from(self.prompt.title()).alignment(Alignment::Center))
            .title_bottom(
                Line::from(hint)
                    .alignment(Alignment::Center)
                    .fg(colors::NEUTRAL),
            );

        let lines = match self.prompt {
            Prompt::Passcode(field) => vec![
                Line::from("Enter admin passcode:"),
                Line::default(),
                field_line(field, true),
            ],
            Prompt::Rating { field, .. } => vec![
                Line::from("How many stars? (1-6)"),
                Line::default(),
                field_line(field, true),
            ],
            Prompt::ConfirmDelete { .. } => vec![
                Line::from("Are you sure you want to delete this song?"),
                Line::default(),
                Line::from("This cannot be undone.").fg(colors::ERROR),
            ],
            Prompt::Upload { fields, focus } => {
                let mut lines = vec![
                    Line::from(format!("Supported: {}", ALLOWED_EXTENSIONS.join(", "))),
                    Line::default(),
                ];
                lines.extend(
                    fields
                        .iter()
                        .enumerate()
                        .map(|(i, field)| field_line(field, i == *focus)),
                );
                lines
            }
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(dialog, buf);
    }
}
