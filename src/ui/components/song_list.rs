use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    catalog::{Section, Song, SongId},
    util::colors,
};

pub struct SongList<'a> {
    songs: Vec<&'a Song>,
    section: Section,
    now_playing: Option<SongId>,
    is_playing: bool,
}

impl<'a> SongList<'a> {
    pub fn new(
        songs: Vec<&'a Song>,
        section: Section,
        now_playing: Option<SongId>,
        is_playing: bool,
    ) -> Self {
        Self {
            songs,
            section,
            now_playing,
            is_playing,
        }
    }
}

/// `★★★☆☆☆` for rated songs, a single hollow star otherwise.
pub fn stars(rating: u8) -> String {
    if rating == 0 {
        return "☆".to_string();
    }
    let filled = rating.min(6) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(6 - filled))
}

/// Cuts `text` to at most `width` terminal columns, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

impl StatefulWidget for SongList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        if self.songs.is_empty() {
            Paragraph::new(self.section.empty_message())
                .fg(colors::NEUTRAL)
                .centered()
                .render(area, buf);
            return;
        }

        let text_width = (area.width as usize).saturating_sub(24);
        let items: Vec<ListItem> = self
            .songs
            .iter()
            .map(|song| {
                let current = self.now_playing == Some(song.id);
                let marker = match (current, self.is_playing) {
                    (true, true) => "▶ ",
                    (true, false) => "⏸ ",
                    _ => "  ",
                };
                let title = truncate(
                    &format!("{} - {}", song.title, song.artist),
                    text_width,
                );
                let title_style = if current {
                    Style::default().fg(colors::PRIMARY)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(colors::PRIMARY)),
                    Span::styled(
                        format!("{title}{}", " ".repeat(text_width.saturating_sub(title.width()))),
                        title_style,
                    ),
                    Span::styled(
                        format!(" {:<6}", stars(song.rating)),
                        Style::default().fg(colors::ACCENT),
                    ),
                    Span::styled(
                        format!("  ♥ {}", song.likes),
                        Style::default().fg(colors::ERROR),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(
            Style::default()
                .bg(colors::SECONDARY)
                .add_modifier(Modifier::BOLD),
        );
        StatefulWidget::render(list, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_strings() {
        assert_eq!(stars(0), "☆");
        assert_eq!(stars(2), "★★☆☆☆☆");
        assert_eq!(stars(6), "★★★★★★");
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
        assert_eq!(truncate("日本語の歌", 5), "日本…");
    }
}
