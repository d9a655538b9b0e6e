use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::{Line, ToSpan},
    widgets::{Block, Borders, Gauge, Widget},
};

use crate::{audio::progress::Progress, catalog::Song, util::colors};

pub struct PlayerWidget<'a> {
    song: Option<&'a Song>,
    progress: Progress,
    loading: bool,
    is_playing: bool,
    volume: u8,
}

impl<'a> PlayerWidget<'a> {
    pub fn new(
        song: Option<&'a Song>,
        progress: Progress,
        loading: bool,
        is_playing: bool,
        volume: u8,
    ) -> Self {
        Self {
            song,
            progress,
            loading,
            is_playing,
            volume,
        }
    }
}

impl Widget for PlayerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let track_info = match self.song {
            Some(song) => format!(
                "{}  {} by {}",
                if self.is_playing { "▶" } else { "⏸" },
                song.title,
                song.artist
            ),
            None => "No song playing".to_string(),
        };

        let label = if self.loading {
            "Loading…".to_string()
        } else {
            self.progress.label()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title_top(Line::from(track_info).alignment(Alignment::Center))
            .title_top(
                Line::from(format!(" vol {}% ", self.volume))
                    .alignment(Alignment::Right)
                    .fg(colors::NEUTRAL),
            );

        Gauge::default()
            .block(block)
            .ratio(self.progress.ratio())
            .label(label.to_span().fg(ratatui::style::Color::White))
            .gauge_style(Style::default().fg(colors::PRIMARY).bg(colors::BACKGROUND))
            .use_unicode(true)
            .render(area, buf);
    }
}
