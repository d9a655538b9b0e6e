use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::{
    catalog::Section,
    ui::{
        app::App,
        components::{
            player::PlayerWidget, prompt::PromptWidget, sidebar::Sidebar, song_list::SongList,
            status::StatusLine,
        },
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(25), Constraint::Min(1)])
            .split(chunks[0]);

        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];
        let section = self.app.session.current_section();

        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("songdeck")
            .title_alignment(Alignment::Center);
        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(section.title())
            .title_alignment(Alignment::Center);

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        let content_inner = content_block.inner(content_area);
        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);

        let counts = Section::ALL.map(|s| self.app.catalog.filter(s).len());
        f.render_widget(Sidebar::new(section, counts), sidebar_inner);

        let app = &mut *self.app;
        let song_list = SongList::new(
            app.catalog.filter(section),
            section,
            app.now_playing.as_ref().map(|s| s.id),
            app.session.is_playing(),
        );
        f.render_stateful_widget(song_list, content_inner, &mut app.list_state);

        f.render_widget(
            PlayerWidget::new(
                app.now_playing.as_ref(),
                app.progress,
                app.loading,
                app.session.is_playing(),
                app.volume,
            ),
            chunks[1],
        );
        f.render_widget(
            StatusLine::new(app.status.as_ref(), app.session.is_admin()),
            chunks[2],
        );

        if let Some(prompt) = &app.prompt {
            f.render_widget(PromptWidget::new(prompt), area);
        }
    }
}
