use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::{
    app::App,
    input::InputHandler,
    message::AppMessage,
    prompt::PromptOutcome,
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event, then drains whatever the audio
    /// system published in the meantime.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui).await?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            app.handle_audio_event(evt);
        }

        Ok(())
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Tick => {}
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Resize(_, _) => tui.clear()?,
            TerminalEvent::Closed => app.should_quit = true,
        }
        Ok(())
    }

    async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.code == KeyCode::Char('c') && evt.modifiers == KeyModifiers::CONTROL {
            app.update(AppMessage::Quit).await;
            return;
        }

        // An open dialog swallows every key.
        if let Some(prompt) = app.prompt.as_mut() {
            match prompt.handle_key(evt) {
                PromptOutcome::Pending => {}
                PromptOutcome::Cancel => app.update(AppMessage::ClosePrompt).await,
                PromptOutcome::Submit(msg) => app.update(msg).await,
            }
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt) {
            app.update(msg).await;
        }
    }
}
