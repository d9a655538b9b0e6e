use std::thread;

use flume::{Receiver, Sender};
use tracing::{error, info};

use crate::{
    audio::{
        commands::AudioCommand, config::AudioConfig, controller::PlaybackController,
        engine::PlaybackEngine, traits::AudioOutput,
    },
    event::events::Event,
    http::ApiService,
};

/// Handle to the audio thread, which exclusively owns the output device.
pub struct AudioSystem {
    cmd_tx: Option<Sender<AudioCommand>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl AudioSystem {
    pub fn spawn(
        api: ApiService,
        config: AudioConfig,
        event_tx: Sender<Event>,
    ) -> color_eyre::Result<Self> {
        let (cmd_tx, cmd_rx) = flume::unbounded();

        let thread = thread::Builder::new()
            .name("audio".into())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        error!(error = %e, "audio_runtime_failed");
                        return;
                    }
                };

                runtime.block_on(async move {
                    let engine = PlaybackEngine::new(api);
                    let controller = PlaybackController::new(engine, &config, event_tx);
                    run(controller, cmd_rx, config).await;
                });
            })?;

        Ok(Self {
            cmd_tx: Some(cmd_tx),
            thread: Some(thread),
        })
    }

    pub fn send(&self, cmd: AudioCommand) {
        let sent = self.cmd_tx.as_ref().is_some_and(|tx| tx.send(cmd).is_ok());
        if !sent {
            error!("audio_system_gone");
        }
    }
}

impl Drop for AudioSystem {
    fn drop(&mut self) {
        // Dropping the sender closes the channel, which ends the loop.
        if let Some(tx) = self.cmd_tx.take() {
            let _ = tx.send(AudioCommand::Stop);
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Command loop: commands are applied in order, and the monitor tick drives
/// progress reporting and end-of-track detection in between.
pub async fn run<O: AudioOutput>(
    mut controller: PlaybackController<O>,
    cmd_rx: Receiver<AudioCommand>,
    config: AudioConfig,
) {
    let mut ticker = tokio::time::interval(config.tick_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            cmd = cmd_rx.recv_async() => match cmd {
                Ok(cmd) => controller.handle_command(cmd).await,
                Err(_) => break,
            },
            _ = ticker.tick() => controller.on_tick().await,
        }
    }

    info!("audio_system_stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{audio::testing::FakeOutput, catalog::song};
    use std::{sync::Arc, time::Duration};

    fn config() -> AudioConfig {
        AudioConfig {
            tick_interval: Duration::from_millis(5),
            ..AudioConfig::default()
        }
    }

    #[tokio::test]
    async fn commands_are_applied_in_order() {
        let (event_tx, event_rx) = flume::unbounded();
        let (cmd_tx, cmd_rx) = flume::unbounded();
        let controller = PlaybackController::new(FakeOutput::default(), &config(), event_tx);

        cmd_tx
            .send(AudioCommand::SyncCatalog(Arc::new(vec![
                song(1, 0, 0),
                song(2, 0, 0),
            ])))
            .unwrap();
        cmd_tx.send(AudioCommand::Play(0)).unwrap();
        cmd_tx.send(AudioCommand::Previous).unwrap();
        drop(cmd_tx);

        tokio::time::timeout(Duration::from_secs(2), run(controller, cmd_rx, config()))
            .await
            .unwrap();

        let started: Vec<usize> = event_rx
            .drain()
            .filter_map(|e| match e {
                Event::TrackStarted { index, .. } => Some(index),
                _ => None,
            })
            .collect();
        assert_eq!(started, vec![0, 1]);
    }
}
