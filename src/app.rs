use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::actors::{typist, ActorHandle, TickerActor};
use crate::animate::{self, DisplaySink};
use crate::clock::WallClock;
use crate::config::Config;
use crate::render::RenderState;
use crate::tea::{update, Command, Message, Model};
use crate::{wlog_debug, Result};

const MAX_BG_MESSAGES: usize = 50;

pub struct LogicThread;

impl LogicThread {
    pub fn run(
        config: Config,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        Runtime::new()?.block_on(Self::run_async(config, state_tx, shutdown))
    }

    async fn run_async(
        config: Config,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        wlog_debug!(
            "LogicThread::run_async tick_interval={:?} keystroke_delay={:?}",
            config.tick_interval(),
            config.keystroke_delay()
        );
        let mut model = Model::new(config);

        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();
        let ticker = TickerActor::new(msg_tx.clone(), WallClock)
            .with_interval(model.config.tick_interval())
            .spawn();
        // Handle to the in-flight animation, replaced on every new phrase
        let mut typist: Option<ActorHandle> = None;

        send_state(&state_tx, &model);

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Keyboard input (priority)
            while event::poll(Duration::ZERO)? {
                let msg = match event::read()? {
                    Event::Key(key) => Message::Key(key),
                    Event::Resize(w, h) => Message::Resize(w, h),
                    _ => continue,
                };

                for cmd in update(&mut model, msg) {
                    if execute_command(&mut model, cmd, &msg_tx, &mut typist) {
                        shutdown.store(true, Ordering::Relaxed);
                        shutdown_actors(&ticker, &typist);
                        return Ok(());
                    }
                }

                if model.dirty {
                    send_state(&state_tx, &model);
                    model.dirty = false;
                }
            }

            // Background messages (bounded)
            for _ in 0..MAX_BG_MESSAGES {
                let Ok(msg) = msg_rx.try_recv() else { break };
                for cmd in update(&mut model, msg) {
                    if execute_command(&mut model, cmd, &msg_tx, &mut typist) {
                        shutdown.store(true, Ordering::Relaxed);
                        shutdown_actors(&ticker, &typist);
                        return Ok(());
                    }
                }
            }

            if model.dirty {
                send_state(&state_tx, &model);
                model.dirty = false;
            }

            tokio::time::sleep(Duration::from_micros(500)).await;
        }

        shutdown_actors(&ticker, &typist);
        Ok(())
    }
}

fn execute_command(
    model: &mut Model,
    cmd: Command,
    msg_tx: &mpsc::UnboundedSender<Message>,
    typist_handle: &mut Option<ActorHandle>,
) -> bool {
    match cmd {
        Command::Animate { target } => {
            // A new phrase supersedes whatever is still being typed
            if let Some(prev) = typist_handle.take() {
                prev.shutdown();
            }

            let current = model.display.text();
            let plan = animate::plan(&current, &target, model.config.keystroke_delay());
            wlog_debug!(
                "Command::Animate \"{}\" -> \"{}\" ({} steps)",
                current,
                target,
                plan.steps.len()
            );

            if !plan.is_empty() {
                *typist_handle = Some(typist::spawn(plan, model.display.clone(), msg_tx.clone()));
            }
        }

        Command::Quit => {
            wlog_debug!("Command::Quit");
            return true;
        }
    }

    false
}

fn send_state(state_tx: &Sender<RenderState>, model: &Model) {
    let _ = state_tx.try_send(model.snapshot());
}

fn shutdown_actors(ticker: &ActorHandle, typist: &Option<ActorHandle>) {
    wlog_debug!("Shutting down actors");
    ticker.shutdown();
    if let Some(t) = typist {
        t.shutdown();
    }
}
