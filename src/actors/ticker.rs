//! Ticker actor polling the wall clock.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::clock::ClockSource;
use crate::config::DEFAULT_TICK_INTERVAL_MS;
use crate::tea::Message;
use crate::{wlog_debug, wlog_trace};

use super::ActorHandle;

/// Actor that periodically reads the clock and reports the current time.
/// The tokio interval fires immediately, so the first tick lands at startup.
pub struct TickerActor<C: ClockSource> {
    msg_tx: mpsc::UnboundedSender<Message>,
    clock: C,
    interval: Duration,
}

impl<C: ClockSource> TickerActor<C> {
    pub fn new(msg_tx: mpsc::UnboundedSender<Message>, clock: C) -> Self {
        Self {
            msg_tx,
            clock,
            interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn spawn(self) -> ActorHandle {
        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();

        wlog_debug!("TickerActor::spawn interval={:?}", self.interval);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);

            loop {
                tokio::select! {
                    _ = cancel_clone.cancelled() => {
                        wlog_debug!("TickerActor cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if self.msg_tx.is_closed() {
                            wlog_debug!("TickerActor: message channel closed");
                            break;
                        }

                        let time = self.clock.now();
                        wlog_trace!("TickerActor: tick at {}", time);
                        let _ = self.msg_tx.send(Message::Tick(time));
                    }
                }
            }
        });

        ActorHandle::new(cancel)
    }
}
