//! Typist actor playing back a typewriter plan.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::animate::{DisplaySink, TypePlan};
use crate::tea::Message;
use crate::{wlog_debug, wlog_trace};

use super::ActorHandle;

/// Play `plan` against `sink`, one timed keystroke per step. Sends
/// [`Message::DisplayChanged`] after every write so the UI redraws.
///
/// The returned handle cancels the playback; the executor shuts down the
/// previous typist before spawning a new one, so a fresh tick replaces a
/// stale in-flight retype instead of interleaving with it.
pub fn spawn<S: DisplaySink>(
    plan: TypePlan,
    sink: S,
    msg_tx: mpsc::UnboundedSender<Message>,
) -> ActorHandle {
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    wlog_debug!("typist::spawn steps={} total={:?}", plan.steps.len(), plan.total());

    tokio::spawn(async move {
        let mut elapsed = Duration::ZERO;

        for step in plan.steps {
            let wait = step.at.saturating_sub(elapsed);
            tokio::select! {
                _ = cancel_clone.cancelled() => {
                    wlog_debug!("typist cancelled mid-animation");
                    return;
                }
                _ = tokio::time::sleep(wait) => {}
            }
            elapsed = step.at;

            wlog_trace!("typist: \"{}\"", step.text);
            sink.set_text(&step.text);
            let _ = msg_tx.send(Message::DisplayChanged);
        }
    });

    ActorHandle::new(cancel)
}
