//! Animation playback against a real display sink.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use woord::actors::typist;
use woord::animate::{plan, DisplaySink, TermDisplay};
use woord::kern;

const DELAY: Duration = Duration::from_millis(60);

/// Sink that records every write with its (paused-clock) timestamp.
#[derive(Clone)]
struct RecordingSink {
    writes: Arc<Mutex<Vec<(Duration, String)>>>,
    start: tokio::time::Instant,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            writes: Arc::default(),
            start: tokio::time::Instant::now(),
        }
    }

    fn writes(&self) -> Vec<(Duration, String)> {
        self.writes.lock().unwrap().clone()
    }
}

impl DisplaySink for RecordingSink {
    fn text(&self) -> String {
        kern::strip(&self.writes().last().map(|(_, t)| t.clone()).unwrap_or_default())
    }

    fn set_text(&self, text: &str) {
        self.writes
            .lock()
            .unwrap()
            .push((tokio::time::Instant::now() - self.start, text.to_string()));
    }
}

#[tokio::test(start_paused = true)]
async fn retype_sequence_matches_schedule() {
    let sink = RecordingSink::new();
    let (tx, _rx) = mpsc::unbounded_channel();

    let _handle = typist::spawn(plan("acht uur", "acht twee", DELAY), sink.clone(), tx);
    tokio::time::sleep(Duration::from_secs(1)).await;

    let got: Vec<(u64, String)> = sink
        .writes()
        .iter()
        .map(|(at, text)| (at.as_millis() as u64, kern::strip(text)))
        .collect();

    assert_eq!(
        got,
        vec![
            (0, "acht uur".to_string()),
            (60, "acht uu".to_string()),
            (120, "acht u".to_string()),
            (180, "acht ".to_string()),
            (180, "acht ".to_string()),
            (240, "acht t".to_string()),
            (300, "acht tw".to_string()),
            (360, "acht twe".to_string()),
            (420, "acht twee".to_string()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn kerned_pairs_arrive_marked() {
    let display = TermDisplay::new();
    let (tx, _rx) = mpsc::unbounded_channel();

    let _handle = typist::spawn(plan("", "twee past acht", DELAY), display.clone(), tx);
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(display.raw(), "twee \u{200b}p\u{200b}ast acht");
    assert_eq!(display.text(), "twee past acht");
}

#[tokio::test(start_paused = true)]
async fn equal_phrase_schedules_nothing() {
    let display = TermDisplay::new();
    display.set_text("middag");
    let (tx, mut rx) = mpsc::unbounded_channel();

    let retype = plan(&display.text(), "middag", DELAY);
    assert!(retype.is_empty());

    let _handle = typist::spawn(retype, display.clone(), tx);
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(rx.try_recv().is_err());
    assert_eq!(display.text(), "middag");
}

#[tokio::test(start_paused = true)]
async fn back_to_back_phrases_settle_on_the_last() {
    let display = TermDisplay::new();
    let (tx, _rx) = mpsc::unbounded_channel();

    let first = typist::spawn(plan("", "kwart voor zes", DELAY), display.clone(), tx.clone());
    tokio::time::sleep(Duration::from_millis(150)).await;

    // New phrase before the first finished typing: cancel and replace,
    // planning from whatever is on screen right now
    first.shutdown();
    let current = display.text();
    let _second = typist::spawn(plan(&current, "tien voor zes", DELAY), display.clone(), tx);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(display.text(), "tien voor zes");
}
