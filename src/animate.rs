//! Diff-based typewriter transitions between display phrases.
//!
//! When the phrase changes, the clock does not redraw the whole string: it
//! backspaces the trailing characters that no longer match and retypes the
//! new tail, one keystroke at a time. Planning is pure (a [`TypePlan`] of
//! timed steps); playback lives in [`crate::actors::typist`].

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::kern;

/// One scheduled display mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStep {
    /// Offset from the start of the animation.
    pub at: Duration,
    /// Full text to display at this step, kerning already applied.
    pub text: String,
}

/// An ordered sequence of timed display mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypePlan {
    pub steps: Vec<TypeStep>,
}

impl TypePlan {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Offset of the last step, i.e. when the animation settles.
    pub fn total(&self) -> Duration {
        self.steps.last().map_or(Duration::ZERO, |s| s.at)
    }
}

/// Count of index-aligned matching characters between `current` and `target`.
///
/// Deliberately NOT a longest-common-prefix: the scan runs over the whole of
/// `current` and coincidental matches after a mismatch still count. The clock
/// has always retyped this way and the resulting truncation depth is part of
/// its observed character, so the comparison is kept as-is.
pub fn overlap(current: &str, target: &str) -> usize {
    let target: Vec<char> = target.chars().collect();
    current
        .chars()
        .enumerate()
        .filter(|(i, c)| target.get(*i) == Some(c))
        .count()
}

/// Plan the keystroke sequence that retypes `current` into `target`.
///
/// `current` is case-normalized first; if it already equals `target` the plan
/// is empty. Otherwise the plan has two phases:
/// - removal: truncate one trailing character per step until only the
///   overlap count remains (the first step re-writes the full current text);
/// - addition: extend from the overlap point one character per step until
///   the full target is shown.
///
/// The first addition step shares its offset with the last removal step and
/// is ordered after it. All indices are character counts, not bytes.
pub fn plan(current: &str, target: &str, keystroke_delay: Duration) -> TypePlan {
    let current = current.to_lowercase();
    if current == target {
        return TypePlan::default();
    }

    let cur: Vec<char> = current.chars().collect();
    let tgt: Vec<char> = target.chars().collect();
    let overlap = overlap(&current, target);

    let mut steps = Vec::new();

    // Take off one by one anything above the overlap
    let to_remove = cur.len() - overlap + 1;
    for i in 0..to_remove {
        steps.push(TypeStep {
            at: keystroke_delay * i as u32,
            text: kern::apply(&cur[..cur.len() - i].iter().collect::<String>()),
        });
    }
    let removal_total = keystroke_delay * (to_remove - 1) as u32;

    // Put on one by one new chars above the overlap
    let to_add = tgt.len() - overlap + 1;
    for i in 0..to_add {
        steps.push(TypeStep {
            at: removal_total + keystroke_delay * i as u32,
            text: kern::apply(&tgt[..overlap + i].iter().collect::<String>()),
        });
    }

    TypePlan { steps }
}

/// The display surface the animator writes to. The clock treats it as an
/// opaque mutable text sink; injecting it keeps the animator free of any
/// global widget reference.
pub trait DisplaySink: Send + 'static {
    /// Logical text currently shown, kerning markers stripped.
    fn text(&self) -> String;
    /// Replace the displayed text. Input arrives kerned.
    fn set_text(&self, text: &str);
}

/// Shared-string sink backing the TUI. Cheap to clone; the typist actor and
/// the model snapshot read and write the same string.
#[derive(Debug, Clone, Default)]
pub struct TermDisplay {
    inner: Arc<Mutex<String>>,
}

impl TermDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw display text with kerning markers, for rendering.
    pub fn raw(&self) -> String {
        self.inner.lock().expect("display lock poisoned").clone()
    }
}

impl DisplaySink for TermDisplay {
    fn text(&self) -> String {
        kern::strip(&self.raw())
    }

    fn set_text(&self, text: &str) {
        *self.inner.lock().expect("display lock poisoned") = text.to_string();
    }
}
