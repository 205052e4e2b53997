//! Cosmetic kerning hints for the display face.
//!
//! The clock's display font sets "pa" and "lv" too wide; the first glyph of
//! each pair gets wrapped in zero-width markers so the renderer can tighten
//! (or restyle) it. Markers are invisible to terminal width calculations.

/// Zero-width marker wrapped around a glyph that needs kerning.
pub const KERN_MARK: char = '\u{200b}';

/// Glyph pairs the display face kerns badly.
const PAIRS: [&str; 2] = ["pa", "lv"];

/// Wrap the first glyph of the first occurrence of each kerned pair.
///
/// Single pass, first occurrence only, never recursive: wrapping breaks up
/// the pair, so applying twice cannot double-wrap.
pub fn apply(text: &str) -> String {
    let mut out = text.to_string();
    for pair in PAIRS {
        if let Some(idx) = out.find(pair) {
            let first = pair.chars().next().map_or(0, char::len_utf8);
            out.insert(idx + first, KERN_MARK);
            out.insert(idx, KERN_MARK);
        }
    }
    out
}

/// Remove kerning markers, recovering the logical text.
pub fn strip(text: &str) -> String {
    text.chars().filter(|c| *c != KERN_MARK).collect()
}
