//! Time-to-words conversion.
//!
//! Maps an (hour, minute) pair to the clock's natural-language phrase. The
//! wording (and its quirks, like the double space after "kwart over" and the
//! mixed "past"/"o'clock" idioms) is kept exactly as the display face expects
//! it; tests pin the literal output.

use crate::clock::Time;

/// Hour words, indexed by hour. Index 24 exists because the "voor" idioms
/// look up hour + 1, which can reach 24 at 23:40 and later.
const HOUR_WORDS: [&str; 25] = [
    "twaalf", // 0
    "een", "twee", "drie", "vier", "vijf", "zes", "zeven", "acht", "negen", "tien", "elf",
    "twaalf", // 12
    "een", "twee", "drie", "vier", "vijf", "zes", "zeven", "acht", "negen", "tien", "elf",
    "twaalf", // 24, reached via hour + 1
];

/// Unit words 1-19. Index 0 is unreachable through [`words`] (the on-the-hour
/// idioms short-circuit it) but kept total for robustness.
const UNIT_WORDS: [&str; 20] = [
    "nul", "een", "twee", "drie", "vier", "vijf", "zes", "zeven", "acht", "negen", "tien", "elf",
    "twaalf", "dertien", "veertien", "vijftien", "zestien", "zeventien", "achttien", "negentien",
];

/// Tens words, indexed by the tens digit.
const TENS_WORDS: [&str; 6] = ["", "tien", "twintig", "dertig", "veertig", "vijftig"];

/// Render a time as the clock phrase. Total over every valid [`Time`];
/// always non-empty.
pub fn words(time: Time) -> String {
    let (h, m) = (time.hour(), time.minute());

    // Midday
    if h == 12 && m == 0 {
        return "middag".to_string();
    }
    // Midnight
    if h == 0 && m == 0 {
        return "nacht".to_string();
    }

    // One minute past [hour]
    if m == 1 {
        return format!("een minuut na {}", hour_word(h));
    }

    // [minutes 2-12] past [hour]
    if (2..=12).contains(&m) {
        return format!("{} past {}", minute_word(m), hour_word(h));
    }

    // [something] past/to [hour]; "voor" idioms roll the hour forward
    match m {
        0 => return format!("{} o'clock", hour_word(h)),
        15 => return format!("kwart over  {}", hour_word(h)),
        20 => return format!("twintig over {}", hour_word(h)),
        30 => return format!("half {}", hour_word(h)),
        40 => return format!("twintig voor {}", hour_word(h + 1)),
        45 => return format!("kwart voor {}", hour_word(h + 1)),
        50 => return format!("tien voor {}", hour_word(h + 1)),
        55 => return format!("vijf voor {}", hour_word(h + 1)),
        _ => {}
    }

    // No special case, just [hour] [minutes]
    format!("{} {}", hour_word(h), minute_word(m))
}

fn hour_word(hour: u32) -> &'static str {
    // hour <= 24: Time validation bounds it at 23, +1 from the "voor" idioms
    HOUR_WORDS[hour as usize]
}

fn minute_word(minute: u32) -> String {
    if minute <= 19 {
        return UNIT_WORDS[minute as usize].to_string();
    }
    let tens = TENS_WORDS[(minute / 10) as usize];
    let units = minute % 10;
    if units == 0 {
        // 20/30/40/50 are caught by the idiom table above; total anyway
        return tens.to_string();
    }
    format!("{} {}", tens, UNIT_WORDS[units as usize])
}
