use super::*;

fn engine(titles: &[&str]) -> Typewriter {
    Typewriter::new(titles.iter().map(|s| (*s).to_owned()).collect()).unwrap()
}

const TYPE_DELAY: Duration = Duration::from_millis(TYPE_DELAY_MS);
const DELETE_DELAY: Duration = Duration::from_millis(DELETE_DELAY_MS);
const DWELL: Duration = Duration::from_millis(DWELL_MS);

// =============================================================
// Construction
// =============================================================

#[test]
fn empty_titles_rejected() {
    assert_eq!(Typewriter::new(Vec::new()).unwrap_err(), ConfigError::EmptyTitles);
}

#[test]
fn starts_blank_and_unpaused() {
    let tw = engine(&["Developer"]);
    assert_eq!(tw.text(), "");
    assert!(!tw.is_paused());
    assert!(tw.cursor_visible());
}

#[test]
fn initial_delay_is_typing_delay() {
    let tw = engine(&["Developer"]);
    assert_eq!(tw.initial_delay(), TYPE_DELAY);
}

// =============================================================
// Full cycle over ["A", "BB"]
// =============================================================

#[test]
fn two_title_cycle_in_order() {
    let mut tw = engine(&["A", "BB"]);

    // Type "A" (complete word -> dwell).
    assert_eq!(tw.tick(), DWELL);
    assert_eq!(tw.text(), "A");
    assert!(tw.is_paused());

    // Dwell over: start deleting.
    assert_eq!(tw.tick(), DELETE_DELAY);
    assert!(!tw.is_paused());

    // Erase back to empty (single char -> straight to dwell).
    assert_eq!(tw.tick(), DWELL);
    assert_eq!(tw.text(), "");

    // Advance to "BB".
    assert_eq!(tw.tick(), TYPE_DELAY);
    assert_eq!(tw.text(), "");

    // Type "B", then "BB".
    assert_eq!(tw.tick(), TYPE_DELAY);
    assert_eq!(tw.text(), "B");
    assert_eq!(tw.tick(), DWELL);
    assert_eq!(tw.text(), "BB");
    assert!(tw.is_paused());

    // Delete "B", "", dwell, wrap back to "A".
    assert_eq!(tw.tick(), DELETE_DELAY);
    assert_eq!(tw.tick(), DELETE_DELAY);
    assert_eq!(tw.text(), "B");
    assert_eq!(tw.tick(), DWELL);
    assert_eq!(tw.text(), "");
    assert_eq!(tw.tick(), TYPE_DELAY);
    assert_eq!(tw.tick(), DWELL);
    assert_eq!(tw.text(), "A");
}

#[test]
fn every_title_fully_displayed_once_per_cycle() {
    let titles = ["Software Developer", "Web Developer", "Mobile Developer"];
    let mut tw = engine(&titles);

    let mut seen = Vec::new();
    for _ in 0..2000 {
        tw.tick();
        if tw.is_paused() && seen.last().map(String::as_str) != Some(tw.text()) {
            seen.push(tw.text().to_owned());
        }
        if seen.len() == 6 {
            break;
        }
    }

    // Two full cycles, titles in order each time.
    assert_eq!(seen.len(), 6);
    for (i, title) in seen.iter().enumerate() {
        assert_eq!(title, titles[i % titles.len()]);
    }
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn displayed_text_is_always_a_title_prefix() {
    let titles = ["alpha", "bê", "γγγ"];
    let mut tw = engine(&titles);
    for _ in 0..500 {
        tw.tick();
        assert!(
            titles.iter().any(|t| t.starts_with(tw.text())),
            "not a prefix: {:?}",
            tw.text()
        );
    }
}

#[test]
fn single_title_keeps_cycling() {
    let mut tw = engine(&["Hi"]);
    let mut completions = 0;
    for _ in 0..100 {
        tw.tick();
        if tw.text() == "Hi" {
            completions += 1;
        }
    }
    assert!(completions > 1);
}

#[test]
fn delay_matches_phase() {
    let mut tw = engine(&["abc"]);
    assert_eq!(tw.tick(), TYPE_DELAY); // "a"
    assert_eq!(tw.tick(), TYPE_DELAY); // "ab"
    assert_eq!(tw.tick(), DWELL); // "abc" complete
    assert_eq!(tw.tick(), DELETE_DELAY); // deletion armed
    assert_eq!(tw.tick(), DELETE_DELAY); // "ab"
    assert_eq!(tw.tick(), DELETE_DELAY); // "a"
    assert_eq!(tw.tick(), DWELL); // ""
}

// =============================================================
// Cursor blink
// =============================================================

#[test]
fn cursor_toggles_only_while_paused() {
    let mut tw = engine(&["ab"]);

    // Typing: toggles are ignored.
    tw.tick();
    assert!(!tw.is_paused());
    tw.toggle_cursor();
    assert!(tw.cursor_visible());

    // Word complete: toggles take effect.
    tw.tick();
    assert!(tw.is_paused());
    tw.toggle_cursor();
    assert!(!tw.cursor_visible());
    tw.toggle_cursor();
    assert!(tw.cursor_visible());

    // Deleting: frozen at the last toggled value.
    tw.tick();
    tw.toggle_cursor();
    assert!(tw.cursor_visible());
}
