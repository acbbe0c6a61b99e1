//! Typewriter engine: cycles through role titles, typing and deleting one
//! character at a time with a dwell between phases.
//!
//! The engine is timer-agnostic. The host calls [`Typewriter::tick`] each
//! time the previous delay elapses; `tick` performs exactly one transition
//! and returns the delay to wait before the next call. Cursor blinking is a
//! separate fixed-interval concern driven through
//! [`Typewriter::toggle_cursor`], which only has an effect while the engine
//! dwells on a fully-typed word.

use std::time::Duration;

use thiserror::Error;

use crate::consts::{DELETE_DELAY_MS, DWELL_MS, TYPE_DELAY_MS};

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Host misconfiguration caught at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("typewriter requires at least one title")]
    EmptyTitles,
}

/// The typing/deleting/pausing state machine.
///
/// Invariants: `title_index < titles.len()` and
/// `char_index <= titles[title_index].chars().count()` hold between calls.
#[derive(Debug, Clone)]
pub struct Typewriter {
    titles: Vec<String>,
    title_index: usize,
    char_index: usize,
    deleting: bool,
    paused: bool,
    cursor_visible: bool,
}

impl Typewriter {
    /// Create an engine over a non-empty, cyclic title list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTitles`] when `titles` is empty.
    pub fn new(titles: Vec<String>) -> Result<Self, ConfigError> {
        if titles.is_empty() {
            return Err(ConfigError::EmptyTitles);
        }
        Ok(Self {
            titles,
            title_index: 0,
            char_index: 0,
            deleting: false,
            paused: false,
            cursor_visible: true,
        })
    }

    /// Delay the host should wait before the first [`Self::tick`].
    #[must_use]
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(TYPE_DELAY_MS)
    }

    /// Perform one transition and return the delay until the next tick.
    ///
    /// Typing extends the displayed prefix by one character; once the word
    /// is complete the engine dwells, then deletes a character at a time,
    /// dwells again on the empty string, and advances to the next title.
    /// The cycle has no terminal state.
    pub fn tick(&mut self) -> Duration {
        let len = self.current_len();

        if !self.deleting && self.char_index < len {
            self.char_index += 1;
            if self.char_index == len {
                // Word complete: dwell with the blinking cursor.
                self.paused = true;
                return Duration::from_millis(DWELL_MS);
            }
            return Duration::from_millis(TYPE_DELAY_MS);
        }

        if !self.deleting {
            // Dwell elapsed: start erasing.
            self.deleting = true;
            self.paused = false;
            return Duration::from_millis(DELETE_DELAY_MS);
        }

        if self.char_index > 0 {
            self.char_index -= 1;
            if self.char_index == 0 {
                return Duration::from_millis(DWELL_MS);
            }
            return Duration::from_millis(DELETE_DELAY_MS);
        }

        // Fully erased: move on to the next title.
        self.deleting = false;
        self.title_index = (self.title_index + 1) % self.titles.len();
        Duration::from_millis(TYPE_DELAY_MS)
    }

    /// Flip cursor visibility, but only while dwelling on a complete word.
    /// Outside the dwell the cursor keeps its last toggled value.
    pub fn toggle_cursor(&mut self) {
        if self.paused {
            self.cursor_visible = !self.cursor_visible;
        }
    }

    /// The currently displayed prefix of the active title.
    #[must_use]
    pub fn text(&self) -> &str {
        let title = &self.titles[self.title_index];
        match title.char_indices().nth(self.char_index) {
            Some((byte, _)) => &title[..byte],
            None => title,
        }
    }

    /// Whether the engine is dwelling on a fully-typed word.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current cursor blink phase.
    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn current_len(&self) -> usize {
        self.titles[self.title_index].chars().count()
    }
}
