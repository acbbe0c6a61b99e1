//! Shooting-star particle field.
//!
//! The field owns a flat collection of line-segment particles. Each call to
//! [`Starfield::advance`] moves every star along its heading, fades it by a
//! fixed step, retires anything fully faded, and — when the randomized spawn
//! gap has elapsed — pushes a fresh batch of 2–3 stars with randomized
//! geometry. Drawing lives in [`crate::render`]; this module never touches
//! the browser.

use crate::consts::{
    DRIFT_JITTER, END_Y_BAND, END_Y_MARGIN, FADE_STEP, SPAWN_BATCH_MIN, SPAWN_GAP_JITTER_MS,
    SPAWN_GAP_MIN_MS, SPAWN_X_BAND, SPAWN_X_MARGIN, SPAWN_Y_MAX, STAR_ALPHA_MIN,
    STAR_ALPHA_SPREAD, STAR_LENGTH_MIN, STAR_LENGTH_SPREAD, STAR_SPEED_MIN, STAR_SPEED_SPREAD,
};
use crate::random::RandomSource;

#[cfg(test)]
#[path = "starfield_test.rs"]
mod starfield_test;

/// A single shooting star: a fading line segment with a fixed heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Heading in radians, fixed at spawn.
    pub angle: f64,
    pub length: f64,
    /// Pixels advanced along `angle` per frame.
    pub speed: f64,
    /// Current opacity; the star is retired the moment this reaches zero.
    pub alpha: f64,
}

/// The particle field engine.
#[derive(Debug, Clone)]
pub struct Starfield {
    width: f64,
    height: f64,
    stars: Vec<Star>,
    last_spawn_ms: Option<f64>,
    spawn_gap_ms: f64,
}

impl Starfield {
    /// Create an empty field over a surface of the given CSS-pixel size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            stars: Vec::new(),
            last_spawn_ms: None,
            spawn_gap_ms: SPAWN_GAP_MIN_MS,
        }
    }

    /// Track a host viewport change. In-flight stars keep their geometry;
    /// only future spawns use the new bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Current stars, in no particular order.
    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Advance the field by one animation frame at timestamp `now_ms`.
    ///
    /// Moves and fades every star, retires fully-faded ones, and spawns a
    /// fresh batch once the randomized gap since the last batch has elapsed.
    /// The first call always spawns.
    pub fn advance(&mut self, now_ms: f64, rng: &mut dyn RandomSource) {
        for star in &mut self.stars {
            star.x += star.angle.cos() * star.speed;
            star.y += star.angle.sin() * star.speed;
            star.alpha -= FADE_STEP;
        }
        self.stars.retain(|star| star.alpha > 0.0);

        let due = self
            .last_spawn_ms
            .is_none_or(|last| now_ms - last > self.spawn_gap_ms);
        if due {
            let count = SPAWN_BATCH_MIN + usize::from(rng.next_f64() >= 0.5);
            for _ in 0..count {
                let star = self.spawn(rng);
                self.stars.push(star);
            }
            self.last_spawn_ms = Some(now_ms);
            self.spawn_gap_ms = rng.in_range(SPAWN_GAP_MIN_MS, SPAWN_GAP_JITTER_MS);
        }
    }

    /// Randomize one star: start near the top edge, heading toward a point
    /// lower on the surface with a little horizontal drift.
    fn spawn(&self, rng: &mut dyn RandomSource) -> Star {
        let x = rng.in_range(self.width * SPAWN_X_MARGIN, self.width * SPAWN_X_BAND);
        let y = rng.in_range(0.0, SPAWN_Y_MAX);
        let end_y = rng.in_range(self.height * END_Y_MARGIN, self.height * END_Y_BAND);
        let dx = (rng.next_f64() - 0.5) * DRIFT_JITTER;
        let dy = end_y - y;
        Star {
            x,
            y,
            angle: dy.atan2(dx),
            length: rng.in_range(STAR_LENGTH_MIN, STAR_LENGTH_SPREAD),
            speed: rng.in_range(STAR_SPEED_MIN, STAR_SPEED_SPREAD),
            alpha: rng.in_range(STAR_ALPHA_MIN, STAR_ALPHA_SPREAD),
        }
    }
}
