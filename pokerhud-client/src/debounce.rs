/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Trailing-edge debounce primitive for flicker-prone signals.
//!
//! The scheduling side stays outside: on every `Some(generation)` returned
//! by [`set_raw`](Debounced::set_raw) the caller arms a timer for
//! [`delay_ms`](Debounced::delay_ms) and feeds the generation back into
//! [`settle`](Debounced::settle) when it fires. A newer raw change bumps
//! the generation, so timers armed for stale generations settle as no-ops.
//! That gives the cancel-and-restart semantic without this type ever
//! touching a clock, which keeps it testable with plain function calls.
//!
//! Invariant: `stable` only ever adopts a value that `raw` still holds when
//! the delay elapses. Intermediate values inside the window are dropped.

/// A raw/stable value pair with generation-counted settling.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    raw: T,
    stable: T,
    delay_ms: u32,
    generation: u64,
}

impl<T: Clone + PartialEq> Debounced<T> {
    /// Both `raw` and `stable` start at `initial`; nothing is pending.
    pub fn new(initial: T, delay_ms: u32) -> Self {
        Self {
            raw: initial.clone(),
            stable: initial,
            delay_ms,
            generation: 0,
        }
    }

    /// The most recently settled value. This is what derivations read.
    pub fn stable(&self) -> &T {
        &self.stable
    }

    /// The most recent raw observation, possibly still inside its window.
    pub fn raw(&self) -> &T {
        &self.raw
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Record a raw observation.
    ///
    /// Returns `Some(generation)` when a settle timer should be armed; a
    /// repeat of the current raw value returns `None` so an already-running
    /// window is not restarted (the value has held constant).
    pub fn set_raw(&mut self, value: T) -> Option<u64> {
        if value == self.raw {
            return None;
        }
        self.raw = value;
        self.generation += 1;
        Some(self.generation)
    }

    /// A settle timer fired. Commits `stable = raw` only when `generation`
    /// is still current; stale generations (superseded by a newer raw
    /// change) are dropped. Returns whether the stable value changed.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.stable == self.raw {
            return false;
        }
        self.stable = self.raw.clone();
        true
    }
}
