//! Window debouncer for a single push button.
//!
//! Every call to [`Debouncer::advance`] shifts one raw sample into an 8 bit
//! window (bit 0 newest, bit 7 dropped). The debounced level only moves when
//! the whole window agrees: eight consecutive highs settle it high, eight
//! consecutive lows settle it low, anything mixed keeps the previous level.
//! Sampled every 4 ms that is a 32 ms settling time.
//!
//! State is written only by `advance` (the tick interrupt) and read by the
//! foreground through `is_active` and the `consume_*` latches. The fields are
//! atomics so both sides can hold a shared reference; `advance` itself must
//! still be driven from exactly one context.

use atomic_polyfill::{AtomicBool, AtomicU8, Ordering};

use super::switches::{Polarity, RawInput};
use super::timer::Periodic;

const SETTLED_HIGH: u8 = 0xFF;
const SETTLED_LOW: u8 = 0x00;

pub struct Debouncer<R> {
    input: R,
    polarity: Polarity,
    window: AtomicU8,
    level: AtomicBool,
    rising: AtomicBool,
    falling: AtomicBool,
}

impl<R: RawInput> Debouncer<R> {
    /// The filter starts settled at the inactive level, with no pending edges.
    pub const fn new(input: R, polarity: Polarity) -> Self {
        let idle = !polarity.level();
        Self {
            input,
            polarity,
            window: AtomicU8::new(if idle { SETTLED_HIGH } else { SETTLED_LOW }),
            level: AtomicBool::new(idle),
            rising: AtomicBool::new(false),
            falling: AtomicBool::new(false),
        }
    }

    /// Take one sample and re-evaluate the debounced level.
    ///
    /// Has to run at a fixed cadence for the window to mean a fixed time.
    pub fn advance(&self) {
        let window = (self.window.load(Ordering::Relaxed) << 1) | self.input.sample() as u8;
        self.window.store(window, Ordering::Relaxed);

        let previous = self.level.load(Ordering::Relaxed);
        let level = match window {
            SETTLED_HIGH => true,
            SETTLED_LOW => false,
            _ => previous,
        };
        if level == previous {
            return;
        }

        self.level.store(level, Ordering::Release);
        if level {
            self.rising.store(true, Ordering::Release);
        } else {
            self.falling.store(true, Ordering::Release);
        }
        trace!("debounced level -> {}", level);
    }

    /// Whether the debounced level equals the configured active level.
    pub fn is_active(&self) -> bool {
        self.level.load(Ordering::Acquire) == self.polarity.level()
    }

    /// Returns `true` once per detected low to high transition.
    ///
    /// Several transitions that happened without a read in between still
    /// report only once.
    pub fn consume_rising_edge(&self) -> bool {
        self.rising.swap(false, Ordering::AcqRel)
    }

    /// Returns `true` once per detected high to low transition.
    pub fn consume_falling_edge(&self) -> bool {
        self.falling.swap(false, Ordering::AcqRel)
    }

    /// Read-and-clear of the edge that makes the input active.
    pub fn consume_press(&self) -> bool {
        match self.polarity {
            Polarity::ActiveHigh => self.consume_rising_edge(),
            Polarity::ActiveLow => self.consume_falling_edge(),
        }
    }

    /// Read-and-clear of the edge that makes the input inactive.
    pub fn consume_release(&self) -> bool {
        match self.polarity {
            Polarity::ActiveHigh => self.consume_falling_edge(),
            Polarity::ActiveLow => self.consume_rising_edge(),
        }
    }

    /// The last eight raw samples, newest in bit 0.
    pub fn window(&self) -> u8 {
        self.window.load(Ordering::Relaxed)
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl<R: RawInput + Sync> Periodic for Debouncer<R> {
    fn advance(&self) {
        Debouncer::advance(self)
    }
}
