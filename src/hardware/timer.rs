//! Cooperative periodic dispatch from a single base tick.
//!
//! One interrupt (SysTick at [`TICK_RATE_HZ`]) calls [`Instance::tick`]. Each
//! registered task fires when the tick counter reaches exactly its due tick,
//! and its due tick then moves forward by its own period. A task whose due
//! tick was missed does not catch up; it fires again once the counter wraps
//! around to it.

use core::cell::RefCell;

use critical_section::Mutex;
use fugit::TimerDurationU32;
use heapless::Vec;

pub const TICK_RATE_HZ: u32 = 1_000;
pub const MAX_TASKS: usize = 8;

pub type TickDuration = TimerDurationU32<TICK_RATE_HZ>;

/// How often a button gets sampled.
pub const BUTTON_PERIOD: TickDuration = TickDuration::millis(4);

/// A unit of work that the scheduler steps once per period.
///
/// Runs in interrupt context, so it has to be short and must not block.
pub trait Periodic: Sync {
    fn advance(&self);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Every slot is taken; nothing was registered.
    RegistryFull,
}

struct Slot<'a> {
    task: &'a dyn Periodic,
    period: u32,
    due: u32,
}

/// Fixed capacity registry of periodic tasks.
pub struct TaskManager<'a, const N: usize> {
    slots: Vec<Slot<'a>, N>,
    ticks: u32,
}

impl<'a, const N: usize> TaskManager<'a, N> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            ticks: 0,
        }
    }

    /// Add `task`, first due at tick `period`.
    ///
    /// A period of 0 fires on tick 0 and then only when the counter wraps.
    ///
    /// Registration is meant to finish before ticks start arriving; a task
    /// added later still gets `period` as its first due tick, not
    /// `now + period`.
    pub fn register(&mut self, task: &'a dyn Periodic, period: u32) -> Result<(), Error> {
        let slot = Slot {
            task,
            period,
            due: period,
        };
        match self.slots.push(slot) {
            Ok(()) => {
                debug!("task {} registered, period {}", self.slots.len() - 1, period);
                Ok(())
            }
            Err(_) => {
                warn!("task registry full ({} slots)", N);
                Err(Error::RegistryFull)
            }
        }
    }

    /// Fire every task due at the current tick, then count the tick.
    pub fn tick(&mut self) {
        let now = self.ticks;
        for slot in self.slots.iter_mut() {
            if now.wrapping_sub(slot.due) == 0 {
                slot.due = slot.due.wrapping_add(slot.period);
                slot.task.advance();
            }
        }
        self.ticks = now.wrapping_add(1);
    }

    /// Ticks counted so far.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }
}

impl<const N: usize> Default for TaskManager<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

static INSTANCE: Mutex<RefCell<TaskManager<'static, MAX_TASKS>>> =
    Mutex::new(RefCell::new(TaskManager::new()));

/// Handle to the one scheduler the tick interrupt drives.
///
/// Every call runs inside a critical section, so a tick never interleaves
/// with a registration or with another tick.
#[derive(Debug, Copy, Clone)]
pub struct Instance {
    _private: (),
}

/// Get the process wide scheduler.
pub fn instance() -> Instance {
    Instance { _private: () }
}

impl Instance {
    pub fn register(self, task: &'static dyn Periodic, period: u32) -> Result<(), Error> {
        critical_section::with(|cs| INSTANCE.borrow_ref_mut(cs).register(task, period))
    }

    /// Called once per base tick, from the tick interrupt only.
    pub fn tick(self) {
        critical_section::with(|cs| INSTANCE.borrow_ref_mut(cs).tick())
    }

    pub fn ticks(self) -> u32 {
        critical_section::with(|cs| INSTANCE.borrow_ref(cs).ticks())
    }

    pub fn len(self) -> usize {
        critical_section::with(|cs| INSTANCE.borrow_ref(cs).len())
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Program SysTick to interrupt at [`TICK_RATE_HZ`] from the core clock.
#[cfg(feature = "firmware")]
pub fn start(mut syst: cortex_m::peripheral::SYST, sysclk_hz: u32) {
    use cortex_m::peripheral::syst::SystClkSource;

    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(sysclk_hz / TICK_RATE_HZ - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();
    info!("systick running at {} Hz", TICK_RATE_HZ);
}
