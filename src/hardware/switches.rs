use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::digital::InputPin;

/// Which raw level counts as "pressed" for an input or "lit" for an output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    #[default]
    ActiveLow,
    ActiveHigh,
}

impl Polarity {
    /// The raw level of the active state.
    pub const fn level(self) -> bool {
        match self {
            Polarity::ActiveLow => false,
            Polarity::ActiveHigh => true,
        }
    }
}

/// Something that can report the instantaneous level of one physical input.
///
/// `true` means the line is electrically high, regardless of polarity.
pub trait RawInput {
    fn sample(&self) -> bool;
}

impl<F> RawInput for F
where
    F: Fn() -> bool,
{
    fn sample(&self) -> bool {
        self()
    }
}

/// Lets a HAL pin, which needs `&mut self` to be read, be sampled through the
/// shared reference the scheduler holds.
///
/// A failed read is taken as a low sample.
pub struct Sampled<P> {
    pin: Mutex<RefCell<P>>,
}

impl<P> Sampled<P> {
    pub const fn new(pin: P) -> Self {
        Self {
            pin: Mutex::new(RefCell::new(pin)),
        }
    }
}

impl<P: InputPin> RawInput for Sampled<P> {
    fn sample(&self) -> bool {
        critical_section::with(|cs| self.pin.borrow_ref_mut(cs).is_high().unwrap_or(false))
    }
}

#[derive(Debug, Copy, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchId {
    Toggle = 0,
    On = 1,
    Off = 2,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchState {
    Pressed,
    Held,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiEvent {
    SwitchEvent(SwitchId, SwitchState),
}
