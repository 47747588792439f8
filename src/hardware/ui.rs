use embedded_hal::digital::OutputPin;
use statig::prelude::*;

use super::debounce::Debouncer;
use super::led::Led;
use super::switches::{RawInput, SwitchId, SwitchState, UiEvent};

/// Three buttons and two LEDs.
///
/// `Toggle` flips the first LED on every press. The second LED lights while
/// `On` is held and goes dark while `Off` is held; `On` wins if both are.
pub struct Panel<'a, R, P> {
    switches: &'a [Debouncer<R>; 3],
    leds: [Led<P>; 2],
    indicator: StateMachine<Indicator>,
}

impl<'a, R, P> Panel<'a, R, P>
where
    R: RawInput,
    P: OutputPin,
{
    /// `switches` are indexed by [`SwitchId`].
    pub fn new(switches: &'a [Debouncer<R>; 3], leds: [Led<P>; 2]) -> Self {
        Self {
            switches,
            leds,
            indicator: Indicator.state_machine(),
        }
    }

    /// Act on whatever the buttons did since the last call.
    pub fn poll(&mut self) -> Result<(), P::Error> {
        if self.switch(SwitchId::Toggle).consume_press() {
            debug!("{}", UiEvent::SwitchEvent(SwitchId::Toggle, SwitchState::Pressed));
            self.leds[0].toggle()?;
        }

        let held = if self.switch(SwitchId::On).is_active() {
            Some(SwitchId::On)
        } else if self.switch(SwitchId::Off).is_active() {
            Some(SwitchId::Off)
        } else {
            None
        };
        if let Some(id) = held {
            let mut lit = self.leds[1].is_on();
            self.indicator
                .handle_with_context(&UiEvent::SwitchEvent(id, SwitchState::Held), &mut lit);
            if lit {
                self.leds[1].on()?;
            } else {
                self.leds[1].off()?;
            }
        }
        Ok(())
    }

    pub fn leds(&self) -> &[Led<P>; 2] {
        &self.leds
    }

    fn switch(&self, id: SwitchId) -> &Debouncer<R> {
        &self.switches[id as usize]
    }
}

/// Latch behind the second LED. The context is the requested LED state.
pub struct Indicator;

#[state_machine(initial = "State::dark()")]
impl Indicator {
    #[state]
    fn dark(event: &UiEvent, context: &mut bool) -> Response<State> {
        match event {
            UiEvent::SwitchEvent(SwitchId::On, SwitchState::Held) => {
                debug!("indicator lit");
                *context = true;
                Transition(State::lit())
            }
            _ => Handled,
        }
    }

    #[state]
    fn lit(event: &UiEvent, context: &mut bool) -> Response<State> {
        match event {
            UiEvent::SwitchEvent(SwitchId::Off, SwitchState::Held) => {
                debug!("indicator dark");
                *context = false;
                Transition(State::dark())
            }
            _ => Handled,
        }
    }
}
