pub mod debounce;
pub mod led;
pub mod switches;
pub mod timer;
pub mod ui;

#[cfg(feature = "firmware")]
pub use stm32f4xx_hal as hal;

#[cfg(feature = "firmware")]
use hal::{
    gpio::{ErasedPin, Input, Output},
    prelude::*,
};

#[cfg(feature = "firmware")]
use self::{led::Led, switches::Polarity, switches::Sampled};

#[cfg(feature = "firmware")]
pub type SwitchPin = Sampled<ErasedPin<Input>>;
#[cfg(feature = "firmware")]
pub type LedPin = ErasedPin<Output>;

#[cfg(feature = "firmware")]
pub const SYSCLK_HZ: u32 = 168_000_000;

#[cfg(feature = "firmware")]
pub struct Hardware {
    /// Toggle, On, Off: PB12, PB13, PB14, closing to ground.
    pub switches: [SwitchPin; 3],
    /// PB4, PB5, sinking current.
    pub leds: [Led<LedPin>; 2],
    pub sysclk_hz: u32,
}

/// Clock the chip and claim the panel pins.
#[cfg(feature = "firmware")]
pub fn setup(peripherals: hal::pac::Peripherals) -> Hardware {
    let rcc = peripherals.RCC.constrain();
    let ccdr = rcc.cfgr.sysclk(SYSCLK_HZ.Hz()).freeze();

    let gpiob = peripherals.GPIOB.split();
    let switches = [
        Sampled::new(gpiob.pb12.into_pull_up_input().erase()),
        Sampled::new(gpiob.pb13.into_pull_up_input().erase()),
        Sampled::new(gpiob.pb14.into_pull_up_input().erase()),
    ];
    let leds = [
        Led::new(gpiob.pb4.into_push_pull_output().erase(), Polarity::ActiveLow).unwrap(),
        Led::new(gpiob.pb5.into_push_pull_output().erase(), Polarity::ActiveLow).unwrap(),
    ];

    Hardware {
        switches,
        leds,
        sysclk_hz: ccdr.sysclk().raw(),
    }
}
