#![no_main]
#![no_std]
use button_panel::{self as _};
use rtic::app;

#[app(device = stm32f4xx_hal::pac, peripherals = true)]
mod app {
    use button_panel::hardware::debounce::Debouncer;
    use button_panel::hardware::switches::Polarity;
    use button_panel::hardware::timer::{self, BUTTON_PERIOD};
    use button_panel::hardware::ui::Panel;
    use button_panel::hardware::{LedPin, SwitchPin};
    use core::mem::MaybeUninit;

    type Button = Debouncer<SwitchPin>;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        panel: Panel<'static, SwitchPin, LedPin>,
    }

    #[init(local = [buttons: MaybeUninit<[Button; 3]> = MaybeUninit::uninit()])]
    fn init(cx: init::Context) -> (Shared, Local) {
        defmt::info!("init");

        let hardware = button_panel::hardware::setup(cx.device);

        let [toggle, on, off] = hardware.switches;
        let buttons: &'static [Button; 3] = cx.local.buttons.write([
            Debouncer::new(toggle, Polarity::ActiveLow),
            Debouncer::new(on, Polarity::ActiveLow),
            Debouncer::new(off, Polarity::ActiveLow),
        ]);

        // Interrupts are still masked here, so every task is in place before
        // the first tick.
        for button in buttons {
            timer::instance().register(button, BUTTON_PERIOD.ticks()).unwrap();
        }
        timer::start(cx.core.SYST, hardware.sysclk_hz);

        let panel = Panel::new(buttons, hardware.leds);

        (Shared {}, Local { panel })
    }

    #[idle(local = [panel])]
    fn idle(cx: idle::Context) -> ! {
        defmt::info!("idle");
        loop {
            // Pin writes on this board are infallible.
            cx.local.panel.poll().ok();
        }
    }

    #[task(binds = SysTick, priority = 1)]
    fn tick(_cx: tick::Context) {
        timer::instance().tick();
    }
}
