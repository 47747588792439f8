#![cfg_attr(not(test), no_std)]

#[cfg(feature = "firmware")]
use defmt_brtt as _; // global logger

#[cfg(feature = "firmware")]
use panic_probe as _;

#[cfg(feature = "firmware")]
use stm32f4xx_hal as _; // memory layout

mod fmt;

pub mod hardware;

// same panicking *behavior* as `panic-probe` but doesn't print a panic message
// this prevents the panic message being printed *twice* when `defmt::panic` is
// invoked
#[cfg(feature = "firmware")]
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}

