//! Four key demo for an STM32F405 board.
//!
//! Keys 0..=2 pull up and read low when pressed, the wake-up key pulls down
//! and reads high. Every event is printed over RTT, together with a note when
//! keys 0 and 1 are clicked in the same scan.
#![no_main]
#![no_std]

use defmt_brtt as _; // global logger
use panic_probe as _;

use embedded_hal::digital::PinState;
use rtic::app;
use stm32f4xx_hal::gpio::{ErasedPin, Input};
use tick_buttons::{Button, Buttons, Event, EventHandler, ReadLevel};

const KEY0: u8 = 0;
const KEY1: u8 = 1;
const KEY2: u8 = 2;
const WK_UP: u8 = 3;

/// Key pins, indexed by button id.
pub struct Keys {
    pins: [ErasedPin<Input>; 4],
}

impl ReadLevel for Keys {
    fn read_level(&self, id: u8) -> PinState {
        // unknown keys read low
        self.pins
            .get(id as usize)
            .map_or(PinState::Low, |pin| PinState::from(pin.is_high()))
    }
}

struct Console;

impl EventHandler for Console {
    fn on_event(&self, button: &Button<'_>, buttons: &Buttons<'_>) {
        defmt::info!(
            "id: [{}] event: [{}] repeat: {}",
            button.id(),
            button.event(),
            button.repeat_count()
        );
        if buttons.read_event(KEY0) == Some(Event::Click)
            && buttons.read_event(KEY1) == Some(Event::Click)
        {
            defmt::info!("[combination]: key 0 and key 1");
        }
    }
}

// same panicking *behavior* as `panic-probe` but doesn't print a panic message
// this prevents the panic message being printed *twice* when `defmt::panic` is
// invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}

#[app(
    device = stm32f4xx_hal::pac,
    peripherals = true,
    dispatchers = [TIM3]
)]
mod app {
    use super::*;
    use rtic_monotonics::systick::*;
    use stm32f4xx_hal::prelude::*;
    use tick_buttons::{ButtonConfig, ScanRate};

    const SCAN_RATE: ScanRate = ScanRate::DEFAULT;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        keys: &'static Keys,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local) {
        defmt::info!("init");
        let rcc = cx.device.RCC.constrain();
        let _clocks = rcc.cfgr.sysclk(168.MHz()).freeze();

        let systick_mono_token = rtic_monotonics::create_systick_token!();
        Systick::start(cx.core.SYST, 168_000_000, systick_mono_token);

        let gpioc = cx.device.GPIOC.split();
        let gpiod = cx.device.GPIOD.split();
        let keys = cortex_m::singleton!(: Keys = Keys {
            pins: [
                gpiod.pd10.into_pull_up_input().erase(),
                gpiod.pd9.into_pull_up_input().erase(),
                gpiod.pd8.into_pull_up_input().erase(),
                gpioc.pc13.into_pull_down_input().erase(),
            ],
        })
        .unwrap();

        scan::spawn().unwrap();
        (Shared {}, Local { keys })
    }

    #[task(local = [keys])]
    async fn scan(cx: scan::Context) {
        let keys: &'static Keys = *cx.local.keys;
        let config = ButtonConfig::default();
        let period = 1000 / SCAN_RATE.rate().to_Hz();

        let mut buttons = Buttons::new();
        for id in [KEY0, KEY1, KEY2, WK_UP] {
            let level = if id == WK_UP {
                PinState::High
            } else {
                PinState::Low
            };
            let button = Button::new(id, keys)
                .with_config(config)
                .with_pressed_level(level)
                .with_handler(&Console);
            if let Err(e) = buttons.register(button) {
                defmt::error!("key {}: {}", id, e);
            }
        }
        defmt::info!("scanning {} keys every {} ms", buttons.len(), period);

        loop {
            buttons.scan();
            Systick::delay(period.millis()).await;
        }
    }
}
