//! Tick driven button event classification.
//!
//! Buttons are sampled at a fixed rate by calling [`Buttons::scan`] from a
//! timer task or loop. Each scan turns the raw pin levels into press, click,
//! multi-click, short press, long press and long hold events without timers
//! or interrupts per button and without allocating.
//!
//! ```
//! use core::cell::Cell;
//! use embedded_hal::digital::PinState;
//! use tick_buttons::{Button, Buttons, Event};
//!
//! // active low button, released
//! let level = Cell::new(PinState::High);
//! let read = |_id: u8| level.get();
//!
//! let mut buttons = Buttons::new();
//! buttons.register(Button::new(0, &read)).unwrap();
//!
//! level.set(PinState::Low);
//! assert_eq!(buttons.scan(), 1);
//! assert_eq!(buttons.read_event(0), Some(Event::PressDown));
//!
//! // release after a few ticks, then let the multi-click window run out
//! level.set(PinState::High);
//! (0..20).for_each(|_| {
//!     buttons.scan();
//! });
//! assert_eq!(buttons.get(0).unwrap().repeat_count(), 1);
//! ```
#![no_std]

mod fmt;

pub mod buttons;

pub use buttons::{
    Button, ButtonConfig, Buttons, Event, EventHandler, PinReader, PressedMask, ReadLevel,
    RegisterError, ScanRate, Status, MAX_BUTTONS,
};
