use core::cell::RefCell;

use embedded_hal::digital::{InputPin, PinState};

use super::Button;

/// Reads the raw level of a button.
///
/// The button `id` is passed in so one reader can serve a whole bank of
/// pins. Reads are infallible: a reader that can fail has to decide which
/// level a failed read stands for.
pub trait ReadLevel {
    fn read_level(&self, id: u8) -> PinState;
}

impl<F> ReadLevel for F
where
    F: Fn(u8) -> PinState,
{
    fn read_level(&self, id: u8) -> PinState {
        self(id)
    }
}

/// [`ReadLevel`] for a single `embedded-hal` input pin.
///
/// A failed read, or a read while the pin is borrowed elsewhere, reports
/// `fallback`. Pick the released level so a flaky pin cannot start a press.
#[derive(Debug)]
pub struct PinReader<P> {
    pin: RefCell<P>,
    fallback: PinState,
}

impl<P: InputPin> PinReader<P> {
    pub fn new(pin: P, fallback: PinState) -> Self {
        Self {
            pin: RefCell::new(pin),
            fallback,
        }
    }

    pub fn release(self) -> P {
        self.pin.into_inner()
    }
}

impl<P: InputPin> ReadLevel for PinReader<P> {
    fn read_level(&self, _id: u8) -> PinState {
        match self.pin.try_borrow_mut() {
            Ok(mut pin) => match pin.is_high() {
                Ok(high) => PinState::from(high),
                Err(_) => self.fallback,
            },
            Err(_) => self.fallback,
        }
    }
}

/// One bit per registered button, set while the button is pressed.
///
/// Bit `n` belongs to the `n`th registered button.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressedMask(u32);

impl PressedMask {
    pub const BITS: usize = u32::BITS as usize;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn contains(&self, position: usize) -> bool {
        position < Self::BITS && self.0 & (1 << position) != 0
    }

    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    const fn with(self, position: usize) -> Self {
        Self(self.0 | (1 << position))
    }
}

/// Reads every button once, in registry order, and normalizes the levels
/// against each button's pressed level.
pub(crate) fn sample(buttons: &[Button<'_>]) -> PressedMask {
    buttons
        .iter()
        .take(PressedMask::BITS)
        .enumerate()
        .fold(PressedMask::empty(), |mask, (position, button)| {
            if button.read_level() == button.pressed_level() {
                mask.with(position)
            } else {
                mask
            }
        })
}
