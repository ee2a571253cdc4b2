//! Button registry and scan loop.
//!
//! [`Buttons`] owns every registered [`Button`]. Each call to
//! [`Buttons::scan`] is one tick: all buttons are sampled into a
//! [`PressedMask`], then every button's state machine advances by one step in
//! registration order, and the handler of each button that emitted an event is
//! called right away.

use heapless::Vec;

mod button;
pub mod config;
mod dispatch;
mod error;
pub mod event;
mod machine;
pub mod sampler;

pub use button::Button;
pub use config::{ButtonConfig, ScanRate};
pub use dispatch::EventHandler;
pub use error::RegisterError;
pub use event::{Event, Status};
pub use sampler::{PinReader, PressedMask, ReadLevel};

/// Upper bound on registered buttons, one per bit of the [`PressedMask`].
pub const MAX_BUTTONS: usize = PressedMask::BITS;

/// Ordered set of buttons, scanned together.
///
/// A button's registration order is its bit position in the pressed mask and
/// the order in which its events are dispatched.
pub struct Buttons<'a> {
    buttons: Vec<Button<'a>, MAX_BUTTONS>,
    pressed: PressedMask,
}

impl<'a> Buttons<'a> {
    pub const fn new() -> Self {
        Self {
            buttons: Vec::new(),
            pressed: PressedMask::empty(),
        }
    }

    /// Adopts `button`, giving it the next free bit position.
    ///
    /// The state machine fields of the button are reset; configuration and
    /// capabilities are kept as given. Returns the number of registered
    /// buttons.
    pub fn register(&mut self, mut button: Button<'a>) -> Result<usize, RegisterError> {
        let id = button.id();
        if self.buttons.iter().any(|b| b.id() == id) {
            warn!("button {} already registered", id);
            return Err(RegisterError::AlreadyRegistered { id });
        }

        button.reset();
        if self.buttons.push(button).is_err() {
            warn!("button {} rejected, registry full", id);
            return Err(RegisterError::CapacityExceeded {
                capacity: MAX_BUTTONS,
            });
        }
        debug!("button {} registered at bit {}", id, self.buttons.len() - 1);
        Ok(self.buttons.len())
    }

    /// Runs one scan cycle.
    ///
    /// Returns how many buttons are not idle afterwards. When it is zero
    /// nothing is in progress and the caller may slow down or stop scanning
    /// until the next press.
    pub fn scan(&mut self) -> usize {
        self.pressed = sampler::sample(&self.buttons);

        let mut active = 0;
        for position in 0..self.buttons.len() {
            let pressed = self.pressed.contains(position);
            if self.buttons[position].step(pressed).is_some() {
                self.dispatch(position);
            }
            if self.buttons[position].is_active() {
                active += 1;
            }
        }
        active
    }

    /// Latched event of the button with `id`, `None` if it is not registered.
    pub fn read_event(&self, id: u8) -> Option<Event> {
        self.get(id).map(Button::event)
    }

    pub fn get(&self, id: u8) -> Option<&Button<'a>> {
        self.buttons.iter().find(|b| b.id() == id)
    }

    /// Button at bit `position` of the pressed mask.
    pub fn at(&self, position: usize) -> Option<&Button<'a>> {
        self.buttons.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button<'a>> {
        self.buttons.iter()
    }

    /// Normalized sample taken by the last [`scan`](Self::scan).
    pub fn pressed(&self) -> PressedMask {
        self.pressed
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

impl Default for Buttons<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Buttons<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Buttons")
            .field("buttons", &self.buttons)
            .field("pressed", &self.pressed)
            .finish()
    }
}
