use core::fmt;

use bitfield_struct::bitfield;
use embedded_hal::digital::PinState;

use super::config::ButtonConfig;
use super::dispatch::EventHandler;
use super::event::{Event, Status};
use super::sampler::ReadLevel;

/// Status, latched event and pressed level of a button, packed in one byte.
#[bitfield(u8)]
struct Latch {
    #[bits(4)]
    event: Event,
    #[bits(2)]
    status: Status,
    pressed_high: bool,
    #[bits(1)]
    __: u8,
}

impl Latch {
    const fn idle(pressed_level: PinState) -> Self {
        Self::new()
            .with_event(Event::None)
            .with_status(Status::Idle)
            .with_pressed_high(matches!(pressed_level, PinState::High))
    }
}

/// One physical button: its configuration, capabilities and classification
/// state.
///
/// Built by the caller and handed over to
/// [`Buttons::register`](super::Buttons::register), which owns it from then on.
pub struct Button<'a> {
    id: u8,
    config: ButtonConfig,
    latch: Latch,
    pub(super) scan_cnt: u16,
    pub(super) click_cnt: u16,
    repeat: u16,
    read: &'a dyn ReadLevel,
    handler: Option<&'a dyn EventHandler>,
}

impl<'a> Button<'a> {
    /// Active-low button with the default thresholds and no event handler.
    pub fn new(id: u8, read: &'a dyn ReadLevel) -> Self {
        Self {
            id,
            config: ButtonConfig::default(),
            latch: Latch::idle(PinState::Low),
            scan_cnt: 0,
            click_cnt: 0,
            repeat: 0,
            read,
            handler: None,
        }
    }

    pub fn with_config(mut self, config: ButtonConfig) -> Self {
        self.config = config;
        self
    }

    /// Raw level that means "pressed" for this button.
    pub fn with_pressed_level(mut self, level: PinState) -> Self {
        self.latch.set_pressed_high(matches!(level, PinState::High));
        self
    }

    pub fn with_handler(mut self, handler: &'a dyn EventHandler) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub fn pressed_level(&self) -> PinState {
        PinState::from(self.latch.pressed_high())
    }

    /// Most recently emitted event. Reading does not clear it.
    pub fn event(&self) -> Event {
        self.latch.event()
    }

    pub fn status(&self) -> Status {
        self.latch.status()
    }

    /// Ticks spent in the current [`Status`].
    pub fn scan_count(&self) -> u16 {
        self.scan_cnt
    }

    /// Short presses accumulated by the click sequence in progress.
    pub fn click_count(&self) -> u16 {
        self.click_cnt
    }

    /// Length of the last completed click sequence.
    ///
    /// Useful with [`Event::RepeatClick`], which does not say how many clicks
    /// were made.
    pub fn repeat_count(&self) -> u16 {
        self.repeat
    }

    pub fn is_active(&self) -> bool {
        self.status() != Status::Idle
    }

    pub(super) fn read_level(&self) -> PinState {
        self.read.read_level(self.id)
    }

    pub(super) fn handler(&self) -> Option<&'a dyn EventHandler> {
        self.handler
    }

    pub(super) fn set_status(&mut self, status: Status) {
        self.latch.set_status(status);
    }

    pub(super) fn set_event(&mut self, event: Event) {
        self.latch.set_event(event);
    }

    pub(super) fn set_repeat(&mut self, clicks: u16) {
        self.repeat = clicks;
    }

    /// Clears everything the state machine owns, keeping configuration and
    /// capabilities.
    pub(super) fn reset(&mut self) {
        self.latch = Latch::idle(self.pressed_level());
        self.scan_cnt = 0;
        self.click_cnt = 0;
        self.repeat = 0;
    }
}

impl fmt::Debug for Button<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("id", &self.id)
            .field("pressed_level", &self.pressed_level())
            .field("status", &self.status())
            .field("event", &self.event())
            .field("scan_cnt", &self.scan_cnt)
            .field("click_cnt", &self.click_cnt)
            .field("config", &self.config)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_packs_into_one_byte() {
        assert_eq!(core::mem::size_of::<Latch>(), 1);

        let latch = Latch::idle(PinState::High)
            .with_event(Event::LongHoldUp)
            .with_status(Status::MultiClickWait);
        assert_eq!(latch.event(), Event::LongHoldUp);
        assert_eq!(latch.status(), Status::MultiClickWait);
        assert!(latch.pressed_high());
    }

    #[test]
    fn reset_keeps_configuration() {
        let read = |_: u8| PinState::Low;
        let mut button = Button::new(7, &read).with_pressed_level(PinState::High);
        button.set_status(Status::Down);
        button.set_event(Event::LongStart);
        button.scan_cnt = 151;
        button.click_cnt = 2;

        button.reset();

        assert_eq!(button.id(), 7);
        assert_eq!(button.pressed_level(), PinState::High);
        assert_eq!(button.status(), Status::Idle);
        assert_eq!(button.event(), Event::None);
        assert_eq!(button.scan_count(), 0);
        assert_eq!(button.click_count(), 0);
    }
}
