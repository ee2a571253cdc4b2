use super::event::Event;
use super::{Button, Buttons};

/// Receives the events of the buttons it is attached to.
///
/// Called inline from [`Buttons::scan`], after `button` finished its
/// transition and before the next button is processed, so keep it short.
/// `buttons` gives read access to every registered button, which is how
/// combinations across buttons are detected.
pub trait EventHandler {
    fn on_event(&self, button: &Button<'_>, buttons: &Buttons<'_>);
}

impl<F> EventHandler for F
where
    F: Fn(&Button<'_>, &Buttons<'_>),
{
    fn on_event(&self, button: &Button<'_>, buttons: &Buttons<'_>) {
        self(button, buttons)
    }
}

impl Buttons<'_> {
    pub(super) fn dispatch(&self, position: usize) {
        let Some(button) = self.buttons.get(position) else {
            return;
        };
        let event = button.event();
        if event == Event::None {
            return;
        }
        trace!("button {}: {}", button.id(), event);
        if let Some(handler) = button.handler() {
            handler.on_event(button, self);
        }
    }
}
