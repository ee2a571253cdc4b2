use super::event::{Event, Status};
use super::Button;

impl Button<'_> {
    /// Advances the button by one tick.
    ///
    /// Returns the event set during this tick, if any. Clearing the event to
    /// [`Event::None`] while idle is not reported.
    pub(super) fn step(&mut self, pressed: bool) -> Option<Event> {
        let status = self.status();
        if status != Status::Idle {
            self.scan_cnt = self.scan_cnt.saturating_add(1);
        }

        match status {
            Status::Idle => {
                if pressed {
                    self.scan_cnt = 0;
                    self.click_cnt = 0;
                    self.set_status(Status::Down);
                    Some(self.emit(Event::PressDown))
                } else {
                    self.set_event(Event::None);
                    None
                }
            }
            Status::Down if pressed => {
                if self.click_cnt > 0 {
                    self.held_after_click()
                } else {
                    self.held()
                }
            }
            Status::Down => self.released(),
            Status::MultiClickWait => {
                if pressed {
                    self.set_status(Status::Down);
                    self.scan_cnt = 0;
                    None
                } else if self.scan_cnt > self.config().max_multi_click_interval_ticks {
                    let event = self.finish_clicks();
                    self.set_status(Status::Idle);
                    Some(event)
                } else {
                    None
                }
            }
        }
    }

    /// First continuous hold. Each threshold event fires once, the highest
    /// threshold reached wins.
    fn held(&mut self) -> Option<Event> {
        let config = *self.config();
        let event = if self.scan_cnt >= config.long_hold_ticks {
            Event::LongHold
        } else if self.scan_cnt >= config.long_press_ticks {
            Event::LongStart
        } else if self.scan_cnt >= config.short_press_ticks {
            Event::ShortStart
        } else {
            return None;
        };

        if self.event() == event {
            None
        } else {
            Some(self.emit(event))
        }
    }

    /// Press that follows one or more quick clicks. Once it outlasts the
    /// multi-click window the pending clicks are reported and the press
    /// starts over as a fresh one.
    fn held_after_click(&mut self) -> Option<Event> {
        if self.scan_cnt <= self.config().max_multi_click_interval_ticks {
            return None;
        }
        let event = self.finish_clicks();
        self.set_status(Status::Down);
        self.scan_cnt = 0;
        Some(event)
    }

    fn released(&mut self) -> Option<Event> {
        let config = *self.config();
        let event = if self.scan_cnt >= config.long_hold_ticks {
            Event::LongHoldUp
        } else if self.scan_cnt >= config.long_press_ticks {
            Event::LongUp
        } else if self.scan_cnt >= config.short_press_ticks {
            Event::ShortUp
        } else {
            self.set_status(Status::MultiClickWait);
            self.click_cnt = self.click_cnt.saturating_add(1);
            return None;
        };

        self.set_status(Status::Idle);
        Some(self.emit(event))
    }

    /// Emits the terminal event of the pending click sequence and clears it.
    fn finish_clicks(&mut self) -> Event {
        let clicks = self.click_cnt;
        self.set_repeat(clicks);
        self.click_cnt = 0;
        self.emit(Event::from_clicks(clicks))
    }

    fn emit(&mut self, event: Event) -> Event {
        self.set_event(event);
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::ButtonConfig;
    use embedded_hal::digital::PinState;

    const CONFIG: ButtonConfig = ButtonConfig {
        debounce_ticks: 1,
        short_press_ticks: 3,
        long_press_ticks: 6,
        long_hold_ticks: 9,
        max_multi_click_interval_ticks: 2,
    };

    fn idle(_: u8) -> PinState {
        PinState::High
    }

    /// Feeds `ticks` samples of the same level, collecting what was emitted.
    fn run(button: &mut Button<'_>, pressed: bool, ticks: usize) -> heapless::Vec<Event, 32> {
        let mut events = heapless::Vec::new();
        (0..ticks).for_each(|_| {
            if let Some(event) = button.step(pressed) {
                events.push(event).unwrap();
            }
        });
        events
    }

    #[test]
    fn idle_release_clears_event() {
        let mut button = Button::new(0, &idle).with_config(CONFIG);
        assert_eq!(run(&mut button, true, 1), [Event::PressDown]);
        assert!(run(&mut button, false, 1).is_empty());
        assert_eq!(button.status(), Status::MultiClickWait);
        run(&mut button, false, 2);
        assert_eq!(button.event(), Event::Click);
        assert_eq!(button.status(), Status::Idle);

        assert!(run(&mut button, false, 1).is_empty());
        assert_eq!(button.event(), Event::None);
    }

    #[test]
    fn hold_walks_through_thresholds_once() {
        let mut button = Button::new(0, &idle).with_config(CONFIG);
        let events = run(&mut button, true, 20);
        assert_eq!(
            events,
            [
                Event::PressDown,
                Event::ShortStart,
                Event::LongStart,
                Event::LongHold
            ]
        );
        assert_eq!(run(&mut button, false, 1), [Event::LongHoldUp]);
        assert_eq!(button.status(), Status::Idle);
    }

    #[test]
    fn release_classifies_by_duration() {
        let mut button = Button::new(0, &idle).with_config(CONFIG);
        // PressDown, then scan_cnt counts 1..=3
        run(&mut button, true, 4);
        assert_eq!(button.event(), Event::ShortStart);
        assert_eq!(run(&mut button, false, 1), [Event::ShortUp]);

        run(&mut button, true, 7);
        assert_eq!(run(&mut button, false, 1), [Event::LongUp]);
    }

    #[test]
    fn threshold_boundary_on_release() {
        let mut button = Button::new(0, &idle).with_config(CONFIG);
        // scan_cnt reaches 2 while held, the release tick bumps it to 3
        run(&mut button, true, 3);
        assert_eq!(run(&mut button, false, 1), [Event::ShortUp]);
        assert_eq!(button.click_count(), 0);
    }

    #[test]
    fn overlong_second_press_reports_pending_click() {
        let mut button = Button::new(0, &idle).with_config(CONFIG);
        run(&mut button, true, 1);
        run(&mut button, false, 1);
        assert_eq!(button.click_count(), 1);

        // back to Down with the click still pending
        assert!(run(&mut button, true, 1).is_empty());
        assert_eq!(button.status(), Status::Down);
        let events = run(&mut button, true, 3);
        assert_eq!(events, [Event::Click]);
        assert_eq!(button.click_count(), 0);
        assert_eq!(button.scan_count(), 0);
        assert_eq!(button.status(), Status::Down);

        // the press goes on as a fresh one
        let events = run(&mut button, true, 3);
        assert_eq!(events, [Event::ShortStart]);
    }

    #[test]
    fn repeat_click_keeps_count() {
        let mut button = Button::new(0, &idle).with_config(CONFIG);
        (0..5).for_each(|_| {
            run(&mut button, true, 1);
            run(&mut button, false, 1);
        });
        assert_eq!(button.click_count(), 5);
        assert_eq!(run(&mut button, false, 3), [Event::RepeatClick]);
        assert_eq!(button.repeat_count(), 5);
        assert_eq!(button.click_count(), 0);
    }

    #[test]
    fn scan_count_saturates() {
        let mut button = Button::new(0, &idle).with_config(CONFIG);
        button.step(true);
        button.scan_cnt = u16::MAX - 1;
        button.step(true);
        button.step(true);
        assert_eq!(button.scan_count(), u16::MAX);
        assert_eq!(button.event(), Event::LongHold);
        assert_eq!(button.step(true), None);
        assert_eq!(button.step(false), Some(Event::LongHoldUp));
    }
}
