/// Classification result latched on a button after a scan cycle.
///
/// The discriminants are the packed 4 bit representation stored in each
/// button's latch byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Event {
    PressDown = 0,
    Click = 1,
    DoubleClick = 2,
    /// Three or more clicks in one sequence, see
    /// [`Button::repeat_count`](super::Button::repeat_count).
    RepeatClick = 3,
    ShortStart = 4,
    ShortUp = 5,
    LongStart = 6,
    LongUp = 7,
    LongHold = 8,
    LongHoldUp = 9,
    #[default]
    None = 10,
}

impl Event {
    /// Terminal event of a multi-click sequence with `clicks` completed clicks.
    pub const fn from_clicks(clicks: u16) -> Self {
        match clicks {
            0 | 1 => Self::Click,
            2 => Self::DoubleClick,
            _ => Self::RepeatClick,
        }
    }

    pub const fn is_click(self) -> bool {
        matches!(self, Self::Click | Self::DoubleClick | Self::RepeatClick)
    }

    pub(crate) const fn into_bits(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::PressDown,
            1 => Self::Click,
            2 => Self::DoubleClick,
            3 => Self::RepeatClick,
            4 => Self::ShortStart,
            5 => Self::ShortUp,
            6 => Self::LongStart,
            7 => Self::LongUp,
            8 => Self::LongHold,
            9 => Self::LongHoldUp,
            _ => Self::None,
        }
    }
}

/// Per button stage of the event state machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Status {
    /// Released and not part of a click sequence.
    #[default]
    Idle = 0,
    /// Held down.
    Down = 1,
    /// Released after a short press, waiting to see whether another click follows.
    MultiClickWait = 2,
}

impl Status {
    pub(crate) const fn into_bits(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Down,
            2 => Self::MultiClickWait,
            _ => Self::Idle,
        }
    }
}
