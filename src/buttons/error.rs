use core::fmt;

/// Why [`Buttons::register`](super::Buttons::register) turned a button away.
///
/// The registry is left untouched in both cases.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError {
    /// Every bit of the pressed mask is taken.
    CapacityExceeded {
        /// Maximum number of buttons
        capacity: usize,
    },
    /// A button with this id is already registered.
    AlreadyRegistered {
        id: u8,
    },
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::CapacityExceeded { capacity } => {
                write!(f, "Button capacity exceeded: at most {capacity} buttons")
            }
            RegisterError::AlreadyRegistered { id } => {
                write!(f, "Button {id} is already registered")
            }
        }
    }
}

impl core::error::Error for RegisterError {}
