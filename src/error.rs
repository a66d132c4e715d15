use std::error;
use std::fmt;

/// An Error enum used throughout the crate to communicate details of runtime errors
/// that have occurred.
///
/// Instances of [ChipError] are bubbled-up to the hosting application through the public
/// API methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChipError {
    /// An attempt was made to read or write an address outside the addressable range
    MemoryOutOfBounds { address: u16 },
    /// An attempt was made to read or write a framebuffer coordinate outside 64x32
    GraphicsOutOfBounds { x: u8, y: u8 },
    /// A ROM was loaded that would not fit below the top of addressable memory
    RomTooLarge { size: usize },
    /// An unrecognised opcode was fetched at the given program counter
    InvalidOpcode { opcode: u16, pc: u16 },
}

impl error::Error for ChipError {}

impl fmt::Display for ChipError {
    /// Returns a textual description of each enum variant for display purposes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChipError::MemoryOutOfBounds { address } => {
                write!(f, "invalid memory address {:#X} was accessed", address)
            }
            ChipError::GraphicsOutOfBounds { x, y } => {
                write!(f, "invalid framebuffer coordinate ({}, {}) was accessed", x, y)
            }
            ChipError::RomTooLarge { size } => {
                write!(f, "a ROM of {} bytes is too large to load", size)
            }
            ChipError::InvalidOpcode { opcode, pc } => {
                write!(
                    f,
                    "an unrecognised opcode {:#X} was decoded at address {:#X}",
                    opcode, pc
                )
            }
        }
    }
}
