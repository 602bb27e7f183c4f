//! Error types for the TLK110 PHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`BusError`]: MDIO transport failures
//! - [`LineError`]: Shared reset/control line failures
//! - [`ParseError`]: Debug register command text that did not parse
//! - [`DeviceError`]: Per-device state slots and debug selection
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods.

use crate::hal::gpio::ResetLine;

// =============================================================================
// Bus Errors
// =============================================================================

/// MDIO transport errors
///
/// Reported by [`MdioBus`](crate::hal::mdio::MdioBus) implementations and
/// propagated unchanged by the register access layer. Never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Register read did not complete
    ReadFailed,
    /// Register write did not complete
    WriteFailed,
    /// Bus did not become idle in time
    Timeout,
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// Register address outside the direct (Clause 22) space
    InvalidRegister,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BusError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BusError::ReadFailed => "MDIO read failed",
            BusError::WriteFailed => "MDIO write failed",
            BusError::Timeout => "MDIO timeout",
            BusError::InvalidPhyAddress => "invalid PHY address",
            BusError::InvalidRegister => "invalid direct register address",
        }
    }
}

// =============================================================================
// Line Errors
// =============================================================================

/// Shared hardware line errors
///
/// Raised while the reset sequencer acquires and drives the board lines.
/// Any of these triggers a reverse-order release of the lines acquired so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line could not be requested (already owned or unknown)
    RequestFailed(ResetLine),
    /// Line could not be configured as an output
    DirectionFailed(ResetLine),
    /// Line level could not be changed
    DriveFailed(ResetLine),
    /// Another attach is running the reset sequence right now
    SequenceInProgress,
}

impl core::fmt::Display for LineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LineError::RequestFailed(line)
            | LineError::DirectionFailed(line)
            | LineError::DriveFailed(line) => write!(f, "{} ({})", self.as_str(), line.as_str()),
            LineError::SequenceInProgress => f.write_str(self.as_str()),
        }
    }
}

impl LineError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineError::RequestFailed(_) => "could not request line",
            LineError::DirectionFailed(_) => "could not set line as output",
            LineError::DriveFailed(_) => "could not drive line",
            LineError::SequenceInProgress => "reset sequence already in progress",
        }
    }

    /// The line that failed, if the error concerns a single line
    #[must_use]
    pub const fn line(&self) -> Option<ResetLine> {
        match self {
            LineError::RequestFailed(line)
            | LineError::DirectionFailed(line)
            | LineError::DriveFailed(line) => Some(*line),
            LineError::SequenceInProgress => None,
        }
    }
}

// =============================================================================
// Parse Errors
// =============================================================================

/// Debug register command parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// No tokens in the input
    Empty,
    /// First token is not a hexadecimal number
    InvalidHex,
    /// Register token does not fit a 16-bit register address
    RegisterOutOfRange,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ParseError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParseError::Empty => "empty register command",
            ParseError::InvalidHex => "invalid hexadecimal number",
            ParseError::RegisterOutOfRange => "register address out of range",
        }
    }
}

// =============================================================================
// Device Errors
// =============================================================================

/// Per-device state errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// Every device state slot is in use
    NoFreeSlot,
    /// Handle does not refer to an attached device
    InvalidHandle,
    /// No debug register has been selected yet
    NoRegisterSelected,
}

impl core::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DeviceError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DeviceError::NoFreeSlot => "no free device slot",
            DeviceError::InvalidHandle => "invalid device handle",
            DeviceError::NoRegisterSelected => "no debug register selected",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Bus(BusError::Timeout)) => { /* ... */ }
///     Err(Error::Line(LineError::RequestFailed(line))) => { /* ... */ }
///     Err(Error::Device(DeviceError::NoFreeSlot)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// MDIO transport error
    Bus(BusError),
    /// Shared line error
    Line(LineError),
    /// Debug command parse error
    Parse(ParseError),
    /// Device state error
    Device(DeviceError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus: {}", e.as_str()),
            Error::Line(e) => write!(f, "line: {e}"),
            Error::Parse(e) => write!(f, "parse: {}", e.as_str()),
            Error::Device(e) => write!(f, "device: {}", e.as_str()),
        }
    }
}

/// Errno-style status values used by [`Error::status_code`]
pub mod errno {
    /// I/O error
    pub const EIO: i32 = 5;
    /// Out of memory
    pub const ENOMEM: i32 = 12;
    /// Resource busy
    pub const EBUSY: i32 = 16;
    /// No such device
    pub const ENODEV: i32 = 19;
    /// Invalid argument
    pub const EINVAL: i32 = 22;
}

impl Error {
    /// Negative status code for hosts that report numeric results
    #[must_use]
    pub const fn status_code(&self) -> i32 {
        match self {
            Error::Bus(BusError::InvalidPhyAddress | BusError::InvalidRegister) => -errno::EINVAL,
            Error::Bus(_) => -errno::EIO,
            Error::Line(_) => -errno::EBUSY,
            Error::Parse(_) => -errno::EINVAL,
            Error::Device(DeviceError::NoFreeSlot) => -errno::ENOMEM,
            Error::Device(_) => -errno::ENODEV,
        }
    }
}

// From impls for automatic conversion
impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Error::Bus(e)
    }
}

impl From<LineError> for Error {
    fn from(e: LineError) -> Self {
        Error::Line(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<DeviceError> for Error {
    fn from(e: DeviceError) -> Self {
        Error::Device(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for MDIO transport operations
pub type BusResult<T> = core::result::Result<T, BusError>;

/// Result type alias for line operations
pub type LineResult<T> = core::result::Result<T, LineError>;

// =============================================================================
// Unit Tests
// =============================================================================
