//! Core driver components for the TLK110 PHY.
//!
//! - [`config`] - Configuration types and builder patterns
//! - [`controller`] - Module-level controller and host lifecycle
//! - [`device`] - Per-device state slots
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```ignore
//! use ph_tlk110::driver::{CalibrationPolicy, Tlk110Config};
//!
//! let config = Tlk110Config::new()
//!     .with_calibration(CalibrationPolicy::FailFast);
//! ```

// Submodules
pub mod config;
pub mod controller;
pub mod device;
pub mod error;

// Re-exports for convenience
pub use config::{
    CalibrationPolicy, IndirectRecovery, LineSpec, ResetLines, ResetTiming, Tlk110Config,
};
pub use controller::{Tlk110Controller, Tlk110ControllerDefault};
pub use device::{DeviceHandle, DeviceState, DeviceTable};
pub use error::{
    BusError, BusResult, DeviceError, Error, LineError, LineResult, ParseError, Result,
};
