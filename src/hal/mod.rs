//! Hardware Abstraction Layer
//!
//! The driver's view of the two collaborators it does not own: the MDIO
//! transport and the board's line-control subsystem.
//!
//! # Modules
//!
//! - [`gpio`]: Line control trait and the `OutputPin` adapter
//! - [`mdio`]: MDIO bus trait for PHY communication
//! - [`reset`]: Run-once reset sequence over the shared lines
//!
//! # Delay Integration
//!
//! All types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod gpio;
pub mod mdio;
pub mod reset;

// Re-export commonly used types
pub use gpio::{LineController, LineId, PinLines, PinLinesError, ResetLine};
pub use mdio::MdioBus;
pub use reset::{LatchState, ResetLatch, ResetOutcome, ResetSequencer};
