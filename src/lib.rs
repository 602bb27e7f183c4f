//! TI TLK110 Ethernet PHY Driver
//!
//! A `no_std`, `no_alloc` Rust driver for the Texas Instruments TLK110
//! 10/100 Ethernet PHY.
//!
//! The driver covers the parts of the TLK110 that a generic Clause 22 PHY
//! driver cannot handle on its own: the extended register space, the board
//! reset sequence shared by several PHYs, the start-up calibration and the
//! read-to-clear interrupt status registers.
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **Driver Layer** ([`driver`]): [`Tlk110Controller`] owns the shared
//!    state and exposes the host lifecycle (attach, configure, interrupts,
//!    debug register access)
//! 2. **PHY Layer** ([`phy`]): [`Tlk110`] register access, calibration and
//!    interrupt acknowledge, plus the generic [`PhyDriver`] defaults
//! 3. **HAL Layer** ([`hal`]): MDIO transport and line control traits, and
//!    the run-once reset sequencer
//!
//! ## Register Spaces
//!
//! - **Direct** (0x00-0x1F): one MDIO transaction
//! - **Extended** (above 0x1F): four MDIO transactions through REGCR/ADDAR
//!
//! ## Shared Lines
//!
//! The reset, MII control, FET enable and MII mux lines are wired to every
//! PHY on the board. The first attach acquires them and pulses reset; later
//! attaches find the latch set and leave the lines alone. If the sequence
//! fails, the lines acquired so far are released in reverse order and the
//! next attach tries again.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and logging
//! - `log`: Log through the `log` facade
//!
//! # Example
//!
//! ```ignore
//! use ph_tlk110::{PinLines, Tlk110Config, Tlk110ControllerDefault};
//! use ph_tlk110::boards::am335x_ice::Am335xIce;
//!
//! let config = Tlk110Config::new();
//! let lines = PinLines::new(config.reset_lines, rst_pin, ctl_pin, fet_pin, mux_pin);
//! let mut tlk = Tlk110ControllerDefault::new(config, lines, delay);
//!
//! let port0 = tlk.attach(Am335xIce::PHY0_ADDR)?;
//! let port1 = tlk.attach(Am335xIce::PHY1_ADDR)?;
//!
//! tlk.configure(port0, &mut mdio)?;
//! tlk.configure(port1, &mut mdio)?;
//!
//! // on a PHY interrupt
//! tlk.ack_interrupt(port0, &mut mdio)?;
//!
//! // poke an extended register by hand
//! tlk.debug_store(port0, &mut mdio, "a3")?;
//! let readout = tlk.debug_show(port0, &mut mdio)?;
//! ```
//!
//! # Concurrency
//!
//! The reset latch and the debug selection sit behind `critical-section`, so
//! attach paths running from different contexts cannot both run the reset
//! sequence. Provide a `critical-section` implementation from your HAL.

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

pub mod boards;
pub mod driver;
pub mod hal;
pub mod phy;

// Internal implementation details
mod internal;

#[cfg(test)]
mod test_utils;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use driver::config::{
    CalibrationPolicy, IndirectRecovery, LineSpec, ResetLines, ResetTiming, Tlk110Config,
};
pub use driver::controller::{Tlk110Controller, Tlk110ControllerDefault};
pub use driver::device::{DeviceHandle, DeviceState, DeviceTable};
pub use driver::error::{
    BusError, BusResult, DeviceError, Error, LineError, LineResult, ParseError, Result,
};
pub use hal::gpio::{LineController, LineId, PinLines, PinLinesError, ResetLine};
pub use hal::mdio::MdioBus;
pub use hal::reset::{ResetLatch, ResetOutcome, ResetSequencer};
pub use phy::{
    DebugCommand, DebugSelector, Duplex, InterruptStatus, LinkStatus, PhyDriver, RegisterReadout,
    Speed, TLK110_PHY_ID, Tlk110,
};
