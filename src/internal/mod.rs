//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`cs_cell`]: Critical-section protected cell for shared driver state
//! - [`log`]: `defmt` / `log` forwarding macros
//! - [`phy_registers`]: IEEE 802.3 PHY register definitions
//! - [`tlk110_regs`]: TLK110 vendor-specific register definitions
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. Do not depend on any types
//! or functions in this module from external code. They are subject to change
//! without notice.

pub(crate) mod cs_cell;
pub(crate) mod log;
pub(crate) mod phy_registers;
pub(crate) mod tlk110_regs;
