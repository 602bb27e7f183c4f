//! MDIO (Management Data Input/Output) transport
//!
//! The TLK110 driver never talks to MDIO hardware itself. It consumes the
//! [`MdioBus`] trait, which the host MAC driver (or a bit-banged SMI
//! implementation) provides. Only Clause 22 register addresses (0-31) are
//! ever passed to the transport; extended registers go through the
//! REGCR/ADDAR handshake in [`crate::phy::tlk110`].

use crate::driver::error::{BusError, Result};

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// Implementations report failures as [`BusError`] wrapped in
/// [`Error::Bus`](crate::Error::Bus). Values are always 16 bits wide.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    #[inline]
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    #[inline]
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }
}

/// Validate a PHY address before it is handed to a transport
pub const fn check_phy_addr(phy_addr: u8) -> core::result::Result<u8, BusError> {
    if phy_addr > MAX_PHY_ADDR {
        Err(BusError::InvalidPhyAddress)
    } else {
        Ok(phy_addr)
    }
}

/// Narrow a register address to the Clause 22 field, rejecting extended ones
pub const fn direct_reg(reg_addr: u16) -> core::result::Result<u8, BusError> {
    if reg_addr > MAX_REG_ADDR as u16 {
        Err(BusError::InvalidRegister)
    } else {
        Ok(reg_addr as u8)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
