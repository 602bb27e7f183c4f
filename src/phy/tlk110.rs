//! TI TLK110 PHY Driver
//!
//! The TLK110 is a 10/100 Ethernet PHY with industrial-temperature support.
//! Only registers 0x00-0x1F are directly addressable; everything above goes
//! through the REGCR/ADDAR indirect access handshake.
//!
//! # Indirect Access
//!
//! Every extended access is four strictly ordered MDIO transactions:
//!
//! 1. REGCR <- DEVAD | address function
//! 2. ADDAR <- extended register address
//! 3. REGCR <- DEVAD | data function
//! 4. ADDAR -> value (read) or ADDAR <- value (write)
//!
//! The first failing transaction ends the access and its error is returned.
//! With [`IndirectRecovery::RestoreAddressMode`] a single best-effort write
//! puts REGCR back into address mode before returning.
//!
//! # Initialization
//!
//! [`PhyDriver::config_init`] applies the calibration table
//! ([`CALIBRATION_PATCHES`]) with read-modify-write cycles, then
//! acknowledges any interrupt latched during start-up. The last table entry
//! turns on automatic MDI/MDIX.

use crate::driver::config::{CalibrationPolicy, IndirectRecovery, Tlk110Config};
use crate::driver::error::Result;
use crate::hal::mdio::MdioBus;
use crate::internal::log::{phy_debug, phy_warn};
use crate::internal::tlk110_regs::{PHY_REG_MASK, phy_id, reg, regcr};

pub use crate::internal::tlk110_regs::{CALIBRATION_PATCHES, CalibrationPatch};

use super::generic::PhyDriver;

// =============================================================================
// Constants
// =============================================================================

/// TLK110 PHY identifier (revision bits included)
pub const TLK110_PHY_ID: u32 = phy_id::ID;

/// Mask applied before comparing identifiers
pub const TLK110_PHY_ID_MASK: u32 = phy_id::MASK;

// =============================================================================
// Interrupt Status
// =============================================================================

/// Contents of the two read-to-clear interrupt status registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    /// MISR1 at the time of the read
    pub misr1: u16,
    /// MISR2 at the time of the read
    pub misr2: u16,
}

// =============================================================================
// TLK110 Driver
// =============================================================================

/// TLK110 PHY driver
///
/// Holds no register state of its own; every method talks to the PHY
/// through the [`MdioBus`] it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tlk110 {
    addr: u8,
    calibration: CalibrationPolicy,
    indirect_recovery: IndirectRecovery,
}

impl Tlk110 {
    /// Create a driver for the PHY at `addr` with default policies
    pub const fn new(addr: u8) -> Self {
        Self {
            addr,
            calibration: CalibrationPolicy::BestEffort,
            indirect_recovery: IndirectRecovery::Leave,
        }
    }

    /// Create a driver taking its policies from `config`
    pub const fn from_config(addr: u8, config: &Tlk110Config) -> Self {
        Self {
            addr,
            calibration: config.calibration,
            indirect_recovery: config.indirect_recovery,
        }
    }

    /// Set the calibration failure policy
    #[must_use]
    pub const fn with_calibration(mut self, policy: CalibrationPolicy) -> Self {
        self.calibration = policy;
        self
    }

    /// Set the indirect access failure policy
    #[must_use]
    pub const fn with_indirect_recovery(mut self, recovery: IndirectRecovery) -> Self {
        self.indirect_recovery = recovery;
        self
    }

    /// Whether `id` identifies a TLK110 of any revision
    pub const fn matches_id(id: u32) -> bool {
        id & TLK110_PHY_ID_MASK == TLK110_PHY_ID & TLK110_PHY_ID_MASK
    }

    /// Read PHYIDR1/2 and check them against the TLK110 identifier
    pub fn verify_id<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        Ok(Self::matches_id(self.phy_id(mdio)?))
    }

    /// Silicon revision (low four bits of the identifier)
    pub fn revision<M: MdioBus>(&self, mdio: &mut M) -> Result<u8> {
        Ok((self.phy_id(mdio)? & !TLK110_PHY_ID_MASK) as u8)
    }

    // =========================================================================
    // Register Access
    // =========================================================================

    /// Read a direct or extended register
    pub fn read_register<M: MdioBus>(&self, mdio: &mut M, reg_addr: u16) -> Result<u16> {
        if reg_addr > PHY_REG_MASK {
            self.extended(mdio, reg_addr, |mdio, phy| mdio.read(phy, reg::ADDAR))
        } else {
            mdio.read(self.addr, reg_addr as u8)
        }
    }

    /// Write a direct or extended register
    pub fn write_register<M: MdioBus>(
        &self,
        mdio: &mut M,
        reg_addr: u16,
        value: u16,
    ) -> Result<()> {
        if reg_addr > PHY_REG_MASK {
            self.extended(mdio, reg_addr, |mdio, phy| mdio.write(phy, reg::ADDAR, value))
        } else {
            mdio.write(self.addr, reg_addr as u8, value)
        }
    }

    fn extended<M, T, F>(&self, mdio: &mut M, reg_addr: u16, transfer: F) -> Result<T>
    where
        M: MdioBus,
        F: FnOnce(&mut M, u8) -> Result<T>,
    {
        mdio.write(self.addr, reg::REGCR, regcr::SELECT_ADDRESS)?;

        let result = self
            .select_data(mdio, reg_addr)
            .and_then(|()| transfer(mdio, self.addr));

        if result.is_err() && self.indirect_recovery == IndirectRecovery::RestoreAddressMode {
            phy_debug!("tlk110@{}: restoring REGCR after failed access", self.addr);
            let _ = mdio.write(self.addr, reg::REGCR, regcr::SELECT_ADDRESS);
        }
        result
    }

    fn select_data<M: MdioBus>(&self, mdio: &mut M, reg_addr: u16) -> Result<()> {
        mdio.write(self.addr, reg::ADDAR, reg_addr)?;
        mdio.write(self.addr, reg::REGCR, regcr::SELECT_DATA)
    }

    // =========================================================================
    // Interrupts
    // =========================================================================

    /// Read (and thereby clear) MISR1 and MISR2
    ///
    /// MISR2 is not read when the MISR1 read fails.
    pub fn read_interrupt_status<M: MdioBus>(&self, mdio: &mut M) -> Result<InterruptStatus> {
        let misr1 = self.read_register(mdio, reg::MISR1.into())?;
        let misr2 = self.read_register(mdio, reg::MISR2.into())?;
        Ok(InterruptStatus { misr1, misr2 })
    }

    // =========================================================================
    // Calibration
    // =========================================================================

    /// OR one patch mask into its register
    ///
    /// A failed read skips the write.
    pub fn apply_patch<M: MdioBus>(&self, mdio: &mut M, patch: &CalibrationPatch) -> Result<()> {
        let value = self.read_register(mdio, patch.reg)?;
        self.write_register(mdio, patch.reg, value | patch.mask)
    }

    /// Apply the whole calibration table under the configured policy
    pub fn calibrate<M: MdioBus>(&self, mdio: &mut M) -> Result<()> {
        for patch in &CALIBRATION_PATCHES {
            if let Err(e) = self.apply_patch(mdio, patch) {
                match self.calibration {
                    CalibrationPolicy::FailFast => return Err(e),
                    CalibrationPolicy::BestEffort => {
                        phy_warn!(
                            "tlk110@{}: calibration of {:#x} failed: {:?}",
                            self.addr,
                            patch.reg,
                            e
                        );
                    }
                }
            }
        }
        Ok(())
    }
}

impl PhyDriver for Tlk110 {
    fn address(&self) -> u8 {
        self.addr
    }

    fn config_init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.calibrate(mdio)?;
        self.ack_interrupt(mdio)
    }

    fn ack_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.read_interrupt_status(mdio).map(|_| ())
    }

    fn config_interrupt<M: MdioBus>(&mut self, _mdio: &mut M) -> Result<()> {
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
