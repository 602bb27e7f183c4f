//! Generic PHY Driver Trait
//!
//! This module defines the lifecycle interface the host framework drives,
//! based on IEEE 802.3 Clause 22 standard registers. Auto-negotiation, link
//! status and power management have generic default implementations; a
//! chip driver only has to supply initialization and interrupt handling.

use crate::driver::error::Result;
use crate::hal::mdio::MdioBus;

// =============================================================================
// Link Parameters
// =============================================================================

/// Link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    Mbps100,
}

/// Duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    Full,
}

/// Ethernet link status information
///
/// Contains the negotiated or forced link parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link speed
    pub speed: Speed,
    /// Duplex mode
    pub duplex: Duplex,
}

impl LinkStatus {
    /// Create a new link status
    pub const fn new(speed: Speed, duplex: Duplex) -> Self {
        Self { speed, duplex }
    }

    /// 100 Mbps Full Duplex
    pub const fn fast_full() -> Self {
        Self::new(Speed::Mbps100, Duplex::Full)
    }

    /// 100 Mbps Half Duplex
    pub const fn fast_half() -> Self {
        Self::new(Speed::Mbps100, Duplex::Half)
    }

    /// 10 Mbps Full Duplex
    pub const fn slow_full() -> Self {
        Self::new(Speed::Mbps10, Duplex::Full)
    }

    /// 10 Mbps Half Duplex
    pub const fn slow_half() -> Self {
        Self::new(Speed::Mbps10, Duplex::Half)
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Lifecycle callbacks for an Ethernet PHY
///
/// Methods without a default are chip specific. The defaults only touch
/// Clause 22 registers and work for any compliant PHY.
pub trait PhyDriver {
    /// Get the PHY address (0-31)
    fn address(&self) -> u8;

    /// Chip-specific initialization, run by the host's configure step
    fn config_init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Clear latched interrupt state
    fn ack_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Configure interrupt masking
    fn config_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Enable and restart auto-negotiation
    fn config_aneg<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::enable_auto_negotiation(mdio, self.address())
    }

    /// Current link parameters, `None` while the link is down
    fn read_status<M: MdioBus>(&self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        ieee802_3::read_status(mdio, self.address())
    }

    /// Enter power-down
    fn suspend<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::set_power_down(mdio, self.address(), true)
    }

    /// Leave power-down
    fn resume<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::set_power_down(mdio, self.address(), false)
    }

    /// Read the PHY identifier (OUI + model + revision)
    ///
    /// Returns a 32-bit value: `(PHYIDR1 << 16) | PHYIDR2`
    fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32> {
        ieee802_3::read_phy_id(mdio, self.address())
    }
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod ieee802_3 {
    use super::*;
    use crate::internal::phy_registers::{anar, bmcr, bmsr, phy_reg};

    /// Read BMSR and check link status bit
    pub fn is_link_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::LINK_STATUS) != 0)
    }

    /// Enable auto-negotiation and restart
    pub fn enable_auto_negotiation<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        mdio.write(
            phy_addr,
            phy_reg::BMCR,
            (bmcr_val | bmcr::AN_ENABLE | bmcr::AN_RESTART) & !bmcr::ISOLATE,
        )
    }

    /// Set or clear BMCR power-down
    pub fn set_power_down<M: MdioBus>(mdio: &mut M, phy_addr: u8, down: bool) -> Result<()> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        let bmcr_val = if down {
            bmcr_val | bmcr::POWER_DOWN
        } else {
            bmcr_val & !bmcr::POWER_DOWN
        };
        mdio.write(phy_addr, phy_reg::BMCR, bmcr_val)
    }

    /// Read PHY ID from PHYIDR1 and PHYIDR2
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
        let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
        let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
        Ok((id1 << 16) | id2)
    }

    /// Highest common mode of our advertisement and the partner's
    ///
    /// Falls back to 10 Mbps half duplex when nothing is shared.
    pub const fn resolve(advertised: u16, partner: u16) -> LinkStatus {
        let common = advertised & partner;
        if common & anar::TX_FD != 0 {
            LinkStatus::fast_full()
        } else if common & anar::TX_HD != 0 {
            LinkStatus::fast_half()
        } else if common & anar::T10_FD != 0 {
            LinkStatus::slow_full()
        } else {
            LinkStatus::slow_half()
        }
    }

    /// Get link status from BMCR (when AN is disabled)
    pub const fn forced_status(bmcr_val: u16) -> LinkStatus {
        let speed = if (bmcr_val & bmcr::SPEED_100) != 0 {
            Speed::Mbps100
        } else {
            Speed::Mbps10
        };

        let duplex = if (bmcr_val & bmcr::DUPLEX_FULL) != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };

        LinkStatus::new(speed, duplex)
    }

    /// Link state from BMSR, parameters from AN resolution or forced BMCR
    pub fn read_status<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<Option<LinkStatus>> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        if bmsr_val & bmsr::LINK_STATUS == 0 {
            return Ok(None);
        }

        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        if bmcr_val & bmcr::AN_ENABLE == 0 {
            return Ok(Some(forced_status(bmcr_val)));
        }
        if bmsr_val & bmsr::AN_COMPLETE == 0 {
            return Ok(None);
        }

        let advertised = mdio.read(phy_addr, phy_reg::ANAR)?;
        let partner = mdio.read(phy_addr, phy_reg::ANLPAR)?;
        Ok(Some(resolve(advertised, partner)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
