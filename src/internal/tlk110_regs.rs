//! TLK110 Vendor-Specific Register Definitions
//!
//! This module contains the internal register definitions for the
//! Texas Instruments TLK110 10/100 Ethernet PHY.
//!
//! # Module Organization
//!
//! - `phy_id`: PHY identifier constants
//! - `reg`: Direct register addresses (0x00-0x1F)
//! - `regcr`: Indirect access control register fields
//! - `ext`: Extended register addresses (reached through REGCR/ADDAR)
//! - `phycr`: PHY Control Register bits
//! - `CALIBRATION_PATCHES`: read-modify-write table applied at config init
//!
//! # References
//!
//! - TLK110 Datasheet (SLLS901)
//! - IEEE 802.3 Ethernet Standard

#![allow(dead_code)]

// =============================================================================
// TLK110 PHY Identifier
// =============================================================================

/// PHY identifier constants
pub mod phy_id {
    /// TLK110 PHY Identifier
    ///
    /// - PHYIDR1 (reg 2): 0x2000
    /// - PHYIDR2 (reg 3): 0xA20x (x = revision)
    pub const ID: u32 = 0x2000_A201;
    /// PHY ID mask (ignores revision bits)
    pub const MASK: u32 = 0xFFFF_FFF0;
}

// =============================================================================
// Address Spaces
// =============================================================================

/// Addresses above this mask are extended and accessed indirectly
pub const PHY_REG_MASK: u16 = 0x1F;

// =============================================================================
// Direct Registers
// =============================================================================

/// TLK110 direct register addresses
pub mod reg {
    /// Software Strap Control Register 3
    pub const SWSCR3: u8 = 0x0B;
    /// Device Control Register (indirect access control)
    pub const REGCR: u8 = 0x0D;
    /// Address or Data Register (indirect access payload)
    pub const ADDAR: u8 = 0x0E;
    /// MII Interrupt Status Register 1 (read to clear)
    pub const MISR1: u8 = 0x12;
    /// MII Interrupt Status Register 2 (read to clear)
    pub const MISR2: u8 = 0x13;
    /// RMII Control and Status Register
    pub const RCSR: u8 = 0x17;
    /// PHY Control Register
    pub const PHYCR: u8 = 0x19;
    /// PHY Reset Control Register
    pub const PHYRCR: u8 = 0x1F;
}

/// REGCR fields
pub mod regcr {
    /// Device address field (DEVAD) used for vendor registers
    pub const DEVAD: u16 = 0x001F;
    /// Function field shift (bits 15:14)
    pub const FUNCTION_SHIFT: u16 = 14;
    /// Function: next ADDAR access addresses the target register
    pub const FUNC_ADDRESS: u16 = 0x0 << FUNCTION_SHIFT;
    /// Function: next ADDAR access transfers data, no post increment
    pub const FUNC_DATA: u16 = 0x1 << FUNCTION_SHIFT;
    /// REGCR value selecting address mode
    pub const SELECT_ADDRESS: u16 = DEVAD | FUNC_ADDRESS;
    /// REGCR value selecting data mode
    pub const SELECT_DATA: u16 = DEVAD | FUNC_DATA;
}

/// Extended register addresses
pub mod ext {
    /// Alpha factor 2
    pub const ALFAFACTOR2: u16 = 0x0023;
    /// Alpha TPIDL
    pub const ALFATPIDL: u16 = 0x002A;
    /// Alpha factor 1
    pub const ALFAFACTOR1: u16 = 0x002C;
    /// Signal classifier fallback
    pub const SCFALLBACK: u16 = 0x0040;
    /// Power save configuration
    pub const CFGPS: u16 = 0x0095;
    /// Power save coefficient 2/1
    pub const PSCOEF21: u16 = 0x0096;
    /// Power save coefficient 3
    pub const PSCOEF3: u16 = 0x0097;
    /// Coarse gain
    pub const COARSEGAIN: u16 = 0x00A3;
    /// Low/high pass filter
    pub const LPFHPF: u16 = 0x00AC;
    /// Spare analog
    pub const SPAREANALOG: u16 = 0x00B9;
    /// Voltage regulator control
    pub const VRCR: u16 = 0x00D0;
    /// Feed-forward equalizer setting
    pub const SETFFE: u16 = 0x0107;
    /// Fast start power TX gain
    pub const FTSPTXGAIN: u16 = 0x0150;
    /// Fast start power
    pub const FTSP: u16 = 0x0154;
}

/// PHY Control Register (0x19) bits
pub mod phycr {
    /// Auto-MDIX enable
    pub const MDIX_EN: u16 = 1 << 15;
    /// Force MDIX
    pub const FORCE_MDIX: u16 = 1 << 14;
    /// Interrupt output enable
    pub const INT_OE: u16 = 1 << 7;
}

/// RMII Control and Status Register (0x17) bits
pub mod rcsr {
    /// RMII mode enable
    pub const RMII_MODE: u16 = 1 << 5;
}

/// PHY Reset Control Register (0x1F) bits
pub mod phyrcr {
    /// Digital restart (self clearing)
    pub const SOFT_RESTART: u16 = 1 << 14;
}

// =============================================================================
// Calibration Patch Table
// =============================================================================

/// One read-modify-write calibration step: `reg |= mask`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationPatch {
    /// Register address (direct or extended)
    pub reg: u16,
    /// Bits ORed into the current value
    pub mask: u16,
}

impl CalibrationPatch {
    const fn new(reg: u16, mask: u16) -> Self {
        Self { reg, mask }
    }
}

/// Rev 1.0 silicon workaround, applied in order at config init.
///
/// The masks are device calibration constants.
pub const CALIBRATION_PATCHES: [CalibrationPatch; 18] = [
    CalibrationPatch::new(ext::COARSEGAIN, 0x0000),
    CalibrationPatch::new(ext::LPFHPF, 0x8000),
    CalibrationPatch::new(ext::SPAREANALOG, 0x0000),
    CalibrationPatch::new(ext::VRCR, 0x0008),
    CalibrationPatch::new(ext::SETFFE, 0x0605),
    CalibrationPatch::new(ext::FTSP, 0x0255),
    CalibrationPatch::new(ext::ALFATPIDL, 0x7998),
    CalibrationPatch::new(ext::PSCOEF21, 0x3A20),
    CalibrationPatch::new(ext::PSCOEF3, 0x003F),
    CalibrationPatch::new(ext::ALFAFACTOR1, 0xFF80),
    CalibrationPatch::new(ext::ALFAFACTOR2, 0x021C),
    CalibrationPatch::new(ext::CFGPS, 0x0000),
    CalibrationPatch::new(ext::FTSPTXGAIN, 0x6A88),
    CalibrationPatch::new(reg::SWSCR3 as u16, 0x0000),
    CalibrationPatch::new(ext::SCFALLBACK, 0xC11D),
    CalibrationPatch::new(reg::PHYRCR as u16, phyrcr::SOFT_RESTART),
    CalibrationPatch::new(reg::RCSR as u16, rcsr::RMII_MODE),
    CalibrationPatch::new(reg::PHYCR as u16, phycr::MDIX_EN),
];
