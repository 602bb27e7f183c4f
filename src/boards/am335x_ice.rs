//! AM335x Industrial Communication Engine board configuration (2x TLK110).
//!
//! Two TLK110 PHYs share one reset line and the MII routing lines, so the
//! reset sequence must only run for the first PHY that attaches.

use crate::driver::config::{LineSpec, ResetLines};

/// AM335x ICE board configuration constants and helpers.
pub struct Am335xIce;

impl Am335xIce {
    // =========================================================================
    // PHY Configuration
    // =========================================================================

    /// Address of the PHY on the first port.
    pub const PHY0_ADDR: u8 = 1;

    /// Address of the PHY on the second port.
    pub const PHY1_ADDR: u8 = 3;

    // =========================================================================
    // Shared Lines (GPIO bank * 32 + pin)
    // =========================================================================

    /// PHY reset line.
    pub const PHY_RESET_GPIO: u16 = 69;

    /// PR1 MII control line (gpio2_22).
    pub const MII_CTL_GPIO: u16 = 2 * 32 + 22;

    /// FET output enable line (gpio1_29).
    pub const FET_NOE_GPIO: u16 = 32 + 29;

    /// MII clock mux select line (gpio3_10).
    pub const MUX_MII_GPIO: u16 = 3 * 32 + 10;

    // =========================================================================
    // Board Identification
    // =========================================================================

    /// Board name.
    pub const BOARD_NAME: &'static str = "AM335x ICE";

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Line numbers and labels for the reset sequence.
    #[must_use]
    pub const fn reset_lines() -> ResetLines {
        ResetLines {
            reset: LineSpec::new(Self::PHY_RESET_GPIO, "phy_reset"),
            mii_control: LineSpec::new(Self::MII_CTL_GPIO, "gpio2_22"),
            aux_enable: LineSpec::new(Self::FET_NOE_GPIO, "gpio1_29"),
            mux_select: LineSpec::new(Self::MUX_MII_GPIO, "gpio3_10"),
        }
    }
}
