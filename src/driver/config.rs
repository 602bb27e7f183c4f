//! Configuration types for the TLK110 PHY driver

use crate::boards::am335x_ice::Am335xIce;
use crate::hal::gpio::{LineId, ResetLine};

// =============================================================================
// Shared Lines
// =============================================================================

/// One board line: number plus the label it is requested under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineSpec {
    /// Line number in the host's numbering
    pub id: LineId,
    /// Label passed to the line controller on acquisition
    pub label: &'static str,
}

impl LineSpec {
    /// Create a line description
    #[must_use]
    pub const fn new(id: u16, label: &'static str) -> Self {
        Self {
            id: LineId(id),
            label,
        }
    }
}

/// The four lines driven by the reset sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetLines {
    /// PHY reset (active low)
    pub reset: LineSpec,
    /// MII control
    pub mii_control: LineSpec,
    /// Auxiliary (FET output) enable
    pub aux_enable: LineSpec,
    /// MII mux select
    pub mux_select: LineSpec,
}

impl ResetLines {
    /// Line description for a role
    #[must_use]
    pub const fn spec(&self, role: ResetLine) -> LineSpec {
        match role {
            ResetLine::Reset => self.reset,
            ResetLine::MiiControl => self.mii_control,
            ResetLine::AuxEnable => self.aux_enable,
            ResetLine::MuxSelect => self.mux_select,
        }
    }

    /// Role of a line number, if it is one of the four
    #[must_use]
    pub fn role_of(&self, id: LineId) -> Option<ResetLine> {
        ResetLine::ACQUISITION_ORDER
            .into_iter()
            .find(|role| self.spec(*role).id == id)
    }
}

impl Default for ResetLines {
    fn default() -> Self {
        Am335xIce::reset_lines()
    }
}

// =============================================================================
// Timing
// =============================================================================

/// Settle and pulse times for the reset sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetTiming {
    /// Hold after each line is first driven high
    pub settle_ms: u32,
    /// Reset line low time
    pub pulse_low_ms: u32,
    /// Hold after the reset line returns high
    pub pulse_recovery_ms: u32,
}

impl ResetTiming {
    /// Default bring-up timing
    #[must_use]
    pub const fn new() -> Self {
        Self {
            settle_ms: 10,
            pulse_low_ms: 1,
            pulse_recovery_ms: 1,
        }
    }
}

impl Default for ResetTiming {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Policies
// =============================================================================

/// How config init treats a failing calibration entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationPolicy {
    /// Skip the entry and carry on; only the interrupt acknowledge result
    /// is reported
    #[default]
    BestEffort,
    /// Stop at the first failing read or write and return its error
    FailFast,
}

/// What happens to REGCR when an indirect access fails part way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndirectRecovery {
    /// Leave the control registers as the failed sequence left them
    #[default]
    Leave,
    /// Issue one best-effort REGCR write selecting address mode
    RestoreAddressMode,
}

// =============================================================================
// Driver Configuration
// =============================================================================

/// TLK110 driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tlk110Config {
    /// Shared reset and control lines
    pub reset_lines: ResetLines,
    /// Reset sequence timing
    pub reset_timing: ResetTiming,
    /// Calibration failure handling
    pub calibration: CalibrationPolicy,
    /// Indirect access failure handling
    pub indirect_recovery: IndirectRecovery,
}

impl Default for Tlk110Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Tlk110Config {
    /// Create a new configuration with defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reset_lines: Am335xIce::reset_lines(),
            reset_timing: ResetTiming::new(),
            calibration: CalibrationPolicy::BestEffort,
            indirect_recovery: IndirectRecovery::Leave,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the shared lines
    #[must_use]
    pub const fn with_reset_lines(mut self, lines: ResetLines) -> Self {
        self.reset_lines = lines;
        self
    }

    /// Set the reset timing
    #[must_use]
    pub const fn with_reset_timing(mut self, timing: ResetTiming) -> Self {
        self.reset_timing = timing;
        self
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
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Tlk110Config::new();

        assert_eq!(config.reset_lines, Am335xIce::reset_lines());
        assert_eq!(config.reset_timing.settle_ms, 10);
        assert_eq!(config.reset_timing.pulse_low_ms, 1);
        assert_eq!(config.reset_timing.pulse_recovery_ms, 1);
        assert_eq!(config.calibration, CalibrationPolicy::BestEffort);
        assert_eq!(config.indirect_recovery, IndirectRecovery::Leave);
    }

    #[test]
    fn config_default_trait_matches_new() {
        assert_eq!(Tlk110Config::default(), Tlk110Config::new());
    }

    #[test]
    fn config_builder() {
        let timing = ResetTiming {
            settle_ms: 1,
            pulse_low_ms: 2,
            pulse_recovery_ms: 3,
        };
        let config = Tlk110Config::new()
            .with_reset_timing(timing)
            .with_calibration(CalibrationPolicy::FailFast)
            .with_indirect_recovery(IndirectRecovery::RestoreAddressMode);

        assert_eq!(config.reset_timing, timing);
        assert_eq!(config.calibration, CalibrationPolicy::FailFast);
        assert_eq!(config.indirect_recovery, IndirectRecovery::RestoreAddressMode);
    }

    #[test]
    fn reset_lines_role_lookup() {
        let lines = ResetLines {
            reset: LineSpec::new(1, "rst"),
            mii_control: LineSpec::new(2, "ctl"),
            aux_enable: LineSpec::new(3, "aux"),
            mux_select: LineSpec::new(4, "mux"),
        };

        assert_eq!(lines.role_of(LineId(1)), Some(ResetLine::Reset));
        assert_eq!(lines.role_of(LineId(4)), Some(ResetLine::MuxSelect));
        assert_eq!(lines.role_of(LineId(5)), None);
        assert_eq!(lines.spec(ResetLine::AuxEnable).label, "aux");
    }
}
