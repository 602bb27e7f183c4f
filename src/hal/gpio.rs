//! Shared Board Lines
//!
//! The TLK110 bring-up drives four board lines that are shared by every PHY
//! on the same wiring:
//!
//! | Role | Board signal | Purpose |
//! |------|--------------|---------|
//! | [`ResetLine::Reset`] | PHY nRESET | Active-low PHY reset |
//! | [`ResetLine::MiiControl`] | PR1 MII CTL | MII routing control |
//! | [`ResetLine::AuxEnable`] | FET nOE | Isolation FET output enable |
//! | [`ResetLine::MuxSelect`] | MUX MII CLL1 | MII clock mux select |
//!
//! Line ownership is modelled by the [`LineController`] trait, which mirrors
//! a request/direction/value/free GPIO subsystem. Boards that hand the driver
//! plain `embedded_hal::digital::OutputPin`s can use [`PinLines`].

use embedded_hal::digital::OutputPin;

use crate::driver::config::ResetLines;

// =============================================================================
// Line Identity
// =============================================================================

/// Board-level line number (GPIO number in the host's numbering)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineId(pub u16);

/// Role of a line in the reset sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetLine {
    /// PHY reset line (active low)
    Reset,
    /// MII control line
    MiiControl,
    /// Auxiliary (FET output) enable line
    AuxEnable,
    /// MII mux select line
    MuxSelect,
}

impl ResetLine {
    /// Lines in the order the reset sequence acquires them
    pub const ACQUISITION_ORDER: [ResetLine; 4] = [
        ResetLine::Reset,
        ResetLine::MiiControl,
        ResetLine::AuxEnable,
        ResetLine::MuxSelect,
    ];

    /// Short role name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResetLine::Reset => "reset",
            ResetLine::MiiControl => "mii control",
            ResetLine::AuxEnable => "aux enable",
            ResetLine::MuxSelect => "mux select",
        }
    }

    /// Position in [`Self::ACQUISITION_ORDER`]
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            ResetLine::Reset => 0,
            ResetLine::MiiControl => 1,
            ResetLine::AuxEnable => 2,
            ResetLine::MuxSelect => 3,
        }
    }
}

// =============================================================================
// Line Controller Trait
// =============================================================================

/// Line ownership and drive operations
///
/// `acquire` claims a line for exclusive use, `release` gives it back.
/// `set_output` switches an acquired line to output at the given level,
/// `set_value` changes the level of a line that is already an output.
pub trait LineController {
    /// Controller-specific failure
    type Error: core::fmt::Debug;

    /// Request a line, tagging it with a label for diagnostics
    fn acquire(&mut self, line: LineId, label: &'static str) -> Result<(), Self::Error>;

    /// Configure an acquired line as an output driven to `high`
    fn set_output(&mut self, line: LineId, high: bool) -> Result<(), Self::Error>;

    /// Drive an output line to `high`
    fn set_value(&mut self, line: LineId, high: bool) -> Result<(), Self::Error>;

    /// Free a previously acquired line
    fn release(&mut self, line: LineId);
}

impl<L: LineController + ?Sized> LineController for &mut L {
    type Error = L::Error;

    fn acquire(&mut self, line: LineId, label: &'static str) -> Result<(), Self::Error> {
        (**self).acquire(line, label)
    }

    fn set_output(&mut self, line: LineId, high: bool) -> Result<(), Self::Error> {
        (**self).set_output(line, high)
    }

    fn set_value(&mut self, line: LineId, high: bool) -> Result<(), Self::Error> {
        (**self).set_value(line, high)
    }

    fn release(&mut self, line: LineId) {
        (**self).release(line);
    }
}

// =============================================================================
// embedded-hal Adapter
// =============================================================================

/// Failures reported by [`PinLines`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLinesError {
    /// Line id is not one of the four configured lines
    UnknownLine,
    /// Line is already acquired
    AlreadyClaimed,
    /// Line was not acquired before use
    NotClaimed,
    /// The underlying pin reported an error
    Pin,
}

/// Four `OutputPin`s exposed as a [`LineController`]
///
/// Acquisition is tracked with a claim flag per line; the pins themselves are
/// owned by this adapter for its whole lifetime.
#[derive(Debug)]
pub struct PinLines<RST, CTL, AUX, MUX> {
    lines: ResetLines,
    claimed: [bool; 4],
    reset: RST,
    mii_control: CTL,
    aux_enable: AUX,
    mux_select: MUX,
}

impl<RST, CTL, AUX, MUX> PinLines<RST, CTL, AUX, MUX>
where
    RST: OutputPin,
    CTL: OutputPin,
    AUX: OutputPin,
    MUX: OutputPin,
{
    /// Wrap the four pins, using `lines` to map line ids to roles
    pub fn new(
        lines: ResetLines,
        reset: RST,
        mii_control: CTL,
        aux_enable: AUX,
        mux_select: MUX,
    ) -> Self {
        Self {
            lines,
            claimed: [false; 4],
            reset,
            mii_control,
            aux_enable,
            mux_select,
        }
    }

    /// Whether the line with the given role is currently acquired
    pub fn is_claimed(&self, role: ResetLine) -> bool {
        self.claimed[role.index()]
    }

    /// Consume the adapter and return the pins
    pub fn into_pins(self) -> (RST, CTL, AUX, MUX) {
        (self.reset, self.mii_control, self.aux_enable, self.mux_select)
    }

    fn role_of(&self, line: LineId) -> Result<ResetLine, PinLinesError> {
        self.lines.role_of(line).ok_or(PinLinesError::UnknownLine)
    }

    fn claimed_role(&self, line: LineId) -> Result<ResetLine, PinLinesError> {
        let role = self.role_of(line)?;
        if !self.claimed[role.index()] {
            return Err(PinLinesError::NotClaimed);
        }
        Ok(role)
    }

    fn drive(&mut self, role: ResetLine, high: bool) -> Result<(), PinLinesError> {
        match role {
            ResetLine::Reset => drive_pin(&mut self.reset, high),
            ResetLine::MiiControl => drive_pin(&mut self.mii_control, high),
            ResetLine::AuxEnable => drive_pin(&mut self.aux_enable, high),
            ResetLine::MuxSelect => drive_pin(&mut self.mux_select, high),
        }
    }
}

fn drive_pin<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), PinLinesError> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| PinLinesError::Pin)
}

impl<RST, CTL, AUX, MUX> LineController for PinLines<RST, CTL, AUX, MUX>
where
    RST: OutputPin,
    CTL: OutputPin,
    AUX: OutputPin,
    MUX: OutputPin,
{
    type Error = PinLinesError;

    fn acquire(&mut self, line: LineId, _label: &'static str) -> Result<(), Self::Error> {
        let role = self.role_of(line)?;
        let slot = &mut self.claimed[role.index()];
        if *slot {
            return Err(PinLinesError::AlreadyClaimed);
        }
        *slot = true;
        Ok(())
    }

    fn set_output(&mut self, line: LineId, high: bool) -> Result<(), Self::Error> {
        let role = self.claimed_role(line)?;
        self.drive(role, high)
    }

    fn set_value(&mut self, line: LineId, high: bool) -> Result<(), Self::Error> {
        let role = self.claimed_role(line)?;
        self.drive(role, high)
    }

    fn release(&mut self, line: LineId) {
        if let Ok(role) = self.role_of(line) {
            self.claimed[role.index()] = false;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
