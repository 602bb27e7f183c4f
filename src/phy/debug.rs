//! Debug register access.
//!
//! A text show/store pair for poking PHY registers by hand. `store` takes
//! `"<reg> <value>"` (select and write) or `"<reg>"` (select only), both in
//! hexadecimal; `show` reads the selected register and formats it as
//! `"0x<value>\n"`. The selection is shared by every device on one
//! controller.

use core::fmt;

use crate::driver::error::{DeviceError, ParseError, Result};
use crate::hal::mdio::MdioBus;
use crate::internal::cs_cell::CriticalSectionCell;
use crate::internal::log::phy_warn;
use crate::phy::PhyDriver;
use crate::phy::tlk110::Tlk110;

/// Parsed store command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebugCommand {
    /// Select a register for later reads
    Select(u16),
    /// Select a register and write a value to it now
    Write {
        /// Register address
        reg: u16,
        /// Value to write
        value: u16,
    },
}

impl DebugCommand {
    /// Parse `"<reg> [<value>]"`
    ///
    /// Tokens are whitespace separated hexadecimal numbers, optionally
    /// prefixed with `0x`. A value token that does not parse leaves a plain
    /// selection; anything after the second token is ignored. Values wider
    /// than 16 bits are truncated.
    pub fn parse(input: &str) -> core::result::Result<Self, ParseError> {
        let mut tokens = input.split_whitespace();

        let reg = tokens.next().ok_or(ParseError::Empty)?;
        let reg = parse_hex(reg).ok_or(ParseError::InvalidHex)?;
        let reg = u16::try_from(reg).map_err(|_| ParseError::RegisterOutOfRange)?;

        match tokens.next().and_then(parse_hex) {
            Some(value) => Ok(DebugCommand::Write {
                reg,
                value: (value & 0xffff) as u16,
            }),
            None => Ok(DebugCommand::Select(reg)),
        }
    }

    /// Register the command selects
    pub const fn register(&self) -> u16 {
        match self {
            DebugCommand::Select(reg) | DebugCommand::Write { reg, .. } => *reg,
        }
    }
}

fn parse_hex(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Register value as shown to the user: `0x<lowercase hex>\n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterReadout(pub u16);

impl fmt::Display for RegisterReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:#x}", self.0)
    }
}

/// Register selected by the last store command
#[derive(Debug)]
pub struct DebugSelector {
    selected: CriticalSectionCell<Option<u16>>,
}

impl DebugSelector {
    /// Create a selector with nothing selected
    pub const fn new() -> Self {
        Self {
            selected: CriticalSectionCell::new(None),
        }
    }

    /// Currently selected register
    pub fn selected(&self) -> Option<u16> {
        self.selected.get()
    }

    /// Select a register
    pub fn select(&self, reg: u16) {
        self.selected.set(Some(reg));
    }

    /// Read the selected register
    pub fn show<M: MdioBus>(&self, phy: &Tlk110, mdio: &mut M) -> Result<RegisterReadout> {
        let reg = self.selected().ok_or(DeviceError::NoRegisterSelected)?;
        phy.read_register(mdio, reg).map(RegisterReadout)
    }

    /// Parse and run a store command, returning the consumed length
    pub fn store<M: MdioBus>(&self, phy: &Tlk110, mdio: &mut M, input: &str) -> Result<usize> {
        let command = DebugCommand::parse(input).inspect_err(|_| {
            phy_warn!("tlk110@{}: failed to write register", phy.address());
        })?;

        self.select(command.register());
        if let DebugCommand::Write { reg, value } = command {
            phy.write_register(mdio, reg, value)?;
        }
        Ok(input.len())
    }
}

impl Default for DebugSelector {
    fn default() -> Self {
        Self::new()
    }
}
