//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the TLK110 driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::HashMap;
use std::vec::Vec;

use crate::driver::error::{BusError, Result};
use crate::hal::gpio::{LineController, LineId};
use crate::hal::mdio::MdioBus;
use crate::internal::tlk110_regs::{reg, regcr};

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// One transaction seen by [`MockMdioBus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MdioOp {
    /// (phy, reg)
    Read(u8, u8),
    /// (phy, reg, value)
    Write(u8, u8, u16),
}

impl MdioOp {
    pub fn phy(&self) -> u8 {
        match self {
            MdioOp::Read(phy, _) | MdioOp::Write(phy, _, _) => *phy,
        }
    }
}

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// Direct registers live in a map that defaults to 0. REGCR/ADDAR behave
/// like the TLK110's: in address mode ADDAR holds the extended address, in
/// data mode it transfers the extended register's value. Every transaction
/// is logged, including one made to fail with [`Self::fail_on_op`].
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.set_extended(1, 0xA3, 0x1234);
///
/// let phy = Tlk110::new(1);
/// assert_eq!(phy.read_register(&mut mdio, 0xA3).unwrap(), 0x1234);
/// assert_eq!(mdio.ops().len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Direct register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Extended register values: (phy_addr, ext_addr) -> value
    extended: RefCell<HashMap<(u8, u16), u16>>,
    /// Extended address latched through ADDAR, per PHY
    ext_address: RefCell<HashMap<u8, u16>>,
    /// Every transaction in order
    ops: RefCell<Vec<MdioOp>>,
    /// Index of the transaction to fail
    fail_on: RefCell<Option<usize>>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a direct register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get a direct register value
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Set an extended register value
    pub fn set_extended(&self, phy_addr: u8, ext_addr: u16, value: u16) {
        self.extended
            .borrow_mut()
            .insert((phy_addr, ext_addr), value);
    }

    /// Get an extended register value
    pub fn get_extended(&self, phy_addr: u8, ext_addr: u16) -> Option<u16> {
        self.extended.borrow().get(&(phy_addr, ext_addr)).copied()
    }

    /// Fail the `index`-th transaction (0-based, counted from creation)
    pub fn fail_on_op(&self, index: usize) {
        *self.fail_on.borrow_mut() = Some(index);
    }

    /// All transactions so far
    pub fn ops(&self) -> Vec<MdioOp> {
        self.ops.borrow().clone()
    }

    /// Writes only: (phy_addr, reg_addr, value)
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match *op {
                MdioOp::Write(phy, reg_addr, value) => Some((phy, reg_addr, value)),
                MdioOp::Read(..) => None,
            })
            .collect()
    }

    /// Log a transaction, returning whether it should fail
    fn record(&self, op: MdioOp) -> bool {
        let mut ops = self.ops.borrow_mut();
        let index = ops.len();
        ops.push(op);
        *self.fail_on.borrow() == Some(index)
    }

    fn data_mode(&self, phy_addr: u8) -> bool {
        let control = self.get_register(phy_addr, reg::REGCR).unwrap_or(0);
        control & (0x3 << regcr::FUNCTION_SHIFT) == regcr::FUNC_DATA
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        if self.record(MdioOp::Read(phy_addr, reg_addr)) {
            return Err(BusError::ReadFailed.into());
        }

        if reg_addr == reg::ADDAR {
            let target = self.ext_address.borrow().get(&phy_addr).copied().unwrap_or(0);
            if self.data_mode(phy_addr) {
                return Ok(self.get_extended(phy_addr, target).unwrap_or(0));
            }
            return Ok(target);
        }

        Ok(self.get_register(phy_addr, reg_addr).unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        if self.record(MdioOp::Write(phy_addr, reg_addr, value)) {
            return Err(BusError::WriteFailed.into());
        }

        if reg_addr == reg::ADDAR {
            if self.data_mode(phy_addr) {
                let target = self.ext_address.borrow().get(&phy_addr).copied().unwrap_or(0);
                self.set_extended(phy_addr, target, value);
            } else {
                self.ext_address.borrow_mut().insert(phy_addr, value);
            }
            return Ok(());
        }

        self.set_register(phy_addr, reg_addr, value);
        Ok(())
    }
}

// =============================================================================
// Mock Line Controller
// =============================================================================

/// One call seen by [`MockLines`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOp {
    Acquire(LineId, &'static str),
    SetOutput(LineId, bool),
    SetValue(LineId, bool),
    Release(LineId),
}

/// Injected failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFault {
    Acquire(LineId),
    SetOutput(LineId),
    SetValue(LineId, bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockLineError {
    Injected,
    Busy,
    NotHeld,
}

/// Line controller that logs every call and tracks which lines are held
#[derive(Debug, Default)]
pub struct MockLines {
    ops: Vec<LineOp>,
    held: Vec<LineId>,
    faults: Vec<LineFault>,
}

impl MockLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a future call fail
    pub fn inject(&mut self, fault: LineFault) {
        self.faults.push(fault);
    }

    pub fn clear_faults(&mut self) {
        self.faults.clear();
    }

    pub fn ops(&self) -> Vec<LineOp> {
        self.ops.clone()
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Lines acquired and not yet released
    pub fn held(&self) -> Vec<LineId> {
        self.held.clone()
    }

    fn check(&self, fault: LineFault) -> core::result::Result<(), MockLineError> {
        if self.faults.contains(&fault) {
            Err(MockLineError::Injected)
        } else {
            Ok(())
        }
    }

    fn check_held(&self, line: LineId) -> core::result::Result<(), MockLineError> {
        if self.held.contains(&line) {
            Ok(())
        } else {
            Err(MockLineError::NotHeld)
        }
    }
}

impl LineController for MockLines {
    type Error = MockLineError;

    fn acquire(
        &mut self,
        line: LineId,
        label: &'static str,
    ) -> core::result::Result<(), Self::Error> {
        self.ops.push(LineOp::Acquire(line, label));
        self.check(LineFault::Acquire(line))?;
        if self.held.contains(&line) {
            return Err(MockLineError::Busy);
        }
        self.held.push(line);
        Ok(())
    }

    fn set_output(&mut self, line: LineId, high: bool) -> core::result::Result<(), Self::Error> {
        self.ops.push(LineOp::SetOutput(line, high));
        self.check(LineFault::SetOutput(line))?;
        self.check_held(line)
    }

    fn set_value(&mut self, line: LineId, high: bool) -> core::result::Result<(), Self::Error> {
        self.ops.push(LineOp::SetValue(line, high));
        self.check(LineFault::SetValue(line, high))?;
        self.check_held(line)
    }

    fn release(&mut self, line: LineId) {
        self.ops.push(LineOp::Release(line));
        self.held.retain(|held| *held != line);
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns() / 1_000_000
    }

    /// Reset the delay counter
    pub fn reset(&self) {
        *self.total_ns.borrow_mut() = 0;
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += ns as u64;
    }
}

// =============================================================================
// Mock Output Pin
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Output pin recording every level it was driven to
#[derive(Debug, Default)]
pub struct MockPin {
    levels: Vec<bool>,
    failing: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pin whose every drive fails
    pub fn failing() -> Self {
        Self {
            levels: Vec::new(),
            failing: true,
        }
    }

    pub fn levels(&self) -> Vec<bool> {
        self.levels.clone()
    }

    fn drive(&mut self, high: bool) -> core::result::Result<(), MockPinError> {
        if self.failing {
            return Err(MockPinError);
        }
        self.levels.push(high);
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.drive(true)
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that a register was written with a specific value
#[macro_export]
macro_rules! assert_reg_written {
    ($mdio:expr, $phy:expr, $reg:expr, $value:expr) => {
        let writes = $mdio.get_writes();
        assert!(
            writes
                .iter()
                .any(|w| w.0 == $phy && w.1 == $reg && w.2 == $value),
            "Expected write to PHY {} reg {} with value 0x{:04X}, but got: {:?}",
            $phy,
            $reg,
            $value,
            writes
        );
    };
}

// =============================================================================
// Self Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;

    #[test]
    fn mock_mdio_emulates_indirect_access() {
        let mut mdio = MockMdioBus::new();

        mdio.write(1, reg::REGCR, regcr::SELECT_ADDRESS).unwrap();
        mdio.write(1, reg::ADDAR, 0x0154).unwrap();
        assert_eq!(mdio.read(1, reg::ADDAR).unwrap(), 0x0154);

        mdio.write(1, reg::REGCR, regcr::SELECT_DATA).unwrap();
        mdio.write(1, reg::ADDAR, 0x0255).unwrap();
        assert_eq!(mdio.get_extended(1, 0x0154), Some(0x0255));
        assert_eq!(mdio.read(1, reg::ADDAR).unwrap(), 0x0255);
        assert_eq!(mdio.get_extended(2, 0x0154), None);
    }

    #[test]
    fn mock_mdio_failure_is_logged_and_not_applied() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_on_op(1);

        mdio.write(0, 4, 1).unwrap();
        assert_eq!(mdio.write(0, 4, 2), Err(BusError::WriteFailed.into()));
        assert_eq!(mdio.get_register(0, 4), Some(1));
        assert_eq!(mdio.ops(), vec![MdioOp::Write(0, 4, 1), MdioOp::Write(0, 4, 2)]);
        crate::assert_reg_written!(mdio, 0, 4, 1);
    }

    #[test]
    fn mock_lines_track_ownership() {
        let mut lines = MockLines::new();
        let line = LineId(7);

        assert_eq!(lines.set_output(line, true), Err(MockLineError::NotHeld));
        lines.acquire(line, "x").unwrap();
        assert_eq!(lines.acquire(line, "x"), Err(MockLineError::Busy));
        lines.release(line);
        assert!(lines.held().is_empty());

        lines.inject(LineFault::SetValue(line, false));
        lines.acquire(line, "x").unwrap();
        assert!(lines.set_value(line, true).is_ok());
        assert_eq!(lines.set_value(line, false), Err(MockLineError::Injected));
    }

    #[test]
    fn mock_delay_accumulates() {
        use embedded_hal::delay::DelayNs;

        let mut delay = MockDelay::new();
        delay.delay_ns(1000);
        delay.delay_ns(2000);
        assert_eq!(delay.total_ns(), 3000);
        assert_eq!(delay.total_ms(), 0);

        delay.delay_ms(10);
        assert_eq!(delay.total_ms(), 10);
    }
}
