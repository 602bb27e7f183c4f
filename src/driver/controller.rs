//! TLK110 module controller
//!
//! One [`Tlk110Controller`] is built per set of shared board lines. It owns
//! everything the attached PHYs share: the line controller, the delay
//! provider, the reset latch, the debug register selection and the device
//! table. The host framework calls its lifecycle methods with a
//! [`DeviceHandle`] and the MDIO bus to use.
//!
//! # Example
//!
//! ```ignore
//! use ph_tlk110::{Tlk110Config, Tlk110ControllerDefault};
//!
//! let mut tlk = Tlk110ControllerDefault::new(Tlk110Config::new(), lines, delay);
//!
//! let port0 = tlk.attach(1)?; // runs the reset sequence
//! let port1 = tlk.attach(3)?; // lines already up, no reset
//!
//! tlk.configure(port0, &mut mdio)?;
//! tlk.configure(port1, &mut mdio)?;
//! ```

use embedded_hal::delay::DelayNs;

use crate::driver::config::Tlk110Config;
use crate::driver::device::{DeviceHandle, DeviceTable};
use crate::driver::error::Result;
use crate::hal::gpio::LineController;
use crate::hal::mdio::{MdioBus, check_phy_addr};
use crate::hal::reset::{ResetLatch, ResetOutcome, ResetSequencer};
use crate::internal::log::{phy_error, phy_info};
use crate::phy::debug::{DebugSelector, RegisterReadout};
use crate::phy::generic::{LinkStatus, PhyDriver};
use crate::phy::tlk110::Tlk110;

/// Shared state and host lifecycle for TLK110 devices on one wiring
pub struct Tlk110Controller<L, D, const MAX_DEVICES: usize> {
    config: Tlk110Config,
    lines: L,
    delay: D,
    sequencer: ResetSequencer,
    latch: ResetLatch,
    selector: DebugSelector,
    devices: DeviceTable<MAX_DEVICES>,
}

impl<L, D, const MAX_DEVICES: usize> Tlk110Controller<L, D, MAX_DEVICES>
where
    L: LineController,
    D: DelayNs,
{
    /// Create a controller; no line is touched until the first attach
    pub fn new(config: Tlk110Config, lines: L, delay: D) -> Self {
        Self {
            config,
            lines,
            delay,
            sequencer: ResetSequencer::new(config.reset_lines, config.reset_timing),
            latch: ResetLatch::new(),
            selector: DebugSelector::new(),
            devices: DeviceTable::new(),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &Tlk110Config {
        &self.config
    }

    /// Line controller
    pub fn lines(&self) -> &L {
        &self.lines
    }

    /// Reset latch
    pub fn latch(&self) -> &ResetLatch {
        &self.latch
    }

    /// Whether the shared lines have been brought up
    pub fn reset_performed(&self) -> bool {
        self.latch.is_done()
    }

    /// Register selected through the debug interface
    pub fn selected_register(&self) -> Option<u16> {
        self.selector.selected()
    }

    /// Number of attached devices
    pub fn attached(&self) -> usize {
        self.devices.len()
    }

    // =========================================================================
    // Attach / Detach
    // =========================================================================

    /// Attach the PHY at `phy_addr`
    ///
    /// Takes a device slot, then runs the reset sequence if no earlier
    /// attach has completed it. A full table fails before any line is
    /// touched; a failed reset gives the slot back.
    pub fn attach(&mut self, phy_addr: u8) -> Result<DeviceHandle> {
        let phy_addr = check_phy_addr(phy_addr)?;
        let handle = self
            .devices
            .allocate(Tlk110::from_config(phy_addr, &self.config))?;

        match self
            .sequencer
            .run(&self.latch, &mut self.lines, &mut self.delay)
        {
            Ok(ResetOutcome::Performed) => {
                phy_info!("tlk110@{}: attached, shared lines reset", phy_addr);
            }
            Ok(ResetOutcome::AlreadyDone) => {
                phy_info!("tlk110@{}: attached", phy_addr);
            }
            Err(e) => {
                phy_error!("tlk110@{}: attach failed: {:?}", phy_addr, e);
                self.devices.free(handle)?;
                return Err(e.into());
            }
        }
        Ok(handle)
    }

    /// Detach a device and free its slot
    ///
    /// The shared lines stay held: other devices may still depend on them.
    pub fn detach(&mut self, handle: DeviceHandle) -> Result<()> {
        let state = self.devices.free(handle)?;
        phy_info!("tlk110@{}: detached", state.phy.address());
        Ok(())
    }

    /// Driver for an attached device
    pub fn phy(&self, handle: DeviceHandle) -> Result<Tlk110> {
        Ok(self.devices.get(handle)?.phy)
    }

    // =========================================================================
    // Host Lifecycle
    // =========================================================================

    /// Apply calibration and clear start-up interrupts
    pub fn configure<M: MdioBus>(&mut self, handle: DeviceHandle, mdio: &mut M) -> Result<()> {
        self.phy(handle)?.config_init(mdio)
    }

    /// Acknowledge a PHY interrupt
    pub fn ack_interrupt<M: MdioBus>(&mut self, handle: DeviceHandle, mdio: &mut M) -> Result<()> {
        self.phy(handle)?.ack_interrupt(mdio)
    }

    /// Configure interrupts (nothing to do on the TLK110)
    pub fn config_interrupt<M: MdioBus>(
        &mut self,
        handle: DeviceHandle,
        mdio: &mut M,
    ) -> Result<()> {
        self.phy(handle)?.config_interrupt(mdio)
    }

    /// Enable and restart auto-negotiation
    pub fn config_aneg<M: MdioBus>(&mut self, handle: DeviceHandle, mdio: &mut M) -> Result<()> {
        self.phy(handle)?.config_aneg(mdio)
    }

    /// Current link parameters, `None` while the link is down
    pub fn read_status<M: MdioBus>(
        &mut self,
        handle: DeviceHandle,
        mdio: &mut M,
    ) -> Result<Option<LinkStatus>> {
        self.phy(handle)?.read_status(mdio)
    }

    /// Power the PHY down
    pub fn suspend<M: MdioBus>(&mut self, handle: DeviceHandle, mdio: &mut M) -> Result<()> {
        self.phy(handle)?.suspend(mdio)
    }

    /// Power the PHY back up
    pub fn resume<M: MdioBus>(&mut self, handle: DeviceHandle, mdio: &mut M) -> Result<()> {
        self.phy(handle)?.resume(mdio)
    }

    // =========================================================================
    // Debug Interface
    // =========================================================================

    /// Read the selected register on a device
    pub fn debug_show<M: MdioBus>(
        &self,
        handle: DeviceHandle,
        mdio: &mut M,
    ) -> Result<RegisterReadout> {
        self.selector.show(&self.phy(handle)?, mdio)
    }

    /// Run a debug store command against a device
    pub fn debug_store<M: MdioBus>(
        &self,
        handle: DeviceHandle,
        mdio: &mut M,
        input: &str,
    ) -> Result<usize> {
        self.selector.store(&self.phy(handle)?, mdio, input)
    }

    /// Tear the controller down, returning the line controller and delay
    pub fn into_parts(self) -> (L, D) {
        (self.lines, self.delay)
    }
}

impl<L, D, const MAX_DEVICES: usize> core::fmt::Debug for Tlk110Controller<L, D, MAX_DEVICES> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tlk110Controller")
            .field("config", &self.config)
            .field("latch", &self.latch)
            .field("selector", &self.selector)
            .field("devices", &self.devices)
            .finish_non_exhaustive()
    }
}

/// Controller for the two-PHY boards this driver targets
pub type Tlk110ControllerDefault<L, D> = Tlk110Controller<L, D, 2>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;
    use crate::boards::am335x_ice::Am335xIce;
    use crate::driver::error::{BusError, DeviceError, Error, LineError};
    use crate::hal::gpio::ResetLine;
    use crate::internal::phy_registers::{bmcr, bmsr, phy_reg};
    use crate::internal::tlk110_regs::{phycr, reg};
    use crate::test_utils::{LineFault, LineOp, MdioOp, MockDelay, MockLines, MockMdioBus};

    type TestController = Tlk110ControllerDefault<MockLines, MockDelay>;

    fn controller() -> TestController {
        Tlk110Controller::new(Tlk110Config::new(), MockLines::new(), MockDelay::new())
    }

    #[test]
    fn second_attach_skips_reset() {
        let mut tlk = controller();

        let port0 = tlk.attach(Am335xIce::PHY0_ADDR).unwrap();
        assert!(tlk.reset_performed());
        assert_eq!(tlk.lines().ops().len(), 10);

        let port1 = tlk.attach(Am335xIce::PHY1_ADDR).unwrap();
        assert_ne!(port0, port1);
        assert_eq!(tlk.lines().ops().len(), 10);
        assert_eq!(tlk.latch().count(), 1);
        assert_eq!(tlk.attached(), 2);
    }

    #[test]
    fn full_table_fails_before_touching_lines() {
        let mut tlk: Tlk110Controller<MockLines, MockDelay, 0> =
            Tlk110Controller::new(Tlk110Config::new(), MockLines::new(), MockDelay::new());

        let err = tlk.attach(1).unwrap_err();
        assert_eq!(err, Error::Device(DeviceError::NoFreeSlot));
        assert_eq!(err.status_code(), -12);
        assert!(tlk.lines().ops().is_empty());
        assert!(!tlk.reset_performed());
    }

    #[test]
    fn invalid_address_rejected() {
        let mut tlk = controller();
        assert_eq!(tlk.attach(32), Err(Error::Bus(BusError::InvalidPhyAddress)));
        assert_eq!(tlk.attached(), 0);
    }

    #[test]
    fn failed_reset_frees_slot_and_allows_retry() {
        let mut lines = MockLines::new();
        lines.inject(LineFault::Acquire(Am335xIce::reset_lines().aux_enable.id));
        let mut tlk: TestController =
            Tlk110Controller::new(Tlk110Config::new(), lines, MockDelay::new());

        let err = tlk.attach(1).unwrap_err();
        assert_eq!(err, Error::Line(LineError::RequestFailed(ResetLine::AuxEnable)));
        assert_eq!(tlk.attached(), 0);
        assert!(!tlk.reset_performed());

        let (mut lines, delay) = tlk.into_parts();
        lines.clear_faults();
        let mut tlk: TestController = Tlk110Controller::new(Tlk110Config::new(), lines, delay);
        tlk.attach(1).unwrap();
        tlk.attach(3).unwrap();
        assert!(tlk.reset_performed());
    }

    #[test]
    fn detach_frees_slot_and_keeps_lines() {
        let mut tlk = controller();
        let port0 = tlk.attach(1).unwrap();
        tlk.attach(3).unwrap();

        tlk.detach(port0).unwrap();
        assert_eq!(tlk.detach(port0), Err(Error::Device(DeviceError::InvalidHandle)));
        assert_eq!(tlk.phy(port0), Err(Error::Device(DeviceError::InvalidHandle)));

        let ops_before = tlk.lines().ops().len();
        let again = tlk.attach(1).unwrap();
        assert_eq!(tlk.phy(again).unwrap().address(), 1);
        assert_eq!(tlk.lines().ops().len(), ops_before);

        let (lines, _) = tlk.into_parts();
        assert_eq!(lines.held().len(), 4);
        assert!(!lines.ops().iter().any(|op| matches!(op, LineOp::Release(_))));
    }

    #[test]
    fn configure_calibrates_device() {
        let mut tlk = controller();
        let port = tlk.attach(3).unwrap();
        let mut mdio = MockMdioBus::new();

        tlk.configure(port, &mut mdio).unwrap();
        assert_eq!(mdio.get_register(3, reg::PHYCR), Some(phycr::MDIX_EN));
        assert!(mdio.ops().iter().all(|op| op.phy() == 3));
    }

    #[test]
    fn interrupt_callbacks() {
        let mut tlk = controller();
        let port = tlk.attach(1).unwrap();
        let mut mdio = MockMdioBus::new();

        tlk.config_interrupt(port, &mut mdio).unwrap();
        assert!(mdio.ops().is_empty());

        tlk.ack_interrupt(port, &mut mdio).unwrap();
        assert_eq!(
            mdio.ops(),
            [MdioOp::Read(1, reg::MISR1), MdioOp::Read(1, reg::MISR2)]
        );
    }

    #[test]
    fn generic_callbacks_delegate() {
        let mut tlk = controller();
        let port = tlk.attach(1).unwrap();
        let mut mdio = MockMdioBus::new();
        mdio.set_register(1, phy_reg::BMSR, bmsr::LINK_STATUS);
        mdio.set_register(1, phy_reg::BMCR, bmcr::SPEED_100);

        assert_eq!(
            tlk.read_status(port, &mut mdio).unwrap(),
            Some(LinkStatus::fast_half())
        );

        tlk.suspend(port, &mut mdio).unwrap();
        assert_eq!(
            mdio.get_register(1, phy_reg::BMCR),
            Some(bmcr::SPEED_100 | bmcr::POWER_DOWN)
        );
        tlk.resume(port, &mut mdio).unwrap();

        tlk.config_aneg(port, &mut mdio).unwrap();
        let bmcr_val = mdio.get_register(1, phy_reg::BMCR).unwrap();
        assert_ne!(bmcr_val & bmcr::AN_ENABLE, 0);
    }

    #[test]
    fn debug_selection_is_shared_between_devices() {
        let mut tlk = controller();
        let port0 = tlk.attach(1).unwrap();
        let port1 = tlk.attach(3).unwrap();
        let mut mdio = MockMdioBus::new();
        mdio.set_register(3, 0x03, 0xA201);

        assert_eq!(tlk.debug_store(port0, &mut mdio, "3 5"), Ok(3));
        assert_eq!(tlk.selected_register(), Some(3));

        let readout = tlk.debug_show(port0, &mut mdio).unwrap();
        assert_eq!(format!("{readout}"), "0x5\n");

        let readout = tlk.debug_show(port1, &mut mdio).unwrap();
        assert_eq!(format!("{readout}"), "0xa201\n");
    }

    #[test]
    fn debug_store_parse_error() {
        let mut tlk = controller();
        let port = tlk.attach(1).unwrap();
        let mut mdio = MockMdioBus::new();

        let err = tlk.debug_store(port, &mut mdio, "zz").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(tlk.selected_register(), None);
    }

    #[test]
    fn debug_output_names_controller() {
        let tlk = controller();
        assert!(format!("{tlk:?}").starts_with("Tlk110Controller"));
    }
}
