//! Per-device state slots
//!
//! Fixed-capacity storage for attached PHYs. A slot is taken when a device
//! attaches and given back when it detaches or when its attach fails.
//! Handles carry a generation so a stale handle cannot reach a device that
//! later reused its slot.

use crate::driver::error::DeviceError;
use crate::phy::tlk110::Tlk110;

/// Reference to an attached device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceHandle {
    slot: u8,
    generation: u16,
}

impl DeviceHandle {
    /// Slot index inside the table
    pub const fn slot(&self) -> usize {
        self.slot as usize
    }
}

/// State kept for one attached device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    /// Driver bound to the device's PHY address
    pub phy: Tlk110,
    generation: u16,
}

/// Fixed-capacity device table
#[derive(Debug)]
pub struct DeviceTable<const N: usize> {
    slots: [Option<DeviceState>; N],
    next_generation: u16,
}

impl<const N: usize> DeviceTable<N> {
    /// Create an empty table
    pub const fn new() -> Self {
        Self {
            slots: [None; N],
            next_generation: 0,
        }
    }

    /// Take a free slot for `phy`
    pub fn allocate(&mut self, phy: Tlk110) -> Result<DeviceHandle, DeviceError> {
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(DeviceError::NoFreeSlot)?;
        let slot_id = u8::try_from(slot).map_err(|_| DeviceError::NoFreeSlot)?;

        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        self.slots[slot] = Some(DeviceState { phy, generation });

        Ok(DeviceHandle {
            slot: slot_id,
            generation,
        })
    }

    /// Give a slot back, returning what it held
    pub fn free(&mut self, handle: DeviceHandle) -> Result<DeviceState, DeviceError> {
        self.get(handle)?;
        self.slots[handle.slot()]
            .take()
            .ok_or(DeviceError::InvalidHandle)
    }

    /// State behind a handle
    pub fn get(&self, handle: DeviceHandle) -> Result<&DeviceState, DeviceError> {
        match self.slots.get(handle.slot()) {
            Some(Some(state)) if state.generation == handle.generation => Ok(state),
            _ => Err(DeviceError::InvalidHandle),
        }
    }

    /// Number of attached devices
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no device is attached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of devices
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for DeviceTable<N> {
    fn default() -> Self {
        Self::new()
    }
}
