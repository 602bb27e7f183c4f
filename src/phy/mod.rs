//! Ethernet PHY Drivers
//!
//! This module provides the generic PHY lifecycle trait, the TLK110 driver
//! and its debug register interface.
//!
//! # Architecture
//!
//! The PHY layer talks to hardware only through the [`MdioBus`] trait, so
//! the drivers work with any host MAC and can be tested against a mock bus.
//! Shared board lines are handled separately by [`crate::hal::reset`].
//!
//! # Example
//!
//! ```ignore
//! use ph_tlk110::phy::{PhyDriver, Tlk110};
//!
//! let mut phy = Tlk110::new(1);
//! if phy.verify_id(&mut mdio)? {
//!     phy.config_init(&mut mdio)?;
//! }
//!
//! // extended registers go through REGCR/ADDAR transparently
//! let gain = phy.read_register(&mut mdio, 0xA3)?;
//! ```
//!
//! [`MdioBus`]: crate::hal::mdio::MdioBus

pub mod debug;
pub mod generic;
pub mod tlk110;

pub use debug::{DebugCommand, DebugSelector, RegisterReadout};
pub use generic::{Duplex, LinkStatus, PhyDriver, Speed};
pub use tlk110::{InterruptStatus, TLK110_PHY_ID, TLK110_PHY_ID_MASK, Tlk110};
