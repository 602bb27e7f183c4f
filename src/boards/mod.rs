//! Board-specific wiring presets.
//!
//! A preset names the shared reset and routing lines and the PHY addresses
//! of one board, so hosts do not have to repeat them.
//!
//! # Supported Boards
//!
//! - AM335x Industrial Communication Engine (2x TLK110)

pub mod am335x_ice;
