//!
//! A platform-agnostic driver for the LTC2992 dual power monitor on the Greenland power board.
//! Built using embedded-hal.
//!
//! The board wires SENSE1 to the PV panel input, SENSE2 to the battery, and an LMT88 analog
//! temperature sensor to GPIO1 through a 0.8 resistive divider. The driver reads the 12-bit ADC
//! results over I2C and converts them to volts, amperes and degrees Celsius.
//!

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod calibration;
pub mod conversion;
pub mod driver;
pub mod register;

pub use conversion::{assemble_word, volts_to_celsius, SensorOutOfRange};
pub use driver::*;
pub use register::{OperatingMode, Register, BOARD_ADDRESS};
