//! Board-level calibration constants for the Greenland power board.
//!
//! LSB weights come from the LTC2992 datasheet for each ADC resolution. The
//! measurement functions in [`crate::driver`] only use the 12-bit set.

/// SENSE1 (PV input) current sense resistor, ohms.
pub const SENSE1_RESISTOR: f64 = 0.005;
/// SENSE2 (battery) current sense resistor, ohms.
pub const SENSE2_RESISTOR: f64 = 0.010;

/// Divider between the LMT88 output and GPIO1.
pub const LMT88_R_DIV: f64 = 0.8;

// LMT88 inverse transfer curve:
// temp = OFFSET + sqrt(RADICAND_BASE + (V0 - v) / SLOPE)
pub const LMT88_OFFSET_C: f64 = -1481.96;
pub const LMT88_RADICAND_BASE: f64 = 2.1962e6;
pub const LMT88_V0: f64 = 1.8639;
pub const LMT88_SLOPE: f64 = 3.88e-6;

/// Volts per LSB for each signal class at a given ADC resolution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LsbWeights {
    /// SENSE pin voltage
    pub sense: f64,
    /// ΔSENSE voltage across the sense resistor
    pub delta_sense: f64,
    /// GPIO pin voltage
    pub gpio: f64,
}

pub const LSB_12BIT: LsbWeights = LsbWeights {
    sense: 25.00e-3,
    delta_sense: 12.50e-6,
    gpio: 0.500e-3,
};

pub const LSB_8BIT: LsbWeights = LsbWeights {
    sense: 400.00e-3,
    delta_sense: 200.00e-6,
    gpio: 8.000e-3,
};

impl LsbWeights {
    /// Current through `resistor` for a ΔSENSE sample.
    pub fn current(&self, word: u16, resistor: f64) -> f64 {
        word as f64 * self.delta_sense / resistor
    }

    pub fn sense_voltage(&self, word: u16) -> f64 {
        word as f64 * self.sense
    }

    pub fn gpio_voltage(&self, word: u16) -> f64 {
        word as f64 * self.gpio
    }
}
