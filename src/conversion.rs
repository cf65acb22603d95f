//! Pure conversions from LTC2992 register contents to physical values.

use crate::calibration::{
    LMT88_OFFSET_C, LMT88_RADICAND_BASE, LMT88_R_DIV, LMT88_SLOPE, LMT88_V0,
};

/// Largest value an assembled 12-bit ADC word can take.
pub const MAX_WORD: u16 = 0x0FFF;

/// The LMT88 voltage lies outside the range its transfer curve can invert.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SensorOutOfRange {
    /// GPIO voltage that was passed in, before undoing the divider
    pub volts: f64,
}

/// Joins an MSB/LSB register pair into a 12-bit ADC word.
///
/// The LTC2992 left-justifies 12-bit results in the 16-bit field, so the low
/// nibble of `lsb` is padding and gets dropped.
pub fn assemble_word(msb: u8, lsb: u8) -> u16 {
    u16::from_be_bytes([msb, lsb]) >> 4
}

/// Converts the voltage seen on GPIO1 into an LMT88 temperature in °C.
///
/// The voltage is first scaled back up through the 0.8 divider, then run
/// through the closed-form inverse of the LMT88 transfer curve. A voltage
/// that would need the square root of a negative number (or a NaN input) is
/// rejected with [`SensorOutOfRange`].
pub fn volts_to_celsius(volts: f64) -> Result<f64, SensorOutOfRange> {
    let divided = volts / LMT88_R_DIV;
    let radicand = LMT88_RADICAND_BASE + (LMT88_V0 - divided) / LMT88_SLOPE;

    if radicand.is_nan() || radicand < 0.0 {
        return Err(SensorOutOfRange { volts });
    }

    Ok(LMT88_OFFSET_C + libm::sqrt(radicand))
}

#[cfg(feature = "std")]
impl std::fmt::Display for SensorOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LMT88 voltage {} V is outside the sensor range", self.volts)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SensorOutOfRange {}
