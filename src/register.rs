//! LTC2992 register map and control values used on the Greenland power board.

/// Fixed I2C address of the LTC2992 on the Greenland power board.
pub const BOARD_ADDRESS: u8 = 0x6F;

/// Set in [`Register::NAdc`] to put the ADC in 8-bit mode. Cleared means 12-bit.
pub const ADC_RESOLUTION_8BIT: u8 = 0x80;

/// Bits of [`Register::CtrlA`] that hold the operating mode.
pub const OPERATING_MODE_MASK: u8 = 0x60;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Register {
    /// Operation control register A
    CtrlA = 0x00,
    /// Operation control register B
    CtrlB = 0x01,
    /// ADC resolution select
    NAdc = 0x04,
    /// ΔSENSE1 MSB
    DeltaSense1Msb = 0x14,
    /// ΔSENSE1 LSB
    DeltaSense1Lsb = 0x15,
    /// SENSE1 voltage MSB
    Sense1Msb = 0x1E,
    /// SENSE1 voltage LSB
    Sense1Lsb = 0x1F,
    /// GPIO1 value MSB
    Gpio1Msb = 0x28,
    /// GPIO1 value LSB
    Gpio1Lsb = 0x29,
    /// ΔSENSE2 MSB
    DeltaSense2Msb = 0x46,
    /// ΔSENSE2 LSB
    DeltaSense2Lsb = 0x47,
    /// SENSE2 voltage MSB
    Sense2Msb = 0x50,
    /// SENSE2 voltage LSB
    Sense2Lsb = 0x51,
}

/// Operating mode, written to bits 6:5 of [`Register::CtrlA`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum OperatingMode {
    Continuous = 0x00,
    Snapshot = 0x20,
    SingleCycle = 0x40,
    Shutdown = 0x60,
}

impl OperatingMode {
    /// Returns `ctrla` with its operating mode bits replaced by `self`.
    pub fn apply(self, ctrla: u8) -> u8 {
        (ctrla & !OPERATING_MODE_MASK) | self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_offsets_match_datasheet() {
        assert_eq!(Register::CtrlA as u8, 0x00);
        assert_eq!(Register::CtrlB as u8, 0x01);
        assert_eq!(Register::NAdc as u8, 0x04);
        assert_eq!(Register::DeltaSense1Msb as u8, 0x14);
        assert_eq!(Register::Sense1Lsb as u8, 0x1F);
        assert_eq!(Register::Gpio1Msb as u8, 0x28);
        assert_eq!(Register::DeltaSense2Lsb as u8, 0x47);
        assert_eq!(Register::Sense2Msb as u8, 0x50);
    }

    #[test]
    fn apply_mode_keeps_other_bits() {
        assert_eq!(OperatingMode::Shutdown.apply(0x00), 0x60);
        assert_eq!(OperatingMode::Continuous.apply(0xFF), 0x9F);
        assert_eq!(OperatingMode::Snapshot.apply(0x47), 0x27);
        assert_eq!(OperatingMode::SingleCycle.apply(0x1B), 0x5B);
    }
}
