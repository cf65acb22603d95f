use crate::calibration::{LSB_12BIT, SENSE1_RESISTOR, SENSE2_RESISTOR};
use crate::conversion::{assemble_word, volts_to_celsius, SensorOutOfRange};
use crate::register::{OperatingMode, Register, ADC_RESOLUTION_8BIT, BOARD_ADDRESS};
use embedded_hal::i2c::I2c;
use log::{debug, trace, warn};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LTC2992Error<I2C> {
    I2c(I2C),
    SensorOutOfRange(SensorOutOfRange),
}

impl<I2C> From<SensorOutOfRange> for LTC2992Error<I2C> {
    fn from(err: SensorOutOfRange) -> Self {
        LTC2992Error::SensorOutOfRange(err)
    }
}

pub struct LTC2992InitConfig {
    /// Operating mode written to CTRLA
    pub mode: OperatingMode,
}

/// Voltages and currents of both monitored rails.
///
/// On the Greenland board rail 1 is the PV panel input and rail 2 is the
/// battery.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PowerRails {
    /// SENSE1 voltage, volts
    pub rail1_voltage: f64,
    /// Current through the SENSE1 resistor, amperes
    pub rail1_current: f64,
    /// SENSE2 voltage, volts
    pub rail2_voltage: f64,
    /// Current through the SENSE2 resistor, amperes
    pub rail2_current: f64,
}

impl PowerRails {
    /// `(rail1_voltage, rail1_current, rail2_voltage, rail2_current)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (
            self.rail1_voltage,
            self.rail1_current,
            self.rail2_voltage,
            self.rail2_current,
        )
    }
}

impl From<PowerRails> for (f64, f64, f64, f64) {
    fn from(rails: PowerRails) -> Self {
        rails.as_tuple()
    }
}

pub struct LTC2992Driver<I2C> {
    i2c: I2C,
}

impl<I2C> LTC2992Driver<I2C>
where
    I2C: I2c,
{
    ///
    ///
    /// # Arguments
    ///
    /// * `i2c`: The i2c bus the board sits on.
    /// * `init_config`: An optional config that sets the operating mode and forces 12-bit ADC
    /// resolution. If this is not provided, the chip is assumed to be configured already and
    /// nothing is written.
    ///
    /// returns: Result<LTC2992Driver<I2C>, LTC2992Error<<I2C as ErrorType>::Error>>
    pub fn new(
        i2c: I2C,
        init_config: Option<LTC2992InitConfig>,
    ) -> Result<Self, LTC2992Error<I2C::Error>> {
        let mut driver = Self { i2c };

        if let Some(config) = init_config {
            driver.set_operating_mode(config.mode)?;
            driver.set_twelve_bit_resolution()?;
        }

        Ok(driver)
    }

    /// Gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Board temperature from the LMT88 on GPIO1, in °C.
    ///
    /// Assumes the ADC is in 12-bit mode.
    pub fn get_board_temperature(&mut self) -> Result<f64, LTC2992Error<I2C::Error>> {
        let word = self.read12(Register::Gpio1Msb, Register::Gpio1Lsb)?;
        let volts = LSB_12BIT.gpio_voltage(word);

        let temp = volts_to_celsius(volts).map_err(|err| {
            warn!("LMT88 reading out of range: {} V (word {})", volts, word);
            err
        })?;
        debug!("board temperature: {} V -> {} C", volts, temp);

        Ok(temp)
    }

    /// Voltage and current of both rails.
    ///
    /// Registers are read in a fixed order: SENSE1, ΔSENSE1, SENSE2, ΔSENSE2, MSB before LSB.
    /// The first failed read aborts the whole measurement. Assumes the ADC is in 12-bit mode.
    pub fn get_power_rails(&mut self) -> Result<PowerRails, LTC2992Error<I2C::Error>> {
        let v1 = self.read12(Register::Sense1Msb, Register::Sense1Lsb)?;
        let i1 = self.read12(Register::DeltaSense1Msb, Register::DeltaSense1Lsb)?;
        let v2 = self.read12(Register::Sense2Msb, Register::Sense2Lsb)?;
        let i2 = self.read12(Register::DeltaSense2Msb, Register::DeltaSense2Lsb)?;

        let rails = PowerRails {
            rail1_voltage: LSB_12BIT.sense_voltage(v1),
            rail1_current: LSB_12BIT.current(i1, SENSE1_RESISTOR),
            rail2_voltage: LSB_12BIT.sense_voltage(v2),
            rail2_current: LSB_12BIT.current(i2, SENSE2_RESISTOR),
        };
        debug!("power rails: {:?}", rails);

        Ok(rails)
    }

    pub fn read_control_a(&mut self) -> Result<u8, LTC2992Error<I2C::Error>> {
        self.read(Register::CtrlA)
    }

    pub fn set_operating_mode(
        &mut self,
        mode: OperatingMode,
    ) -> Result<(), LTC2992Error<I2C::Error>> {
        let ctrla = self.read(Register::CtrlA)?;
        self.write(Register::CtrlA, mode.apply(ctrla))
    }

    /// Clears the 8-bit flag in NADC so conversions are 12-bit.
    pub fn set_twelve_bit_resolution(&mut self) -> Result<(), LTC2992Error<I2C::Error>> {
        let nadc = self.read(Register::NAdc)?;
        if nadc & ADC_RESOLUTION_8BIT == 0 {
            return Ok(());
        }
        self.write(Register::NAdc, nadc & !ADC_RESOLUTION_8BIT)
    }

    pub fn write(&mut self, register: Register, data: u8) -> Result<(), LTC2992Error<I2C::Error>> {
        trace!("write {:#04x} <- {:#04x}", register as u8, data);
        self.i2c
            .write(BOARD_ADDRESS, &[register as u8, data])
            .map_err(LTC2992Error::I2c)
    }

    pub fn read(&mut self, register: Register) -> Result<u8, LTC2992Error<I2C::Error>> {
        let mut read_buffer = [0u8; 1];
        self.i2c
            .write_read(BOARD_ADDRESS, &[register as u8], &mut read_buffer)
            .map_err(LTC2992Error::I2c)?;
        trace!("read {:#04x} -> {:#04x}", register as u8, read_buffer[0]);

        Ok(read_buffer[0])
    }

    /// Reads MSB then LSB and joins them into a 12-bit ADC word.
    pub fn read12(
        &mut self,
        register_msb: Register,
        register_lsb: Register,
    ) -> Result<u16, LTC2992Error<I2C::Error>> {
        let msb = self.read(register_msb)?;
        let lsb = self.read(register_lsb)?;

        Ok(assemble_word(msb, lsb))
    }
}

#[cfg(feature = "std")]
impl<I2C> std::fmt::Display for LTC2992Error<I2C>
where
    I2C: std::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LTC2992Error::I2c(i2c) => write!(f, "I2C Error: {i2c:?}"),
            LTC2992Error::SensorOutOfRange(err) => write!(f, "Sensor Error: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl<I2C> std::error::Error for LTC2992Error<I2C>
where
    I2C: std::fmt::Debug,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LTC2992Error::SensorOutOfRange(err) => Some(err),
            LTC2992Error::I2c(_) => None,
        }
    }
}
