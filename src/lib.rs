#![no_std]

#[allow(unused_imports)]
#[macro_use]
extern crate alloc;


use embedded_hal::i2c;


//Import the module with the register map of the chip.
mod registers;
pub use crate::registers::{Bitmasks, Registers};

//Import the ENABLE register features and the decoded mode wrapper.
mod mode;
pub use crate::mode::{Feature, Mode, ALL_MODES_ON};

//Import the gain/drive value tables and the power on defaults.
mod config;
#[allow(unused_imports)]
pub use crate::config::*;


/// APDS-9950 Sensor Address
pub const SENSOR_ADDR: u8 = 0x39;

//Both ID register values seen on production parts.
pub const ID_1: u8 = 0x12;
pub const ID_2: u8 = 0x10;

///Largest payload a single block write can carry after the register byte.
pub const MAX_BLOCK_LEN: usize = 32;


//Impliment Error type for our driver.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    I2C(E),
    InvalidId,
    BlockTooLong,
}


pub struct Sensor<I2C>
where I2C: i2c::I2c
{
    i2c: I2C,
    address: u8,
}

//Impliment functions for the sensor that require the embedded-hal
//I2C.
impl<E, I2C> Sensor<I2C>
where I2C: i2c::I2c<Error = E>
{

    //We're implimenting a new function to return an instance of the sensor
    pub fn new(i2c: I2C, address: u8) -> Self {
        Sensor { i2c, address }
    }


    pub fn init(&mut self) -> Result<InitializedSensor<I2C>, Error<E>>
    {
        //The bus itself comes up in the HAL, so the first thing left
        //to do here is check we're actually talking to an APDS-9950.
        let id = self.wire_read_data_byte(Registers::ID)?;
        if !(id == ID_1 || id == ID_2) {
            return Err(Error::InvalidId);
        }

        //Clear the ENABLE register so the chip starts with every
        //feature off, whatever state the last user left it in.
        self.set_mode(Feature::All, false)?;

        return Ok(InitializedSensor { sensor: self });
    }


    ///Reads the current contents of the ENABLE register.
    ///
    ///No register select is issued, the chip hands back whatever its
    ///internal register pointer sits at. Only call this right after an
    ///access that parked the pointer at ENABLE.
    pub fn get_mode(&mut self) -> Result<Mode, Error<E>>
    {
        let mut buf = [0];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(Error::I2C)?;

        Ok(Mode::new(buf[0]))
    }


    ///Enables or disables one feature, or all of them at once.
    pub fn set_mode(&mut self, feature: Feature, enable: bool) -> Result<(), Error<E>>
    {
        //Read current ENABLE register; a failed read means we must
        //not write anything back.
        let mut reg_val = self.get_mode()?.bits;

        //Change only the bit(s) asked for.
        match feature {
            Feature::All => {
                reg_val = if enable { ALL_MODES_ON } else { 0x00 };
            }
            single => {
                if enable {
                    reg_val |= single.mask();
                } else {
                    reg_val &= !single.mask();
                }
            }
        }

        //Write value back to ENABLE register.
        self.wire_write_data_byte(Registers::ENABLE, reg_val)
    }


    ///Writes a single byte to the device, no register prefix.
    pub fn wire_write_byte(&mut self, val: u8) -> Result<(), Error<E>>
    {
        self.i2c
            .write(self.address, &[val])
            .map_err(Error::I2C)
    }


    ///Writes one byte to the given register in a single transaction.
    pub fn wire_write_data_byte(&mut self, reg: Registers, val: u8) -> Result<(), Error<E>>
    {
        self.i2c
            .write(self.address, &[reg.addr(), val])
            .map_err(Error::I2C)
    }


    ///Writes a block of bytes to the given register in a single
    ///transaction: register select first, then the whole payload.
    pub fn wire_write_data_block(&mut self, reg: Registers, data: &[u8]) -> Result<(), Error<E>>
    {
        //The transaction gets staged in a fixed buffer, same size as
        //the usual two wire transfer limit.
        if data.len() > MAX_BLOCK_LEN {
            return Err(Error::BlockTooLong);
        }

        let mut buf = [0u8; MAX_BLOCK_LEN + 1];
        buf[0] = reg.addr();
        buf[1..=data.len()].copy_from_slice(data);

        self.i2c
            .write(self.address, &buf[..=data.len()])
            .map_err(Error::I2C)
    }


    ///Reads a single byte from the given register.
    pub fn wire_read_data_byte(&mut self, reg: Registers) -> Result<u8, Error<E>>
    {
        //Indicate which register we want to read from. If the select
        //write fails the whole operation fails, nothing gets read.
        self.wire_write_byte(reg.addr())?;

        //Read from register. A device that supplies no byte fails the
        //transfer instead of leaving us with a stale value.
        let mut buf = [0];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(Error::I2C)?;

        Ok(buf[0])
    }


    ///Reads `buf.len()` bytes starting at the given register and
    ///returns how many were read.
    pub fn wire_read_data_block(&mut self, reg: Registers, buf: &mut [u8]) -> Result<usize, Error<E>>
    {
        //Indicate which register we want to read from.
        self.wire_write_byte(reg.addr())?;

        //Read block data. The bus master clocks out exactly as many
        //bytes as the buffer holds, so a completed transfer always
        //filled the caller's buffer.
        self.i2c
            .read(self.address, buf)
            .map_err(Error::I2C)?;

        Ok(buf.len())
    }
}


//This stucture encapsulates the Sensor structure after the chip's
//identity has been verified; enforcing correct method availbility.
pub struct InitializedSensor<'a, I2C>
where I2C: i2c::I2c
{
    sensor: &'a mut Sensor<I2C>,
}


impl<'a, E, I2C> InitializedSensor<'a, I2C>
where I2C: i2c::I2c<Error = E>
{
    pub fn get_mode(&mut self) -> Result<Mode, Error<E>> {
        let m = self.sensor.get_mode()?;
        Ok(m)
    }

    pub fn set_mode(&mut self, feature: Feature, enable: bool) -> Result<(), Error<E>> {
        self.sensor.set_mode(feature, enable)
    }

    ///Turn the APDS-9950 on.
    pub fn enable_power(&mut self) -> Result<(), Error<E>> {
        self.set_mode(Feature::Power, true)
    }

    ///Turn the APDS-9950 off.
    pub fn disable_power(&mut self) -> Result<(), Error<E>> {
        self.set_mode(Feature::Power, false)
    }
}




#[cfg(test)]
mod initialized_sensor_tests {
    use embedded_hal_mock::eh1::i2c::{
        Mock as I2cMock,
        Transaction as I2cTransaction,
    };

    use super::*;

    #[test]
    fn enable_power()
    {
        let expected = [
            I2cTransaction::read(SENSOR_ADDR, vec![0x00]),
            I2cTransaction::write(SENSOR_ADDR, vec![0x00, 0x01]),
        ];

        //Skip doing the INIT of the sensor.
        let i2c = I2cMock::new(&expected);
        let mut sensor_instance = Sensor::new(i2c, SENSOR_ADDR);
        let mut inited_sensor = InitializedSensor {
            sensor: &mut sensor_instance
        };

        let r = inited_sensor.enable_power();

        assert!(r.is_ok());
        inited_sensor.sensor.i2c.done();
    }

    #[test]
    fn disable_power_keeps_other_features()
    {
        //powering down must leave the gesture and proximity bits be.
        let expected = [
            I2cTransaction::read(SENSOR_ADDR, vec![0x45]),
            I2cTransaction::write(SENSOR_ADDR, vec![0x00, 0x44]),
        ];

        let i2c = I2cMock::new(&expected);
        let mut sensor_instance = Sensor::new(i2c, SENSOR_ADDR);
        let mut inited_sensor = InitializedSensor {
            sensor: &mut sensor_instance
        };

        let r = inited_sensor.disable_power();

        assert!(r.is_ok());
        inited_sensor.sensor.i2c.done();
    }

    #[test]
    fn get_mode_after_init()
    {
        let expected = [
            I2cTransaction::read(SENSOR_ADDR, vec![0x47]),
        ];

        let i2c = I2cMock::new(&expected);
        let mut sensor_instance = Sensor::new(i2c, SENSOR_ADDR);
        let mut inited_sensor = InitializedSensor {
            sensor: &mut sensor_instance
        };

        let r = inited_sensor.get_mode();

        assert!(r.is_ok());
        let m = r.unwrap();
        assert!(m.is_power_on());
        assert!(m.is_proximity_enabled());
        assert!(m.is_gesture_enabled());
        assert!(!m.is_wait_enabled());
        inited_sensor.sensor.i2c.done();
    }

    #[test]
    fn init_then_power_on()
    {
        //the whole bring up: identity check, features cleared, then
        //just the power bit raised.
        let expected = [
            I2cTransaction::write(SENSOR_ADDR, vec![Registers::ID.addr()]),
            I2cTransaction::read(SENSOR_ADDR, vec![ID_1]),
            I2cTransaction::read(SENSOR_ADDR, vec![0x7F]),
            I2cTransaction::write(SENSOR_ADDR, vec![0x00, 0x00]),
            I2cTransaction::read(SENSOR_ADDR, vec![0x00]),
            I2cTransaction::write(SENSOR_ADDR, vec![0x00, 0x01]),
        ];

        let i2c = I2cMock::new(&expected);
        let mut sensor_instance = Sensor::new(i2c, SENSOR_ADDR);

        {
            let inited_sensor = sensor_instance.init();
            assert!(inited_sensor.is_ok());
            assert!(inited_sensor.unwrap().enable_power().is_ok());
        }

        sensor_instance.i2c.done();
    }
}
