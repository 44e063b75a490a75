/*
 * Filename: config.rs
 * Description: value tables for the chip's CONTROL/CONFIG registers,
 * plus the documented power on defaults.
 */

///LED drive strength settings (CONTROL bits 7:6).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedDrive {
    Ma100 = 0,
    Ma50 = 1,
    Ma25 = 2,
    Ma12_5 = 3,
}

///Proximity gain settings (CONTROL bits 3:2).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProximityGain {
    X1 = 0,
    X2 = 1,
    X4 = 2,
    X8 = 3,
}

///ALS gain settings (CONTROL bits 1:0).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlsGain {
    X1 = 0,
    X4 = 1,
    X16 = 2,
    X64 = 3,
}

///Gesture gain settings (GCONF2 bits 6:5).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureGain {
    X1 = 0,
    X2 = 1,
    X4 = 2,
    X8 = 3,
}

///LED boost settings (CONFIG2 bits 5:4), percent of the drive current.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedBoost {
    Percent100 = 0,
    Percent150 = 1,
    Percent200 = 2,
    Percent300 = 3,
}

///Gesture wait time settings (GCONF2 bits 2:0).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureWaitTime {
    Ms0 = 0,
    Ms2_8 = 1,
    Ms5_6 = 2,
    Ms8_4 = 3,
    Ms14_0 = 4,
    Ms22_4 = 5,
    Ms30_8 = 6,
    Ms39_2 = 7,
}

//Gesture engine tuning parameters.
pub const GESTURE_THRESHOLD_OUT: u8 = 10;
pub const GESTURE_SENSITIVITY_1: u8 = 50;
pub const GESTURE_SENSITIVITY_2: u8 = 20;

///Wait period (ms) between gesture FIFO reads.
pub const FIFO_PAUSE_TIME_MS: u32 = 30;

//Power on defaults, the values a full bring up programs into the
//chip before enabling anything.
pub const DEFAULT_ATIME: u8 = 0xD6; // 101ms
pub const DEFAULT_WTIME: u8 = 0xF6; // 27ms
pub const DEFAULT_PROX_PPULSE: u8 = 0x87; // 16us, 8 pulses
pub const DEFAULT_GESTURE_PPULSE: u8 = 0x89; // 16us, 10 pulses
pub const DEFAULT_POFFSET_UR: u8 = 0;
pub const DEFAULT_POFFSET_DL: u8 = 0;
pub const DEFAULT_CONFIG1: u8 = 0x60; // no 12x WTIME factor
pub const DEFAULT_LDRIVE: LedDrive = LedDrive::Ma100;
pub const DEFAULT_PGAIN: ProximityGain = ProximityGain::X4;
pub const DEFAULT_AGAIN: AlsGain = AlsGain::X4;
pub const DEFAULT_PILT: u8 = 0;
pub const DEFAULT_PIHT: u8 = 50;
pub const DEFAULT_AILT: u16 = 0xFFFF; // forces an interrupt for calibration
pub const DEFAULT_AIHT: u16 = 0;
pub const DEFAULT_PERS: u8 = 0x11; // 2 consecutive prox or ALS readings
pub const DEFAULT_CONFIG2: u8 = 0x01; // no saturation ints or LED boost
pub const DEFAULT_CONFIG3: u8 = 0; // all photodiodes, no SAI
pub const DEFAULT_GPENTH: u8 = 40;
pub const DEFAULT_GEXTH: u8 = 30;
pub const DEFAULT_GCONF1: u8 = 0x40; // 4 gesture events for int, 1 for exit
pub const DEFAULT_GGAIN: GestureGain = GestureGain::X4;
pub const DEFAULT_GLDRIVE: LedDrive = LedDrive::Ma100;
pub const DEFAULT_GWTIME: GestureWaitTime = GestureWaitTime::Ms2_8;
pub const DEFAULT_GOFFSET: u8 = 0;
pub const DEFAULT_GPULSE: u8 = 0xC9; // 32us, 10 pulses
pub const DEFAULT_GCONF3: u8 = 0;
pub const DEFAULT_GIEN: u8 = 0;

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn drive_values() {
        assert_eq!(LedDrive::Ma100 as u8, 0);
        assert_eq!(LedDrive::Ma12_5 as u8, 3);
    }

    #[test]
    fn gain_values() {
        assert_eq!(ProximityGain::X8 as u8, 3);
        assert_eq!(AlsGain::X64 as u8, 3);
        assert_eq!(GestureGain::X4 as u8, 2);
    }

    #[test]
    fn wait_time_values() {
        assert_eq!(GestureWaitTime::Ms0 as u8, 0);
        assert_eq!(GestureWaitTime::Ms39_2 as u8, 7);
    }

    #[test]
    fn default_gains_fit_their_fields() {
        //both gain fields are two bits wide.
        assert!((DEFAULT_PGAIN as u8) <= 3);
        assert!((DEFAULT_AGAIN as u8) <= 3);
        assert!((DEFAULT_GGAIN as u8) <= 3);
    }
}
