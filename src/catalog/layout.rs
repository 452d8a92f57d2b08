//! Byte layouts of the settings and variables buffers.
//!
//! All multi-byte values are little-endian.

/// Size of the settings buffer (EEPROM and RAM share the same layout).
pub const SETTINGS_SIZE: usize = 0x6B;

/// Size of the variables buffer.
pub const VARIABLES_SIZE: usize = 0x31;

/// Settings offset of the "not initialized" byte.
///
/// Writing a nonzero value here and reinitializing makes the firmware restore
/// its default settings. It is never encoded from a [`crate::Settings`].
pub const NOT_INITIALIZED: usize = 0x00;

/// Frequency the baud rate generator divides down from.
pub const BAUD_CLOCK_HZ: u32 = 48_000_000;

/// How a setting is stored in the settings buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Unsigned byte
    U8,
    /// Unsigned 16-bit word
    U16,
    /// Signed 16-bit word
    I16,
    /// Single bit of a byte
    Bit(u8),
    /// Masked field of a byte: `(shift, mask)`, mask applied after shifting
    Bits(u8, u8),
    /// Baud rate stored as a 16-bit generator value
    BaudGenerator,
    /// Unsigned value stored divided by a unit: `(bytes, unit)`
    Scaled(u8, u32),
}

impl Encoding {
    /// Number of buffer bytes the encoding occupies.
    pub const fn width(self) -> usize {
        match self {
            Encoding::U8 | Encoding::Bit(_) | Encoding::Bits(_, _) => 1,
            Encoding::U16 | Encoding::I16 | Encoding::BaudGenerator => 2,
            Encoding::Scaled(bytes, _) => bytes as usize,
        }
    }
}

/// Location and encoding of one setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    /// First byte in the settings buffer
    pub offset: usize,
    /// Storage format
    pub encoding: Encoding,
}

impl Register {
    /// Byte range covered by this register.
    pub const fn span(&self) -> core::ops::Range<usize> {
        self.offset..self.offset + self.encoding.width()
    }
}

/// Offsets into the variables buffer.
#[allow(missing_docs)]
pub mod var {
    pub const INPUT: usize = 0x00;
    pub const TARGET: usize = 0x02;
    pub const FEEDBACK: usize = 0x04;
    pub const SCALED_FEEDBACK: usize = 0x06;
    pub const INTEGRAL: usize = 0x08;
    pub const DUTY_CYCLE_TARGET: usize = 0x0A;
    pub const DUTY_CYCLE: usize = 0x0C;
    pub const CURRENT_LOW_RES: usize = 0x0E;
    pub const PID_PERIOD_EXCEEDED: usize = 0x0F;
    pub const PID_PERIOD_COUNT: usize = 0x10;
    pub const ERROR_FLAGS_HALTING: usize = 0x12;
    pub const ERROR_FLAGS_OCCURRED: usize = 0x14;
    pub const FLAG_BYTE1: usize = 0x16;
    pub const VIN_VOLTAGE: usize = 0x17;
    pub const CURRENT: usize = 0x19;
    pub const DEVICE_RESET: usize = 0x1B;
    pub const UP_TIME: usize = 0x1C;
    pub const RC_PULSE_WIDTH: usize = 0x20;
    pub const FBT_READING: usize = 0x22;
    pub const ANALOG_READING_SDA: usize = 0x24;
    pub const ANALOG_READING_FBA: usize = 0x26;
    pub const DIGITAL_READINGS: usize = 0x28;
    pub const RAW_CURRENT: usize = 0x29;
    pub const ENCODED_HARD_CURRENT_LIMIT: usize = 0x2B;
    pub const LAST_DUTY_CYCLE: usize = 0x2D;
    pub const CURRENT_CHOPPING_CONSECUTIVE_COUNT: usize = 0x2F;
    pub const CURRENT_CHOPPING_OCCURRENCE_COUNT: usize = 0x30;
}
