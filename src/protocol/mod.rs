//! Command protocol.
//!
//! Every operation on a [`Handle`] is one or more vendor control transfers on
//! a [`Transport`]. Settings and variables are moved as byte segments of
//! their fixed-size buffers.

mod handle;
mod transport;

use bitflags::bitflags;

pub use handle::{Handle, MAX_DUTY_CYCLE, MAX_TARGET};
pub use transport::Transport;

/// Vendor request codes.
pub mod command {
    /// Set the target (value = target)
    pub const SET_TARGET: u8 = 0xC0;
    /// Stop the motor and set the awaiting command error
    pub const STOP_MOTOR: u8 = 0xFF;
    /// Clear latched errors, including awaiting command
    pub const RUN_MOTOR: u8 = 0xB4;
    /// Force the duty cycle target (value = duty cycle)
    pub const FORCE_DUTY_CYCLE_TARGET: u8 = 0xF2;
    /// Force the duty cycle (value = duty cycle)
    pub const FORCE_DUTY_CYCLE: u8 = 0xF4;
    /// Read a variables segment (value = flags, index = offset)
    pub const GET_VARIABLES: u8 = 0xE5;
    /// Write a RAM settings segment (index = offset)
    pub const SET_RAM_SETTINGS: u8 = 0xE6;
    /// Read a RAM settings segment (index = offset)
    pub const GET_RAM_SETTINGS: u8 = 0xEA;
    /// Read an EEPROM settings segment (index = offset)
    pub const GET_EEPROM_SETTINGS: u8 = 0xE3;
    /// Write one EEPROM settings byte (value = byte, index = offset)
    pub const SET_EEPROM_SETTING: u8 = 0x13;
    /// Reload settings from EEPROM
    pub const REINITIALIZE: u8 = 0x10;
    /// Reset into the bootloader
    pub const START_BOOTLOADER: u8 = 0xFE;
}

bitflags! {
    /// Side effects requested along with a variables read.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GetVariablesFlags: u16 {
        /// Clear latched halting errors after reading them
        const CLEAR_ERROR_FLAGS_HALTING = 1 << 0;
        /// Clear the errors-occurred flags after reading them
        const CLEAR_ERROR_FLAGS_OCCURRED = 1 << 1;
        /// Reset the current chopping occurrence count after reading it
        const CLEAR_CURRENT_CHOPPING_OCCURRENCE_COUNT = 1 << 2;
    }
}
