//! Variables model: a read-only snapshot of the jrk's state.

use crate::catalog::{ErrorFlags, Pin, CONTROL_PIN_COUNT};

/// Analog reading reported for pins that cannot be read as analog.
pub const ANALOG_READING_UNAVAILABLE: u16 = 0xFFFF;

/// Snapshot of the device variables, produced by
/// [`decode_variables`](crate::codec::decode_variables).
///
/// The default value is all zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Variables {
    pub(crate) input: u16,
    pub(crate) target: u16,
    pub(crate) feedback: u16,
    pub(crate) scaled_feedback: u16,
    pub(crate) integral: i16,
    pub(crate) duty_cycle_target: i16,
    pub(crate) duty_cycle: i16,
    pub(crate) current_low_res: u8,
    pub(crate) pid_period_exceeded: bool,
    pub(crate) pid_period_count: u16,
    pub(crate) error_flags_halting: u16,
    pub(crate) error_flags_occurred: u16,
    pub(crate) force_mode: u8,
    pub(crate) vin_voltage: u16,
    pub(crate) current: u16,
    pub(crate) device_reset: u8,
    pub(crate) up_time: u32,
    pub(crate) rc_pulse_width: u16,
    pub(crate) fbt_reading: u16,
    pub(crate) analog_reading_sda: u16,
    pub(crate) analog_reading_fba: u16,
    pub(crate) digital_readings: u8,
    pub(crate) raw_current: u16,
    pub(crate) encoded_hard_current_limit: u16,
    pub(crate) last_duty_cycle: i16,
    pub(crate) current_chopping_consecutive_count: u8,
    pub(crate) current_chopping_occurrence_count: u8,
}

macro_rules! getters {
    ($($(#[$doc:meta])* $name:ident: $ty:ty;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&self) -> $ty {
                self.$name
            }
        )*
    };
}

impl Variables {
    getters! {
        /// Input value, after noise filtering.
        input: u16;
        /// Target the PID loop is driving towards (0 to 4095).
        target: u16;
        /// Raw feedback value.
        feedback: u16;
        /// Feedback after scaling (0 to 4095).
        scaled_feedback: u16;
        /// Accumulated integral term.
        integral: i16;
        /// Duty cycle the PID loop asks for (-600 to 600).
        duty_cycle_target: i16;
        /// Duty cycle applied to the motor (-600 to 600).
        duty_cycle: i16;
        /// Upper byte of the raw current reading.
        current_low_res: u8;
        /// Whether the last PID period took too long.
        pid_period_exceeded: bool;
        /// PID periods since the last read that cleared it.
        pid_period_count: u16;
        /// Force mode code, see [`ForceMode`](crate::ForceMode).
        force_mode: u8;
        /// VIN voltage in millivolts.
        vin_voltage: u16;
        /// Motor current in milliamps.
        current: u16;
        /// Cause of the last reset, see [`DeviceReset`](crate::DeviceReset).
        device_reset: u8;
        /// Milliseconds since the last reset.
        up_time: u32;
        /// Width of the last RC pulse in units of 1/12 µs, 0 if invalid.
        rc_pulse_width: u16;
        /// Frequency feedback reading.
        fbt_reading: u16;
        /// Raw current sense reading.
        raw_current: u16;
        /// Hardware current limit in effect.
        encoded_hard_current_limit: u16;
        /// Duty cycle applied in the previous PID period.
        last_duty_cycle: i16;
        /// Consecutive PID periods with current chopping.
        current_chopping_consecutive_count: u8;
        /// PID periods with current chopping since the count was last cleared.
        current_chopping_occurrence_count: u8;
    }

    /// Errors currently stopping the motor.
    pub fn error_flags_halting(&self) -> ErrorFlags {
        ErrorFlags::from_bits_retain(self.error_flags_halting)
    }

    /// Errors that occurred since the flags were last cleared.
    pub fn error_flags_occurred(&self) -> ErrorFlags {
        ErrorFlags::from_bits_retain(self.error_flags_occurred)
    }

    /// `scaled_feedback - target` with 16-bit wraparound.
    pub fn error(&self) -> i16 {
        self.scaled_feedback.wrapping_sub(self.target) as i16
    }

    /// Left-justified analog reading of a pin.
    ///
    /// Only SDA/AN and FBA are sampled; every other pin, including pin
    /// numbers past the last pin, reads [`ANALOG_READING_UNAVAILABLE`].
    pub fn analog_reading(&self, pin: impl Into<u8>) -> u16 {
        match Pin::from_code(pin.into()) {
            Some(Pin::Sda) => self.analog_reading_sda,
            Some(Pin::Fba) => self.analog_reading_fba,
            _ => ANALOG_READING_UNAVAILABLE,
        }
    }

    /// Digital reading of a pin; false for pin numbers past the last pin.
    pub fn digital_reading(&self, pin: impl Into<u8>) -> bool {
        let pin = usize::from(pin.into());
        pin < CONTROL_PIN_COUNT && self.digital_readings >> pin & 1 != 0
    }
}
