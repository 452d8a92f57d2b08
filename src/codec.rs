//! Binary codec for the settings and variables buffers.
//!
//! Decoding never fails: whatever bit pattern is in the buffer is reproduced
//! in the resulting object, and correcting it is [`Settings::fix`]'s job.

use crate::catalog::{self, var, Encoding, Product, Register, SETTINGS_SIZE, VARIABLES_SIZE};
use crate::settings::{baud_from_generator, baud_generator, Settings};
use crate::variables::Variables;

/// Encodes settings into a fresh zeroed buffer.
///
/// Only registers that exist on the settings' product are written; with no
/// product the buffer stays zero.
pub fn encode_settings(settings: &Settings) -> [u8; SETTINGS_SIZE] {
    let mut buf = [0; SETTINGS_SIZE];
    encode_settings_into(settings, &mut buf);
    buf
}

/// Encodes settings on top of an existing buffer.
///
/// Bits that belong to no register of the product keep their current value.
pub fn encode_settings_into(settings: &Settings, buf: &mut [u8; SETTINGS_SIZE]) {
    let Some(product) = settings.product() else {
        return;
    };
    for field in catalog::fields(product) {
        if let Some(reg) = catalog::register(product, field) {
            write_register(buf, reg, settings.get(field));
        }
    }
}

/// Decodes a settings buffer for `product`.
///
/// Fields the product does not have are left at zero. With no product the
/// result is empty.
pub fn decode_settings(buf: &[u8; SETTINGS_SIZE], product: Option<Product>) -> Settings {
    let mut settings = Settings::new();
    let Some(product) = product else {
        return settings;
    };
    settings.set_product(product);
    for field in catalog::fields(product) {
        if let Some(reg) = catalog::register(product, field) {
            settings.set(field, read_register(buf, reg));
        }
    }
    settings
}

/// Decodes a variables buffer.
pub fn decode_variables(buf: &[u8; VARIABLES_SIZE]) -> Variables {
    let u16_at = |at: usize| u16::from_le_bytes([buf[at], buf[at + 1]]);
    let i16_at = |at: usize| i16::from_le_bytes([buf[at], buf[at + 1]]);

    Variables {
        input: u16_at(var::INPUT),
        target: u16_at(var::TARGET),
        feedback: u16_at(var::FEEDBACK),
        scaled_feedback: u16_at(var::SCALED_FEEDBACK),
        integral: i16_at(var::INTEGRAL),
        duty_cycle_target: i16_at(var::DUTY_CYCLE_TARGET),
        duty_cycle: i16_at(var::DUTY_CYCLE),
        current_low_res: buf[var::CURRENT_LOW_RES],
        pid_period_exceeded: buf[var::PID_PERIOD_EXCEEDED] & 1 != 0,
        pid_period_count: u16_at(var::PID_PERIOD_COUNT),
        error_flags_halting: u16_at(var::ERROR_FLAGS_HALTING),
        error_flags_occurred: u16_at(var::ERROR_FLAGS_OCCURRED),
        force_mode: buf[var::FLAG_BYTE1] & 3,
        vin_voltage: u16_at(var::VIN_VOLTAGE),
        current: u16_at(var::CURRENT),
        device_reset: buf[var::DEVICE_RESET],
        up_time: u32::from_le_bytes([
            buf[var::UP_TIME],
            buf[var::UP_TIME + 1],
            buf[var::UP_TIME + 2],
            buf[var::UP_TIME + 3],
        ]),
        rc_pulse_width: u16_at(var::RC_PULSE_WIDTH),
        fbt_reading: u16_at(var::FBT_READING),
        analog_reading_sda: u16_at(var::ANALOG_READING_SDA),
        analog_reading_fba: u16_at(var::ANALOG_READING_FBA),
        digital_readings: buf[var::DIGITAL_READINGS],
        raw_current: u16_at(var::RAW_CURRENT),
        encoded_hard_current_limit: u16_at(var::ENCODED_HARD_CURRENT_LIMIT),
        last_duty_cycle: i16_at(var::LAST_DUTY_CYCLE),
        current_chopping_consecutive_count: buf[var::CURRENT_CHOPPING_CONSECUTIVE_COUNT],
        current_chopping_occurrence_count: buf[var::CURRENT_CHOPPING_OCCURRENCE_COUNT],
    }
}

fn read_register(buf: &[u8], reg: Register) -> i64 {
    let at = reg.offset;
    let word = || u16::from_le_bytes([buf[at], buf[at + 1]]);
    match reg.encoding {
        Encoding::U8 => i64::from(buf[at]),
        Encoding::U16 => i64::from(word()),
        Encoding::I16 => i64::from(word() as i16),
        Encoding::Bit(bit) => i64::from(buf[at] >> bit & 1),
        Encoding::Bits(shift, mask) => i64::from(buf[at] >> shift & mask),
        Encoding::BaudGenerator => i64::from(baud_from_generator(word())),
        Encoding::Scaled(bytes, unit) => {
            let raw = buf[at..at + usize::from(bytes)]
                .iter()
                .rev()
                .fold(0u64, |acc, &b| acc << 8 | u64::from(b));
            (raw * u64::from(unit)) as i64
        }
    }
}

fn write_register(buf: &mut [u8], reg: Register, value: i64) {
    let at = reg.offset;
    match reg.encoding {
        Encoding::U8 => buf[at] = value as u8,
        Encoding::U16 | Encoding::I16 => {
            buf[at..at + 2].copy_from_slice(&(value as u16).to_le_bytes());
        }
        Encoding::Bit(bit) => {
            if value != 0 {
                buf[at] |= 1 << bit;
            } else {
                buf[at] &= !(1 << bit);
            }
        }
        Encoding::Bits(shift, mask) => {
            buf[at] = (buf[at] & !(mask << shift)) | ((value as u8 & mask) << shift);
        }
        Encoding::BaudGenerator => {
            buf[at..at + 2].copy_from_slice(&baud_generator(value as u32).to_le_bytes());
        }
        Encoding::Scaled(bytes, unit) => {
            let bytes = usize::from(bytes);
            let max = (1u64 << (bytes * 8)) - 1;
            let unit = u64::from(unit);
            let raw = ((value.max(0) as u64 + unit / 2) / unit).min(max);
            buf[at..at + bytes].copy_from_slice(&raw.to_le_bytes()[..bytes]);
        }
    }
}
