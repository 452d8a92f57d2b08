//! One-sentence health summaries and display names.

use alloc::format;
use alloc::string::String;

use bitflags::bitflags;

use crate::catalog::{self, ErrorFlags, FeedbackMode, ForceMode, Product};
use crate::settings::Settings;
use crate::variables::Variables;

bitflags! {
    /// Options for [`diagnose`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DiagnoseFlags: u32 {
        /// Word the sentence for the feedback setup wizard
        const FEEDBACK_WIZARD = 1;
    }
}

/// Explains in one sentence whether the motor is running and why.
///
/// `settings` are the persistent settings. When `live` is given, it is used
/// instead to decide whether the PID coefficients are all zero, since the RAM
/// copy may have been changed without touching EEPROM.
pub fn diagnose(
    settings: &Settings,
    vars: &Variables,
    live: Option<&Settings>,
    flags: DiagnoseFlags,
) -> String {
    let force_mode = ForceMode::from_code(vars.force_mode());
    let mut halting = vars.error_flags_halting();

    if force_mode == Some(ForceMode::DutyCycle) {
        halting = halting.difference(ErrorFlags::forced_duty_cycle_tolerant());
        if halting.is_empty() {
            return String::from("The motor is running with a forced duty cycle.");
        }
    }

    if halting == ErrorFlags::AWAITING_COMMAND {
        return if flags.contains(DiagnoseFlags::FEEDBACK_WIZARD) {
            String::from(
                "The motor is stopped because the jrk is waiting for a command. \
                 Click \"Run motor\" to start it.",
            )
        } else {
            String::from("The motor is stopped because the jrk is waiting for a command.")
        };
    }

    if let Some(bit) = first_error(halting) {
        return format!(
            "The motor is stopped because of an error: {}.",
            error_name_ui(bit)
        );
    }

    if force_mode == Some(ForceMode::DutyCycleTarget) {
        return String::from("The motor is running with a forced duty cycle target.");
    }

    let pid = live.unwrap_or(settings);
    let feedback_on = pid.feedback_mode() != FeedbackMode::None.code();
    if feedback_on && pid_coefficients_zero(pid) {
        return String::from(
            "The motor is stopped because the PID coefficients are all zero.",
        );
    }

    if vars.duty_cycle() == 0 {
        String::from("The motor is on but the duty cycle is zero, so it is not moving.")
    } else {
        String::from("The motor is running.")
    }
}

/// Lowest-numbered set error other than awaiting command.
fn first_error(flags: ErrorFlags) -> Option<u8> {
    let rest = flags.difference(ErrorFlags::AWAITING_COMMAND).bits();
    (rest != 0).then(|| rest.trailing_zeros() as u8)
}

fn pid_coefficients_zero(settings: &Settings) -> bool {
    settings.proportional_multiplier() == 0
        && settings.integral_multiplier() == 0
        && settings.derivative_multiplier() == 0
}

/// Settings-file name of a product id, or `""` if unknown.
pub fn product_name_short(id: u32) -> &'static str {
    Product::from_id(id).map_or("", Product::short_name)
}

/// Display name of a product id, or `"(Unknown)"`.
pub fn product_name_ui(id: u32) -> &'static str {
    Product::from_id(id).map_or("(Unknown)", Product::ui_name)
}

/// Display name of the error with bit number `bit`.
pub fn error_name_ui(bit: u8) -> &'static str {
    catalog::name_ui(catalog::ERROR, bit)
}

/// Display name of a force mode code.
pub fn force_mode_name_ui(code: u8) -> &'static str {
    catalog::name_ui(catalog::FORCE_MODE, code)
}

/// Display name of a device reset code.
pub fn device_reset_name_ui(code: u8) -> &'static str {
    catalog::name_ui(catalog::DEVICE_RESET, code)
}
