//! Settings model.
//!
//! [`Settings`] holds one value per [`Field`] plus the [`Product`] it belongs
//! to. Accessors are plain getters and setters with no validation; call
//! [`Settings::fix`] to make a settings object consistent before sending it
//! to a device.

mod fix;
mod text;

use crate::catalog::{
    ErrorFlags, FbtMethod, FbtTimingClock, FeedbackMode, Field, InputMode, InputScalingDegree,
    Product, PwmFrequency, RawValue, SerialMode, BAUD_CLOCK_HZ,
};
use crate::variables::Variables;

pub use fix::Warnings;
#[cfg(feature = "std")]
pub use text::{load_settings, save_settings, settings_from_str, settings_to_string};

macro_rules! define_settings {
    ($(
        $(#[$doc:meta])*
        $variant:ident $field:ident $setter:ident : $ty:ty = $offset:literal $enc:ident $(($($arg:literal),*))?
        $(, range = $min:literal ..= $max:literal)?
        $(, symbols = $symbols:ident)?;
    )*) => {
        /// Configuration of one jrk.
        ///
        /// A freshly created object has no product and every field zero.
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct Settings {
            product: Option<Product>,
            $( $field: $ty, )*
        }

        impl Settings {
            $(
                $(#[$doc])*
                pub fn $field(&self) -> $ty {
                    self.$field
                }

                #[doc = concat!("Sets [`Settings::", stringify!($field), "`].")]
                pub fn $setter(&mut self, value: $ty) {
                    self.$field = value;
                }
            )*

            /// Reads any field as a generic integer.
            pub fn get(&self, field: Field) -> i64 {
                match field {
                    $( Field::$variant => self.$field.to_raw(), )*
                }
            }

            /// Writes any field from a generic integer, truncating to the field's width.
            pub fn set(&mut self, field: Field, value: i64) {
                match field {
                    $( Field::$variant => self.$field = RawValue::from_raw(value), )*
                }
            }
        }
    };
}

for_each_setting!(define_settings);

impl Settings {
    /// Creates settings with no product and all fields zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates settings for `product` filled with the default values.
    pub fn with_defaults(product: Product) -> Self {
        let mut settings = Self::new();
        settings.set_product(product);
        settings.fill_with_defaults();
        settings
    }

    /// Product these settings are for.
    pub fn product(&self) -> Option<Product> {
        self.product
    }

    /// Sets the product.
    pub fn set_product(&mut self, product: Product) {
        self.product = Some(product);
    }

    /// Sets the product from its numeric identifier. Unknown identifiers
    /// leave the product unset.
    pub fn set_product_code(&mut self, id: u32) {
        self.product = Product::from_id(id);
    }

    /// Numeric product identifier, 0 if unset.
    pub fn product_code(&self) -> u32 {
        self.product.map_or(0, |p| u32::from(p.code()))
    }

    /// Replaces every field with the factory default for the product.
    ///
    /// Does nothing if the product is unset.
    pub fn fill_with_defaults(&mut self) {
        let Some(product) = self.product else {
            return;
        };

        *self = Self::new();
        self.product = Some(product);

        self.input_mode = InputMode::Serial.code();
        self.input_error_maximum = 4095;
        self.input_maximum = 4095;
        self.input_neutral_minimum = 2048;
        self.input_neutral_maximum = 2048;
        self.output_neutral = 2048;
        self.output_maximum = 4095;
        self.input_scaling_degree = InputScalingDegree::Linear.code();
        self.input_analog_samples_exponent = 7;

        self.feedback_mode = FeedbackMode::None.code();
        self.feedback_error_maximum = 4095;
        self.feedback_maximum = 4095;
        self.feedback_analog_samples_exponent = 7;

        self.serial_mode = SerialMode::UsbDualPort.code();
        self.serial_baud_rate = 9600;
        self.serial_device_number = 11;

        self.pid_period = 10;
        self.integral_limit = 1000;

        self.pwm_frequency = PwmFrequency::Khz20.code();
        self.current_samples_exponent = 7;
        if product.has_hard_current_limit() {
            self.hard_overcurrent_threshold = 1;
            self.encoded_hard_current_limit_forward = 95;
            self.encoded_hard_current_limit_reverse = 95;
        }

        self.max_duty_cycle_while_feedback_out_of_range = 600;
        self.max_acceleration_forward = 600;
        self.max_acceleration_reverse = 600;
        self.max_deceleration_forward = 600;
        self.max_deceleration_reverse = 600;
        self.max_duty_cycle_forward = 600;
        self.max_duty_cycle_reverse = 600;

        self.fbt_method = FbtMethod::PulseCounting.code();
        self.fbt_timing_clock = FbtTimingClock::Mhz1_5.code();
        self.fbt_timing_timeout = 100;
        self.fbt_samples = 1;
    }

    /// Offset in millivolts implied by `current_offset_calibration`.
    pub fn current_offset_mv(&self) -> i32 {
        i32::from(self.current_offset_calibration) / 16 + 50
    }

    /// Scale factor implied by `current_scale_calibration`.
    pub fn current_scale_factor(&self) -> i32 {
        1875 + i32::from(self.current_scale_calibration)
    }
}

/// Baud rate the device actually runs at when asked for `baud`.
///
/// The device divides a 48 MHz clock by a 16-bit integer, so only some rates
/// are achievable. Returns 0 for 0.
pub fn achievable_serial_baud_rate(baud: u32) -> u32 {
    baud_from_generator(baud_generator(baud))
}

/// Generator value stored on the device for `baud`.
pub(crate) fn baud_generator(baud: u32) -> u16 {
    if baud == 0 {
        return 0;
    }
    let clock = u64::from(BAUD_CLOCK_HZ);
    let baud = u64::from(baud);
    ((clock + baud / 2) / baud).min(u64::from(u16::MAX)) as u16
}

/// Baud rate produced by a generator value.
pub(crate) fn baud_from_generator(generator: u16) -> u32 {
    if generator == 0 {
        return 0;
    }
    let generator = u32::from(generator);
    (BAUD_CLOCK_HZ + generator / 2) / generator
}

/// `current_offset_calibration` value for a measured zero-current offset in millivolts.
pub fn current_offset_calibration_from_mv(offset_mv: i32) -> i16 {
    offset_mv
        .saturating_sub(50)
        .saturating_mul(16)
        .clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

/// Measured motor current in milliamps.
///
/// The firmware applies the current calibration itself and reports milliamps
/// in the `current` variable.
pub fn measured_current_ma(vars: &Variables) -> u32 {
    u32::from(vars.current())
}
