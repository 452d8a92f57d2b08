//! The settings table.
//!
//! Each entry names a setting's [`Field`](super::Field) variant, accessor
//! names, in-memory type, settings-buffer offset and [`Encoding`](super::Encoding),
//! plus an optional numeric range and symbol table. Entries are listed in
//! settings-file order.

macro_rules! for_each_setting {
    ($m:ident) => {
        $m! {
            /// Where the target comes from.
            InputMode input_mode set_input_mode: u8 = 0x03 U8, symbols = INPUT_MODE;
            /// Inputs below this are an error.
            InputErrorMinimum input_error_minimum set_input_error_minimum: u16 = 0x04 U16, range = 0..=4095;
            /// Inputs above this are an error.
            InputErrorMaximum input_error_maximum set_input_error_maximum: u16 = 0x06 U16, range = 0..=4095;
            /// Input mapped to the minimum output.
            InputMinimum input_minimum set_input_minimum: u16 = 0x08 U16, range = 0..=4095;
            /// Input mapped to the maximum output.
            InputMaximum input_maximum set_input_maximum: u16 = 0x0A U16, range = 0..=4095;
            /// Lower edge of the neutral input band.
            InputNeutralMinimum input_neutral_minimum set_input_neutral_minimum: u16 = 0x0C U16, range = 0..=4095;
            /// Upper edge of the neutral input band.
            InputNeutralMaximum input_neutral_maximum set_input_neutral_maximum: u16 = 0x0E U16, range = 0..=4095;
            /// Target produced by the minimum input.
            OutputMinimum output_minimum set_output_minimum: u16 = 0x10 U16, range = 0..=4095;
            /// Target produced by a neutral input.
            OutputNeutral output_neutral set_output_neutral: u16 = 0x12 U16, range = 0..=4095;
            /// Target produced by the maximum input.
            OutputMaximum output_maximum set_output_maximum: u16 = 0x14 U16, range = 0..=4095;
            /// Reverses the input direction.
            InputInvert input_invert set_input_invert: bool = 0x16 Bit(0);
            /// Degree of the input scaling polynomial.
            InputScalingDegree input_scaling_degree set_input_scaling_degree: u8 = 0x18 U8, symbols = INPUT_SCALING_DEGREE;
            /// Raise an error when the input potentiometer is disconnected.
            InputDetectDisconnect input_detect_disconnect set_input_detect_disconnect: bool = 0x16 Bit(1);
            /// Base-2 logarithm of the number of analog input samples.
            InputAnalogSamplesExponent input_analog_samples_exponent set_input_analog_samples_exponent: u8 = 0x17 U8, range = 0..=10;
            /// Feedback source.
            FeedbackMode feedback_mode set_feedback_mode: u8 = 0x19 U8, symbols = FEEDBACK_MODE;
            /// Feedback below this is an error.
            FeedbackErrorMinimum feedback_error_minimum set_feedback_error_minimum: u16 = 0x1A U16, range = 0..=4095;
            /// Feedback above this is an error.
            FeedbackErrorMaximum feedback_error_maximum set_feedback_error_maximum: u16 = 0x1C U16, range = 0..=4095;
            /// Raw feedback mapped to scaled feedback 0.
            FeedbackMinimum feedback_minimum set_feedback_minimum: u16 = 0x1E U16, range = 0..=4095;
            /// Raw feedback mapped to scaled feedback 4095.
            FeedbackMaximum feedback_maximum set_feedback_maximum: u16 = 0x20 U16, range = 0..=4095;
            /// Reverses the feedback direction.
            FeedbackInvert feedback_invert set_feedback_invert: bool = 0x22 Bit(0);
            /// Raise an error when the feedback potentiometer is disconnected.
            FeedbackDetectDisconnect feedback_detect_disconnect set_feedback_detect_disconnect: bool = 0x22 Bit(1);
            /// Errors smaller than this are treated as zero.
            FeedbackDeadZone feedback_dead_zone set_feedback_dead_zone: u8 = 0x23 U8;
            /// Base-2 logarithm of the number of analog feedback samples.
            FeedbackAnalogSamplesExponent feedback_analog_samples_exponent set_feedback_analog_samples_exponent: u8 = 0x24 U8, range = 0..=10;
            /// Feedback wraps around from 4095 to 0.
            FeedbackWraparound feedback_wraparound set_feedback_wraparound: bool = 0x22 Bit(2);
            /// Serial interface arrangement.
            SerialMode serial_mode set_serial_mode: u8 = 0x25 U8, symbols = SERIAL_MODE;
            /// TTL serial baud rate, in bits per second.
            SerialBaudRate serial_baud_rate set_serial_baud_rate: u32 = 0x26 BaudGenerator, range = 1200..=500000;
            /// Serial timeout in milliseconds, 0 to disable.
            SerialTimeout serial_timeout set_serial_timeout: u32 = 0x28 Scaled(2, 10), range = 0..=655350;
            /// Device number for the Pololu serial protocol and I²C address.
            SerialDeviceNumber serial_device_number set_serial_device_number: u16 = 0x2A U16, range = 0..=16383;
            /// Keep running when USB is suspended.
            NeverSleep never_sleep set_never_sleep: bool = 0x01 Bit(0);
            /// Require CRC bytes on serial commands.
            SerialEnableCrc serial_enable_crc set_serial_enable_crc: bool = 0x01 Bit(1);
            /// Use 14-bit device numbers.
            SerialEnable14bitDeviceNumber serial_enable_14bit_device_number set_serial_enable_14bit_device_number: bool = 0x01 Bit(2);
            /// Ignore the compact serial protocol.
            SerialDisableCompactProtocol serial_disable_compact_protocol set_serial_disable_compact_protocol: bool = 0x01 Bit(3);
            /// Proportional coefficient multiplier.
            ProportionalMultiplier proportional_multiplier set_proportional_multiplier: u16 = 0x41 U16, range = 0..=1023;
            /// Proportional coefficient is the multiplier divided by 2 to this power.
            ProportionalExponent proportional_exponent set_proportional_exponent: u8 = 0x43 U8, range = 0..=18;
            /// Integral coefficient multiplier.
            IntegralMultiplier integral_multiplier set_integral_multiplier: u16 = 0x44 U16, range = 0..=1023;
            /// Integral coefficient exponent.
            IntegralExponent integral_exponent set_integral_exponent: u8 = 0x46 U8, range = 0..=18;
            /// Derivative coefficient multiplier.
            DerivativeMultiplier derivative_multiplier set_derivative_multiplier: u16 = 0x47 U16, range = 0..=1023;
            /// Derivative coefficient exponent.
            DerivativeExponent derivative_exponent set_derivative_exponent: u8 = 0x49 U8, range = 0..=18;
            /// PID period in milliseconds.
            PidPeriod pid_period set_pid_period: u16 = 0x4A U16, range = 1..=8191;
            /// The integral is divided by 2 to this power.
            IntegralDividerExponent integral_divider_exponent set_integral_divider_exponent: u8 = 0x4C U8, range = 0..=15;
            /// Limit on the magnitude of the integral.
            IntegralLimit integral_limit set_integral_limit: u16 = 0x4D U16, range = 0..=32767;
            /// Reset the integral when the proportional term exceeds the max duty cycle.
            ResetIntegral reset_integral set_reset_integral: bool = 0x02 Bit(4);
            /// Motor PWM frequency.
            PwmFrequency pwm_frequency set_pwm_frequency: u8 = 0x34 U8, symbols = PWM_FREQUENCY;
            /// Base-2 logarithm of the number of current samples.
            CurrentSamplesExponent current_samples_exponent set_current_samples_exponent: u8 = 0x35 U8, range = 0..=10;
            /// Consecutive chopping periods that trigger a hard over-current error.
            HardOvercurrentThreshold hard_overcurrent_threshold set_hard_overcurrent_threshold: u8 = 0x36 U8, range = 1..=255;
            /// Current sense offset calibration.
            CurrentOffsetCalibration current_offset_calibration set_current_offset_calibration: i16 = 0x37 I16, range = -800..=800;
            /// Current sense scale calibration.
            CurrentScaleCalibration current_scale_calibration set_current_scale_calibration: i16 = 0x39 I16, range = -1875..=1875;
            /// Reverses the motor direction.
            MotorInvert motor_invert set_motor_invert: bool = 0x02 Bit(6);
            /// Duty cycle limit while feedback is outside its error range.
            MaxDutyCycleWhileFeedbackOutOfRange max_duty_cycle_while_feedback_out_of_range set_max_duty_cycle_while_feedback_out_of_range: u16 = 0x4F U16, range = 1..=600;
            /// Maximum duty cycle increase per PID period, forward.
            MaxAccelerationForward max_acceleration_forward set_max_acceleration_forward: u16 = 0x51 U16, range = 1..=600;
            /// Maximum duty cycle increase per PID period, reverse.
            MaxAccelerationReverse max_acceleration_reverse set_max_acceleration_reverse: u16 = 0x53 U16, range = 1..=600;
            /// Maximum duty cycle decrease per PID period, forward.
            MaxDecelerationForward max_deceleration_forward set_max_deceleration_forward: u16 = 0x55 U16, range = 1..=600;
            /// Maximum duty cycle decrease per PID period, reverse.
            MaxDecelerationReverse max_deceleration_reverse set_max_deceleration_reverse: u16 = 0x57 U16, range = 1..=600;
            /// Maximum forward duty cycle.
            MaxDutyCycleForward max_duty_cycle_forward set_max_duty_cycle_forward: u16 = 0x59 U16, range = 0..=600;
            /// Maximum reverse duty cycle.
            MaxDutyCycleReverse max_duty_cycle_reverse set_max_duty_cycle_reverse: u16 = 0x5B U16, range = 0..=600;
            /// Encoded hardware current limit, forward.
            EncodedHardCurrentLimitForward encoded_hard_current_limit_forward set_encoded_hard_current_limit_forward: u16 = 0x5D U16, range = 0..=95;
            /// Encoded hardware current limit, reverse.
            EncodedHardCurrentLimitReverse encoded_hard_current_limit_reverse set_encoded_hard_current_limit_reverse: u16 = 0x5F U16, range = 0..=95;
            /// Braking time in milliseconds before driving forward.
            BrakeDurationForward brake_duration_forward set_brake_duration_forward: u32 = 0x61 Scaled(1, 5), range = 0..=1275;
            /// Braking time in milliseconds before driving in reverse.
            BrakeDurationReverse brake_duration_reverse set_brake_duration_reverse: u32 = 0x62 Scaled(1, 5), range = 0..=1275;
            /// Soft current limit in milliamps, forward.
            SoftCurrentLimitForward soft_current_limit_forward set_soft_current_limit_forward: u16 = 0x63 U16;
            /// Soft current limit in milliamps, reverse.
            SoftCurrentLimitReverse soft_current_limit_reverse set_soft_current_limit_reverse: u16 = 0x65 U16;
            /// Current the firmware regulates to in milliamps, forward.
            SoftCurrentRegulationLevelForward soft_current_regulation_level_forward set_soft_current_regulation_level_forward: u16 = 0x67 U16;
            /// Current the firmware regulates to in milliamps, reverse.
            SoftCurrentRegulationLevelReverse soft_current_regulation_level_reverse set_soft_current_regulation_level_reverse: u16 = 0x69 U16;
            /// Let the motor coast instead of braking when stopped.
            CoastWhenOff coast_when_off set_coast_when_off: bool = 0x02 Bit(5);
            /// Optional errors that are enabled.
            ErrorEnable error_enable set_error_enable: ErrorFlags = 0x2C U16;
            /// Enabled errors that stay set until cleared.
            ErrorLatch error_latch set_error_latch: ErrorFlags = 0x2E U16;
            /// Enabled errors that brake or coast immediately.
            ErrorHard error_hard set_error_hard: ErrorFlags = 0x30 U16;
            /// VIN measurement calibration.
            VinCalibration vin_calibration set_vin_calibration: i16 = 0x32 I16, range = -500..=500;
            /// Disable the internal pull-ups on SCL and SDA.
            DisableI2cPullups disable_i2c_pullups set_disable_i2c_pullups: bool = 0x02 Bit(0);
            /// Enable the pull-up on SDA/AN when it is used as an analog input.
            AnalogSdaPullup analog_sda_pullup set_analog_sda_pullup: bool = 0x02 Bit(1);
            /// Always read SDA/AN as analog.
            AlwaysAnalogSda always_analog_sda set_always_analog_sda: bool = 0x02 Bit(2);
            /// Always read FBA as analog.
            AlwaysAnalogFba always_analog_fba set_always_analog_fba: bool = 0x02 Bit(3);
            /// How frequency feedback is measured.
            FbtMethod fbt_method set_fbt_method: u8 = 0x3B U8, symbols = FBT_METHOD;
            /// Pulse timing clock.
            FbtTimingClock fbt_timing_clock set_fbt_timing_clock: u8 = 0x3C Bits(0, 7), symbols = FBT_TIMING_CLOCK;
            /// Time high pulses instead of low pulses.
            FbtTimingPolarity fbt_timing_polarity set_fbt_timing_polarity: bool = 0x3C Bit(7);
            /// Pulse timing timeout in milliseconds.
            FbtTimingTimeout fbt_timing_timeout set_fbt_timing_timeout: u16 = 0x3D U16, range = 1..=60000;
            /// Number of pulses averaged for frequency feedback.
            FbtSamples fbt_samples set_fbt_samples: u8 = 0x3F U8, range = 1..=32;
            /// Frequency feedback is divided by 2 to this power.
            FbtDividerExponent fbt_divider_exponent set_fbt_divider_exponent: u8 = 0x40 U8, range = 0..=15;
        }
    };
}
