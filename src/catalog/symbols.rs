//! Enumerated values and their symbolic names.

use bitflags::bitflags;

use super::{Product, Symbol};

code_enum! {
    /// Where the jrk gets its target from.
    pub enum InputMode => INPUT_MODE {
        /// Serial, I²C or USB commands
        Serial = 0, "serial", "Serial / I\u{b2}C / USB";
        /// Analog voltage on the SDA/AN pin
        Analog = 1, "analog", "Analog voltage";
        /// RC pulse width on the RC pin
        Rc = 2, "rc", "RC";
    }
}

code_enum! {
    /// Degree of the polynomial used to scale the input.
    pub enum InputScalingDegree => INPUT_SCALING_DEGREE {
        /// Linear
        Linear = 0, "linear", "1 - Linear";
        /// Quadratic
        Quadratic = 1, "quadratic", "2 - Quadratic";
        /// Cubic
        Cubic = 2, "cubic", "3 - Cubic";
        /// Quartic
        Quartic = 3, "quartic", "4 - Quartic";
        /// Quintic
        Quintic = 4, "quintic", "5 - Quintic";
    }
}

code_enum! {
    /// Source of the feedback signal.
    pub enum FeedbackMode => FEEDBACK_MODE {
        /// Open-loop speed control
        None = 0, "none", "None";
        /// Analog voltage on the FBA pin
        Analog = 1, "analog", "Analog voltage";
        /// Pulses on the FBT pin
        Frequency = 2, "frequency", "Frequency (speed control)";
    }
}

code_enum! {
    /// How the serial interface is connected.
    pub enum SerialMode => SERIAL_MODE {
        /// USB command port and TTL port are separate
        UsbDualPort = 0, "usb_dual_port", "USB dual port";
        /// USB command port is chained to the TTL port
        UsbChained = 1, "usb_chained", "USB chained";
        /// TTL serial only
        Uart = 2, "uart", "UART";
    }
}

code_enum! {
    /// Motor PWM frequency.
    pub enum PwmFrequency => PWM_FREQUENCY {
        /// 20 kHz
        Khz20 = 0, "20", "20 kHz";
        /// 5 kHz
        Khz5 = 1, "5", "5 kHz";
    }
}

code_enum! {
    /// How frequency feedback is measured on the FBT pin.
    pub enum FbtMethod => FBT_METHOD {
        /// Count pulses per PID period
        PulseCounting = 0, "pulse_counting", "Pulse counting";
        /// Time the width of pulses
        PulseTiming = 1, "pulse_timing", "Pulse timing";
    }
}

code_enum! {
    /// Clock used for pulse timing.
    pub enum FbtTimingClock => FBT_TIMING_CLOCK {
        /// 1.5 MHz
        Mhz1_5 = 0, "1.5", "1.5 MHz";
        /// 3 MHz
        Mhz3 = 1, "3", "3 MHz";
        /// 6 MHz
        Mhz6 = 2, "6", "6 MHz";
        /// 12 MHz
        Mhz12 = 3, "12", "12 MHz";
        /// 24 MHz
        Mhz24 = 4, "24", "24 MHz";
        /// 48 MHz
        Mhz48 = 5, "48", "48 MHz";
    }
}

code_enum! {
    /// Override state of the duty cycle computation.
    pub enum ForceMode => FORCE_MODE {
        /// Normal operation
        None = 0, "none", "None";
        /// Duty cycle target forced by a command
        DutyCycleTarget = 1, "duty_cycle_target", "Duty cycle target";
        /// Duty cycle forced by a command
        DutyCycle = 2, "duty_cycle", "Duty cycle";
    }
}

code_enum! {
    /// Cause of the last device reset.
    pub enum DeviceReset => DEVICE_RESET {
        /// Power-on reset
        PowerUp = 0, "power_up", "Power-on reset";
        /// Brown-out reset
        Brownout = 1, "brownout", "Brown-out reset";
        /// Reset pin driven low
        ResetLine = 2, "reset_line", "Reset pin driven low";
        /// Watchdog timer expired
        Watchdog = 4, "watchdog", "Watchdog reset";
        /// Software reset, typically from the bootloader
        Software = 8, "software", "Software reset (bootloader)";
        /// Stack overflow
        StackOverflow = 16, "stack_overflow", "Stack overflow";
        /// Stack underflow
        StackUnderflow = 32, "stack_underflow", "Stack underflow";
    }
}

code_enum! {
    /// Control pins, numbered as in the digital readings bitmask.
    pub enum Pin => PIN {
        /// SCL
        Scl = 0, "scl", "SCL";
        /// SDA/AN
        Sda = 1, "sda", "SDA/AN";
        /// TX
        Tx = 2, "tx", "TX";
        /// RX
        Rx = 3, "rx", "RX";
        /// RC
        Rc = 4, "rc", "RC";
        /// AUX
        Aux = 5, "aux", "AUX";
        /// FBA
        Fba = 6, "fba", "FBA";
        /// FBT
        Fbt = 7, "fbt", "FBT";
    }
}

/// Number of control pins.
pub const CONTROL_PIN_COUNT: usize = 8;

bitflags! {
    /// Error bits shared by the error flag variables and the
    /// `error_enable`/`error_latch`/`error_hard` settings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ErrorFlags: u16 {
        /// Waiting for a command after a stop or reset
        const AWAITING_COMMAND = 1 << 0;
        /// Motor power supply is missing or too low
        const NO_POWER = 1 << 1;
        /// Motor driver reported a fault
        const MOTOR_DRIVER = 1 << 2;
        /// Input is outside the error range
        const INPUT_INVALID = 1 << 3;
        /// Input potentiometer disconnected
        const INPUT_DISCONNECT = 1 << 4;
        /// Feedback potentiometer disconnected
        const FEEDBACK_DISCONNECT = 1 << 5;
        /// Soft current limit exceeded
        const SOFT_OVERCURRENT = 1 << 6;
        /// Bad serial stop bit
        const SERIAL_SIGNAL = 1 << 7;
        /// Serial hardware overrun
        const SERIAL_OVERRUN = 1 << 8;
        /// Serial receive buffer full
        const SERIAL_RX_BUFFER_FULL = 1 << 9;
        /// Serial CRC mismatch
        const SERIAL_CRC = 1 << 10;
        /// Malformed serial command
        const SERIAL_PROTOCOL = 1 << 11;
        /// Serial timeout expired
        const SERIAL_TIMEOUT = 1 << 12;
        /// Hardware current chopping limit exceeded
        const HARD_OVERCURRENT = 1 << 13;
    }
}

/// Names of the error bits, keyed by bit number.
pub const ERROR: &[Symbol] = &[
    Symbol { code: 0, short: "awaiting_command", ui: "Awaiting command" },
    Symbol { code: 1, short: "no_power", ui: "No power" },
    Symbol { code: 2, short: "motor_driver", ui: "Motor driver error" },
    Symbol { code: 3, short: "input_invalid", ui: "Input invalid" },
    Symbol { code: 4, short: "input_disconnect", ui: "Input disconnect" },
    Symbol { code: 5, short: "feedback_disconnect", ui: "Feedback disconnect" },
    Symbol { code: 6, short: "soft_overcurrent", ui: "Soft over-current" },
    Symbol { code: 7, short: "serial_signal", ui: "Serial signal error" },
    Symbol { code: 8, short: "serial_overrun", ui: "Serial overrun" },
    Symbol { code: 9, short: "serial_rx_buffer_full", ui: "Serial RX buffer full" },
    Symbol { code: 10, short: "serial_crc", ui: "Serial CRC error" },
    Symbol { code: 11, short: "serial_protocol", ui: "Serial protocol error" },
    Symbol { code: 12, short: "serial_timeout", ui: "Serial timeout error" },
    Symbol { code: 13, short: "hard_overcurrent", ui: "Hard over-current" },
];

impl ErrorFlags {
    /// Errors whose enable/latch/hard behavior can be configured on `product`.
    pub fn configurable(product: Product) -> Self {
        let mut flags =
            Self::INPUT_DISCONNECT | Self::FEEDBACK_DISCONNECT | Self::SOFT_OVERCURRENT;
        if product.has_hard_current_limit() {
            flags |= Self::HARD_OVERCURRENT;
        }
        flags
    }

    /// Errors that stop the motor but leave a forced duty cycle alone.
    pub const fn forced_duty_cycle_tolerant() -> Self {
        Self::INPUT_INVALID
            .union(Self::INPUT_DISCONNECT)
            .union(Self::FEEDBACK_DISCONNECT)
    }
}
