//! Register catalog.
//!
//! Static description of the device: products, enumerated values with their
//! symbolic names, and the per-product layout of the settings buffer. Nothing
//! in here does I/O or mutates state; the codec, validator and text format all
//! consult these tables instead of carrying their own product checks.

use alloc::vec::Vec;
use core::ops::{Range, RangeInclusive};

/// Defines a `#[repr(u8)]` enum together with its symbol table.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident => $table:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, $short:literal, $ui:literal; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )*
        }

        #[doc = concat!("Codes and names of [`", stringify!($name), "`] values.")]
        pub const $table: &[Symbol] = &[
            $( Symbol { code: $code, short: $short, ui: $ui }, )*
        ];

        impl $name {
            /// Wire code of this value.
            pub const fn code(self) -> u8 {
                self as u8
            }

            /// Looks up a value by wire code.
            pub const fn from_code(code: u8) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// Name used in settings files.
            pub const fn short_name(self) -> &'static str {
                match self {
                    $( Self::$variant => $short, )*
                }
            }

            /// Name shown to users.
            pub const fn ui_name(self) -> &'static str {
                match self {
                    $( Self::$variant => $ui, )*
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.code()
            }
        }
    };
}

macro_rules! optional {
    () => {
        None
    };
    ($($tt:tt)+) => {
        Some($($tt)*)
    };
}

#[macro_use]
mod fields;
mod layout;
mod product;
mod symbols;

pub use layout::{var, Encoding, Register, BAUD_CLOCK_HZ, NOT_INITIALIZED, SETTINGS_SIZE, VARIABLES_SIZE};
pub use product::{Product, PRODUCT};
pub use symbols::{
    DeviceReset, ErrorFlags, FbtMethod, FbtTimingClock, FeedbackMode, ForceMode, InputMode,
    InputScalingDegree, Pin, PwmFrequency, SerialMode, CONTROL_PIN_COUNT, DEVICE_RESET, ERROR,
    FBT_METHOD, FBT_TIMING_CLOCK, FEEDBACK_MODE, FORCE_MODE, INPUT_MODE, INPUT_SCALING_DEGREE,
    PIN, PWM_FREQUENCY, SERIAL_MODE,
};

/// One entry of a symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// Wire code
    pub code: u8,
    /// Name used in settings files
    pub short: &'static str,
    /// Name shown to users
    pub ui: &'static str,
}

/// Short name for `code`, or `""` if the table has no such code.
pub fn name_short(table: &[Symbol], code: u8) -> &'static str {
    table.iter().find(|s| s.code == code).map_or("", |s| s.short)
}

/// UI name for `code`, or `"(Unknown)"` if the table has no such code.
pub fn name_ui(table: &[Symbol], code: u8) -> &'static str {
    table.iter().find(|s| s.code == code).map_or("(Unknown)", |s| s.ui)
}

/// Code for a short name.
pub fn code_from_name(table: &[Symbol], name: &str) -> Option<u8> {
    table.iter().find(|s| s.short == name).map(|s| s.code)
}

/// Storage class of a setting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `true`/`false`
    Bool,
    /// Unsigned integer of the given byte width
    Unsigned(u8),
    /// Signed integer of the given byte width
    Signed(u8),
}

impl ValueKind {
    /// Smallest value representable by this kind.
    pub const fn min(self) -> i64 {
        match self {
            ValueKind::Bool | ValueKind::Unsigned(_) => 0,
            ValueKind::Signed(bytes) => -(1i64 << (bytes * 8 - 1)),
        }
    }

    /// Largest value representable by this kind.
    pub const fn max(self) -> i64 {
        match self {
            ValueKind::Bool => 1,
            ValueKind::Unsigned(bytes) => (1i64 << (bytes * 8)) - 1,
            ValueKind::Signed(bytes) => (1i64 << (bytes * 8 - 1)) - 1,
        }
    }
}

/// In-memory setting value that converts to and from a generic integer.
pub trait RawValue: Copy {
    /// Storage class of the type.
    const KIND: ValueKind;

    /// Widens the value.
    fn to_raw(self) -> i64;

    /// Narrows a generic value, truncating to the type's width.
    fn from_raw(raw: i64) -> Self;
}

macro_rules! raw_int {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl RawValue for $ty {
                const KIND: ValueKind = $kind;

                fn to_raw(self) -> i64 {
                    i64::from(self)
                }

                fn from_raw(raw: i64) -> Self {
                    raw as $ty
                }
            }
        )*
    };
}

raw_int! {
    u8 => ValueKind::Unsigned(1),
    u16 => ValueKind::Unsigned(2),
    u32 => ValueKind::Unsigned(4),
    i16 => ValueKind::Signed(2),
}

impl RawValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn to_raw(self) -> i64 {
        i64::from(self)
    }

    fn from_raw(raw: i64) -> Self {
        raw != 0
    }
}

impl RawValue for ErrorFlags {
    const KIND: ValueKind = ValueKind::Unsigned(2);

    fn to_raw(self) -> i64 {
        i64::from(self.bits())
    }

    fn from_raw(raw: i64) -> Self {
        ErrorFlags::from_bits_retain(raw as u16)
    }
}

macro_rules! define_fields {
    ($(
        $(#[$doc:meta])*
        $variant:ident $field:ident $setter:ident : $ty:ty = $offset:literal $enc:ident $(($($arg:literal),*))?
        $(, range = $min:literal ..= $max:literal)?
        $(, symbols = $symbols:ident)?;
    )*) => {
        /// Identifies one setting.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $( $(#[$doc])* $variant, )*
        }

        impl Field {
            /// Every setting, in settings-file order.
            pub const ALL: &'static [Field] = &[$(Field::$variant),*];

            /// Key used in settings files.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Field::$variant => stringify!($field), )*
                }
            }

            /// Storage class of the in-memory value.
            pub const fn kind(self) -> ValueKind {
                match self {
                    $( Field::$variant => <$ty as RawValue>::KIND, )*
                }
            }

            /// Symbol table for enumerated settings.
            pub const fn symbols(self) -> Option<&'static [Symbol]> {
                match self {
                    $( Field::$variant => optional!($(symbols::$symbols)?), )*
                }
            }

            /// Declared valid range of a numeric setting.
            pub const fn range(self) -> Option<RangeInclusive<i64>> {
                match self {
                    $( Field::$variant => optional!($($min..=$max)?), )*
                }
            }

            const fn layout(self) -> Register {
                match self {
                    $( Field::$variant => Register {
                        offset: $offset,
                        encoding: Encoding::$enc $(($($arg),*))?,
                    }, )*
                }
            }
        }
    };
}

for_each_setting!(define_fields);

/// Granularity with which the device stores a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Every value in range is stored exactly
    Exact,
    /// Stored in units; only multiples of the unit come back unchanged
    Multiple(u32),
    /// Stored as a baud generator; only achievable rates come back unchanged
    BaudRate,
}

impl Field {
    /// Looks up a setting by its settings-file key.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Storage granularity of the setting.
    pub const fn step(self) -> Step {
        match self.layout().encoding {
            Encoding::Scaled(_, unit) => Step::Multiple(unit),
            Encoding::BaudGenerator => Step::BaudRate,
            _ => Step::Exact,
        }
    }

    /// Value the device would hand back after storing `value`.
    ///
    /// Multiples round to the nearest unit and baud rates snap to the nearest
    /// achievable rate. Values outside the declared range are not clamped.
    pub fn storable(self, value: i64) -> i64 {
        match self.step() {
            Step::Exact => value,
            Step::Multiple(unit) => {
                let unit = i64::from(unit);
                value.max(0).saturating_add(unit / 2) / unit * unit
            }
            Step::BaudRate => {
                let baud = u32::try_from(value.max(0)).unwrap_or(u32::MAX);
                i64::from(crate::settings::achievable_serial_baud_rate(baud))
            }
        }
    }
}

/// Whether `field` exists on `product`.
pub const fn applies(product: Product, field: Field) -> bool {
    match field {
        Field::HardOvercurrentThreshold
        | Field::EncodedHardCurrentLimitForward
        | Field::EncodedHardCurrentLimitReverse => product.has_hard_current_limit(),
        Field::SoftCurrentRegulationLevelForward | Field::SoftCurrentRegulationLevelReverse => {
            !product.has_hard_current_limit()
        }
        _ => true,
    }
}

/// Where `field` lives in the settings buffer of `product`, if it exists there.
pub const fn register(product: Product, field: Field) -> Option<Register> {
    if applies(product, field) {
        Some(field.layout())
    } else {
        None
    }
}

/// Settings fields present on `product`, in settings-file order.
pub fn fields(product: Product) -> impl Iterator<Item = Field> {
    Field::ALL.iter().copied().filter(move |&f| applies(product, f))
}

/// Merged, sorted byte ranges of the settings buffer used by `product`.
pub fn settings_segments(product: Product) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = fields(product)
        .filter_map(|f| register(product, f))
        .map(|r| r.span())
        .collect();
    spans.sort_by_key(|s| s.start);

    let mut merged: Vec<Range<usize>> = Vec::new();
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count_and_names() {
        assert_eq!(Field::ALL.len(), 78);
        assert_eq!(Field::from_name("pid_period"), Some(Field::PidPeriod));
        assert_eq!(Field::from_name("pid"), None);
        assert_eq!(Field::SerialEnable14bitDeviceNumber.name(), "serial_enable_14bit_device_number");
    }

    #[test]
    fn test_registers_fit_in_buffer() {
        for product in Product::ALL {
            for field in fields(product) {
                let reg = register(product, field).unwrap();
                assert!(reg.offset > NOT_INITIALIZED, "{:?}", field);
                assert!(reg.span().end <= SETTINGS_SIZE, "{:?}", field);
            }
        }
    }

    #[test]
    fn test_registers_do_not_overlap_except_bits() {
        for product in Product::ALL {
            let regs: Vec<(Field, Register)> = fields(product)
                .map(|f| (f, register(product, f).unwrap()))
                .collect();
            for (i, (fa, a)) in regs.iter().enumerate() {
                for (fb, b) in &regs[i + 1..] {
                    let overlap = a.span().start < b.span().end && b.span().start < a.span().end;
                    let bitwise = matches!(a.encoding, Encoding::Bit(_) | Encoding::Bits(..))
                        && matches!(b.encoding, Encoding::Bit(_) | Encoding::Bits(..));
                    assert!(!overlap || bitwise, "{:?} overlaps {:?}", fa, fb);
                }
            }
        }
    }

    #[test]
    fn test_product_conditional_fields() {
        assert!(register(Product::Umc06a, Field::EncodedHardCurrentLimitForward).is_none());
        assert!(register(Product::Umc06a, Field::HardOvercurrentThreshold).is_none());
        assert!(register(Product::Umc06a, Field::SoftCurrentRegulationLevelReverse).is_some());
        assert!(register(Product::Umc04a40v, Field::SoftCurrentRegulationLevelForward).is_none());
        assert_eq!(
            register(Product::Umc05a30v, Field::EncodedHardCurrentLimitReverse).map(|r| r.offset),
            Some(0x5F)
        );
    }

    #[test]
    fn test_settings_segments() {
        assert_eq!(settings_segments(Product::Umc04a30v), [0x01..0x67]);
        assert_eq!(
            settings_segments(Product::Umc06a),
            [0x01..0x36, 0x37..0x5D, 0x61..SETTINGS_SIZE]
        );
    }

    #[test]
    fn test_symbol_lookups() {
        assert_eq!(name_ui(FEEDBACK_MODE, 1), "Analog voltage");
        assert_eq!(name_ui(FEEDBACK_MODE, 9), "(Unknown)");
        assert_eq!(name_short(FEEDBACK_MODE, 9), "");
        assert_eq!(code_from_name(FBT_TIMING_CLOCK, "1.5"), Some(0));
        assert_eq!(Field::FbtTimingClock.symbols(), Some(FBT_TIMING_CLOCK));
        assert_eq!(Field::PidPeriod.symbols(), None);
    }

    #[test]
    fn test_value_kind_bounds() {
        assert_eq!(ValueKind::Signed(2).min(), -32768);
        assert_eq!(ValueKind::Unsigned(4).max(), u32::MAX as i64);
        assert_eq!(Field::SerialBaudRate.kind(), ValueKind::Unsigned(4));
        assert_eq!(Field::ErrorEnable.kind(), ValueKind::Unsigned(2));
        assert_eq!(Field::CurrentOffsetCalibration.range(), Some(-800..=800));
    }

    #[test]
    fn test_storage_steps() {
        assert_eq!(Field::SerialTimeout.step(), Step::Multiple(10));
        assert_eq!(Field::BrakeDurationForward.step(), Step::Multiple(5));
        assert_eq!(Field::SerialBaudRate.step(), Step::BaudRate);
        assert_eq!(Field::PidPeriod.step(), Step::Exact);

        assert_eq!(Field::SerialTimeout.storable(1234), 1230);
        assert_eq!(Field::SerialTimeout.storable(655350), 655350);
        assert_eq!(Field::BrakeDurationForward.storable(12), 10);
        assert_eq!(Field::BrakeDurationReverse.storable(13), 15);
        assert_eq!(Field::SerialBaudRate.storable(115200), 115108);
        assert_eq!(Field::SerialBaudRate.storable(9600), 9600);
        assert_eq!(Field::VinCalibration.storable(-7), -7);
    }
}
