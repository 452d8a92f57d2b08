//! Unit tests for settings validation.

use jrk_g2::catalog::{self, Field};
use jrk_g2::{ErrorFlags, Product, Settings};
use proptest::prelude::*;

use super::arb_unfixed_settings;

proptest! {
    /// A fixed object has nothing left to fix.
    #[test]
    fn prop_fix_is_idempotent(mut settings in arb_unfixed_settings()) {
        settings.fix();
        let snapshot = settings.clone();
        let warnings = settings.fix();
        prop_assert!(warnings.is_empty(), "{}", warnings);
        prop_assert_eq!(settings, snapshot);
    }

    /// Every numeric field ends up inside its range.
    #[test]
    fn prop_fixed_values_in_range(mut settings in arb_unfixed_settings()) {
        settings.fix();
        for &field in Field::ALL {
            if let Some(range) = field.range() {
                prop_assert!(range.contains(&settings.get(field)), "{}", field.name());
            }
        }
    }

    /// Neutral band sits inside the input range after fixing.
    #[test]
    fn prop_fixed_input_ordering(mut settings in arb_unfixed_settings()) {
        settings.fix();
        prop_assert!(settings.input_minimum() <= settings.input_neutral_minimum());
        prop_assert!(settings.input_neutral_minimum() <= settings.input_neutral_maximum());
        prop_assert!(settings.input_neutral_maximum() <= settings.input_maximum());
    }

    /// Latched and hard errors are always a subset of enabled ones.
    #[test]
    fn prop_fixed_error_masks(mut settings in arb_unfixed_settings()) {
        settings.fix();
        let product = settings.product().unwrap();
        prop_assert!(ErrorFlags::configurable(product).contains(settings.error_enable()));
        prop_assert!(settings.error_enable().contains(settings.error_latch()));
        prop_assert!(settings.error_enable().contains(settings.error_hard()));
    }

    /// Fields the product does not have are zero after fixing.
    #[test]
    fn prop_missing_fields_zeroed(mut settings in arb_unfixed_settings()) {
        settings.fix();
        let product = settings.product().unwrap();
        for &field in Field::ALL {
            if !catalog::applies(product, field) {
                prop_assert_eq!(settings.get(field), 0, "{}", field.name());
            }
        }
    }
}

#[test]
fn test_defaults_are_already_fixed() {
    for product in Product::ALL {
        assert!(Settings::with_defaults(product).fix().is_empty());
    }
}

#[test]
fn test_warning_sentences() {
    let mut settings = Settings::with_defaults(Product::Umc04a30v);
    settings.set_pid_period(0);
    settings.set_serial_timeout(1234);

    let warnings = settings.fix();
    let text = warnings.to_string();
    assert_eq!(warnings.len(), 2);
    assert!(text.contains("Warning: The pid_period value 0 is too low, so it was changed to 1."));
    assert!(text.contains("serial_timeout"));
    assert_eq!(settings.serial_timeout(), 1230);
}

#[test]
fn test_fourteen_bit_device_number() {
    let mut settings = Settings::with_defaults(Product::Umc05a30v);
    settings.set_serial_device_number(0x1234);
    let warnings = settings.fix();
    assert_eq!(settings.serial_device_number(), 0x34);
    assert!(warnings.to_string().contains("does not fit in 7 bits"));

    settings.set_serial_enable_14bit_device_number(true);
    settings.set_serial_device_number(0x1234);
    assert!(settings.fix().is_empty());
    assert_eq!(settings.serial_device_number(), 0x1234);
}
