//! Unit tests for the settings and variables codec.

use jrk_g2::catalog::{self, var, Field, SETTINGS_SIZE, VARIABLES_SIZE};
use jrk_g2::codec::encode_settings_into;
use jrk_g2::{decode_settings, decode_variables, encode_settings, Product, Settings};
use proptest::prelude::*;

use super::{arb_settings, arb_unfixed_settings};

proptest! {
    /// Settings the device can store come back unchanged.
    #[test]
    fn prop_settings_round_trip(settings in arb_settings()) {
        let buf = encode_settings(&settings);
        prop_assert_eq!(decode_settings(&buf, settings.product()), settings);
    }

    /// Fixed settings survive a trip through the wire format.
    #[test]
    fn prop_fixed_settings_round_trip(mut settings in arb_unfixed_settings()) {
        settings.fix();
        let buf = encode_settings(&settings);
        prop_assert_eq!(decode_settings(&buf, settings.product()), settings);
    }

    /// Encoding on top of a buffer only touches bytes of the product's segments.
    #[test]
    fn prop_encode_into_stays_in_segments(
        mut settings in arb_unfixed_settings(),
        fill in any::<u8>(),
    ) {
        settings.fix();
        let product = settings.product().unwrap();
        let mut buf = [fill; SETTINGS_SIZE];
        encode_settings_into(&settings, &mut buf);

        let segments = catalog::settings_segments(product);
        for (offset, &byte) in buf.iter().enumerate() {
            if !segments.iter().any(|s| s.contains(&offset)) {
                prop_assert_eq!(byte, fill, "offset {:#04x}", offset);
            }
        }
    }

    /// Any device image decodes, and fixing the result makes it encodable.
    #[test]
    fn prop_decode_any_buffer(
        bytes in prop::collection::vec(any::<u8>(), SETTINGS_SIZE),
        product in super::arb_product(),
    ) {
        let mut buf = [0u8; SETTINGS_SIZE];
        buf.copy_from_slice(&bytes);
        let mut settings = decode_settings(&buf, Some(product));
        prop_assert_eq!(settings.product(), Some(product));

        settings.fix();
        let again = decode_settings(&encode_settings(&settings), Some(product));
        prop_assert_eq!(again, settings);
    }

    /// Variables decode at their documented offsets.
    #[test]
    fn prop_variables_offsets(target in 0u16..=4095, feedback in 0u16..=4095, up_time in any::<u32>()) {
        let mut buf = [0u8; VARIABLES_SIZE];
        buf[var::TARGET..var::TARGET + 2].copy_from_slice(&target.to_le_bytes());
        buf[var::SCALED_FEEDBACK..var::SCALED_FEEDBACK + 2].copy_from_slice(&feedback.to_le_bytes());
        buf[var::UP_TIME..var::UP_TIME + 4].copy_from_slice(&up_time.to_le_bytes());

        let vars = decode_variables(&buf);
        prop_assert_eq!(vars.target(), target);
        prop_assert_eq!(vars.up_time(), up_time);
        prop_assert_eq!(i32::from(vars.error()), i32::from(feedback) - i32::from(target));
    }
}

#[test]
fn test_segments_cover_every_register() {
    for product in Product::ALL {
        let segments = catalog::settings_segments(product);
        for field in catalog::fields(product) {
            let reg = catalog::register(product, field).unwrap();
            let span = reg.span();
            assert!(
                segments.iter().any(|s| s.start <= span.start && span.end <= s.end),
                "{:?} {}",
                product,
                field.name()
            );
        }
    }
}

#[test]
fn test_quantized_fields_come_back_rounded() {
    let mut settings = Settings::with_defaults(Product::Umc04a30v);
    settings.set_serial_timeout(1234);
    settings.set_brake_duration_forward(12);
    settings.set_serial_baud_rate(115200);

    let decoded = decode_settings(&encode_settings(&settings), settings.product());
    assert_eq!(decoded.serial_timeout(), 1230);
    assert_eq!(decoded.brake_duration_forward(), 10);
    assert_eq!(decoded.serial_baud_rate(), 115108);
    for field in [Field::SerialTimeout, Field::BrakeDurationForward, Field::SerialBaudRate] {
        assert_eq!(decoded.get(field), field.storable(settings.get(field)));
    }
}

#[test]
fn test_baud_rate_stored_as_generator() {
    let mut settings = Settings::with_defaults(Product::Umc05a40v);
    settings.set_serial_baud_rate(115200);
    settings.fix();
    assert_eq!(settings.serial_baud_rate(), 115108);

    let buf = encode_settings(&settings);
    assert_eq!(u16::from_le_bytes([buf[0x26], buf[0x27]]), 417);
    assert_eq!(decode_settings(&buf, settings.product()).serial_baud_rate(), 115108);
}
