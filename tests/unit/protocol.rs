//! Unit tests for the command protocol against a simulated device.

use jrk_g2::catalog::{var, SETTINGS_SIZE, VARIABLES_SIZE};
use jrk_g2::error::SegmentError;
use jrk_g2::{Error, ErrorFlags, GetVariablesFlags, Handle, Product, Settings};

use super::common::SimulatedJrk;

fn connect(product: Product) -> Handle<SimulatedJrk> {
    Handle::new(SimulatedJrk::new(product), product)
}

fn segment_error(err: &Error) -> Option<SegmentError> {
    match err {
        Error::Segment(e) => Some(*e),
        Error::Context { source, .. } => segment_error(source),
        _ => None,
    }
}

#[test]
fn test_segment_bounds() {
    let mut jrk = connect(Product::Umc04a30v);

    let mut buf = [0u8; 4];
    jrk.get_eeprom_settings_segment(SETTINGS_SIZE - 4, &mut buf).unwrap();

    let err = jrk
        .get_eeprom_settings_segment(SETTINGS_SIZE - 3, &mut buf)
        .unwrap_err();
    let seg = segment_error(&err).unwrap();
    assert_eq!((seg.index, seg.length, seg.size), (SETTINGS_SIZE - 3, 4, SETTINGS_SIZE));

    let mut big = [0u8; VARIABLES_SIZE + 1];
    assert!(jrk
        .get_variable_segment(0, &mut big, GetVariablesFlags::empty())
        .is_err());
}

#[test]
fn test_ram_segment_write_and_read() {
    let mut jrk = connect(Product::Umc06a);
    jrk.set_ram_settings_segment(0x4A, &20u16.to_le_bytes()).unwrap();

    let mut buf = [0u8; 2];
    jrk.get_ram_settings_segment(0x4A, &mut buf).unwrap();
    assert_eq!(u16::from_le_bytes(buf), 20);
    assert_eq!(jrk.get_ram_settings().unwrap().pid_period(), 20);
}

#[test]
fn test_get_variables_clears_occurred_flags() {
    let mut jrk = connect(Product::Umc04a30v);
    jrk.transport_mut()
        .put_u16(var::ERROR_FLAGS_OCCURRED, ErrorFlags::NO_POWER.bits());

    let vars = jrk
        .get_variables(GetVariablesFlags::CLEAR_ERROR_FLAGS_OCCURRED)
        .unwrap();
    assert_eq!(vars.error_flags_occurred(), ErrorFlags::NO_POWER);

    let vars = jrk.get_variables(GetVariablesFlags::empty()).unwrap();
    assert!(vars.error_flags_occurred().is_empty());
}

#[test]
fn test_get_variables_clears_chopping_count() {
    let mut jrk = connect(Product::Umc06a);
    jrk.transport_mut().variables[var::CURRENT_CHOPPING_OCCURRENCE_COUNT] = 17;

    let vars = jrk.get_variables(GetVariablesFlags::empty()).unwrap();
    assert_eq!(vars.current_chopping_occurrence_count(), 17);

    let vars = jrk
        .get_variables(GetVariablesFlags::CLEAR_CURRENT_CHOPPING_OCCURRENCE_COUNT)
        .unwrap();
    assert_eq!(vars.current_chopping_occurrence_count(), 17);

    let vars = jrk.get_variables(GetVariablesFlags::empty()).unwrap();
    assert_eq!(vars.current_chopping_occurrence_count(), 0);
}

#[test]
fn test_force_duty_cycle_target_reaches_device() {
    let mut jrk = connect(Product::Umc05a30v);
    jrk.force_duty_cycle_target(-600).unwrap();

    let vars = jrk.get_variables(GetVariablesFlags::empty()).unwrap();
    assert_eq!(vars.duty_cycle_target(), -600);
    assert_eq!(vars.force_mode(), 1);
    assert!(vars.error_flags_halting().is_empty());
}

#[test]
fn test_ram_write_covers_every_segment() {
    let mut jrk = connect(Product::Umc06a);
    jrk.transport_mut().ram = [0; SETTINGS_SIZE];

    let settings = Settings::with_defaults(Product::Umc06a);
    jrk.set_ram_settings(&settings).unwrap();
    assert_eq!(jrk.get_ram_settings().unwrap(), settings);
}
