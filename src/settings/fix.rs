//! Settings validation.
//!
//! [`Settings::fix`] corrects a settings object in place instead of rejecting
//! it, and reports each correction as a sentence. Rules run in a fixed order
//! so that a second pass never finds anything left to change.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::mem;

use super::Settings;
use crate::catalog::{self, name_short, ErrorFlags, Field, Product, Step};

/// Corrections made by [`Settings::fix`], one sentence each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings(Vec<String>);

impl Warnings {
    /// Returns true if nothing was corrected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of corrections.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the warning sentences.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn push(&mut self, message: String) {
        warn!("{}", message.as_str());
        self.0.push(message);
    }
}

impl fmt::Display for Warnings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.0 {
            writeln!(f, "Warning: {}", line)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Settings {
    /// Makes the settings internally consistent.
    ///
    /// Corrections, in order:
    /// - Fields the product does not have are zeroed
    /// - Unknown enumeration codes are reset to code 0
    /// - Numeric fields are clamped to their ranges
    /// - Baud rate, timeout and brake durations are rounded to what the device can store
    /// - Paired minimums and maximums are put in order, with neutral and error
    ///   limits moved to agree with them
    /// - The serial device number is masked to 7 or 14 bits
    /// - Error masks are limited to configurable errors; latched and hard
    ///   errors must also be enabled
    ///
    /// Does nothing when the product is unset. Running it twice yields no
    /// warnings the second time.
    pub fn fix(&mut self) -> Warnings {
        let mut warnings = Warnings::default();
        let Some(product) = self.product else {
            return warnings;
        };

        self.zero_missing_fields(product, &mut warnings);
        self.reset_unknown_codes(product, &mut warnings);
        self.clamp_ranges(product, &mut warnings);
        self.quantize(product, &mut warnings);
        self.order_input(&mut warnings);
        self.order_output(&mut warnings);
        self.order_feedback(&mut warnings);
        self.mask_device_number(&mut warnings);
        self.mask_errors(product, &mut warnings);

        warnings
    }

    fn zero_missing_fields(&mut self, product: Product, warnings: &mut Warnings) {
        for &field in Field::ALL {
            if catalog::applies(product, field) || self.get(field) == 0 {
                continue;
            }
            self.set(field, 0);
            warnings.push(format!(
                "The {} setting does not apply to the {}, so it was changed to 0.",
                field.name(),
                product.ui_name()
            ));
        }
    }

    fn reset_unknown_codes(&mut self, product: Product, warnings: &mut Warnings) {
        for field in catalog::fields(product) {
            let Some(table) = field.symbols() else {
                continue;
            };
            let code = self.get(field);
            if table.iter().any(|s| i64::from(s.code) == code) {
                continue;
            }
            self.set(field, 0);
            warnings.push(format!(
                "The {} value {} is not valid, so it was changed to {}.",
                field.name(),
                code,
                name_short(table, 0)
            ));
        }
    }

    fn clamp_ranges(&mut self, product: Product, warnings: &mut Warnings) {
        for field in catalog::fields(product) {
            let Some(range) = field.range() else {
                continue;
            };
            let value = self.get(field);
            let (bound, direction) = if value < *range.start() {
                (*range.start(), "low")
            } else if value > *range.end() {
                (*range.end(), "high")
            } else {
                continue;
            };
            self.set(field, bound);
            warnings.push(format!(
                "The {} value {} is too {}, so it was changed to {}.",
                field.name(),
                value,
                direction,
                bound
            ));
        }
    }

    fn quantize(&mut self, product: Product, warnings: &mut Warnings) {
        for field in catalog::fields(product) {
            let value = self.get(field);
            let stored = field.storable(value);
            if stored == value {
                continue;
            }
            self.set(field, stored);
            if let Step::Multiple(unit) = field.step() {
                warnings.push(format!(
                    "The {} value {} is not a multiple of {}, so it was changed to {}.",
                    field.name(),
                    value,
                    unit,
                    stored
                ));
            }
        }
    }

    fn order_input(&mut self, warnings: &mut Warnings) {
        if self.input_minimum > self.input_maximum {
            mem::swap(&mut self.input_minimum, &mut self.input_maximum);
            warnings.push("The input minimum was greater than the input maximum, so they were swapped.".into());
        }
        if self.input_neutral_minimum > self.input_neutral_maximum {
            mem::swap(&mut self.input_neutral_minimum, &mut self.input_neutral_maximum);
            warnings.push(
                "The input neutral minimum was greater than the input neutral maximum, so they were swapped."
                    .into(),
            );
        }

        let (min, max) = (self.input_minimum, self.input_maximum);
        clamp_into(&mut self.input_neutral_minimum, min, max, "input_neutral_minimum", warnings);
        clamp_into(&mut self.input_neutral_maximum, min, max, "input_neutral_maximum", warnings);

        if self.input_error_minimum > min {
            self.input_error_minimum = min;
            warnings.push(format!(
                "The input error minimum was greater than the input minimum, so it was changed to {}.",
                min
            ));
        }
        if self.input_error_maximum < max {
            self.input_error_maximum = max;
            warnings.push(format!(
                "The input error maximum was less than the input maximum, so it was changed to {}.",
                max
            ));
        }
    }

    fn order_output(&mut self, warnings: &mut Warnings) {
        if self.output_minimum > self.output_maximum {
            mem::swap(&mut self.output_minimum, &mut self.output_maximum);
            warnings.push("The output minimum was greater than the output maximum, so they were swapped.".into());
        }

        let (min, max) = (self.output_minimum, self.output_maximum);
        clamp_into(&mut self.output_neutral, min, max, "output_neutral", warnings);
    }

    fn order_feedback(&mut self, warnings: &mut Warnings) {
        if self.feedback_minimum > self.feedback_maximum {
            mem::swap(&mut self.feedback_minimum, &mut self.feedback_maximum);
            warnings.push(
                "The feedback minimum was greater than the feedback maximum, so they were swapped.".into(),
            );
        }

        let (min, max) = (self.feedback_minimum, self.feedback_maximum);
        if self.feedback_error_minimum > min {
            self.feedback_error_minimum = min;
            warnings.push(format!(
                "The feedback error minimum was greater than the feedback minimum, so it was changed to {}.",
                min
            ));
        }
        if self.feedback_error_maximum < max {
            self.feedback_error_maximum = max;
            warnings.push(format!(
                "The feedback error maximum was less than the feedback maximum, so it was changed to {}.",
                max
            ));
        }
    }

    fn mask_device_number(&mut self, warnings: &mut Warnings) {
        let mask: u16 = if self.serial_enable_14bit_device_number {
            0x3FFF
        } else {
            0x7F
        };
        let masked = self.serial_device_number & mask;
        if masked != self.serial_device_number {
            warnings.push(format!(
                "The serial device number {} does not fit in {} bits, so it was changed to {}.",
                self.serial_device_number,
                mask.count_ones(),
                masked
            ));
            self.serial_device_number = masked;
        }
    }

    fn mask_errors(&mut self, product: Product, warnings: &mut Warnings) {
        let configurable = ErrorFlags::configurable(product);

        let enable = self.error_enable & configurable;
        if enable != self.error_enable {
            warnings.push(format!(
                "Some error_enable bits do not correspond to configurable errors, so it was changed to {}.",
                enable.bits()
            ));
            self.error_enable = enable;
        }

        let latch = self.error_latch & enable;
        if latch != self.error_latch {
            warnings.push(format!(
                "Some error_latch bits are for errors that are not enabled, so it was changed to {}.",
                latch.bits()
            ));
            self.error_latch = latch;
        }

        let hard = self.error_hard & enable;
        if hard != self.error_hard {
            warnings.push(format!(
                "Some error_hard bits are for errors that are not enabled, so it was changed to {}.",
                hard.bits()
            ));
            self.error_hard = hard;
        }
    }
}

fn clamp_into(value: &mut u16, min: u16, max: u16, name: &str, warnings: &mut Warnings) {
    let clamped = (*value).clamp(min, max);
    if clamped != *value {
        warnings.push(format!(
            "The {} value {} is outside the range {} to {}, so it was changed to {}.",
            name, value, min, max, clamped
        ));
        *value = clamped;
    }
}
