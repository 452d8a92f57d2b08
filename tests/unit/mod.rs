//! Unit test harness for jrk-g2.
//!
//! This module organizes unit tests for each component of the library.

#[path = "../common/mod.rs"]
mod common;

mod codec;
mod protocol;
mod settings_fix;
mod settings_text;

use jrk_g2::catalog::{self, Field};
use jrk_g2::{Product, Settings};
use proptest::prelude::*;

/// Any product.
pub fn arb_product() -> impl Strategy<Value = Product> {
    prop::sample::select(Product::ALL.to_vec())
}

/// Settings as a setter would leave them: every field the product has is in
/// its declared range and stored exactly by the device; the rest are zero.
pub fn arb_settings() -> impl Strategy<Value = Settings> {
    (arb_product(), seeds()).prop_map(|(product, seeds)| {
        let mut settings = Settings::new();
        settings.set_product(product);
        for (&field, seed) in Field::ALL.iter().zip(seeds) {
            if catalog::applies(product, field) {
                settings.set(field, field.storable(value_for(field, seed)));
            }
        }
        settings
    })
}

/// Settings with every field inside its declared range or symbol table,
/// including fields the product lacks and values the device would round.
pub fn arb_unfixed_settings() -> impl Strategy<Value = Settings> {
    (arb_product(), seeds()).prop_map(|(product, seeds)| {
        let mut settings = Settings::new();
        settings.set_product(product);
        for (&field, seed) in Field::ALL.iter().zip(seeds) {
            settings.set(field, value_for(field, seed));
        }
        settings
    })
}

fn seeds() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(any::<u64>(), Field::ALL.len())
}

fn value_for(field: Field, seed: u64) -> i64 {
    if let Some(table) = field.symbols() {
        return i64::from(table[(seed % table.len() as u64) as usize].code);
    }
    let kind = field.kind();
    let range = field.range().unwrap_or(kind.min()..=kind.max());
    let span = (range.end() - range.start()) as u64 + 1;
    range.start() + (seed % span) as i64
}
