//! Settings files.
//!
//! A settings file is a flat TOML document:
//!
//! ```toml
//! # Pololu Jrk G2 settings file.
//! # https://www.pololu.com/docs/0J73
//! product = "umc04a_30v"
//! input_mode = "serial"
//! input_error_minimum = 0
//! input_invert = false
//! ```
//!
//! Only fields that exist on the product are written. Enumerated fields use
//! their short names; unknown codes are written as integers so nothing is
//! lost. Parsing accepts either form.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Settings;
use crate::catalog::{self, code_from_name, name_short, Field, Product, ValueKind};
use crate::error::{bounded, SettingsError};

#[cfg(feature = "std")]
use std::{fs, path::Path};

#[cfg(feature = "std")]
use crate::error::{message, Result};

#[cfg(feature = "std")]
const HEADER: &str = "# Pololu Jrk G2 settings file.\n# https://www.pololu.com/docs/0J73\n";

/// Value of one key in a settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum Entry {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Settings {
    fn entry(&self, field: Field) -> Entry {
        let raw = self.get(field);
        match (field.kind(), field.symbols()) {
            (ValueKind::Bool, _) => Entry::Bool(raw != 0),
            (_, Some(table)) => match name_short(table, raw as u8) {
                "" => Entry::Int(raw),
                name => Entry::Str(name.into()),
            },
            _ => Entry::Int(raw),
        }
    }

    fn from_entries(mut entries: BTreeMap<String, Entry>) -> core::result::Result<Self, SettingsError> {
        let product = match entries.remove("product") {
            None => return Err(SettingsError::MissingProduct),
            Some(Entry::Str(name)) => {
                Product::from_short_name(&name).ok_or_else(|| SettingsError::UnknownProduct(bounded(&name)))?
            }
            Some(Entry::Int(id)) => u32::try_from(id)
                .ok()
                .and_then(Product::from_id)
                .ok_or_else(|| SettingsError::UnknownProduct(bounded(itoa(id).as_str())))?,
            Some(Entry::Bool(_)) => return Err(SettingsError::WrongType("product")),
        };

        let mut settings = Settings::new();
        settings.set_product(product);

        for (key, entry) in entries {
            let field = Field::from_name(&key).ok_or_else(|| SettingsError::UnknownField(bounded(&key)))?;
            let kind = field.kind();
            let value = match (entry, field.symbols()) {
                (Entry::Bool(b), _) if kind == ValueKind::Bool => i64::from(b),
                (Entry::Str(name), Some(table)) => code_from_name(table, &name)
                    .map(i64::from)
                    .ok_or_else(|| SettingsError::InvalidName {
                        field: field.name(),
                        value: bounded(&name),
                    })?,
                (Entry::Int(n), _) if kind != ValueKind::Bool => {
                    if n < kind.min() || n > kind.max() {
                        return Err(SettingsError::OutOfRange {
                            field: field.name(),
                            value: n,
                        });
                    }
                    n
                }
                _ => return Err(SettingsError::WrongType(field.name())),
            };
            settings.set(field, value);
        }

        Ok(settings)
    }
}

fn itoa(value: i64) -> heapless::String<24> {
    let mut out = heapless::String::new();
    // 24 bytes always hold an i64
    let _ = core::fmt::write(&mut out, format_args!("{}", value));
    out
}

impl Serialize for Settings {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let fields: Vec<Field> = match self.product() {
            Some(product) => catalog::fields(product).collect(),
            None => Field::ALL.to_vec(),
        };

        let mut map = serializer.serialize_map(Some(fields.len() + usize::from(self.product().is_some())))?;
        if let Some(product) = self.product() {
            map.serialize_entry("product", product.short_name())?;
        }
        for field in fields {
            map.serialize_entry(field.name(), &self.entry(field))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Settings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let entries = BTreeMap::<String, Entry>::deserialize(deserializer)?;
        Settings::from_entries(entries).map_err(D::Error::custom)
    }
}

/// Renders settings as a settings file.
///
/// # Errors
///
/// Returns an error if the TOML serializer rejects the document.
#[cfg(feature = "std")]
pub fn settings_to_string(settings: &Settings) -> Result<String> {
    let body = toml::to_string(settings).map_err(|e| SettingsError::Encode(message(&e.to_string())))?;
    Ok(format!("{}{}", HEADER, body))
}

/// Parses a settings file.
///
/// The result is not fixed; call [`Settings::fix`] before using it.
///
/// # Errors
///
/// Returns an error for invalid TOML, a missing or unknown product, unknown
/// keys, unknown enumeration names, and values that do not fit the field.
#[cfg(feature = "std")]
pub fn settings_from_str(text: &str) -> Result<Settings> {
    let entries: BTreeMap<String, Entry> =
        toml::from_str(text).map_err(|e| SettingsError::Parse(message(e.message())))?;
    Ok(Settings::from_entries(entries)?)
}

/// Loads a settings file from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// let mut settings = jrk_g2::load_settings("jrk.toml")?;
/// let warnings = settings.fix();
/// ```
#[cfg(feature = "std")]
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| SettingsError::Io(message(&e.to_string())))?;
    settings_from_str(&content)
}

/// Writes a settings file to disk.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
#[cfg(feature = "std")]
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let content = settings_to_string(settings)?;
    fs::write(path.as_ref(), content).map_err(|e| SettingsError::Io(message(&e.to_string())).into())
}
