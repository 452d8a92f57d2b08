//! Error types for the jrk-g2 library.
//!
//! Provides unified error handling across transport, settings parsing and
//! segment access. Errors can be wrapped with context by outer operations
//! without losing the [`ErrorCode`] of the underlying failure.

use alloc::boxed::Box;
use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Short message stored inside errors.
pub type Message = heapless::String<128>;

/// Builds a [`Message`], truncating text that does not fit.
pub(crate) fn message(text: &str) -> Message {
    bounded(text)
}

/// Copies as much of `text` as fits into a bounded string.
pub(crate) fn bounded<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Categories of failure that callers can test for with [`Error::has_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    /// There were problems allocating memory.
    Memory = 1,
    /// Access was denied, often because another application has the device open.
    AccessDenied = 2,
    /// The device took too long to respond to a request or transfer data.
    Timeout = 3,
    /// The device was probably disconnected.
    DeviceDisconnected = 4,
}

/// Unified error type for all jrk-g2 operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Communication with the device failed
    Transport(TransportError),
    /// A settings file could not be parsed
    Settings(SettingsError),
    /// A segment request fell outside the fixed-size buffer
    Segment(SegmentError),
    /// An argument was outside its documented range
    InvalidArgument(Message),
    /// An inner error annotated by the operation that was running
    Context {
        /// Sentence describing the outer operation
        message: Message,
        /// The failure that caused it
        source: Box<Error>,
    },
}

/// Failure reported by a [`crate::Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransportError {
    /// Classification, if the transport could determine one
    pub code: Option<ErrorCode>,
    /// Human-readable description
    pub message: Message,
}

/// Settings-file parsing errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Document is not valid TOML or has the wrong shape
    Parse(Message),
    /// Settings could not be rendered as text
    Encode(Message),
    /// Reading or writing a settings file failed
    Io(Message),
    /// The document has no product entry
    MissingProduct,
    /// The product name is not recognized
    UnknownProduct(heapless::String<32>),
    /// A key does not name any setting
    UnknownField(heapless::String<64>),
    /// An enumerated setting used an unrecognized name
    InvalidName {
        /// Setting name
        field: &'static str,
        /// Offending value
        value: heapless::String<32>,
    },
    /// A value does not fit the setting's storage type
    OutOfRange {
        /// Setting name
        field: &'static str,
        /// Offending value
        value: i64,
    },
    /// A value has the wrong type (e.g. a string for a number)
    WrongType(&'static str),
}

/// Out-of-bounds segment access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentError {
    /// First byte requested
    pub index: usize,
    /// Number of bytes requested
    pub length: usize,
    /// Size of the buffer being accessed
    pub size: usize,
}

impl Error {
    /// Returns true if this error, or any error it wraps, has the given code.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        match self {
            Error::Transport(e) => e.code == Some(code),
            Error::Context { source, .. } => source.has_code(code),
            _ => false,
        }
    }

    /// Wraps this error with a sentence describing the outer operation.
    pub fn context(self, message_text: &str) -> Self {
        Error::Context {
            message: message(message_text),
            source: Box::new(self),
        }
    }
}

impl TransportError {
    /// Creates a transport error with a code.
    pub fn new(code: ErrorCode, text: &str) -> Self {
        Self {
            code: Some(code),
            message: message(text),
        }
    }

    /// Creates a transport error without a known code.
    pub fn other(text: &str) -> Self {
        Self {
            code: None,
            message: message(text),
        }
    }
}

impl SegmentError {
    /// Checks that `[index, index + length)` fits in a buffer of `size` bytes.
    pub fn check(index: usize, length: usize, size: usize) -> core::result::Result<(), Self> {
        match index.checked_add(length) {
            Some(end) if end <= size => Ok(()),
            _ => Err(Self { index, length, size }),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "{}", e),
            Error::Settings(e) => write!(f, "{}", e),
            Error::Segment(e) => write!(f, "{}", e),
            Error::InvalidArgument(msg) => write!(f, "{}", msg),
            Error::Context { message, source } => write!(f, "{}  {}", message, source),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SettingsError::Encode(msg) => write!(f, "Could not write settings: {}", msg),
            SettingsError::Io(msg) => write!(f, "I/O error: {}", msg),
            SettingsError::MissingProduct => write!(f, "No product was specified in the settings file."),
            SettingsError::UnknownProduct(name) => write!(f, "Unrecognized product name: \"{}\".", name),
            SettingsError::UnknownField(name) => write!(f, "Unrecognized setting: \"{}\".", name),
            SettingsError::InvalidName { field, value } => {
                write!(f, "Invalid {} value: \"{}\".", field, value)
            }
            SettingsError::OutOfRange { field, value } => {
                write!(f, "The {} value {} is out of range.", field, value)
            }
            SettingsError::WrongType(field) => write!(f, "The {} value has the wrong type.", field),
        }
    }
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Segment of {} bytes at index {} does not fit in a {}-byte buffer.",
            self.length, self.index, self.size
        )
    }
}

// Conversion impls
impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

impl From<SettingsError> for Error {
    fn from(e: SettingsError) -> Self {
        Error::Settings(e)
    }
}

impl From<SegmentError> for Error {
    fn from(e: SegmentError) -> Self {
        Error::Segment(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransportError {}

#[cfg(feature = "std")]
impl std::error::Error for SettingsError {}

#[cfg(feature = "std")]
impl std::error::Error for SegmentError {}
