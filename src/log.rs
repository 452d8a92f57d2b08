//! Logging macros.
//!
//! Forward to `defmt` or `tracing` depending on enabled features. With
//! neither feature the arguments are type-checked and discarded. Format
//! strings must stick to plain `{}` placeholders so both backends accept them.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        let _ = core::format_args!($($arg)*);
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        let _ = core::format_args!($($arg)*);
    }};
}
