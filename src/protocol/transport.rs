//! Transport abstraction.

use crate::error::TransportError;

/// Vendor control transfers to an open jrk.
///
/// Implement this over a USB library (or a simulator in tests). Each call is
/// a single blocking request; the protocol layer never retries.
pub trait Transport {
    /// Performs a device-to-host request, filling as much of `buf` as the
    /// device returns. Returns the number of bytes received.
    fn control_read(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
    ) -> Result<usize, TransportError>;

    /// Performs a host-to-device request carrying `data`.
    fn control_write(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn control_read(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
    ) -> Result<usize, TransportError> {
        (**self).control_read(request, value, index, buf)
    }

    fn control_write(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> Result<(), TransportError> {
        (**self).control_write(request, value, index, data)
    }
}
