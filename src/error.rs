/// Errors returned by [`Device`](crate::Device) operations
///
/// `E` is the error type of the wrapped SPI device. Bus errors are passed
/// through untouched; the other variants are raised before any bus activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// SPI communication failed
    Spi(E),
    /// Requested payload exceeds [`MAX_PAYLOAD_SIZE`](crate::MAX_PAYLOAD_SIZE) bytes
    PayloadTooLarge(usize),
    /// A payload buffer does not match the requested transaction length
    BufferLength {
        /// Requested payload length
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },
}
