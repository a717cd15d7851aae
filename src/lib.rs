#![cfg_attr(not(test), no_std)]
//! nRF24L01 Low-Level Command Driver
//!
//! This crate provides the SPI command layer for the Nordic nRF24L01(+)
//! 2.4GHz transceiver. It turns the chip's SPI instruction set into correctly
//! framed bus transactions and hands back the STATUS byte the chip shifts out
//! with every command.
//!
//! # Features
//! - All eleven SPI commands of the nRF24L01+:
//!   - `R_REGISTER` / `W_REGISTER`
//!   - `R_RX_PAYLOAD` / `W_TX_PAYLOAD` / `W_TX_PAYLOAD_NOACK`
//!   - `FLUSH_TX` / `FLUSH_RX` / `REUSE_TX_PL`
//!   - `R_RX_PL_WID` / `W_ACK_PAYLOAD`
//!   - `NOP`
//! - Blocking (`embedded-hal`) and async (`embedded-hal-async`) SPI devices
//! - Fixed-size stack buffers, no allocation
//! - Optional `defmt` support
//!
//! # Architecture
//! The driver is organized into several modules:
//!
//! - [`device`]: Main device interface for hardware interaction
//!   - Frames every command into a single SPI transaction
//!   - Returns the STATUS byte of each transaction
//!
//! - [`commands`]: SPI opcodes and their operand encoding
//!
//! - [`registers`]: Register addresses and data pipe indices
//!
//! # Important Notes
//! - The status byte is returned raw, decoding it is left to the caller
//! - Payloads are limited to [`MAX_PAYLOAD_SIZE`] bytes
//! - Timing (CE pulses, power up delays) is not handled here
//!
//! # Example
//! ```no_run
//! use embedded_hal::spi::SpiDevice;
//! use nrf24l01_ll::{Device, Error};
//!
//! fn poll_status<SPI: SpiDevice>(spi: SPI) -> Result<u8, Error<SPI::Error>> {
//!     let mut device = Device::new(spi);
//!
//!     device.nop()
//! }
//! ```

pub mod commands;
pub mod device;
mod error;
pub mod registers;

pub use commands::*;
pub use device::Device;
pub use error::Error;
pub use registers::*;

/// SPI mode of the nRF24L01 (CPOL = 0, CPHA = 0)
pub const MODE: embedded_hal::spi::Mode = embedded_hal::spi::MODE_0;

/// Maximum payload length of a single command
pub const MAX_PAYLOAD_SIZE: usize = 32;

/// Byte clocked out on MOSI when a command has no data to send.
///
/// Equal to the `NOP` opcode.
pub const FILLER_BYTE: u8 = 0xFF;

#[cfg(test)]
mod test {
    /// Takes an indefinite repetition of a tuple of 2 vectors: `(expected_data, response_data)`
    /// and generates an array of `SpiTransaction`s, one framed transfer each.
    #[macro_export]
    macro_rules! spi_test_expects {
        ($( ($expected:expr , $response:expr $(,)? ) , ) + ) => {
            [
                $(
                    SpiTransaction::transaction_start(),
                    SpiTransaction::transfer_in_place($expected, $response),
                    SpiTransaction::transaction_end(),
                )*
            ]
        }
    }

    #[test]
    fn spi_mode_is_mode_0() {
        assert_eq!(crate::MODE, embedded_hal::spi::MODE_0);
    }
}
