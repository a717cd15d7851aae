//! nRF24L01 Device Interface
//!
//! This module provides the command layer for nRF24L01(+) transceivers
//! connected over SPI. It supports both synchronous and asynchronous operations.
//!
//! Every chip operation is a single SPI transaction framed the same way:
//!
//! ```text
//! MOSI: [command] [payload 0] ... [payload N-1]
//! MISO: [status ] [data 0   ] ... [data N-1   ]
//! ```
//!
//! The first byte sent is the command word, the first byte received is the
//! STATUS register. On reads the payload bytes are clocked out as
//! [`FILLER_BYTE`]. The transaction is always performed, even for commands
//! without payload, and the status byte is returned uninterpreted.
//!
//! # Example
//! ```no_run
//! use embedded_hal::spi::SpiDevice;
//! use nrf24l01_ll::{Device, Error, Register};
//!
//! fn power_up<SPI: SpiDevice>(spi: SPI) -> Result<Device<SPI>, Error<SPI::Error>> {
//!     let mut device = Device::new(spi);
//!
//!     // PWR_UP | EN_CRC | CRCO
//!     device.write_register(Register::CONFIG, &[0x0E])?;
//!     device.flush_rx()?;
//!     device.flush_tx()?;
//!
//!     Ok(device)
//! }
//! ```

use crate::{Command, Error, Pipe, Register, FILLER_BYTE, MAX_PAYLOAD_SIZE};

/// A single SPI transaction buffer: command word followed by up to
/// [`MAX_PAYLOAD_SIZE`] payload bytes.
struct Frame {
    buffer: [u8; MAX_PAYLOAD_SIZE + 1],
    len: usize,
}

impl Frame {
    /// Builds the outgoing frame, rejecting mismatched buffers before anything
    /// touches the bus.
    fn new<E>(
        command: u8,
        tx: Option<&[u8]>,
        rx: Option<&[u8]>,
        num_bytes: usize,
    ) -> Result<Self, Error<E>> {
        if num_bytes > MAX_PAYLOAD_SIZE {
            return Err(Error::PayloadTooLarge(num_bytes));
        }

        for len in [tx.map(<[u8]>::len), rx.map(<[u8]>::len)].into_iter().flatten() {
            if len != num_bytes {
                return Err(Error::BufferLength {
                    expected: num_bytes,
                    actual: len,
                });
            }
        }

        let mut buffer = [FILLER_BYTE; MAX_PAYLOAD_SIZE + 1];
        buffer[0] = command;
        if let Some(tx) = tx {
            buffer[1..=num_bytes].copy_from_slice(tx);
        }

        Ok(Self {
            buffer,
            len: num_bytes + 1,
        })
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buffer[..self.len]
    }

    /// Splits the response into the status byte and, if requested, the payload.
    fn unpack(&self, rx: Option<&mut [u8]>) -> u8 {
        if let Some(rx) = rx {
            rx.copy_from_slice(&self.buffer[1..self.len]);
        }

        self.buffer[0]
    }
}

/// Main device interface for the nRF24L01 radio.
///
/// This struct wraps an SPI interface and provides one method per SPI
/// command. Each method returns the STATUS register value clocked out by the
/// chip during the command.
///
/// All operations take `&mut self`, so a shared device has to be put behind a
/// mutex by the caller. Nothing here locks.
pub struct Device<SPI> {
    spi: SPI,
}

impl<SPI> Device<SPI> {
    /// Creates a new Device instance wrapping the provided SPI interface.
    ///
    /// # Arguments
    /// * `spi` - An SPI interface implementing the required embedded-hal traits
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Releases the underlying SPI device.
    ///
    /// This method consumes the Device instance and returns the wrapped SPI interface.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Device<SPI>
where
    SPI: embedded_hal::spi::SpiDevice,
{
    /// Performs one framed SPI transaction.
    ///
    /// Sends `command` followed by `num_bytes` bytes of `tx` (or
    /// [`FILLER_BYTE`] when `tx` is `None`). When `rx` is provided the
    /// `num_bytes` response bytes following the status byte are copied into it.
    ///
    /// # Arguments
    /// * `command` - Command word, already combined with any operand
    /// * `tx` - Outgoing payload, `num_bytes` long
    /// * `rx` - Storage for the incoming payload, `num_bytes` long
    /// * `num_bytes` - Payload length, 0 for status-only commands
    ///
    /// # Returns
    /// The STATUS register value
    ///
    /// # Errors
    /// * `Error::Spi` - SPI communication failed
    /// * `Error::PayloadTooLarge` - `num_bytes` exceeds [`MAX_PAYLOAD_SIZE`]
    /// * `Error::BufferLength` - `tx` or `rx` is not `num_bytes` long
    pub fn transceive(
        &mut self,
        command: u8,
        tx: Option<&[u8]>,
        rx: Option<&mut [u8]>,
        num_bytes: usize,
    ) -> Result<u8, Error<SPI::Error>> {
        let mut frame = Frame::new::<SPI::Error>(command, tx, rx.as_deref(), num_bytes)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("spi command {=u8:#x}, {=usize} payload bytes", command, num_bytes);

        self.spi
            .transfer_in_place(frame.as_mut_slice())
            .map_err(Error::Spi)?;

        let status = frame.unpack(rx);

        #[cfg(feature = "defmt")]
        defmt::trace!("spi status {=u8:#x}", status);

        Ok(status)
    }

    /// Reads `bytes.len()` bytes from a register (`R_REGISTER`).
    ///
    /// Multi-byte registers (addresses) are read LSByte first.
    pub fn read_register(
        &mut self,
        register: Register,
        bytes: &mut [u8],
    ) -> Result<u8, Error<SPI::Error>> {
        let len = bytes.len();
        self.transceive(
            Command::ReadRegister.with_register(register),
            None,
            Some(bytes),
            len,
        )
    }

    /// Writes `bytes` to a register (`W_REGISTER`).
    ///
    /// Only valid in power down or standby modes.
    pub fn write_register(
        &mut self,
        register: Register,
        bytes: &[u8],
    ) -> Result<u8, Error<SPI::Error>> {
        self.transceive(
            Command::WriteRegister.with_register(register),
            Some(bytes),
            None,
            bytes.len(),
        )
    }

    /// Reads the top RX FIFO payload into `bytes` (`R_RX_PAYLOAD`).
    pub fn read_rx_payload(&mut self, bytes: &mut [u8]) -> Result<u8, Error<SPI::Error>> {
        let len = bytes.len();
        self.transceive(Command::ReadRxPayload.opcode(), None, Some(bytes), len)
    }

    /// Writes a TX payload (`W_TX_PAYLOAD`).
    pub fn write_tx_payload(&mut self, bytes: &[u8]) -> Result<u8, Error<SPI::Error>> {
        self.transceive(Command::WriteTxPayload.opcode(), Some(bytes), None, bytes.len())
    }

    /// Flushes the TX FIFO (`FLUSH_TX`).
    pub fn flush_tx(&mut self) -> Result<u8, Error<SPI::Error>> {
        self.transceive(Command::FlushTx.opcode(), None, None, 0)
    }

    /// Flushes the RX FIFO (`FLUSH_RX`).
    pub fn flush_rx(&mut self) -> Result<u8, Error<SPI::Error>> {
        self.transceive(Command::FlushRx.opcode(), None, None, 0)
    }

    /// Retransmits the last payload while CE is high (`REUSE_TX_PL`).
    pub fn reuse_tx_payload(&mut self) -> Result<u8, Error<SPI::Error>> {
        self.transceive(Command::ReuseTxPayload.opcode(), None, None, 0)
    }

    /// Reads the width of the top RX FIFO payload (`R_RX_PL_WID`).
    ///
    /// # Returns
    /// `(status, width)`
    pub fn read_rx_payload_width(&mut self) -> Result<(u8, u8), Error<SPI::Error>> {
        let mut width = [0u8; 1];
        let status =
            self.transceive(Command::ReadRxPayloadWidth.opcode(), None, Some(&mut width[..]), 1)?;

        Ok((status, width[0]))
    }

    /// Writes a payload to be returned with the next ACK on `pipe`
    /// (`W_ACK_PAYLOAD`).
    pub fn write_ack_payload(&mut self, pipe: Pipe, bytes: &[u8]) -> Result<u8, Error<SPI::Error>> {
        self.transceive(
            Command::WriteAckPayload.with_pipe(pipe),
            Some(bytes),
            None,
            bytes.len(),
        )
    }

    /// Writes a TX payload with auto acknowledgement disabled
    /// (`W_TX_PAYLOAD_NOACK`).
    pub fn write_tx_payload_no_ack(&mut self, bytes: &[u8]) -> Result<u8, Error<SPI::Error>> {
        self.transceive(
            Command::WriteTxPayloadNoAck.opcode(),
            Some(bytes),
            None,
            bytes.len(),
        )
    }

    /// Reads the STATUS register without side effects (`NOP`).
    pub fn nop(&mut self) -> Result<u8, Error<SPI::Error>> {
        self.transceive(Command::Nop.opcode(), None, None, 0)
    }
}

impl<SPI> Device<SPI>
where
    SPI: embedded_hal_async::spi::SpiDevice,
{
    /// Asynchronously performs one framed SPI transaction.
    ///
    /// This is the async version of [`transceive`](Device::transceive).
    pub async fn transceive_async(
        &mut self,
        command: u8,
        tx: Option<&[u8]>,
        rx: Option<&mut [u8]>,
        num_bytes: usize,
    ) -> Result<u8, Error<SPI::Error>> {
        let mut frame = Frame::new::<SPI::Error>(command, tx, rx.as_deref(), num_bytes)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("spi command {=u8:#x}, {=usize} payload bytes", command, num_bytes);

        self.spi
            .transfer_in_place(frame.as_mut_slice())
            .await
            .map_err(Error::Spi)?;

        let status = frame.unpack(rx);

        #[cfg(feature = "defmt")]
        defmt::trace!("spi status {=u8:#x}", status);

        Ok(status)
    }

    /// Asynchronously reads a register.
    ///
    /// This is the async version of [`read_register`](Device::read_register).
    pub async fn read_register_async(
        &mut self,
        register: Register,
        bytes: &mut [u8],
    ) -> Result<u8, Error<SPI::Error>> {
        let len = bytes.len();
        self.transceive_async(
            Command::ReadRegister.with_register(register),
            None,
            Some(bytes),
            len,
        )
        .await
    }

    /// Asynchronously writes a register.
    ///
    /// This is the async version of [`write_register`](Device::write_register).
    pub async fn write_register_async(
        &mut self,
        register: Register,
        bytes: &[u8],
    ) -> Result<u8, Error<SPI::Error>> {
        self.transceive_async(
            Command::WriteRegister.with_register(register),
            Some(bytes),
            None,
            bytes.len(),
        )
        .await
    }

    /// This is the async version of [`read_rx_payload`](Device::read_rx_payload).
    pub async fn read_rx_payload_async(
        &mut self,
        bytes: &mut [u8],
    ) -> Result<u8, Error<SPI::Error>> {
        let len = bytes.len();
        self.transceive_async(Command::ReadRxPayload.opcode(), None, Some(bytes), len)
            .await
    }

    /// This is the async version of [`write_tx_payload`](Device::write_tx_payload).
    pub async fn write_tx_payload_async(&mut self, bytes: &[u8]) -> Result<u8, Error<SPI::Error>> {
        self.transceive_async(Command::WriteTxPayload.opcode(), Some(bytes), None, bytes.len())
            .await
    }

    /// This is the async version of [`flush_tx`](Device::flush_tx).
    pub async fn flush_tx_async(&mut self) -> Result<u8, Error<SPI::Error>> {
        self.transceive_async(Command::FlushTx.opcode(), None, None, 0)
            .await
    }

    /// This is the async version of [`flush_rx`](Device::flush_rx).
    pub async fn flush_rx_async(&mut self) -> Result<u8, Error<SPI::Error>> {
        self.transceive_async(Command::FlushRx.opcode(), None, None, 0)
            .await
    }

    /// This is the async version of [`reuse_tx_payload`](Device::reuse_tx_payload).
    pub async fn reuse_tx_payload_async(&mut self) -> Result<u8, Error<SPI::Error>> {
        self.transceive_async(Command::ReuseTxPayload.opcode(), None, None, 0)
            .await
    }

    /// This is the async version of [`read_rx_payload_width`](Device::read_rx_payload_width).
    pub async fn read_rx_payload_width_async(&mut self) -> Result<(u8, u8), Error<SPI::Error>> {
        let mut width = [0u8; 1];
        let status = self
            .transceive_async(Command::ReadRxPayloadWidth.opcode(), None, Some(&mut width[..]), 1)
            .await?;

        Ok((status, width[0]))
    }

    /// This is the async version of [`write_ack_payload`](Device::write_ack_payload).
    pub async fn write_ack_payload_async(
        &mut self,
        pipe: Pipe,
        bytes: &[u8],
    ) -> Result<u8, Error<SPI::Error>> {
        self.transceive_async(
            Command::WriteAckPayload.with_pipe(pipe),
            Some(bytes),
            None,
            bytes.len(),
        )
        .await
    }

    /// This is the async version of [`write_tx_payload_no_ack`](Device::write_tx_payload_no_ack).
    pub async fn write_tx_payload_no_ack_async(
        &mut self,
        bytes: &[u8],
    ) -> Result<u8, Error<SPI::Error>> {
        self.transceive_async(
            Command::WriteTxPayloadNoAck.opcode(),
            Some(bytes),
            None,
            bytes.len(),
        )
        .await
    }

    /// This is the async version of [`nop`](Device::nop).
    pub async fn nop_async(&mut self) -> Result<u8, Error<SPI::Error>> {
        self.transceive_async(Command::Nop.opcode(), None, None, 0)
            .await
    }
}
