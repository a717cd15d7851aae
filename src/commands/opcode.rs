//! SPI instruction set
//!
//! Every SPI transaction with the nRF24L01 starts with a single command word.
//! Commands that target a register or a data pipe carry that operand in their
//! low bits, see [`Command::with_register`] and [`Command::with_pipe`].

use crate::{Pipe, Register};

/// SPI command opcodes (datasheet table 16)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// Read command and status registers. Bits 4:0 hold the register address.
    ReadRegister = 0b0000_0000,
    /// Write command and status registers. Bits 4:0 hold the register address.
    ///
    /// Executable in power down or standby modes only.
    WriteRegister = 0b0010_0000,
    /// Read RX payload, 1 to 32 bytes.
    ///
    /// The payload is deleted from the FIFO after it is read. Used in RX mode.
    ReadRxPayload = 0b0110_0001,
    /// Write TX payload, 1 to 32 bytes.
    WriteTxPayload = 0b1010_0000,
    /// Flush TX FIFO, used in TX mode.
    FlushTx = 0b1110_0001,
    /// Flush RX FIFO, used in RX mode.
    ///
    /// Should not be executed during transmission of an acknowledge.
    FlushRx = 0b1110_0010,
    /// Reuse the last transmitted payload.
    ///
    /// Packets are repeatedly transmitted as long as CE is high. Reuse is
    /// active until [`Command::WriteTxPayload`] or [`Command::FlushTx`].
    ReuseTxPayload = 0b1110_0011,
    /// Read the RX payload width of the top payload in the RX FIFO.
    ReadRxPayloadWidth = 0b0110_0000,
    /// Write a payload to be sent along with the ACK packet on a pipe.
    /// Bits 2:0 hold the pipe index.
    WriteAckPayload = 0b1010_1000,
    /// Write TX payload and disable auto acknowledgement on this packet.
    WriteTxPayloadNoAck = 0b1011_0000,
    /// No operation. Clocks out the status register.
    Nop = 0b1111_1111,
}

impl Command {
    /// Returns the raw opcode.
    pub const fn opcode(self) -> u8 {
        self as u8
    }

    /// Combines the opcode with a register address operand.
    pub const fn with_register(self, register: Register) -> u8 {
        self.opcode() | register.addr()
    }

    /// Combines the opcode with a data pipe operand.
    pub const fn with_pipe(self, pipe: Pipe) -> u8 {
        self.opcode() | pipe.index()
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        command.opcode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FILLER_BYTE;

    #[test]
    fn opcodes_match_instruction_table() {
        assert_eq!(u8::from(Command::ReadRegister), 0x00);
        assert_eq!(u8::from(Command::WriteRegister), 0x20);
        assert_eq!(u8::from(Command::ReadRxPayload), 0x61);
        assert_eq!(u8::from(Command::WriteTxPayload), 0xA0);
        assert_eq!(u8::from(Command::FlushTx), 0xE1);
        assert_eq!(u8::from(Command::FlushRx), 0xE2);
        assert_eq!(u8::from(Command::ReuseTxPayload), 0xE3);
        assert_eq!(u8::from(Command::ReadRxPayloadWidth), 0x60);
        assert_eq!(u8::from(Command::WriteAckPayload), 0xA8);
        assert_eq!(u8::from(Command::WriteTxPayloadNoAck), 0xB0);
        assert_eq!(u8::from(Command::Nop), 0xFF);
    }

    #[test]
    fn nop_is_the_filler_byte() {
        assert_eq!(Command::Nop.opcode(), FILLER_BYTE);
    }

    #[test]
    fn register_operand_never_collides_with_opcode_bits() {
        for register in Register::ALL {
            let read = Command::ReadRegister.with_register(register);
            let write = Command::WriteRegister.with_register(register);

            assert_eq!(read, register.addr());
            assert_eq!(write & 0b1110_0000, 0x20);
            assert_eq!(write & 0b0001_1111, register.addr());
        }
    }

    #[test]
    fn pipe_operand_never_collides_with_opcode_bits() {
        for pipe in Pipe::ALL {
            let command = Command::WriteAckPayload.with_pipe(pipe);

            assert_eq!(command & 0b1111_1000, 0xA8);
            assert_eq!(command & 0b0000_0111, pipe.index());
        }
    }
}
