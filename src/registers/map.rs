//! Register map
//!
//! Addresses of the nRF24L01(+) configuration and status registers
//! (datasheet section 9). Addresses 0x18 to 0x1B are reserved and have no
//! variant.

/// Register address, valid as the operand of the register read/write commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[allow(non_camel_case_types)]
pub enum Register {
    /// Configuration register (CRC, power up, PRX/PTX, IRQ masks)
    CONFIG = 0x00,
    /// Enable auto acknowledgement per pipe
    EN_AA = 0x01,
    /// Enabled RX addresses
    EN_RXADDR = 0x02,
    /// Setup of address widths
    SETUP_AW = 0x03,
    /// Setup of automatic retransmission
    SETUP_RETR = 0x04,
    /// RF channel
    RF_CH = 0x05,
    /// RF setup (data rate, output power)
    RF_SETUP = 0x06,
    /// Status register
    STATUS = 0x07,
    /// Transmit observe register
    OBSERVE_TX = 0x08,
    /// Received power detector (carrier detect on the nRF24L01)
    RPD = 0x09,
    /// Receive address data pipe 0, 5 bytes maximum
    RX_ADDR_P0 = 0x0A,
    /// Receive address data pipe 1, 5 bytes maximum
    RX_ADDR_P1 = 0x0B,
    /// Receive address data pipe 2, LSB only
    RX_ADDR_P2 = 0x0C,
    /// Receive address data pipe 3, LSB only
    RX_ADDR_P3 = 0x0D,
    /// Receive address data pipe 4, LSB only
    RX_ADDR_P4 = 0x0E,
    /// Receive address data pipe 5, LSB only
    RX_ADDR_P5 = 0x0F,
    /// Transmit address
    TX_ADDR = 0x10,
    /// Number of bytes in RX payload in data pipe 0
    RX_PW_P0 = 0x11,
    /// Number of bytes in RX payload in data pipe 1
    RX_PW_P1 = 0x12,
    /// Number of bytes in RX payload in data pipe 2
    RX_PW_P2 = 0x13,
    /// Number of bytes in RX payload in data pipe 3
    RX_PW_P3 = 0x14,
    /// Number of bytes in RX payload in data pipe 4
    RX_PW_P4 = 0x15,
    /// Number of bytes in RX payload in data pipe 5
    RX_PW_P5 = 0x16,
    /// FIFO status register
    FIFO_STATUS = 0x17,
    /// Enable dynamic payload length per pipe
    DYNPD = 0x1C,
    /// Feature register (dynamic payload, ACK payload, NOACK)
    FEATURE = 0x1D,
}

impl Register {
    /// Every addressable register, in address order.
    pub const ALL: [Register; 26] = [
        Register::CONFIG,
        Register::EN_AA,
        Register::EN_RXADDR,
        Register::SETUP_AW,
        Register::SETUP_RETR,
        Register::RF_CH,
        Register::RF_SETUP,
        Register::STATUS,
        Register::OBSERVE_TX,
        Register::RPD,
        Register::RX_ADDR_P0,
        Register::RX_ADDR_P1,
        Register::RX_ADDR_P2,
        Register::RX_ADDR_P3,
        Register::RX_ADDR_P4,
        Register::RX_ADDR_P5,
        Register::TX_ADDR,
        Register::RX_PW_P0,
        Register::RX_PW_P1,
        Register::RX_PW_P2,
        Register::RX_PW_P3,
        Register::RX_PW_P4,
        Register::RX_PW_P5,
        Register::FIFO_STATUS,
        Register::DYNPD,
        Register::FEATURE,
    ];

    /// Returns the 5-bit register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> Self {
        register.addr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_fit_in_five_bits() {
        for register in Register::ALL {
            assert_eq!(register.addr() & !0x1F, 0);
        }
    }

    #[test]
    fn addresses_are_ordered_and_skip_reserved_block() {
        for pair in Register::ALL.windows(2) {
            assert!(pair[0].addr() < pair[1].addr());
        }
        assert!(Register::ALL
            .iter()
            .all(|register| !(0x18..=0x1B).contains(&register.addr())));
        assert_eq!(u8::from(Register::FEATURE), 0x1D);
    }
}
