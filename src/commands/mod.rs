//! Radio command encoding
//!
//! This module holds the nRF24L01 SPI instruction set. Commands are plain
//! opcode constants; the transaction layout built around them lives in
//! [`crate::device`].
//!
//! # Command Word
//! - Register commands (`R_REGISTER`, `W_REGISTER`) OR a 5-bit register
//!   address into bits 4:0
//! - `W_ACK_PAYLOAD` ORs a 3-bit pipe index into bits 2:0
//! - All other commands are sent verbatim
//!
//! # Important Notes
//! - Every command returns the STATUS register in the first response byte
//! - `NOP` (0xFF) is also the filler byte clocked out on reads

mod opcode;

pub use opcode::*;
