//! Register and data pipe operands for the nRF24L01
//! Generated from the nRF24L01+ Product Specification v1.0, section 9

mod map;
mod pipe;

pub use map::*;
pub use pipe::*;
