/// Receive data pipe index
///
/// The chip has six data pipes. The index is the operand of
/// [`Command::WriteAckPayload`](crate::Command::WriteAckPayload).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pipe {
    P0 = 0,
    P1 = 1,
    P2 = 2,
    P3 = 3,
    P4 = 4,
    P5 = 5,
}

/// Error type for out of range pipe indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PipeError {
    /// The value does not correspond to a data pipe
    InvalidValue(u8),
}

impl Pipe {
    pub const ALL: [Pipe; 6] = [Pipe::P0, Pipe::P1, Pipe::P2, Pipe::P3, Pipe::P4, Pipe::P5];

    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Pipe {
    type Error = PipeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::P0),
            1 => Ok(Self::P1),
            2 => Ok(Self::P2),
            3 => Ok(Self::P3),
            4 => Ok(Self::P4),
            5 => Ok(Self::P5),
            invalid => Err(PipeError::InvalidValue(invalid)),
        }
    }
}

impl From<Pipe> for u8 {
    fn from(pipe: Pipe) -> Self {
        pipe.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_raw_index() {
        for pipe in Pipe::ALL {
            assert_eq!(Pipe::try_from(pipe.index()), Ok(pipe));
        }
        assert_eq!(Pipe::try_from(6), Err(PipeError::InvalidValue(6)));
        assert_eq!(Pipe::try_from(0xFF), Err(PipeError::InvalidValue(0xFF)));
    }
}
