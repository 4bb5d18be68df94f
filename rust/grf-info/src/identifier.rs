use std::{fmt, io};

use crate::{BlockStream, GrfInfoError};

/// Names a node in the metadata tree.
///
/// An identifier is chosen once at node construction and occupies exactly
/// [`Identifier::SIZE`] bytes on the wire in either form: a symbolic code is
/// written as its four raw ASCII bytes, a numeric index as a u32
/// little-endian.
///
/// The `[u8; 4]` payload makes the four-character invariant a compile-time
/// fact for literal codes (`Identifier::Symbolic(*b"INFO")`); codes arriving
/// as strings go through [`Identifier::symbolic`], which rejects anything
/// that is not exactly four ASCII characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Identifier {
    Symbolic([u8; 4]),
    Numeric(u32),
}

impl Identifier {
    /// Encoded size of an identifier, independent of its form.
    pub const SIZE: usize = 4;

    /// Parses a symbolic code from dynamic input.
    ///
    /// Codes are neither padded nor truncated: anything other than exactly
    /// four ASCII characters is a construction error.
    pub fn symbolic(code: &str) -> Result<Self, GrfInfoError> {
        let bytes = code.as_bytes();
        if bytes.len() != Self::SIZE || !bytes.iter().all(|byte| byte.is_ascii()) {
            return Err(GrfInfoError::InvalidIdentifier(code.to_string()));
        }

        let mut id = [0u8; Self::SIZE];
        id.copy_from_slice(bytes);
        Ok(Identifier::Symbolic(id))
    }

    pub(crate) fn write<S: BlockStream>(&self, stream: &mut S) -> io::Result<()> {
        match self {
            Identifier::Symbolic(code) => stream.write_bytes(code),
            Identifier::Numeric(index) => stream.write_dword(*index),
        }
    }
}

impl From<u32> for Identifier {
    fn from(index: u32) -> Self {
        Identifier::Numeric(index)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Symbolic(code) => {
                for byte in code {
                    write!(f, "{}", *byte as char)?;
                }
                Ok(())
            }
            Identifier::Numeric(index) => write!(f, "{index}"),
        }
    }
}
