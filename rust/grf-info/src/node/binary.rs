use std::io;

use crate::{BlockStream, GrfInfoError, HEADER_SIZE, Identifier, node::write_header};

/// Fixed payload widths a binary leaf can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    Byte,
    Word,
    Dword,
    Qword,
}

impl Width {
    pub const fn bytes(self) -> usize {
        match self {
            Width::Byte => 1,
            Width::Word => 2,
            Width::Dword => 4,
            Width::Qword => 8,
        }
    }
}

/// Fixed-width unsigned scalar leaf.
///
/// The payload is preceded by an explicit u16 length field even though the
/// width is statically known per identifier: a reader that does not
/// recognize a given identifier can still skip the field. That
/// forward-compatibility contract also covers the specialized leaves below,
/// which reuse the same framing with a multi-field payload.
#[derive(Debug)]
pub struct BinaryNode {
    id: Identifier,
    width: Width,
    value: u64,
}

impl BinaryNode {
    pub const TAG: u8 = b'B';

    /// The value is truncated to `width` bytes on the wire.
    pub fn new(id: Identifier, width: Width, value: u64) -> Self {
        Self { id, width, value }
    }

    pub fn id(&self) -> Identifier {
        self.id
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn size(&self) -> usize {
        HEADER_SIZE + 2 + self.width.bytes()
    }

    pub fn write<S: BlockStream>(&self, stream: &mut S) -> io::Result<()> {
        write_header(Self::TAG, self.id, stream)?;
        stream.write_word(self.width.bytes() as u16)?;
        stream.write_bytes(&self.value.to_le_bytes()[..self.width.bytes()])
    }
}

/// Structured leaf locating a bool setting inside its storage word.
#[derive(Debug)]
pub struct SettingMaskNode {
    parameter: u8,
    first_bit: u8,
    count: u8,
}

impl SettingMaskNode {
    const ID: Identifier = Identifier::Symbolic(*b"MASK");
    const WIDTH: usize = 3;

    /// Each field must fit in one byte; larger values are a construction
    /// error, not a silent truncation.
    pub fn new(parameter: u32, first_bit: u32, count: u32) -> Result<Self, GrfInfoError> {
        Ok(Self {
            parameter: fit_byte("parameter", parameter)?,
            first_bit: fit_byte("first bit", first_bit)?,
            count: fit_byte("bit count", count)?,
        })
    }

    pub fn parameter(&self) -> u8 {
        self.parameter
    }

    pub fn first_bit(&self) -> u8 {
        self.first_bit
    }

    pub fn size(&self) -> usize {
        HEADER_SIZE + 2 + Self::WIDTH
    }

    pub fn write<S: BlockStream>(&self, stream: &mut S) -> io::Result<()> {
        write_header(BinaryNode::TAG, Self::ID, stream)?;
        stream.write_word(Self::WIDTH as u16)?;
        stream.write_byte(self.parameter)?;
        stream.write_byte(self.first_bit)?;
        stream.write_byte(self.count)
    }
}

/// Structured leaf carrying the inclusive value range of an int setting.
#[derive(Debug)]
pub struct LimitNode {
    min: u32,
    max: u32,
}

impl LimitNode {
    const ID: Identifier = Identifier::Symbolic(*b"LIMI");
    const WIDTH: usize = 8;

    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> usize {
        HEADER_SIZE + 2 + Self::WIDTH
    }

    pub fn write<S: BlockStream>(&self, stream: &mut S) -> io::Result<()> {
        write_header(BinaryNode::TAG, Self::ID, stream)?;
        stream.write_word(Self::WIDTH as u16)?;
        stream.write_dword(self.min)?;
        stream.write_dword(self.max)
    }
}

fn fit_byte(field: &'static str, value: u32) -> Result<u8, GrfInfoError> {
    u8::try_from(value).map_err(|_| GrfInfoError::ValueOutOfRange { field, value })
}
