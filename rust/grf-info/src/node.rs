mod binary;
mod branch;
mod text;

pub use binary::*;
pub use branch::*;
pub use text::*;

use std::io;

use crate::{BlockStream, GrfInfoError, Identifier, StringTable};

/// Number of bytes every node contributes before its payload: one tag byte
/// plus the four identifier bytes.
pub const HEADER_SIZE: usize = 1 + Identifier::SIZE;

/// One element of the metadata tree.
///
/// The variant set is closed: every variant implements both halves of the
/// size/write contract, and [`Node::write`] must emit exactly
/// [`Node::size`] bytes for any tree handed to a block. Nodes are immutable
/// after construction except for [`BranchNode`]'s append-only child list,
/// which is frozen before sizing begins.
#[derive(Debug)]
pub enum Node {
    Text(TextNode),
    Branch(BranchNode),
    Binary(BinaryNode),
    SettingMask(SettingMaskNode),
    Limit(LimitNode),
}

impl Node {
    /// Exact number of bytes [`Node::write`] will emit for this node.
    pub fn size<T: StringTable>(&self, strings: &T) -> Result<usize, GrfInfoError> {
        match self {
            Node::Text(node) => node.size(strings),
            Node::Branch(node) => node.size(strings),
            Node::Binary(node) => Ok(node.size()),
            Node::SettingMask(node) => Ok(node.size()),
            Node::Limit(node) => Ok(node.size()),
        }
    }

    pub fn write<T, S>(&self, strings: &T, stream: &mut S) -> Result<(), GrfInfoError>
    where
        T: StringTable,
        S: BlockStream,
    {
        match self {
            Node::Text(node) => node.write(strings, stream),
            Node::Branch(node) => node.write(strings, stream),
            Node::Binary(node) => Ok(node.write(stream)?),
            Node::SettingMask(node) => Ok(node.write(stream)?),
            Node::Limit(node) => Ok(node.write(stream)?),
        }
    }
}

impl From<TextNode> for Node {
    fn from(node: TextNode) -> Self {
        Node::Text(node)
    }
}

impl From<BranchNode> for Node {
    fn from(node: BranchNode) -> Self {
        Node::Branch(node)
    }
}

impl From<BinaryNode> for Node {
    fn from(node: BinaryNode) -> Self {
        Node::Binary(node)
    }
}

impl From<SettingMaskNode> for Node {
    fn from(node: SettingMaskNode) -> Self {
        Node::SettingMask(node)
    }
}

impl From<LimitNode> for Node {
    fn from(node: LimitNode) -> Self {
        Node::Limit(node)
    }
}

/// Emits the tag byte and identifier shared by every node kind.
pub(crate) fn write_header<S: BlockStream>(
    tag: u8,
    id: Identifier,
    stream: &mut S,
) -> io::Result<()> {
    stream.write_byte(tag)?;
    id.write(stream)
}
