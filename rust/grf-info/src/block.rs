use crate::{BlockStream, GrfInfoError, Node, StringTable, stream::CountingStream};

/// Discriminator byte identifying a static-information record.
pub const BLOCK_TYPE: u8 = 0x14;

/// One self-framed static-information record.
///
/// A block holds an ordered list of root nodes — conventionally a single
/// `INFO` branch — and frames them as one record: type byte, the nodes in
/// order, and a trailing terminator. It is built once by a tree builder,
/// sized once, written once and then discarded.
///
/// Callers are responsible for not emitting a block with no meaningful
/// content; the builders return an empty action list instead of constructing
/// one.
#[derive(Debug)]
pub struct InfoBlock {
    nodes: Vec<Node>,
}

impl InfoBlock {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Total framed size: type byte, root nodes, trailing terminator.
    pub fn size<T: StringTable>(&self, strings: &T) -> Result<usize, GrfInfoError> {
        let mut size = 2;
        for node in &self.nodes {
            size += node.size(strings)?;
        }
        Ok(size)
    }

    /// Declares the block's size to the stream, then emits it.
    ///
    /// The traversal is routed through a counting adapter; if the bytes
    /// written diverge from the declared size the block fails with
    /// [`GrfInfoError::SizeMismatch`] before `end_block` is reached.
    pub fn write<T, S>(&self, strings: &T, stream: &mut S) -> Result<(), GrfInfoError>
    where
        T: StringTable,
        S: BlockStream,
    {
        let declared = self.size(strings)?;
        tracing::trace!(declared, roots = self.nodes.len(), "writing info block");
        stream.begin_block(declared)?;

        let mut counted = CountingStream::new(stream);
        counted.write_byte(BLOCK_TYPE)?;
        for node in &self.nodes {
            node.write(strings, &mut counted)?;
        }
        counted.write_byte(0x00)?;

        let written = counted.written();
        if written != declared {
            return Err(GrfInfoError::SizeMismatch { declared, written });
        }

        stream.end_block()?;
        Ok(())
    }
}
