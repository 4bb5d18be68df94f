use crate::{
    BlockStream, GrfInfoError, HEADER_SIZE, Identifier, Node, StringTable, node::write_header,
};

/// Ordered container of child nodes.
///
/// Child order is semantically significant: output order is append order,
/// and the implementation never reorders children. A branch with no children
/// is legal and emits just its header and terminator.
#[derive(Debug)]
pub struct BranchNode {
    id: Identifier,
    children: Vec<Node>,
}

impl BranchNode {
    pub const TAG: u8 = b'C';

    pub fn new(id: Identifier) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> Identifier {
        self.id
    }

    /// Appends a child node; the child list is append-only during tree
    /// assembly and frozen once sizing begins.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn size<T: StringTable>(&self, strings: &T) -> Result<usize, GrfInfoError> {
        let mut size = HEADER_SIZE + 1;
        for child in &self.children {
            size += child.size(strings)?;
        }
        Ok(size)
    }

    pub fn write<T, S>(&self, strings: &T, stream: &mut S) -> Result<(), GrfInfoError>
    where
        T: StringTable,
        S: BlockStream,
    {
        write_header(Self::TAG, self.id, stream)?;
        for child in &self.children {
            child.write(strings, stream)?;
        }
        stream.write_byte(0x00)?;
        Ok(())
    }
}
