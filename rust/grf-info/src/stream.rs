use std::io;

/// Framed output stream the encoder emits blocks into.
///
/// Implementors own the outer framing mechanics of the surrounding file —
/// length prefix, checksums, buffering. The encoder calls
/// [`begin_block`](BlockStream::begin_block) exactly once per block with the
/// precomputed total size, then only primitive writes, then
/// [`end_block`](BlockStream::end_block). The primitives must emit exactly
/// the bytes given, in order; there is no backpatching.
pub trait BlockStream {
    /// Opens a framed block of exactly `size` bytes.
    fn begin_block(&mut self, size: usize) -> io::Result<()>;

    /// Emits raw bytes into the open block.
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Closes the block opened by [`begin_block`](BlockStream::begin_block).
    fn end_block(&mut self) -> io::Result<()>;

    fn write_byte(&mut self, value: u8) -> io::Result<()> {
        self.write_bytes(&[value])
    }

    fn write_word(&mut self, value: u16) -> io::Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    fn write_dword(&mut self, value: u32) -> io::Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }
}

/// A framed block captured by [`MemoryStream`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FramedBlock {
    /// Size announced before the first byte was written.
    pub declared_size: usize,
    pub bytes: Vec<u8>,
}

/// In-memory [`BlockStream`] backend.
///
/// Records every framed block along with its declared size so callers (and
/// tests) can inspect exactly what would reach the output file. Primitive
/// writes outside an open block and nested blocks are rejected: one block
/// owns the stream for the duration of its emission.
#[derive(Debug, Default)]
pub struct MemoryStream {
    finished: Vec<FramedBlock>,
    current: Option<FramedBlock>,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks completed so far, in emission order.
    pub fn blocks(&self) -> &[FramedBlock] {
        &self.finished
    }

    pub fn into_blocks(self) -> Vec<FramedBlock> {
        self.finished
    }
}

impl BlockStream for MemoryStream {
    fn begin_block(&mut self, size: usize) -> io::Result<()> {
        if self.current.is_some() {
            return Err(io::Error::other("a block is already open"));
        }

        self.current = Some(FramedBlock {
            declared_size: size,
            bytes: Vec::with_capacity(size),
        });
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        match &mut self.current {
            Some(block) => {
                block.bytes.extend_from_slice(bytes);
                Ok(())
            }
            None => Err(io::Error::other("no block is open")),
        }
    }

    fn end_block(&mut self) -> io::Result<()> {
        match self.current.take() {
            Some(block) => {
                self.finished.push(block);
                Ok(())
            }
            None => Err(io::Error::other("no block is open")),
        }
    }
}

/// Counts the payload bytes flowing into a wrapped stream.
///
/// [`InfoBlock::write`](crate::InfoBlock::write) routes its whole traversal
/// through this adapter and compares the count against the declared size
/// afterwards, turning a size/write divergence into an error instead of a
/// corrupted output file.
pub(crate) struct CountingStream<'a, S> {
    inner: &'a mut S,
    written: usize,
}

impl<'a, S: BlockStream> CountingStream<'a, S> {
    pub(crate) fn new(inner: &'a mut S) -> Self {
        Self { inner, written: 0 }
    }

    pub(crate) fn written(&self) -> usize {
        self.written
    }
}

impl<S: BlockStream> BlockStream for CountingStream<'_, S> {
    fn begin_block(&mut self, size: usize) -> io::Result<()> {
        self.inner.begin_block(size)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_bytes(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    fn end_block(&mut self) -> io::Result<()> {
        self.inner.end_block()
    }
}
