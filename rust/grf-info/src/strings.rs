use std::collections::BTreeMap;

/// Language code of the reserved fallback translation.
pub const DEFAULT_LANGUAGE: u8 = 0x7F;

/// One localized rendering of a string: a language code and the text bytes
/// as they will appear on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub language: u8,
    pub text: Vec<u8>,
}

/// Read-only lookup into the compiler's localized string table.
///
/// The table must not change between a block's size computation and its
/// write: text nodes resolve their translations once for each and rely on
/// observing the same sequence both times.
pub trait StringTable {
    /// The ordered translations registered for `key`, or `None` when the key
    /// is unknown.
    fn translations(&self, key: &str) -> Option<&[Translation]>;

    /// Number of bytes a text occupies on the wire.
    ///
    /// Tables whose output stream post-processes text (control codes,
    /// escapes) override this to match; the default assumes the stored bytes
    /// are emitted verbatim.
    fn encoded_size(&self, text: &[u8]) -> usize {
        text.len()
    }
}

/// `BTreeMap`-backed [`StringTable`], primarily for tests and tooling.
#[derive(Debug, Default)]
pub struct MemoryStringTable {
    entries: BTreeMap<String, Vec<Translation>>,
}

impl MemoryStringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one translation of `key`, preserving registration order.
    pub fn insert(&mut self, key: impl Into<String>, language: u8, text: impl Into<Vec<u8>>) {
        self.entries.entry(key.into()).or_default().push(Translation {
            language,
            text: text.into(),
        });
    }
}

impl StringTable for MemoryStringTable {
    fn translations(&self, key: &str) -> Option<&[Translation]> {
        self.entries.get(key).map(Vec::as_slice)
    }
}
