use crate::{
    BlockStream, DEFAULT_LANGUAGE, GrfInfoError, HEADER_SIZE, Identifier, StringTable, Translation,
    node::write_header,
};

/// Leaf emitting one entry per localized translation of a string.
///
/// A text node is not self-contained: its size and content come from the
/// string table it is resolved against. A key with no registered
/// translations is a caller contract violation and fails with
/// [`GrfInfoError::MissingStrings`] rather than silently emitting nothing.
///
/// When `skip_default_language` is set, the reserved fallback entry
/// ([`DEFAULT_LANGUAGE`]) is left out. Callers use this for strings whose
/// plain default is already conveyed through another channel, where
/// repeating it would only waste space.
#[derive(Debug)]
pub struct TextNode {
    id: Identifier,
    key: String,
    skip_default_language: bool,
}

impl TextNode {
    pub const TAG: u8 = b'T';

    pub fn new(id: Identifier, key: impl Into<String>, skip_default_language: bool) -> Self {
        Self {
            id,
            key: key.into(),
            skip_default_language,
        }
    }

    pub fn id(&self) -> Identifier {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn resolved<'a, T: StringTable>(
        &self,
        strings: &'a T,
    ) -> Result<&'a [Translation], GrfInfoError> {
        match strings.translations(&self.key) {
            Some(translations) if !translations.is_empty() => Ok(translations),
            _ => Err(GrfInfoError::MissingStrings(self.key.clone())),
        }
    }

    fn included<'a>(
        &self,
        translations: &'a [Translation],
    ) -> impl Iterator<Item = &'a Translation> {
        let skip = self.skip_default_language;
        translations
            .iter()
            .filter(move |translation| !(skip && translation.language == DEFAULT_LANGUAGE))
    }

    pub fn size<T: StringTable>(&self, strings: &T) -> Result<usize, GrfInfoError> {
        let translations = self.resolved(strings)?;
        Ok(self
            .included(translations)
            .map(|translation| HEADER_SIZE + 1 + strings.encoded_size(&translation.text))
            .sum())
    }

    pub fn write<T, S>(&self, strings: &T, stream: &mut S) -> Result<(), GrfInfoError>
    where
        T: StringTable,
        S: BlockStream,
    {
        let translations = self.resolved(strings)?;
        for translation in self.included(translations) {
            write_header(Self::TAG, self.id, stream)?;
            stream.write_byte(translation.language)?;
            stream.write_bytes(&translation.text)?;
        }
        Ok(())
    }
}
