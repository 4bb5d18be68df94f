/// Raw compiler output describing one configurable parameter word and the
/// settings stored in it.
///
/// Descriptors are read-only inputs supplied by the surrounding compiler;
/// semantic validation beyond the minimal type check needed to pick an
/// encoding happened in earlier stages.
#[derive(Clone, Debug, Default)]
pub struct ParameterDescriptor {
    /// Explicit storage slot; overrides the running slot counter when set.
    pub slot: Option<u32>,
    pub settings: Vec<SettingDescriptor>,
}

/// One user-facing setting within a parameter word.
#[derive(Clone, Debug, Default)]
pub struct SettingDescriptor {
    /// String-table key for the setting's display name, when declared.
    pub name: Option<String>,
    /// String-table key for the setting's description, when declared.
    pub description: Option<String>,
    /// Declared type; `"int"` and `"bool"` are the encodable kinds.
    pub kind: String,
    pub min_value: Option<u32>,
    pub max_value: Option<u32>,
    /// Bit position of a bool setting within its storage word.
    pub bit: Option<u32>,
    pub default_value: Option<u32>,
}
