//! Tree builders assembling info blocks from compiler descriptors.

use crate::{
    BinaryNode, BranchNode, GrfInfoError, Identifier, InfoBlock, LimitNode, Node,
    ParameterDescriptor, SettingDescriptor, SettingMaskNode, StringTable, TextNode, Width,
};

const INFO: Identifier = Identifier::Symbolic(*b"INFO");
const NAME: Identifier = Identifier::Symbolic(*b"NAME");
const DESC: Identifier = Identifier::Symbolic(*b"DESC");
const NPAR: Identifier = Identifier::Symbolic(*b"NPAR");
const PARA: Identifier = Identifier::Symbolic(*b"PARA");
const MASK: Identifier = Identifier::Symbolic(*b"MASK");
const TYPE: Identifier = Identifier::Symbolic(*b"TYPE");
const DFLT: Identifier = Identifier::Symbolic(*b"DFLT");

/// Builds the block advertising the output's name and description.
///
/// A string is only worth advertising when it carries more than one
/// translation: a lone default is already conveyed through another channel,
/// so its text node would be redundant (and is suppressed per entry via the
/// default-language flag). When neither string qualifies there is nothing to
/// say and no block is built at all.
pub fn name_desc_actions<T: StringTable>(strings: &T, name: &str, desc: &str) -> Vec<InfoBlock> {
    let mut root = BranchNode::new(INFO);
    for (id, key) in [(NAME, name), (DESC, desc)] {
        let translated = strings
            .translations(key)
            .is_some_and(|translations| translations.len() > 1);
        if translated {
            root.push(TextNode::new(id, key, true));
        }
    }

    if root.is_empty() {
        return Vec::new();
    }

    tracing::debug!(name, desc, "built name/description block");
    vec![InfoBlock::new(vec![root.into()])]
}

/// Builds the block describing the output's configurable parameters.
///
/// The root `INFO` branch always carries an `NPAR` leaf with the flattened
/// setting count; the `PARA` branch with one numbered sub-branch per setting
/// is only attached when settings exist.
pub fn param_desc_actions(params: &[ParameterDescriptor]) -> Result<Vec<InfoBlock>, GrfInfoError> {
    let setting_count: usize = params.iter().map(|param| param.settings.len()).sum();

    let mut root = BranchNode::new(INFO);
    root.push(BinaryNode::new(NPAR, Width::Byte, setting_count as u64));

    let mut para = BranchNode::new(PARA);
    let mut cursor = SlotCursor::new();
    for param in params {
        cursor.enter_descriptor(param.slot);
        for setting in &param.settings {
            para.push(setting_node(setting, &mut cursor)?);
        }
        cursor.finish_descriptor();
    }

    if !para.is_empty() {
        root.push(para);
    }

    tracing::debug!(settings = setting_count, "built parameter block");
    Ok(vec![InfoBlock::new(vec![root.into()])])
}

fn setting_node(
    setting: &SettingDescriptor,
    cursor: &mut SlotCursor,
) -> Result<Node, GrfInfoError> {
    let mut node = BranchNode::new(Identifier::Numeric(cursor.next_setting()));

    if let Some(name) = &setting.name {
        node.push(TextNode::new(NAME, name.clone(), false));
    }
    if let Some(description) = &setting.description {
        node.push(TextNode::new(DESC, description.clone(), false));
    }

    match setting.kind.as_str() {
        "int" => {
            node.push(BinaryNode::new(MASK, Width::Byte, u64::from(cursor.slot)));
            node.push(LimitNode::new(
                setting.min_value.unwrap_or(0),
                setting.max_value.unwrap_or(u32::MAX),
            ));
        }
        "bool" => {
            node.push(BinaryNode::new(TYPE, Width::Byte, 1));
            node.push(SettingMaskNode::new(
                cursor.slot,
                setting.bit.unwrap_or(0),
                1,
            )?);
        }
        other => return Err(GrfInfoError::UnsupportedSettingType(other.to_string())),
    }

    if let Some(default) = setting.default_value {
        node.push(BinaryNode::new(DFLT, Width::Dword, u64::from(default)));
    }

    Ok(Node::Branch(node))
}

/// The two counters driving the parameter traversal.
///
/// `setting_index` advances once per emitted setting and yields the
/// sequential, gapless, zero-based numbering that other tooling keys on.
/// `slot` identifies the storage word a setting occupies: an explicit
/// descriptor slot overrides it, and it otherwise advances only after a
/// descriptor's settings are all emitted — several bool settings may share
/// one word bit-by-bit, while each int setting takes a whole word.
#[derive(Debug, PartialEq, Eq)]
struct SlotCursor {
    setting_index: u32,
    slot: u32,
}

impl SlotCursor {
    fn new() -> Self {
        Self {
            setting_index: 0,
            slot: 0,
        }
    }

    fn enter_descriptor(&mut self, explicit_slot: Option<u32>) {
        if let Some(slot) = explicit_slot {
            self.slot = slot;
        }
    }

    fn next_setting(&mut self) -> u32 {
        let index = self.setting_index;
        self.setting_index += 1;
        index
    }

    fn finish_descriptor(&mut self) {
        self.slot += 1;
    }
}
