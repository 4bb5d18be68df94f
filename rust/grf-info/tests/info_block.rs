use anyhow::Result;
use grf_info::{
    BLOCK_TYPE, BinaryNode, BlockStream, BranchNode, DEFAULT_LANGUAGE, FramedBlock, GrfInfoError,
    Identifier, InfoBlock, LimitNode, MemoryStream, MemoryStringTable, Node, ParameterDescriptor,
    SettingDescriptor, SettingMaskNode, StringTable, TextNode, Translation, Width,
    name_desc_actions, param_desc_actions,
};

fn emit(block: &InfoBlock, strings: &impl StringTable) -> Result<FramedBlock> {
    let mut stream = MemoryStream::new();
    block.write(strings, &mut stream)?;
    Ok(stream.into_blocks().remove(0))
}

fn int_setting() -> SettingDescriptor {
    SettingDescriptor {
        kind: "int".into(),
        ..SettingDescriptor::default()
    }
}

fn bool_setting() -> SettingDescriptor {
    SettingDescriptor {
        kind: "bool".into(),
        ..SettingDescriptor::default()
    }
}

#[test]
fn it_skips_name_and_desc_with_only_default_translations() {
    let mut strings = MemoryStringTable::new();
    strings.insert("grf.name", DEFAULT_LANGUAGE, *b"Example");
    strings.insert("grf.desc", DEFAULT_LANGUAGE, *b"An example");

    let actions = name_desc_actions(&strings, "grf.name", "grf.desc");
    assert!(actions.is_empty());
}

#[test]
fn it_advertises_only_strings_with_real_translations() -> Result<()> {
    let mut strings = MemoryStringTable::new();
    strings.insert("grf.name", DEFAULT_LANGUAGE, *b"Example");
    strings.insert("grf.name", 0x01, *b"Beispiel");
    strings.insert("grf.desc", DEFAULT_LANGUAGE, *b"An example");

    let actions = name_desc_actions(&strings, "grf.name", "grf.desc");
    assert_eq!(actions.len(), 1);

    let Node::Branch(root) = &actions[0].nodes()[0] else {
        panic!("root should be a branch");
    };
    assert_eq!(root.children().len(), 1);
    let Node::Text(name) = &root.children()[0] else {
        panic!("only child should be the name text node");
    };
    assert_eq!(name.id(), Identifier::Symbolic(*b"NAME"));

    // The default-language entry is suppressed, leaving one translation.
    let framed = emit(&actions[0], &strings)?;
    assert_eq!(framed.declared_size, framed.bytes.len());
    assert_eq!(
        framed.bytes,
        [
            BLOCK_TYPE,
            b'C', b'I', b'N', b'F', b'O',
            b'T', b'N', b'A', b'M', b'E', 0x01,
            b'B', b'e', b'i', b's', b'p', b'i', b'e', b'l',
            0x00, // branch terminator
            0x00, // block terminator
        ]
    );
    Ok(())
}

#[test]
fn it_counts_settings_and_numbers_them_across_descriptors() -> Result<()> {
    let params = vec![ParameterDescriptor {
        slot: None,
        settings: vec![
            SettingDescriptor {
                default_value: Some(5),
                ..int_setting()
            },
            bool_setting(),
        ],
    }];

    let actions = param_desc_actions(&params)?;
    assert_eq!(actions.len(), 1);

    let Node::Branch(root) = &actions[0].nodes()[0] else {
        panic!("root should be a branch");
    };
    let [Node::Binary(npar), Node::Branch(para)] = root.children() else {
        panic!("root should hold NPAR and PARA");
    };
    assert_eq!(npar.value(), 2);

    let [Node::Branch(first), Node::Branch(second)] = para.children() else {
        panic!("PARA should hold one branch per setting");
    };
    assert_eq!(first.id(), Identifier::Numeric(0));
    assert_eq!(second.id(), Identifier::Numeric(1));

    // Both settings sit in slot 0: the slot advances per descriptor, not per
    // setting.
    let [Node::Binary(mask), Node::Limit(limits), Node::Binary(default)] = first.children() else {
        panic!("int setting should encode MASK, LIMI and DFLT");
    };
    assert_eq!(mask.id(), Identifier::Symbolic(*b"MASK"));
    assert_eq!(mask.value(), 0);
    assert_eq!(limits.size(), 15);
    assert_eq!(default.id(), Identifier::Symbolic(*b"DFLT"));
    assert_eq!(default.value(), 5);

    let [Node::Binary(kind), Node::SettingMask(bits)] = second.children() else {
        panic!("bool setting should encode TYPE and MASK");
    };
    assert_eq!(kind.id(), Identifier::Symbolic(*b"TYPE"));
    assert_eq!(kind.value(), 1);
    assert_eq!(bits.parameter(), 0);
    assert_eq!(bits.first_bit(), 0);

    let strings = MemoryStringTable::new();
    let framed = emit(&actions[0], &strings)?;
    assert_eq!(framed.declared_size, actions[0].size(&strings)?);
    assert_eq!(framed.declared_size, framed.bytes.len());
    Ok(())
}

#[test]
fn it_honours_explicit_slot_numbers() -> Result<()> {
    let params = vec![
        ParameterDescriptor {
            slot: None,
            settings: vec![bool_setting()],
        },
        ParameterDescriptor {
            slot: Some(5),
            settings: vec![int_setting()],
        },
        ParameterDescriptor {
            slot: None,
            settings: vec![int_setting()],
        },
    ];

    let actions = param_desc_actions(&params)?;
    let Node::Branch(root) = &actions[0].nodes()[0] else {
        panic!("root should be a branch");
    };
    let [_, Node::Branch(para)] = root.children() else {
        panic!("root should hold NPAR and PARA");
    };

    let slots: Vec<u64> = para
        .children()
        .iter()
        .map(|child| {
            let Node::Branch(setting) = child else {
                panic!("settings should be branches");
            };
            setting
                .children()
                .iter()
                .find_map(|node| match node {
                    Node::SettingMask(mask) => Some(u64::from(mask.parameter())),
                    Node::Binary(leaf) if leaf.id() == Identifier::Symbolic(*b"MASK") => {
                        Some(leaf.value())
                    }
                    _ => None,
                })
                .expect("setting should carry a slot")
        })
        .collect();

    assert_eq!(slots, [0, 5, 6]);
    Ok(())
}

#[test]
fn it_omits_the_parameter_branch_without_settings() -> Result<()> {
    let actions = param_desc_actions(&[])?;
    assert_eq!(actions.len(), 1);

    let strings = MemoryStringTable::new();
    let framed = emit(&actions[0], &strings)?;
    assert_eq!(
        framed.bytes,
        [
            BLOCK_TYPE,
            b'C', b'I', b'N', b'F', b'O',
            b'B', b'N', b'P', b'A', b'R', 0x01, 0x00, 0x00,
            0x00, // branch terminator
            0x00, // block terminator
        ]
    );
    Ok(())
}

#[test]
fn it_rejects_unknown_setting_kinds() {
    let params = vec![ParameterDescriptor {
        slot: None,
        settings: vec![SettingDescriptor {
            kind: "string".into(),
            ..SettingDescriptor::default()
        }],
    }];

    assert!(matches!(
        param_desc_actions(&params),
        Err(GrfInfoError::UnsupportedSettingType(kind)) if kind == "string"
    ));
}

#[test]
fn it_emits_the_default_value_leaf_byte_for_byte() -> Result<()> {
    let node = BinaryNode::new(Identifier::Symbolic(*b"DFLT"), Width::Dword, 7);
    assert_eq!(node.size(), 11);

    let mut stream = MemoryStream::new();
    stream.begin_block(node.size())?;
    node.write(&mut stream)?;
    stream.end_block()?;

    assert_eq!(
        stream.blocks()[0].bytes,
        [b'B', b'D', b'F', b'L', b'T', 0x04, 0x00, 0x07, 0x00, 0x00, 0x00]
    );
    Ok(())
}

#[test]
fn it_writes_exactly_the_bytes_it_sizes_for_every_variant() -> Result<()> {
    let mut strings = MemoryStringTable::new();
    strings.insert("setting.name", DEFAULT_LANGUAGE, *b"Road speed");
    strings.insert("setting.name", 0x02, *b"Geschwindigkeit");

    let mut root = BranchNode::new(Identifier::Symbolic(*b"INFO"));
    root.push(TextNode::new(
        Identifier::Symbolic(*b"NAME"),
        "setting.name",
        false,
    ));
    root.push(BranchNode::new(Identifier::Symbolic(*b"PARA")));
    root.push(BinaryNode::new(
        Identifier::Numeric(3),
        Width::Qword,
        u64::MAX,
    ));
    root.push(SettingMaskNode::new(1, 4, 2)?);
    root.push(LimitNode::new(10, 2000));

    let block = InfoBlock::new(vec![root.into()]);
    let framed = emit(&block, &strings)?;

    assert_eq!(framed.declared_size, block.size(&strings)?);
    assert_eq!(framed.declared_size, framed.bytes.len());
    assert_eq!(framed.bytes[0], BLOCK_TYPE);
    assert_eq!(framed.bytes.last(), Some(&0x00));
    Ok(())
}

#[test]
fn it_fails_when_a_string_key_is_missing() {
    let strings = MemoryStringTable::new();
    let mut root = BranchNode::new(Identifier::Symbolic(*b"INFO"));
    root.push(TextNode::new(
        Identifier::Symbolic(*b"NAME"),
        "grf.name",
        true,
    ));
    let block = InfoBlock::new(vec![root.into()]);

    let mut stream = MemoryStream::new();
    let result = block.write(&strings, &mut stream);
    assert!(matches!(
        result,
        Err(GrfInfoError::MissingStrings(key)) if key == "grf.name"
    ));

    // Sizing failed before framing began; nothing reached the stream.
    assert!(stream.blocks().is_empty());
}

/// A table whose size accounting disagrees with the bytes it hands out, to
/// provoke the encoder's size/write cross-check.
struct LyingTable {
    translations: Vec<Translation>,
}

impl StringTable for LyingTable {
    fn translations(&self, _key: &str) -> Option<&[Translation]> {
        Some(&self.translations)
    }

    fn encoded_size(&self, text: &[u8]) -> usize {
        text.len() + 1
    }
}

#[test]
fn it_aborts_when_size_and_write_disagree() {
    let strings = LyingTable {
        translations: vec![Translation {
            language: 0x01,
            text: b"text".to_vec(),
        }],
    };

    let block = InfoBlock::new(vec![
        TextNode::new(Identifier::Symbolic(*b"NAME"), "grf.name", false).into(),
    ]);

    let mut stream = MemoryStream::new();
    let result = block.write(&strings, &mut stream);
    assert!(matches!(
        result,
        Err(GrfInfoError::SizeMismatch { declared: 13, written: 12 })
    ));

    // The mismatch aborts the block before it is ever finished.
    assert!(stream.blocks().is_empty());
}
