//! Integration tests for the defancy glyph normalizer.

use defancy::{
    defancify_entity, defancify_rows, normalize, Block, GlyphMap, NamedEntity, Normalizer,
    NormalizerConfig, Row, RowSet,
};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// One sample word per styled block, paired with its ASCII fold.
fn block_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("𝐛𝐨𝐥𝐝", "bold"),
        ("𝑖𝑡𝑎𝑙𝑖𝑐", "italic"),
        ("𝒃𝒐𝒍𝒅𝒊𝒕", "boldit"),
        ("𝒮𝒸𝓇𝒾𝓅𝓉", "Script"),
        ("𝓑𝓼𝓬𝓻𝓲𝓹𝓽", "Bscript"),
        ("𝔉𝔯𝔞𝔨𝔱𝔲𝔯", "Fraktur"),
        ("𝕭𝖋𝖗𝖆𝖐", "Bfrak"),
        ("𝔻𝕠𝕦𝕓𝕝𝕖", "Double"),
        ("𝖲𝖺𝗇𝗌", "Sans"),
        ("𝗦𝗯𝗼𝗹𝗱", "Sbold"),
        ("𝘚𝘪𝘵𝘢𝘭", "Sital"),
        ("𝙎𝙗𝙞𝙩", "Sbit"),
        ("𝚖𝚘𝚗𝚘", "mono"),
        ("Ｆｕｌｌ", "Full"),
        ("ᴄᴀᴘs", "caps"),
        ("Ⓒⓘⓡⓒ", "Circ"),
    ]
}

#[test]
fn test_every_block_folds() {
    for (fancy, plain) in block_samples() {
        assert_eq!(normalize(fancy), plain);
    }
}

#[test]
fn test_idempotence_over_all_blocks() {
    for (fancy, _) in block_samples() {
        let once = normalize(fancy).into_owned();
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn test_code_point_count_preserved_over_all_blocks() {
    for (fancy, plain) in block_samples() {
        assert_eq!(fancy.chars().count(), plain.chars().count());
        assert_eq!(normalize(fancy).chars().count(), fancy.chars().count());
    }
}

#[test]
fn test_mixed_sentence() {
    let input = "𝔍𝔬𝔦𝔫 #ｇｅｎｅｒａｌ — ɴᴏᴡ! 𝟏𝟎𝟎%";
    // Styled digits are not Latin letters and stay untouched.
    assert_eq!(normalize(input), "Join #general — now! 𝟏𝟎𝟎%");
}

#[test]
fn test_plain_text_is_borrowed() {
    let input = "already plain ascii, nothing to do";
    assert!(matches!(normalize(input), Cow::Borrowed(_)));
}

#[test]
fn test_subset_normalizer_leaves_other_blocks() {
    let normalizer = Normalizer::new(NormalizerConfig {
        blocks: vec![Block::MathBold, Block::Monospace],
    });
    assert_eq!(normalizer.normalize("𝐛𝐨𝐥𝐝 𝚖𝚘𝚗𝚘 Ｆｕｌｌ"), "bold mono Ｆｕｌｌ");
}

#[test]
fn test_full_map_matches_default_normalizer() {
    let normalizer = Normalizer::default_config();
    assert_eq!(normalizer.map().len(), GlyphMap::full().len());
}

#[test]
fn test_channel_list_flow() {
    // The collaborator pattern: fold display names in place across a
    // grouped channel list, then look rows up by their original ids.
    let mut groups = BTreeMap::new();
    groups.insert(
        "voice".to_string(),
        vec![
            Row {
                entity: Some(NamedEntity {
                    id: 10,
                    name: "𝕸𝖚𝖘𝖎𝖈".to_string(),
                }),
            },
            Row { entity: None },
        ],
    );
    groups.insert(
        "text".to_string(),
        vec![
            Row {
                entity: Some(NamedEntity {
                    id: 20,
                    name: "ｗｅｌｃｏｍｅ".to_string(),
                }),
            },
            Row {
                entity: Some(NamedEntity {
                    id: 21,
                    name: "general".to_string(),
                }),
            },
        ],
    );

    let mut rows = RowSet::Grouped(groups);
    assert_eq!(defancify_rows(&mut rows), 2);

    let RowSet::Grouped(groups) = rows else {
        unreachable!()
    };
    assert_eq!(groups["voice"][0].entity.as_ref().unwrap().name, "Music");
    assert_eq!(groups["voice"][0].entity.as_ref().unwrap().id, 10);
    assert_eq!(groups["text"][0].entity.as_ref().unwrap().name, "welcome");
    assert_eq!(groups["text"][1].entity.as_ref().unwrap().name, "general");

    // Running again changes nothing.
    assert_eq!(defancify_rows(&mut RowSet::Grouped(groups)), 0);
}

#[test]
fn test_search_query_flow() {
    // A query typed with styled letters folds to the same text as the
    // folded channel name, so lookups match.
    let mut channel = NamedEntity {
        id: 1,
        name: "𝓰𝓮𝓷𝓮𝓻𝓪𝓵".to_string(),
    };
    defancify_entity(&mut channel);

    let query = normalize("ｇｅｎｅｒａｌ");
    assert_eq!(channel.name, query.as_ref());
}
