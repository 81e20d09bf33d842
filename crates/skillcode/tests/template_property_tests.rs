//! Property tests for the template codec over its whole valid domain.

use std::collections::BTreeMap;

use proptest::collection::{btree_map, vec};
use proptest::prelude::*;

use skillcode::{Skillbar, decode_template, encode_skillbar};
use skillcode::alphabet::{bits_to_text, text_to_bits};

fn arb_skillbar() -> impl Strategy<Value = Skillbar> {
    (
        0u32..16,
        0u32..1024,
        0u32..1024,
        btree_map(0u32..(1 << 19), 0u8..16, 0..=15),
        proptest::array::uniform8(1u32..(1 << 23)),
    )
        .prop_map(|(version, primary, secondary, attributes, skills)| Skillbar {
            version,
            primary,
            secondary,
            attributes,
            skills,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn roundtrip_preserves_every_field(bar in arb_skillbar()) {
        let template = encode_skillbar(&bar).unwrap();
        let decoded = decode_template(&template).unwrap();

        prop_assert_eq!(decoded.template_type, bar.template_type);
        prop_assert_eq!(decoded.version, bar.version);
        prop_assert_eq!(decoded.primary, bar.primary);
        prop_assert_eq!(decoded.secondary, bar.secondary);
        prop_assert_eq!(&decoded.attributes, &bar.attributes);
        prop_assert_eq!(decoded.skills, bar.skills);
        prop_assert_eq!(decoded.template, template);
    }

    #[test]
    fn reencode_is_textually_identical(bar in arb_skillbar()) {
        let template = encode_skillbar(&bar).unwrap();
        let reencoded = encode_skillbar(&decode_template(&template).unwrap()).unwrap();

        prop_assert_eq!(reencoded, template);
    }

    #[test]
    fn alphabet_closure_on_aligned_streams(
        bits in (0usize..24).prop_flat_map(|groups| vec(0u8..2, groups * 6))
    ) {
        prop_assert_eq!(text_to_bits(&bits_to_text(&bits)).unwrap(), bits);
    }

    #[test]
    fn template_text_stays_in_alphabet(bar in arb_skillbar()) {
        let template = encode_skillbar(&bar).unwrap();
        prop_assert!(text_to_bits(&template).is_ok());
    }
}

#[test]
fn decode_matches_encode_on_minimal_bar() {
    let bar = Skillbar {
        primary: 1,
        secondary: 1,
        attributes: BTreeMap::new(),
        skills: [1; 8],
        ..Default::default()
    };

    let decoded = decode_template(&encode_skillbar(&bar).unwrap()).unwrap();
    assert_eq!(decoded.skills, [1; 8]);
    assert!(decoded.attributes.is_empty());
}
