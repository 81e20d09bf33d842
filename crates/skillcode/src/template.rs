//! Template codec: the ordered field layout and the sequential drive through
//! the bit and alphabet transcoders.
//!
//! A template is a single linear bitstream. Three field groups (professions,
//! attribute ids, skill ids) have data-dependent widths: the stream first
//! declares how far the group's width exceeds its fixed floor, then carries
//! the fields at that width. Decoding is one forward pass; a field read early
//! (a selector or excess) determines how many bits later fields consume.

use std::collections::BTreeMap;

use crate::alphabet;
use crate::bits::{BitReader, BitWriter, bit_width};
use crate::errors::{DecodeError, EncodeError};
use crate::skillbar::{SKILL_SLOTS, Skillbar, TEMPLATE_TYPE};

const TYPE_BITS: usize = 4;
const VERSION_BITS: usize = 4;
const PROFESSION_SELECTOR_BITS: usize = 2;
const ATTRIBUTE_COUNT_BITS: usize = 4;
const ATTRIBUTE_LEVEL_BITS: usize = 4;
const WIDTH_EXCESS_BITS: usize = 4;

// Width floors per group. The stream stores only the excess above these.
const PROFESSION_MIN_BITS: usize = 4;
const ATTRIBUTE_MIN_BITS: usize = 4;
const SKILL_MIN_BITS: usize = 8;

// Widest width each group's selector or excess field can declare.
const PROFESSION_MAX_BITS: usize =
    PROFESSION_MIN_BITS + 2 * ((1 << PROFESSION_SELECTOR_BITS) - 1);
const ATTRIBUTE_MAX_BITS: usize = ATTRIBUTE_MIN_BITS + (1 << WIDTH_EXCESS_BITS) - 1;
const SKILL_MAX_BITS: usize = SKILL_MIN_BITS + (1 << WIDTH_EXCESS_BITS) - 1;

const MAX_ATTRIBUTES: usize = (1 << ATTRIBUTE_COUNT_BITS) - 1;
const MAX_ATTRIBUTE_LEVEL: u8 = (1 << ATTRIBUTE_LEVEL_BITS) - 1;
const MAX_SMALL_FIELD: u64 = (1 << TYPE_BITS) - 1;

/// Decodes a template string into a [Skillbar].
///
/// The decode is total: either every field parses and every skill slot is
/// non-zero, or the whole record is discarded with a [DecodeError]. The
/// returned bar keeps the input text verbatim in its `template` field.
pub fn decode_template(template: &str) -> Result<Skillbar, DecodeError> {
    let bits = alphabet::text_to_bits(template)?;
    let mut reader = BitReader::new(&bits);

    let template_type = reader.read_bits(TYPE_BITS)?;
    if template_type != TEMPLATE_TYPE as u64 {
        return Err(DecodeError::TypeMismatch(template_type));
    }

    let version = reader.read_bits(VERSION_BITS)?;

    let profession_bits =
        reader.read_bits(PROFESSION_SELECTOR_BITS)? as usize * 2 + PROFESSION_MIN_BITS;
    let primary = reader.read_bits(profession_bits)? as u32;
    let secondary = reader.read_bits(profession_bits)? as u32;

    let attribute_count = reader.read_bits(ATTRIBUTE_COUNT_BITS)?;
    let attribute_bits = reader.read_bits(WIDTH_EXCESS_BITS)? as usize + ATTRIBUTE_MIN_BITS;

    let mut attributes = BTreeMap::new();
    for _ in 0..attribute_count {
        let id = reader.read_bits(attribute_bits)? as u32;
        let level = reader.read_bits(ATTRIBUTE_LEVEL_BITS)? as u8;
        attributes.insert(id, level);
    }

    let skill_bits = reader.read_bits(WIDTH_EXCESS_BITS)? as usize + SKILL_MIN_BITS;

    let mut skills = [0u32; SKILL_SLOTS];
    for (slot, skill) in skills.iter_mut().enumerate() {
        *skill = reader.read_bits(skill_bits)? as u32;
        if *skill == 0 {
            return Err(DecodeError::EmptySkillSlot(slot));
        }
    }

    Ok(Skillbar {
        template_type: template_type as u32,
        version: version as u32,
        primary,
        secondary,
        attributes,
        skills,
        template: template.to_string(),
    })
}

/// Encodes a [Skillbar] into its canonical template string.
///
/// Every group is written at the minimum width its selector or excess field
/// can declare for the largest value present, so re-encoding a decoded bar
/// reproduces the canonical text exactly. The bar's `template` field is
/// ignored. Values the wire format cannot carry fail fast with an
/// [EncodeError] instead of producing a stream that decodes differently.
pub fn encode_skillbar(skillbar: &Skillbar) -> Result<String, EncodeError> {
    validate(skillbar)?;

    // The 2-bit selector can only express even widths above the floor, so the
    // written width rounds up to what the selector reconstructs on decode.
    let widest_profession = PROFESSION_MIN_BITS
        .max(bit_width(skillbar.primary as u64))
        .max(bit_width(skillbar.secondary as u64));
    let profession_selector = (widest_profession - PROFESSION_MIN_BITS).div_ceil(2);
    let profession_bits = PROFESSION_MIN_BITS + profession_selector * 2;

    let attribute_bits = skillbar
        .attributes
        .keys()
        .map(|&id| bit_width(id as u64))
        .max()
        .unwrap_or(0)
        .max(ATTRIBUTE_MIN_BITS);

    let skill_bits = skillbar
        .skills
        .iter()
        .map(|&id| bit_width(id as u64))
        .max()
        .unwrap_or(0)
        .max(SKILL_MIN_BITS);

    let mut writer = BitWriter::new();
    writer.write_bits(skillbar.template_type as u64, TYPE_BITS);
    writer.write_bits(skillbar.version as u64, VERSION_BITS);

    writer.write_bits(profession_selector as u64, PROFESSION_SELECTOR_BITS);
    writer.write_bits(skillbar.primary as u64, profession_bits);
    writer.write_bits(skillbar.secondary as u64, profession_bits);

    writer.write_bits(skillbar.attributes.len() as u64, ATTRIBUTE_COUNT_BITS);
    writer.write_bits((attribute_bits - ATTRIBUTE_MIN_BITS) as u64, WIDTH_EXCESS_BITS);
    for (&id, &level) in &skillbar.attributes {
        writer.write_bits(id as u64, attribute_bits);
        writer.write_bits(level as u64, ATTRIBUTE_LEVEL_BITS);
    }

    writer.write_bits((skill_bits - SKILL_MIN_BITS) as u64, WIDTH_EXCESS_BITS);
    for &skill in &skillbar.skills {
        writer.write_bits(skill as u64, skill_bits);
    }

    Ok(alphabet::bits_to_text(&writer.into_bits()))
}

fn validate(skillbar: &Skillbar) -> Result<(), EncodeError> {
    if skillbar.template_type as u64 > MAX_SMALL_FIELD {
        return Err(EncodeError::ValueTooWide {
            field: "template type",
            value: skillbar.template_type as u64,
            max_bits: TYPE_BITS,
        });
    }
    if skillbar.version as u64 > MAX_SMALL_FIELD {
        return Err(EncodeError::ValueTooWide {
            field: "version",
            value: skillbar.version as u64,
            max_bits: VERSION_BITS,
        });
    }

    for (field, value) in [
        ("primary profession", skillbar.primary),
        ("secondary profession", skillbar.secondary),
    ] {
        if bit_width(value as u64) > PROFESSION_MAX_BITS {
            return Err(EncodeError::ValueTooWide {
                field,
                value: value as u64,
                max_bits: PROFESSION_MAX_BITS,
            });
        }
    }

    if skillbar.attributes.len() > MAX_ATTRIBUTES {
        return Err(EncodeError::TooManyAttributes(skillbar.attributes.len()));
    }
    for (&id, &level) in &skillbar.attributes {
        if bit_width(id as u64) > ATTRIBUTE_MAX_BITS {
            return Err(EncodeError::ValueTooWide {
                field: "attribute id",
                value: id as u64,
                max_bits: ATTRIBUTE_MAX_BITS,
            });
        }
        if level > MAX_ATTRIBUTE_LEVEL {
            return Err(EncodeError::AttributeLevelOutOfRange { id, level });
        }
    }

    for (slot, &skill) in skillbar.skills.iter().enumerate() {
        if skill == 0 {
            return Err(EncodeError::EmptySkillSlot(slot));
        }
        if bit_width(skill as u64) > SKILL_MAX_BITS {
            return Err(EncodeError::ValueTooWide {
                field: "skill id",
                value: skill as u64,
                max_bits: SKILL_MAX_BITS,
            });
        }
    }

    Ok(())
}
