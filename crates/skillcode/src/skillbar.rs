//! The decoded skillbar value.

use std::collections::BTreeMap;

/// Type discriminator of a skill template. Streams carrying anything else are
/// a different template kind and are rejected.
pub const TEMPLATE_TYPE: u32 = 14;

/// Current format revision.
pub const TEMPLATE_VERSION: u32 = 0;

/// Number of slots on a bar. Decoding always fills all of them.
pub const SKILL_SLOTS: usize = 8;

/// A fully decoded build: professions, attribute allocations and the ordered
/// skill slots, plus the template text it came from.
///
/// This is a plain transfer value. Decoding constructs it wholesale and
/// encoding reads it wholesale; it has no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skillbar {
    /// Discriminator, [TEMPLATE_TYPE] for skill templates.
    pub template_type: u32,
    /// Format revision the stream declared.
    pub version: u32,
    /// Primary profession id.
    pub primary: u32,
    /// Secondary profession id.
    pub secondary: u32,
    /// Attribute id → allocated level (0–15). Keys are unique; when a stream
    /// repeats an id, the last occurrence wins.
    pub attributes: BTreeMap<u32, u8>,
    /// Skill ids in bar order. Slot order is meaningful and every slot of a
    /// decoded bar is non-zero.
    pub skills: [u32; SKILL_SLOTS],
    /// The original template text, verbatim. Empty on hand-built bars;
    /// [crate::encode_skillbar] ignores it.
    pub template: String,
}

impl Default for Skillbar {
    /// An empty bar of the current format revision. Its slots are all zero,
    /// so it does not encode until every slot is filled.
    fn default() -> Self {
        Skillbar {
            template_type: TEMPLATE_TYPE,
            version: TEMPLATE_VERSION,
            primary: 0,
            secondary: 0,
            attributes: BTreeMap::new(),
            skills: [0; SKILL_SLOTS],
            template: String::new(),
        }
    }
}
