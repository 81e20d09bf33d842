//! JSON-serializable skillbar description.
//!
//! [SkillbarDef] mirrors [Skillbar] with the field names the template's JSON
//! consumers expect (`"type"` for the discriminator, optional `template`).
//! Convert with `From` in either direction; both conversions are lossless.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::skillbar::{SKILL_SLOTS, Skillbar, TEMPLATE_TYPE, TEMPLATE_VERSION};

/// Wire-facing mirror of [Skillbar].
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SkillbarDef {
    /// Type discriminator; defaults to the skill template constant.
    #[serde(rename = "type", default = "default_template_type")]
    pub template_type: u32,
    /// Format revision; defaults to the current one.
    #[serde(default = "default_version")]
    pub version: u32,
    pub primary: u32,
    pub secondary: u32,
    /// Attribute id → level. Absent means no allocations.
    #[serde(default)]
    pub attributes: BTreeMap<u32, u8>,
    pub skills: [u32; SKILL_SLOTS],
    /// Source template text, when the value came from a decode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

fn default_template_type() -> u32 {
    TEMPLATE_TYPE
}

fn default_version() -> u32 {
    TEMPLATE_VERSION
}

impl From<SkillbarDef> for Skillbar {
    fn from(def: SkillbarDef) -> Self {
        Skillbar {
            template_type: def.template_type,
            version: def.version,
            primary: def.primary,
            secondary: def.secondary,
            attributes: def.attributes,
            skills: def.skills,
            template: def.template.unwrap_or_default(),
        }
    }
}

impl From<Skillbar> for SkillbarDef {
    fn from(bar: Skillbar) -> Self {
        SkillbarDef {
            template_type: bar.template_type,
            version: bar.version,
            primary: bar.primary,
            secondary: bar.secondary,
            attributes: bar.attributes,
            skills: bar.skills,
            template: (!bar.template.is_empty()).then_some(bar.template),
        }
    }
}
