//! Error types for template decoding and skillbar encoding.

use thiserror::Error;

/// Errors produced when decoding a template string (e.g. during
/// [crate::template::decode_template]). Decoding never returns a partial
/// skillbar: any of these discards the whole record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A character outside the 64-symbol alphabet appeared in the input.
    #[error("character {0:?} is not in the template alphabet")]
    UnknownSymbol(char),
    /// The stream ended before a required field was complete.
    #[error("template truncated: needed {needed} more bits, only {available} left")]
    Truncated { needed: usize, available: usize },
    /// More than 64 bits were requested in a single read.
    #[error("more than 64 bits requested in a single read")]
    TooManyBitsRead,
    /// The type discriminator is not the skill template constant.
    #[error("template type {0} is not a skill template")]
    TypeMismatch(u64),
    /// A skill slot decoded to zero, which marks an absent skill.
    #[error("skill slot {0} decoded to zero")]
    EmptySkillSlot(usize),
}

/// Errors produced when encoding a [crate::Skillbar] that the wire format
/// cannot represent. Encoding validates up front and never emits a template
/// that would decode to something else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A skill slot holds zero; every slot must carry a skill id.
    #[error("skill slot {0} is zero; every slot must hold a skill id")]
    EmptySkillSlot(usize),
    /// A value does not fit the widest field its group can declare.
    #[error("{field} {value} does not fit in {max_bits} bits")]
    ValueTooWide {
        field: &'static str,
        value: u64,
        max_bits: usize,
    },
    /// More attributes than the 4-bit count field can hold.
    #[error("{0} attributes exceed the 15-entry limit")]
    TooManyAttributes(usize),
    /// An attribute level beyond the 4-bit level field.
    #[error("level {level} for attribute {id} exceeds the maximum of 15")]
    AttributeLevelOutOfRange { id: u32, level: u8 },
}
