//! # skillcode
//!
//! Encoder and decoder for the compact text templates players share to
//! describe a character build: two professions, attribute allocations and
//! eight ordered skill slots.
//!
//! A template packs variable-width integer fields into a single LSB-first
//! bitstream and renders it with a 64-symbol alphabet. Field widths are
//! derived from the data itself: each group declares how far its width
//! exceeds a fixed floor, so small builds stay short while large ids still
//! fit. Decoding is total — the result is either a complete [Skillbar] or a
//! typed [DecodeError], never a partial record.
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use skillcode::{decode_template, encode_skillbar, Skillbar};
//!
//! let bar = Skillbar {
//!     primary: 1,
//!     secondary: 2,
//!     attributes: BTreeMap::from([(0, 12)]),
//!     skills: [100, 101, 102, 103, 104, 105, 106, 107],
//!     ..Default::default()
//! };
//!
//! let template = encode_skillbar(&bar).unwrap();
//! let decoded = decode_template(&template).unwrap();
//! assert_eq!(decoded.skills, bar.skills);
//! assert_eq!(decoded.template, template);
//! ```

pub mod alphabet;
pub mod bits;
pub mod errors;
#[cfg(feature = "serde")]
pub mod serde;
pub mod skillbar;
pub mod template;

pub use errors::{DecodeError, EncodeError};
pub use skillbar::{SKILL_SLOTS, Skillbar, TEMPLATE_TYPE, TEMPLATE_VERSION};
pub use template::{decode_template, encode_skillbar};
