//! WASM bindings for the `skillcode` template codec.
//!
//! This crate exposes the codec to JavaScript: a template string in, a plain
//! skillbar object out, and back again. Skillbar objects use the shape in
//! [`skillcode::serde::SkillbarDef`]:
//!
//! ```text
//! // Pseudo TypeScript example
//! //
//! // const bar = decode_template("OQIBAMQWZmdGapp2a");
//! // // bar is { type: 14, version: 0, primary: 1, secondary: 2,
//! // //          attributes: { "0": 12 }, skills: [100, ...], template: "..." }
//! //
//! // const template = encode_skillbar({
//! //   primary: 1, secondary: 2,
//! //   attributes: { 0: 12 },
//! //   skills: [100, 101, 102, 103, 104, 105, 106, 107],
//! // });
//! ```
//!
//! Codec failures are converted to `JsValue` strings carrying the error
//! message, so they surface as ordinary JavaScript exceptions.

mod convert;

use skillcode::Skillbar;
use skillcode::serde::SkillbarDef;
use wasm_bindgen::prelude::*;

/// Decodes a template string into a skillbar object.
///
/// Throws with the decode error message when the text is not a valid skill
/// template (wrong type, unknown character, truncated stream, empty slot).
#[wasm_bindgen]
pub fn decode_template(template: &str) -> Result<JsValue, JsValue> {
    let bar = skillcode::decode_template(template).map_err(convert::error_to_js)?;

    serde_wasm_bindgen::to_value(&SkillbarDef::from(bar)).map_err(convert::error_to_js)
}

/// Encodes a skillbar object into its canonical template string.
///
/// The object must carry `primary`, `secondary` and all 8 `skills`;
/// `type`, `version`, `attributes` and `template` are optional.
#[wasm_bindgen]
pub fn encode_skillbar(skillbar: JsValue) -> Result<String, JsValue> {
    let def: SkillbarDef =
        serde_wasm_bindgen::from_value(skillbar).map_err(convert::error_to_js)?;

    skillcode::encode_skillbar(&Skillbar::from(def)).map_err(convert::error_to_js)
}
