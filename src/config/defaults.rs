//! Default values for configuration fields.
//!
//! Shared between serde deserialization defaults and the `Default` impl.

/// Default favicon glyph, rendered into an inline SVG data URI.
pub fn favicon() -> String {
    "🐱".to_string()
}
