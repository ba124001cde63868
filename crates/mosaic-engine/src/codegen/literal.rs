//! Value literals
//!
//! Maps a declared property to the JavaScript expression of its default value.

use crate::project::{PropertyDescriptor, PropertyType};

/// Marker emitted for properties whose type has no literal form
pub const UNRECOGNIZED_TYPE_LITERAL: &str = "0 /* Error: property was of an unrecognized type */";

/// Quote and escape a string as a JavaScript string literal
pub fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\r' => literal.push_str("\\r"),
            '\n' => literal.push_str("\\n"),
            '"' => literal.push_str("\\\""),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

/// Expression evaluating to the default value of a property.
///
/// Numbers are coerced at runtime with a zero fallback; the string value is
/// never validated here.
pub fn property_value_code(property: &PropertyDescriptor) -> String {
    match property.property_type() {
        PropertyType::String | PropertyType::Choice | PropertyType::Color => {
            string_literal(property.value())
        }
        PropertyType::Number => format!("Number({}) || 0", string_literal(property.value())),
        PropertyType::Boolean => {
            if property.value() == "true" {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        PropertyType::Resource | PropertyType::Unknown(_) => UNRECOGNIZED_TYPE_LITERAL.to_string(),
    }
}
