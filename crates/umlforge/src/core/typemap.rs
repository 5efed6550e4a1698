//! Per-target-language type mapping
//!
//! Translates the free-text type tokens stored in the model into source-type
//! tokens for the skeleton generators. Total: unrecognized text is treated as
//! a user-defined type name and passed through verbatim.

use super::model::{Project, TargetLanguage};

/// The void marker accepted by return-type positions.
pub const VOID_TYPE: &str = "void";
/// The C boolean type produced by the boolean aliases.
pub const C_BOOL_TYPE: &str = "bool";

/// Map a type token appearing in a value position (field or parameter).
///
/// Empty input maps to the target's default value type.
pub fn map_value_type(language: TargetLanguage, raw: &str) -> String {
    match language {
        TargetLanguage::Java => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                "String".to_string()
            } else {
                trimmed.to_string()
            }
        }
        TargetLanguage::C => c_type(raw),
    }
}

/// Map a type token appearing in a return position.
///
/// Same as [`map_value_type`] except the empty default is the void marker.
pub fn map_return_type(language: TargetLanguage, raw: &str) -> String {
    match language {
        TargetLanguage::Java => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                VOID_TYPE.to_string()
            } else {
                trimmed.to_string()
            }
        }
        TargetLanguage::C => c_type(raw),
    }
}

/// The fixed C lookup: string-like aliases become `char*`, boolean aliases
/// become `bool`, everything else passes through verbatim.
fn c_type(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed {
        "" => VOID_TYPE.to_string(),
        "String" => "char*".to_string(),
        "boolean" | "Boolean" | "bool" => C_BOOL_TYPE.to_string(),
        other => other.to_string(),
    }
}

/// Whether any field, return, or parameter type in the project maps to the
/// C boolean type, requiring an extra include in the generated header.
pub fn needs_bool_include(project: &Project) -> bool {
    for class in &project.classes {
        for field in &class.fields {
            if c_type(&field.field_type) == C_BOOL_TYPE {
                return true;
            }
        }
        for method in &class.methods {
            if c_type(&method.return_type) == C_BOOL_TYPE {
                return true;
            }
            for param in &method.params {
                if c_type(&param.param_type) == C_BOOL_TYPE {
                    return true;
                }
            }
        }
    }
    false
}
