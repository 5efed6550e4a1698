//! Plain-text boxed diagram generator
//!
//! Renders UML class boxes with `|` and `-` only (no corner characters), so
//! the output needs nothing but a monospace font. Abstract classes and
//! abstract methods are set in mathematical-italic Unicode letters, the
//! plain-text stand-in for UML's italics convention.

use tracing::{debug, warn};

use crate::core::sanitize::{trimmed_or, CLASS_FALLBACK, MEMBER_FALLBACK, PARAM_FALLBACK};
use crate::core::{Class, ClassKind, MethodKind, Project, Relationship, RelationshipKind};

/// Minimum interior width of a class box.
const MIN_BOX_WIDTH: usize = 12;

/// Substitute every Latin letter with its mathematical-italic counterpart.
///
/// Fixed per-letter offsets from the ASCII codepoints into the Mathematical
/// Alphanumeric Symbols block; everything else passes through unchanged.
/// Iterates codepoints, so text already outside the basic plane survives.
fn to_math_italic(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'A'..='Z' => char::from_u32(0x1D434 + (c as u32 - 'A' as u32)).unwrap_or(c),
            'a'..='z' => char::from_u32(0x1D44E + (c as u32 - 'a' as u32)).unwrap_or(c),
            _ => c,
        })
        .collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn pad_right(s: &str, width: usize) -> String {
    let missing = width.saturating_sub(char_len(s));
    format!("{}{}", s, " ".repeat(missing))
}

fn center(s: &str, width: usize) -> String {
    let missing = width.saturating_sub(char_len(s));
    let left = missing / 2;
    let right = missing - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

fn class_title(class: &Class) -> String {
    let raw = class.display_name();
    if class.kind == ClassKind::Interface {
        return format!("«interface» {raw}");
    }
    if class.kind == ClassKind::AbstractClass {
        to_math_italic(&raw)
    } else {
        raw
    }
}

fn field_lines(class: &Class) -> Vec<String> {
    class
        .fields
        .iter()
        .map(|f| {
            let sym = f.visibility.symbol();
            let name = trimmed_or(&f.name, MEMBER_FALLBACK);
            let ftype = trimmed_or(&f.field_type, "String");
            format!("{sym}{name}: {ftype}")
        })
        .collect()
}

fn method_lines(class: &Class) -> Vec<String> {
    class
        .methods
        .iter()
        .map(|m| {
            let sym = m.visibility.symbol();
            let params = m
                .params
                .iter()
                .map(|p| {
                    let pname = trimmed_or(&p.name, PARAM_FALLBACK);
                    let ptype = trimmed_or(&p.param_type, "String");
                    format!("{pname}: {ptype}")
                })
                .collect::<Vec<_>>()
                .join(", ");
            if m.is_constructor() {
                let cn_raw = trimmed_or(&class.name, CLASS_FALLBACK);
                let cn = if class.kind == ClassKind::AbstractClass {
                    to_math_italic(cn_raw)
                } else {
                    cn_raw.to_string()
                };
                format!("{sym}{cn}({params})")
            } else {
                let raw = trimmed_or(&m.name, MEMBER_FALLBACK);
                let name = if m.kind == MethodKind::Abstract {
                    to_math_italic(raw)
                } else {
                    raw.to_string()
                };
                let ret = trimmed_or(&m.return_type, "void");
                format!("{sym}{name}({params}): {ret}")
            }
        })
        .collect()
}

/// Wrap body lines in the pipe border. No corner characters on purpose.
fn boxed(lines: &[String], width: usize) -> Vec<String> {
    let top = format!("|{}|", "-".repeat(width + 2));
    let mut out = vec![top.clone()];
    for line in lines {
        out.push(format!("| {} |", pad_right(line, width)));
    }
    out.push(top);
    out
}

fn class_box(class: &Class) -> String {
    let title = class_title(class);
    let fields = field_lines(class);
    let methods = method_lines(class);

    let width = std::iter::once(&title)
        .chain(fields.iter())
        .chain(methods.iter())
        .map(|line| char_len(line))
        .max()
        .unwrap_or(0)
        .max(MIN_BOX_WIDTH);

    let sep = "-".repeat(width + 2);
    let mut body: Vec<String> = Vec::new();

    body.push(center(&title, width));
    body.push(sep.clone());

    if fields.is_empty() {
        body.push("(no variables)".to_string());
    } else {
        body.extend(fields);
    }

    body.push(sep);

    if methods.is_empty() {
        body.push("(no methods)".to_string());
    } else {
        body.extend(methods);
    }

    boxed(&body, width).join("\n")
}

fn rel_line(project: &Project, rel: &Relationship) -> Option<String> {
    let (from, to) = project.resolve_relationship(rel)?;
    let from_name = from.display_name();
    let to_name = to.display_name();

    let line = match rel.kind {
        RelationshipKind::Extends => format!("{from_name} --|> {to_name}"),
        RelationshipKind::Implements => format!("{from_name} ..|> {to_name}"),
        RelationshipKind::Composition => match rel.to_multiplicity.label() {
            Some(mult) => format!("{from_name} *-- ({mult}) {to_name}"),
            None => format!("{from_name} *-- {to_name}"),
        },
        RelationshipKind::Aggregation => match rel.to_multiplicity.label() {
            Some(mult) => format!("{from_name} o-- ({mult}) {to_name}"),
            None => format!("{from_name} o-- {to_name}"),
        },
    };
    Some(line)
}

/// Render the project as self-contained boxed-diagram text.
///
/// Total: the empty project renders a single placeholder box rather than
/// empty output.
pub fn generate(project: &Project) -> String {
    debug!(classes = project.class_count(), "generating boxed diagram");

    if project.classes.is_empty() {
        let placeholder = Class {
            id: "x".to_string(),
            name: "StartHere".to_string(),
            kind: ClassKind::Class,
            generic_param: None,
            fields: Vec::new(),
            methods: Vec::new(),
        };
        return class_box(&placeholder);
    }

    let mut parts: Vec<String> = project.classes.iter().map(class_box).collect();

    let rels: Vec<String> = project
        .relationships
        .iter()
        .filter_map(|rel| {
            let line = rel_line(project, rel);
            if line.is_none() {
                warn!(rel_id = %rel.id, "skipping relationship with dangling endpoint");
            }
            line
        })
        .collect();
    if !rels.is_empty() {
        parts.push("Relationships:".to_string());
        parts.extend(rels.into_iter().map(|r| format!("- {r}")));
    }

    parts.join("\n\n")
}
