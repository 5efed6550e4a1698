//! Mermaid class-diagram text generator
//!
//! Emits `classDiagram` markup for an external Mermaid renderer. Mermaid's
//! classDiagram grammar is conservative: identifiers are kept ASCII, and `~`
//! stands in for angle brackets in generics (`Predator~Prey~`).

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::core::sanitize::{
    sanitize_diagram_identifier, trimmed_or, CLASS_FALLBACK, MEMBER_FALLBACK, PARAM_FALLBACK,
};
use crate::core::{Class, ClassKind, Project, Relationship, RelationshipKind};

static RENDER_ANCHOR: AtomicU64 = AtomicU64::new(0);

/// A fresh anchor id for one invocation of the external renderer.
///
/// Successive render calls need distinct element ids for the renderer's
/// bookkeeping; the anchor never appears in the generated diagram text.
pub fn next_render_anchor() -> String {
    let n = RENDER_ANCHOR.fetch_add(1, Ordering::Relaxed);
    format!("mmd-{n}")
}

/// Rewrite angle-bracket generics into Mermaid's tilde notation,
/// e.g. `Predator<Prey>` becomes `Predator~Prey~`.
fn generic_to_tilde(s: &str) -> String {
    s.trim().replace('<', "~").replace('>', "~").replace(',', "~")
}

/// Mermaid identifier for a class: name plus generic in tilde notation,
/// sanitized for the classDiagram lexer.
fn class_uml_name(class: &Class) -> String {
    let name = trimmed_or(&class.name, CLASS_FALLBACK);
    let base_raw = match class.generic() {
        Some(g) => format!("{name}<{g}>"),
        None => name.to_string(),
    };
    sanitize_diagram_identifier(&generic_to_tilde(&base_raw), CLASS_FALLBACK)
}

fn rel_line(project: &Project, rel: &Relationship) -> Option<String> {
    let (from, to) = project.resolve_relationship(rel)?;
    let from_name = class_uml_name(from);
    let to_name = class_uml_name(to);

    let line = match rel.kind {
        // Base <|-- Derived
        RelationshipKind::Extends => format!("{to_name} <|-- {from_name}"),
        // Interface <|.. Impl
        RelationshipKind::Implements => format!("{to_name} <|.. {from_name}"),
        // Owner *-- Part, multiplicity on the to-side
        RelationshipKind::Composition => match rel.to_multiplicity.label() {
            Some(mult) => format!("{from_name} *-- \"{mult}\" {to_name}"),
            None => format!("{from_name} *-- {to_name}"),
        },
        // Owner o-- Part
        RelationshipKind::Aggregation => match rel.to_multiplicity.label() {
            Some(mult) => format!("{from_name} o-- \"{mult}\" {to_name}"),
            None => format!("{from_name} o-- {to_name}"),
        },
    };
    Some(line)
}

/// Generate Mermaid `classDiagram` markup for the project.
///
/// Total: any project yields parseable markup, including the empty one
/// (Mermaid rejects an empty classDiagram, so a placeholder block is emitted
/// instead).
pub fn generate(project: &Project) -> String {
    debug!(classes = project.class_count(), "generating mermaid class diagram");

    let mut lines: Vec<String> = Vec::new();
    lines.push("classDiagram".to_string());

    if project.classes.is_empty() {
        lines.push("class StartHere {".to_string());
        lines.push("  +AddClasses(): void".to_string());
        lines.push("}".to_string());
        return lines.join("\n");
    }

    for class in &project.classes {
        let name = class_uml_name(class);
        lines.push(format!("class {name} {{"));
        // Mermaid recognizes these stereotypes; capitalization matters.
        if class.kind == ClassKind::Interface {
            lines.push("  <<interface>>".to_string());
        }
        if class.kind == ClassKind::AbstractClass {
            lines.push("  <<abstract>>".to_string());
        }

        for field in &class.fields {
            let sym = field.visibility.symbol();
            let fname = trimmed_or(&field.name, MEMBER_FALLBACK);
            let ftype = trimmed_or(&field.field_type, "String");
            lines.push(format!("  {sym}{fname}: {ftype}"));
        }

        for method in &class.methods {
            let sym = method.visibility.symbol();
            let params = method
                .params
                .iter()
                .map(|p| {
                    let pname = trimmed_or(&p.name, PARAM_FALLBACK);
                    let ptype = trimmed_or(&p.param_type, "String");
                    format!("{pname}: {ptype}")
                })
                .collect::<Vec<_>>()
                .join(", ");
            if method.is_constructor() {
                let cn = class_uml_name(class);
                lines.push(format!("  {sym}{cn}({params})"));
            } else {
                let mname = trimmed_or(&method.name, MEMBER_FALLBACK);
                let ret = trimmed_or(&method.return_type, "void");
                lines.push(format!("  {sym}{mname}({params}): {ret}"));
            }
        }

        lines.push("}".to_string());
    }

    for rel in &project.relationships {
        match rel_line(project, rel) {
            Some(line) => lines.push(line),
            None => warn!(rel_id = %rel.id, "skipping relationship with dangling endpoint"),
        }
    }

    lines.join("\n")
}
