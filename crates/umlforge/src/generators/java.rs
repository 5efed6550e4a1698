//! Java skeleton generator
//!
//! Emits one source text with a declaration block per class. Interface
//! members follow the implicit-public convention (no visibility keyword, no
//! body); a constructor method takes the enclosing class's name and drops
//! the return type, as Java requires.

use tracing::debug;

use crate::core::sanitize::{trimmed_or, MEMBER_FALLBACK, PARAM_FALLBACK};
use crate::core::typemap::{map_return_type, map_value_type};
use crate::core::{Class, ClassKind, Method, MethodKind, Project, RelationshipKind, TargetLanguage};

fn param_list(method: &Method) -> String {
    method
        .params
        .iter()
        .map(|p| {
            let pname = trimmed_or(&p.name, PARAM_FALLBACK);
            let ptype = map_value_type(TargetLanguage::Java, &p.param_type);
            format!("{ptype} {pname}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn class_decl(class: &Class, project: &Project) -> String {
    let class_name = class.display_name();

    // First extends relationship whose target still resolves.
    let extends_clause = project
        .relationships
        .iter()
        .filter(|r| r.kind == RelationshipKind::Extends && r.from_class_id == class.id)
        .find_map(|r| project.class_by_id(&r.to_class_id))
        .map(|base| format!(" extends {}", base.display_name()))
        .unwrap_or_default();

    let interfaces: Vec<String> = project
        .relationships
        .iter()
        .filter(|r| r.kind == RelationshipKind::Implements && r.from_class_id == class.id)
        .filter_map(|r| project.class_by_id(&r.to_class_id))
        .map(|iface| iface.display_name())
        .collect();
    let implements_clause = if interfaces.is_empty() {
        String::new()
    } else {
        format!(" implements {}", interfaces.join(", "))
    };

    match class.kind {
        ClassKind::Interface => format!("public interface {class_name} {{"),
        ClassKind::AbstractClass => {
            format!("public abstract class {class_name}{extends_clause}{implements_clause} {{")
        }
        ClassKind::Class => {
            format!("public class {class_name}{extends_clause}{implements_clause} {{")
        }
    }
}

/// Generate the Java skeleton text for every class in the project.
pub fn generate(project: &Project) -> String {
    debug!(classes = project.class_count(), "generating java skeleton");

    let mut out: Vec<String> = Vec::new();

    for class in &project.classes {
        // Leading blank line before each class block.
        out.push(String::new());
        out.push(class_decl(class, project));
        out.push(String::new());

        for field in &class.fields {
            let name = trimmed_or(&field.name, MEMBER_FALLBACK);
            let ftype = map_value_type(TargetLanguage::Java, &field.field_type);
            out.push(format!("\t{} {} {};", field.visibility.keyword(), ftype, name));
        }

        if !class.fields.is_empty() && !class.methods.is_empty() {
            out.push(String::new());
        }

        for method in &class.methods {
            let params = param_list(method);

            if class.kind == ClassKind::Interface {
                // Implicit public: signature only, no body. A constructor
                // entry has nothing to construct here; it folds to a
                // void-returning signature on the class name.
                let sig = if method.is_constructor() {
                    format!("void {}({})", class.base_name(), params)
                } else {
                    let ret = map_return_type(TargetLanguage::Java, &method.return_type);
                    let name = trimmed_or(&method.name, MEMBER_FALLBACK);
                    format!("{ret} {name}({params})")
                };
                out.push(format!("\t{sig};"));
            } else if method.is_constructor() {
                out.push(format!(
                    "\t{} {}({}) {{",
                    method.visibility.keyword(),
                    class.base_name(),
                    params
                ));
                out.push("\t\t".to_string());
                out.push("\t}".to_string());
            } else if method.kind == MethodKind::Abstract {
                let ret = map_return_type(TargetLanguage::Java, &method.return_type);
                let name = trimmed_or(&method.name, MEMBER_FALLBACK);
                out.push(format!(
                    "\t{} abstract {} {}({});",
                    method.visibility.keyword(),
                    ret,
                    name,
                    params
                ));
            } else {
                let ret = map_return_type(TargetLanguage::Java, &method.return_type);
                let name = trimmed_or(&method.name, MEMBER_FALLBACK);
                out.push(format!(
                    "\t{} {} {}({}) {{",
                    method.visibility.keyword(),
                    ret,
                    name,
                    params
                ));
                out.push("\t\t".to_string());
                out.push("\t}".to_string());
            }
            // Blank line after every method, signature-only ones included.
            out.push(String::new());
        }

        if out.last().is_some_and(|l| l.is_empty()) {
            out.pop();
        }
        out.push("}".to_string());
        out.push(String::new());
    }

    if out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}
