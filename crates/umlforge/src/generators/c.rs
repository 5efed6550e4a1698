//! C skeleton generator
//!
//! Emits a header/implementation pair. Classes become structs (interfaces
//! become opaque forward declarations), methods become free functions taking
//! an explicit `self` pointer, and visibility survives only as a trailing
//! comment since C has no access control.

use tracing::debug;

use crate::core::sanitize::{
    sanitize_identifier, CLASS_FALLBACK, MEMBER_FALLBACK, PARAM_FALLBACK,
};
use crate::core::typemap::{
    map_return_type, map_value_type, needs_bool_include, C_BOOL_TYPE, VOID_TYPE,
};
use crate::core::{Class, ClassKind, Method, Project, TargetLanguage, Visibility};

/// Header filename the implementation text includes by default.
pub const DEFAULT_HEADER_NAME: &str = "generated.h";

fn vis_comment(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Private => "/* private */",
        Visibility::Protected => "/* protected */",
        Visibility::Public => "/* public */",
    }
}

fn struct_name(class: &Class) -> String {
    sanitize_identifier(&class.name, CLASS_FALLBACK)
}

/// `ClassName_memberName`, both halves sanitized before joining.
fn function_name(class: &Class, method_name: &str) -> String {
    format!(
        "{}_{}",
        struct_name(class),
        sanitize_identifier(method_name, MEMBER_FALLBACK)
    )
}

/// Zero value for a mapped return type, or `None` for void.
fn default_return_expr(mapped: &str) -> Option<&'static str> {
    if mapped == VOID_TYPE {
        None
    } else if mapped == C_BOOL_TYPE {
        Some("false")
    } else if mapped.ends_with('*') {
        Some("NULL")
    } else {
        Some("0")
    }
}

/// Return type, function name, and parameter list shared by the prototype
/// and the stub. Constructors become `ClassName_init` returning void.
fn method_signature(class: &Class, method: &Method) -> (String, String) {
    let sn = struct_name(class);
    let is_ctor = method.is_constructor();
    let ret = if is_ctor {
        VOID_TYPE.to_string()
    } else {
        map_return_type(TargetLanguage::C, &method.return_type)
    };
    let fname = if is_ctor {
        format!("{sn}_init")
    } else {
        function_name(class, &method.name)
    };
    let params = std::iter::once(format!("{sn}* self"))
        .chain(method.params.iter().map(|p| {
            let pname = sanitize_identifier(&p.name, PARAM_FALLBACK);
            let ptype = map_value_type(TargetLanguage::C, &p.param_type);
            format!("{ptype} {pname}")
        }))
        .collect::<Vec<_>>()
        .join(", ");
    (ret.clone(), format!("{ret} {fname}({params})"))
}

fn header_for_class(class: &Class) -> Vec<String> {
    let sn = struct_name(class);
    if class.kind == ClassKind::Interface {
        // No members to lay out; an opaque type is all C can offer here.
        return vec![format!("// interface {sn}"), format!("typedef struct {sn} {sn};")];
    }

    let mut out = vec![format!("typedef struct {sn} {{")];
    for field in &class.fields {
        let name = sanitize_identifier(&field.name, MEMBER_FALLBACK);
        let ftype = map_value_type(TargetLanguage::C, &field.field_type);
        out.push(format!("\t{} {}; {}", ftype, name, vis_comment(field.visibility)));
    }
    out.push(format!("}} {sn};"));
    out
}

fn prototypes_for_class(class: &Class) -> Vec<String> {
    class
        .methods
        .iter()
        .map(|m| {
            let (_, sig) = method_signature(class, m);
            format!("{}; {}", sig, vis_comment(m.visibility))
        })
        .collect()
}

fn stubs_for_class(class: &Class) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for method in &class.methods {
        let (ret, sig) = method_signature(class, method);
        out.push(format!("{sig} {{"));
        // Keeps the stub warning-clean under -Wunused-parameter.
        out.push("\t(void)self;".to_string());
        if let Some(expr) = default_return_expr(&ret) {
            out.push(format!("\treturn {expr};"));
        }
        out.push("}".to_string());
        out.push(String::new());
    }
    if out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out
}

/// Generate the C header text: struct declarations and one prototype per
/// method, with includes gated on what the types need.
pub fn generate_header(project: &Project) -> String {
    debug!(classes = project.class_count(), "generating c header");

    let mut out: Vec<String> = Vec::new();
    out.push("#pragma once".to_string());
    out.push(String::new());
    out.push("#include <stddef.h>".to_string());
    if needs_bool_include(project) {
        out.push("#include <stdbool.h>".to_string());
    }
    out.push(String::new());

    for class in &project.classes {
        out.extend(header_for_class(class));
        out.push(String::new());
        out.extend(prototypes_for_class(class));
        out.push(String::new());
    }

    if out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// Generate the C implementation text: a stub body per method, returning a
/// type-appropriate zero value. Classes without methods are omitted.
pub fn generate_source(project: &Project, header_name: &str) -> String {
    debug!(classes = project.class_count(), "generating c source");

    let mut out: Vec<String> = Vec::new();
    out.push(format!("#include \"{header_name}\""));
    out.push("#include <stddef.h>".to_string());
    if needs_bool_include(project) {
        out.push("#include <stdbool.h>".to_string());
    }
    out.push(String::new());

    for class in &project.classes {
        if class.methods.is_empty() {
            continue;
        }
        out.push(format!("// {} {}", class.kind.as_str(), struct_name(class)));
        out.extend(stubs_for_class(class));
        out.push(String::new());
    }

    if out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}
