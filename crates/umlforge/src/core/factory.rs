//! Entity creation defaults
//!
//! Every entity is created through one of the `make_*` functions so defaults
//! live in exactly one place. Ids come from a process-scoped counter; ids are
//! never reused within a process, which is the uniqueness guarantee the
//! relationship resolution relies on.

use std::sync::atomic::{AtomicU64, Ordering};

use super::model::{
    Class, ClassKind, EntityId, Field, Method, MethodKind, Multiplicity, Param, Project,
    Relationship, RelationshipKind, TargetLanguage, Visibility,
};

pub const DEFAULT_LANGUAGE: TargetLanguage = TargetLanguage::Java;
pub const DEFAULT_FIELD_VISIBILITY: Visibility = Visibility::Private;
pub const DEFAULT_FIELD_TYPE: &str = "String";
pub const DEFAULT_METHOD_VISIBILITY: Visibility = Visibility::Public;
pub const DEFAULT_METHOD_KIND: MethodKind = MethodKind::Concrete;
pub const DEFAULT_METHOD_RETURN_TYPE: &str = "void";
pub const DEFAULT_PARAM_TYPE: &str = "String";
/// Default member type when the project targets C.
pub const DEFAULT_C_MEMBER_TYPE: &str = "char*";
pub const DEFAULT_RELATIONSHIP_KIND: RelationshipKind = RelationshipKind::Extends;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a fresh entity id, unique for the lifetime of the process.
pub fn next_id() -> EntityId {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("e{n}")
}

pub fn make_param(default_type: &str) -> Param {
    Param {
        id: next_id(),
        name: String::new(),
        param_type: default_type.to_string(),
    }
}

pub fn make_method() -> Method {
    Method {
        id: next_id(),
        name: String::new(),
        visibility: DEFAULT_METHOD_VISIBILITY,
        kind: DEFAULT_METHOD_KIND,
        return_type: DEFAULT_METHOD_RETURN_TYPE.to_string(),
        params: Vec::new(),
    }
}

pub fn make_field(default_type: &str) -> Field {
    Field {
        id: next_id(),
        name: String::new(),
        visibility: DEFAULT_FIELD_VISIBILITY,
        field_type: default_type.to_string(),
    }
}

pub fn make_class() -> Class {
    Class {
        id: next_id(),
        name: String::new(),
        kind: ClassKind::Class,
        generic_param: None,
        fields: Vec::new(),
        methods: Vec::new(),
    }
}

pub fn make_relationship(from_class_id: EntityId, to_class_id: EntityId) -> Relationship {
    Relationship {
        id: next_id(),
        kind: DEFAULT_RELATIONSHIP_KIND,
        from_class_id,
        to_class_id,
        to_multiplicity: Multiplicity::None,
    }
}

/// An empty project targeting the default language.
pub fn initial_project() -> Project {
    Project {
        language: DEFAULT_LANGUAGE,
        classes: Vec::new(),
        relationships: Vec::new(),
    }
}

/// Default member type for the given target language.
pub fn default_member_type(language: TargetLanguage) -> &'static str {
    match language {
        TargetLanguage::Java => DEFAULT_FIELD_TYPE,
        TargetLanguage::C => DEFAULT_C_MEMBER_TYPE,
    }
}
