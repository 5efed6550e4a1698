//! Design-model value types
//!
//! The `Project` is the root value: it owns every class and relationship by
//! value. Relationships refer to classes by id only (weak references); a
//! relationship whose endpoint id no longer resolves is skipped by every
//! generator rather than reported as an error.

use serde::{Deserialize, Serialize};

use super::sanitize::CLASS_FALLBACK;

/// Reserved return-type value marking a method as a constructor.
///
/// Compared by equality against the trimmed return type. Never a real type
/// name; the leading/trailing underscores keep it outside anything a user
/// would type into the type chooser.
pub const CONSTRUCTOR_RETURN_TYPE: &str = "__constructor__";

/// Reserved marker used by type choosers to switch into free-text entry.
///
/// Never stored in the model; editors translate it before patching.
pub const CUSTOM_TYPE_SENTINEL: &str = "__custom__";

/// Opaque unique entity key. Generated once at creation, never reused.
pub type EntityId = String;

/// Target source language for skeleton generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    Java,
    C,
}

/// Visibility modifier for class members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,   // -
    Public,    // +
    Protected, // #
}

impl Visibility {
    /// UML visibility symbol, shared by every diagram and text generator.
    pub fn symbol(self) -> char {
        match self {
            Visibility::Private => '-',
            Visibility::Public => '+',
            Visibility::Protected => '#',
        }
    }

    /// Java-style visibility keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Public => "public",
            Visibility::Protected => "protected",
        }
    }
}

/// Kind of a class declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    Class,
    AbstractClass,
    Interface,
}

impl ClassKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::AbstractClass => "abstract_class",
            ClassKind::Interface => "interface",
        }
    }
}

/// Kind of a method body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Concrete,
    Abstract,
}

/// Relationship kind between two classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    Extends,     // <|--
    Implements,  // <|..
    Aggregation, // o--
    Composition, // *--
}

/// Multiplicity on the `to` side of a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Multiplicity {
    #[serde(rename = "")]
    None,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "*")]
    Many,
}

impl Multiplicity {
    /// The annotation text, or `None` when no multiplicity is set.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Multiplicity::None => None,
            Multiplicity::One => Some("1"),
            Multiplicity::Many => Some("*"),
        }
    }
}

/// A method parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

/// A class field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: EntityId,
    pub name: String,
    pub visibility: Visibility,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// A class method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub id: EntityId,
    pub name: String,
    pub visibility: Visibility,
    pub kind: MethodKind,
    pub return_type: String,
    pub params: Vec<Param>,
}

impl Method {
    /// Whether this method is a constructor (return type equals the
    /// reserved sentinel). A constructor's `kind` and `name` are ignored by
    /// all generators.
    pub fn is_constructor(&self) -> bool {
        self.return_type.trim() == CONSTRUCTOR_RETURN_TYPE
    }
}

/// A class in the design model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: EntityId,
    pub name: String,
    pub kind: ClassKind,
    /// Generic parameter name (single parameter), e.g. `Prey` in `Predator<Prey>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_param: Option<String>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
}

impl Class {
    /// Trimmed class name, falling back to the placeholder when empty.
    pub fn base_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            CLASS_FALLBACK
        } else {
            trimmed
        }
    }

    /// Trimmed generic parameter, `None` when absent or blank.
    pub fn generic(&self) -> Option<&str> {
        self.generic_param
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }

    /// Class name with the generic parameter in angle-bracket notation.
    pub fn display_name(&self) -> String {
        match self.generic() {
            Some(g) => format!("{}<{}>", self.base_name(), g),
            None => self.base_name().to_string(),
        }
    }
}

/// A relationship between two classes, referenced by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
    pub from_class_id: EntityId,
    pub to_class_id: EntityId,
    /// Multiplicity on the `to` side (e.g. `*`).
    pub to_multiplicity: Multiplicity,
}

/// Root of the design model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub language: TargetLanguage,
    pub classes: Vec<Class>,
    pub relationships: Vec<Relationship>,
}

impl Project {
    pub fn class_by_id(&self, id: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub(crate) fn class_by_id_mut(&mut self, id: &str) -> Option<&mut Class> {
        self.classes.iter_mut().find(|c| c.id == id)
    }

    /// Resolve both endpoints of a relationship, or `None` if either id is
    /// dangling.
    pub fn resolve_relationship<'a>(
        &'a self,
        rel: &Relationship,
    ) -> Option<(&'a Class, &'a Class)> {
        let from = self.class_by_id(&rel.from_class_id)?;
        let to = self.class_by_id(&rel.to_class_id)?;
        Some((from, to))
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}
