//! Umlforge - Derive UML diagrams and source skeletons from a design model
//!
//! A library for describing an object-oriented design (classes, members,
//! relationships) and mechanically deriving textual artifacts from it:
//! Mermaid `classDiagram` markup, a plain-text boxed diagram, and Java or C
//! source skeletons.
//!
//! # Quick Start
//!
//! ```rust
//! use umlforge::core::factory;
//! use umlforge::core::ClassPatch;
//! use umlforge::generators::mermaid;
//!
//! let mut project = factory::initial_project();
//! let id = project.add_class();
//! project
//!     .patch_class(
//!         &id,
//!         ClassPatch {
//!             name: Some("Animal".to_string()),
//!             ..Default::default()
//!         },
//!     )
//!     .unwrap();
//!
//! let diagram = mermaid::generate(&project);
//! assert!(diagram.contains("class Animal {"));
//! ```
//!
//! # Advanced Usage
//!
//! For the full artifact bundle, use [`Artifacts`]:
//!
//! ```rust
//! use umlforge::core::factory;
//! use umlforge::generators::{Artifacts, SourceSet};
//!
//! let mut project = factory::initial_project();
//! project.add_class();
//!
//! let artifacts = Artifacts::generate(&project);
//! assert!(artifacts.mermaid.starts_with("classDiagram"));
//! assert!(matches!(artifacts.source, SourceSet::Java { .. }));
//! ```

pub mod core;
pub mod generators;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;
pub use crate::generators::{Artifacts, SourceSet};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Class, ClassKind, ClassPatch, Field, FieldPatch, Method, MethodKind, MethodPatch,
        ModelError, Multiplicity, Param, ParamPatch, Project, Relationship, RelationshipKind,
        RelationshipPatch, TargetLanguage, Visibility, CONSTRUCTOR_RETURN_TYPE,
    };
    pub use crate::generators::{ascii_uml, c, java, mermaid, Artifacts, SourceSet};
}

/// Generate every artifact for the project in one pass
///
/// This is the simplest way to go from a design model to its full set of
/// derived texts.
///
/// # Example
/// ```rust
/// use umlforge::core::factory;
///
/// let project = factory::initial_project();
/// let artifacts = umlforge::generate_all(&project);
/// // Even the empty project renders placeholder diagrams.
/// assert!(artifacts.mermaid.contains("StartHere"));
/// assert!(artifacts.ascii_uml.contains("StartHere"));
/// ```
pub fn generate_all(project: &core::Project) -> Artifacts {
    Artifacts::generate(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::factory;

    #[test]
    fn test_generate_all_empty_project() {
        let project = factory::initial_project();
        let artifacts = generate_all(&project);
        assert!(artifacts.mermaid.contains("StartHere"));
        assert!(artifacts.ascii_uml.contains("StartHere"));
        match artifacts.source {
            SourceSet::Java { code } => assert!(code.is_empty()),
            SourceSet::C { .. } => panic!("default language should be java"),
        }
    }

    #[test]
    fn test_generate_all_tracks_language() {
        let mut project = factory::initial_project();
        project.set_language(crate::core::TargetLanguage::C);
        project.add_class();
        let artifacts = generate_all(&project);
        assert!(matches!(artifacts.source, SourceSet::C { .. }));
    }
}
