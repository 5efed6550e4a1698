//! Artifact generators
//!
//! Five pure functions of the same `Project`: Mermaid markup, the boxed
//! plain-text diagram, and the source skeletons for the selected target
//! language. None calls another; each reads an immutable snapshot and
//! allocates a fresh text.

pub mod ascii_uml;
pub mod c;
pub mod java;
pub mod mermaid;

use crate::core::{Project, TargetLanguage};

/// Source-skeleton texts for one target language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSet {
    /// A single Java source text.
    Java { code: String },
    /// A C header/implementation pair.
    C { header: String, source: String },
}

/// Every generated artifact for one project snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub mermaid: String,
    pub ascii_uml: String,
    pub source: SourceSet,
}

impl Artifacts {
    /// Run every generator against the project.
    ///
    /// Cheap enough to recompute on each edit; callers hold no caches.
    pub fn generate(project: &Project) -> Self {
        let source = match project.language {
            TargetLanguage::Java => SourceSet::Java {
                code: java::generate(project),
            },
            TargetLanguage::C => SourceSet::C {
                header: c::generate_header(project),
                source: c::generate_source(project, c::DEFAULT_HEADER_NAME),
            },
        };
        Self {
            mermaid: mermaid::generate(project),
            ascii_uml: ascii_uml::generate(project),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::factory;

    #[test]
    fn test_java_project_yields_single_source() {
        let mut project = factory::initial_project();
        project.add_class();
        let artifacts = Artifacts::generate(&project);
        assert!(matches!(artifacts.source, SourceSet::Java { .. }));
        assert!(artifacts.mermaid.starts_with("classDiagram"));
        assert!(!artifacts.ascii_uml.is_empty());
    }

    #[test]
    fn test_c_project_yields_header_and_source() {
        let mut project = factory::initial_project();
        project.set_language(TargetLanguage::C);
        project.add_class();
        let artifacts = Artifacts::generate(&project);
        match artifacts.source {
            SourceSet::C { header, source } => {
                assert!(header.starts_with("#pragma once"));
                assert!(source.starts_with("#include \"generated.h\""));
            }
            SourceSet::Java { .. } => panic!("expected C sources"),
        }
    }

    #[test]
    fn test_artifacts_are_reproducible() {
        let mut project = factory::initial_project();
        project.add_class();
        assert_eq!(Artifacts::generate(&project), Artifacts::generate(&project));
    }
}
