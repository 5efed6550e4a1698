//! Integration tests for the public API
//!
//! End-to-end scenarios driving the model through the edit operations and
//! checking each generated artifact.

use umlforge::core::factory;
use umlforge::prelude::*;

fn named_class(project: &mut Project, name: &str) -> String {
    let id = project.add_class();
    project
        .patch_class(
            &id,
            ClassPatch {
                name: Some(name.to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    id
}

fn add_field(project: &mut Project, class_id: &str, name: &str, field_type: &str) -> String {
    let id = project.add_field(class_id).unwrap();
    project
        .patch_field(
            class_id,
            &id,
            FieldPatch {
                name: Some(name.to_string()),
                field_type: Some(field_type.to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    id
}

#[test]
fn test_java_skeleton_for_simple_class() {
    let mut project = factory::initial_project();
    let id = named_class(&mut project, "Foo");
    add_field(&mut project, &id, "x", "int");

    let code = java::generate(&project);
    assert!(code.contains("public class Foo {"));
    assert!(code.contains("\tprivate int x;"));
}

#[test]
fn test_c_header_for_simple_class() {
    let mut project = factory::initial_project();
    project.set_language(TargetLanguage::C);
    let id = named_class(&mut project, "Foo");
    add_field(&mut project, &id, "x", "int");

    let header = c::generate_header(&project);
    assert!(header.contains("typedef struct Foo {"));
    assert!(header.contains("int x;"));
    // No methods, so no prototypes.
    assert!(!header.contains('('));
}

#[test]
fn test_composition_with_many_multiplicity_in_mermaid() {
    let mut project = factory::initial_project();
    let a = named_class(&mut project, "A");
    let b = named_class(&mut project, "B");
    let rel = project.add_relationship(&a, &b);
    project
        .patch_relationship(
            &rel,
            RelationshipPatch {
                kind: Some(RelationshipKind::Composition),
                to_multiplicity: Some(Multiplicity::Many),
                ..Default::default()
            },
        )
        .unwrap();

    let diagram = mermaid::generate(&project);
    assert!(diagram.contains("A *-- \"*\" B"));
}

#[test]
fn test_empty_project_renders_placeholders() {
    let project = factory::initial_project();

    let diagram = mermaid::generate(&project);
    assert_eq!(
        diagram,
        "classDiagram\nclass StartHere {\n  +AddClasses(): void\n}"
    );

    let boxed = ascii_uml::generate(&project);
    assert!(!boxed.is_empty());
    assert!(boxed.contains("StartHere"));
    assert!(boxed.contains("(no variables)"));
    assert!(boxed.contains("(no methods)"));
}

#[test]
fn test_interface_abstract_method_renders_bare_in_java() {
    let mut project = factory::initial_project();
    let id = named_class(&mut project, "Walker");
    project
        .patch_class(
            &id,
            ClassPatch {
                kind: Some(ClassKind::Interface),
                ..Default::default()
            },
        )
        .unwrap();
    let method = project.add_method(&id).unwrap();
    project
        .patch_method(
            &id,
            &method,
            MethodPatch {
                name: Some("walk".to_string()),
                kind: Some(MethodKind::Abstract),
                visibility: Some(Visibility::Private),
                ..Default::default()
            },
        )
        .unwrap();

    let code = java::generate(&project);
    assert!(code.contains("\tvoid walk();"));
    assert!(!code.contains("private"));
    assert!(!code.contains("abstract"));
}

#[test]
fn test_constructor_sentinel_across_all_generators() {
    let mut project = factory::initial_project();
    let id = named_class(&mut project, "Dog");
    let method = project.add_method(&id).unwrap();
    project
        .patch_method(
            &id,
            &method,
            MethodPatch {
                name: Some("shouldNeverAppear".to_string()),
                return_type: Some(CONSTRUCTOR_RETURN_TYPE.to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let texts = [
        mermaid::generate(&project),
        ascii_uml::generate(&project),
        java::generate(&project),
        c::generate_header(&project),
        c::generate_source(&project, "generated.h"),
    ];
    for text in &texts {
        assert!(
            !text.contains("shouldNeverAppear"),
            "constructor rendered under its own name in: {text}"
        );
        assert!(!text.contains(CONSTRUCTOR_RETURN_TYPE));
    }
    assert!(texts[0].contains("+Dog()"));
    assert!(texts[1].contains("+Dog()"));
    assert!(texts[2].contains("\tpublic Dog() {"));
    assert!(texts[3].contains("void Dog_init(Dog* self);"));
}

#[test]
fn test_dangling_relationship_across_all_generators() {
    let mut project = factory::initial_project();
    let a = named_class(&mut project, "Lonely");
    let b = named_class(&mut project, "Doomed");
    project.add_relationship(&a, &b);
    project.delete_class(&b).unwrap();
    // Reintroduce a dangling reference directly, as if the cascade had not
    // yet run when generation was invoked.
    let rel = project.add_relationship(&a, "stale-id");
    assert_eq!(project.relationship_count(), 1);

    let diagram = mermaid::generate(&project);
    assert!(!diagram.contains("<|--"));
    let boxed = ascii_uml::generate(&project);
    assert!(!boxed.contains("Relationships:"));
    let code = java::generate(&project);
    assert!(!code.contains("extends"));

    project.delete_relationship(&rel).unwrap();
    assert_eq!(project.relationship_count(), 0);
}

#[test]
fn test_visibility_mapping_is_shared_by_all_generators() {
    let mut project = factory::initial_project();
    let id = named_class(&mut project, "Acct");
    for (name, vis) in [
        ("secret", Visibility::Private),
        ("open", Visibility::Public),
        ("shared", Visibility::Protected),
    ] {
        let field = add_field(&mut project, &id, name, "int");
        project
            .patch_field(
                &id,
                &field,
                FieldPatch {
                    visibility: Some(vis),
                    ..Default::default()
                },
            )
            .unwrap();
    }

    let diagram = mermaid::generate(&project);
    assert!(diagram.contains("-secret: int"));
    assert!(diagram.contains("+open: int"));
    assert!(diagram.contains("#shared: int"));

    let boxed = ascii_uml::generate(&project);
    assert!(boxed.contains("-secret: int"));
    assert!(boxed.contains("+open: int"));
    assert!(boxed.contains("#shared: int"));

    let code = java::generate(&project);
    assert!(code.contains("\tprivate int secret;"));
    assert!(code.contains("\tpublic int open;"));
    assert!(code.contains("\tprotected int shared;"));

    project.set_language(TargetLanguage::C);
    let header = c::generate_header(&project);
    assert!(header.contains("int secret; /* private */"));
    assert!(header.contains("int open; /* public */"));
    assert!(header.contains("int shared; /* protected */"));
}

#[test]
fn test_artifact_bundle_matches_individual_generators() {
    let mut project = factory::initial_project();
    let id = named_class(&mut project, "Foo");
    add_field(&mut project, &id, "x", "int");

    let artifacts = Artifacts::generate(&project);
    assert_eq!(artifacts.mermaid, mermaid::generate(&project));
    assert_eq!(artifacts.ascii_uml, ascii_uml::generate(&project));
    match artifacts.source {
        SourceSet::Java { code } => assert_eq!(code, java::generate(&project)),
        SourceSet::C { .. } => panic!("expected java sources"),
    }

    project.set_language(TargetLanguage::C);
    let artifacts = umlforge::generate_all(&project);
    match artifacts.source {
        SourceSet::C { header, source } => {
            assert_eq!(header, c::generate_header(&project));
            assert_eq!(source, c::generate_source(&project, "generated.h"));
        }
        SourceSet::Java { .. } => panic!("expected c sources"),
    }
}

#[test]
fn test_project_json_round_trip_preserves_artifacts() {
    let mut project = factory::initial_project();
    let base = named_class(&mut project, "Animal");
    let derived = named_class(&mut project, "Dog");
    project.add_relationship(&derived, &base);

    let json = serde_json::to_string(&project).unwrap();
    let back: Project = serde_json::from_str(&json).unwrap();
    assert_eq!(
        Artifacts::generate(&project),
        Artifacts::generate(&back)
    );
}
