//! In-place edit operations on a `Project`
//!
//! These are the state transitions an editor front end drives: add, patch,
//! and delete for every entity kind. Patches carry `Option` fields so a
//! caller only names what it changes.
//!
//! Two invariants are enforced here rather than trusted to callers:
//! deleting a class cascade-deletes every relationship referencing it, and a
//! method whose return type is set to the constructor sentinel has its kind
//! forced to concrete.

use tracing::debug;

use super::error::ModelError;
use super::factory;
use super::model::{
    ClassKind, EntityId, Method, MethodKind, Multiplicity, Project, RelationshipKind,
    TargetLanguage, Visibility,
};

/// Partial update for a class
#[derive(Debug, Clone, Default)]
pub struct ClassPatch {
    pub name: Option<String>,
    pub kind: Option<ClassKind>,
    pub generic_param: Option<String>,
}

/// Partial update for a field
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub visibility: Option<Visibility>,
    pub field_type: Option<String>,
}

/// Partial update for a method
#[derive(Debug, Clone, Default)]
pub struct MethodPatch {
    pub name: Option<String>,
    pub visibility: Option<Visibility>,
    pub kind: Option<MethodKind>,
    pub return_type: Option<String>,
}

/// Partial update for a parameter
#[derive(Debug, Clone, Default)]
pub struct ParamPatch {
    pub name: Option<String>,
    pub param_type: Option<String>,
}

/// Partial update for a relationship
#[derive(Debug, Clone, Default)]
pub struct RelationshipPatch {
    pub kind: Option<RelationshipKind>,
    pub from_class_id: Option<EntityId>,
    pub to_class_id: Option<EntityId>,
    pub to_multiplicity: Option<Multiplicity>,
}

fn enforce_constructor_kind(method: &mut Method) {
    if method.is_constructor() {
        method.kind = MethodKind::Concrete;
    }
}

impl Project {
    pub fn set_language(&mut self, language: TargetLanguage) {
        self.language = language;
    }

    /// Add an empty class and return its id.
    pub fn add_class(&mut self) -> EntityId {
        let class = factory::make_class();
        let id = class.id.clone();
        self.classes.push(class);
        id
    }

    /// Delete a class and every relationship that references it.
    pub fn delete_class(&mut self, class_id: &str) -> Result<(), ModelError> {
        if self.class_by_id(class_id).is_none() {
            return Err(ModelError::unknown_class(class_id));
        }
        self.classes.retain(|c| c.id != class_id);
        let before = self.relationships.len();
        self.relationships
            .retain(|r| r.from_class_id != class_id && r.to_class_id != class_id);
        let removed = before - self.relationships.len();
        if removed > 0 {
            debug!(class_id, removed, "cascade-removed relationships");
        }
        Ok(())
    }

    pub fn patch_class(&mut self, class_id: &str, patch: ClassPatch) -> Result<(), ModelError> {
        let class = self
            .class_by_id_mut(class_id)
            .ok_or_else(|| ModelError::unknown_class(class_id))?;
        if let Some(name) = patch.name {
            class.name = name;
        }
        if let Some(kind) = patch.kind {
            class.kind = kind;
        }
        if let Some(generic) = patch.generic_param {
            class.generic_param = Some(generic);
        }
        Ok(())
    }

    /// Add a field with language-appropriate defaults and return its id.
    pub fn add_field(&mut self, class_id: &str) -> Result<EntityId, ModelError> {
        let default_type = factory::default_member_type(self.language);
        let class = self
            .class_by_id_mut(class_id)
            .ok_or_else(|| ModelError::unknown_class(class_id))?;
        let field = factory::make_field(default_type);
        let id = field.id.clone();
        class.fields.push(field);
        Ok(id)
    }

    pub fn delete_field(&mut self, class_id: &str, field_id: &str) -> Result<(), ModelError> {
        let class = self
            .class_by_id_mut(class_id)
            .ok_or_else(|| ModelError::unknown_class(class_id))?;
        if !class.fields.iter().any(|f| f.id == field_id) {
            return Err(ModelError::unknown_field(field_id));
        }
        class.fields.retain(|f| f.id != field_id);
        Ok(())
    }

    pub fn patch_field(
        &mut self,
        class_id: &str,
        field_id: &str,
        patch: FieldPatch,
    ) -> Result<(), ModelError> {
        let class = self
            .class_by_id_mut(class_id)
            .ok_or_else(|| ModelError::unknown_class(class_id))?;
        let field = class
            .fields
            .iter_mut()
            .find(|f| f.id == field_id)
            .ok_or_else(|| ModelError::unknown_field(field_id))?;
        if let Some(name) = patch.name {
            field.name = name;
        }
        if let Some(visibility) = patch.visibility {
            field.visibility = visibility;
        }
        if let Some(field_type) = patch.field_type {
            field.field_type = field_type;
        }
        Ok(())
    }

    /// Add a method with defaults and return its id.
    pub fn add_method(&mut self, class_id: &str) -> Result<EntityId, ModelError> {
        let class = self
            .class_by_id_mut(class_id)
            .ok_or_else(|| ModelError::unknown_class(class_id))?;
        let method = factory::make_method();
        let id = method.id.clone();
        class.methods.push(method);
        Ok(id)
    }

    pub fn delete_method(&mut self, class_id: &str, method_id: &str) -> Result<(), ModelError> {
        let class = self
            .class_by_id_mut(class_id)
            .ok_or_else(|| ModelError::unknown_class(class_id))?;
        if !class.methods.iter().any(|m| m.id == method_id) {
            return Err(ModelError::unknown_method(method_id));
        }
        class.methods.retain(|m| m.id != method_id);
        Ok(())
    }

    pub fn patch_method(
        &mut self,
        class_id: &str,
        method_id: &str,
        patch: MethodPatch,
    ) -> Result<(), ModelError> {
        let method = self.method_mut(class_id, method_id)?;
        if let Some(name) = patch.name {
            method.name = name;
        }
        if let Some(visibility) = patch.visibility {
            method.visibility = visibility;
        }
        if let Some(kind) = patch.kind {
            method.kind = kind;
        }
        if let Some(return_type) = patch.return_type {
            method.return_type = return_type;
        }
        enforce_constructor_kind(method);
        Ok(())
    }

    /// Add a parameter with a language-appropriate default type and return
    /// its id.
    pub fn add_param(&mut self, class_id: &str, method_id: &str) -> Result<EntityId, ModelError> {
        let default_type = factory::default_member_type(self.language);
        let method = self.method_mut(class_id, method_id)?;
        let param = factory::make_param(default_type);
        let id = param.id.clone();
        method.params.push(param);
        Ok(id)
    }

    pub fn delete_param(
        &mut self,
        class_id: &str,
        method_id: &str,
        param_id: &str,
    ) -> Result<(), ModelError> {
        let method = self.method_mut(class_id, method_id)?;
        if !method.params.iter().any(|p| p.id == param_id) {
            return Err(ModelError::unknown_param(param_id));
        }
        method.params.retain(|p| p.id != param_id);
        Ok(())
    }

    pub fn patch_param(
        &mut self,
        class_id: &str,
        method_id: &str,
        param_id: &str,
        patch: ParamPatch,
    ) -> Result<(), ModelError> {
        let method = self.method_mut(class_id, method_id)?;
        let param = method
            .params
            .iter_mut()
            .find(|p| p.id == param_id)
            .ok_or_else(|| ModelError::unknown_param(param_id))?;
        if let Some(name) = patch.name {
            param.name = name;
        }
        if let Some(param_type) = patch.param_type {
            param.param_type = param_type;
        }
        Ok(())
    }

    /// Add a relationship between two classes and return its id.
    ///
    /// Endpoints are weak references; they are not validated here, and the
    /// generators tolerate ids that never resolve.
    pub fn add_relationship(&mut self, from_class_id: &str, to_class_id: &str) -> EntityId {
        let rel = factory::make_relationship(from_class_id.to_string(), to_class_id.to_string());
        let id = rel.id.clone();
        self.relationships.push(rel);
        id
    }

    pub fn delete_relationship(&mut self, rel_id: &str) -> Result<(), ModelError> {
        if !self.relationships.iter().any(|r| r.id == rel_id) {
            return Err(ModelError::unknown_relationship(rel_id));
        }
        self.relationships.retain(|r| r.id != rel_id);
        Ok(())
    }

    pub fn patch_relationship(
        &mut self,
        rel_id: &str,
        patch: RelationshipPatch,
    ) -> Result<(), ModelError> {
        let rel = self
            .relationships
            .iter_mut()
            .find(|r| r.id == rel_id)
            .ok_or_else(|| ModelError::unknown_relationship(rel_id))?;
        if let Some(kind) = patch.kind {
            rel.kind = kind;
        }
        if let Some(from) = patch.from_class_id {
            rel.from_class_id = from;
        }
        if let Some(to) = patch.to_class_id {
            rel.to_class_id = to;
        }
        if let Some(mult) = patch.to_multiplicity {
            rel.to_multiplicity = mult;
        }
        Ok(())
    }

    fn method_mut(&mut self, class_id: &str, method_id: &str) -> Result<&mut Method, ModelError> {
        let class = self
            .class_by_id_mut(class_id)
            .ok_or_else(|| ModelError::unknown_class(class_id))?;
        class
            .methods
            .iter_mut()
            .find(|m| m.id == method_id)
            .ok_or_else(|| ModelError::unknown_method(method_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::CONSTRUCTOR_RETURN_TYPE;

    fn project_with_class() -> (Project, EntityId) {
        let mut project = factory::initial_project();
        let id = project.add_class();
        (project, id)
    }

    #[test]
    fn test_add_and_delete_class() {
        let (mut project, id) = project_with_class();
        assert_eq!(project.class_count(), 1);
        project.delete_class(&id).unwrap();
        assert_eq!(project.class_count(), 0);
        assert_eq!(
            project.delete_class(&id),
            Err(ModelError::unknown_class(id))
        );
    }

    #[test]
    fn test_delete_class_cascades_relationships() {
        let mut project = factory::initial_project();
        let a = project.add_class();
        let b = project.add_class();
        let c = project.add_class();
        project.add_relationship(&a, &b);
        project.add_relationship(&b, &c);
        project.add_relationship(&c, &a);

        project.delete_class(&b).unwrap();

        assert_eq!(project.relationship_count(), 1);
        let survivor = &project.relationships[0];
        assert_eq!(survivor.from_class_id, c);
        assert_eq!(survivor.to_class_id, a);
    }

    #[test]
    fn test_patch_class() {
        let (mut project, id) = project_with_class();
        project
            .patch_class(
                &id,
                ClassPatch {
                    name: Some("Shape".to_string()),
                    kind: Some(ClassKind::Interface),
                    generic_param: Some("T".to_string()),
                },
            )
            .unwrap();
        let class = project.class_by_id(&id).unwrap();
        assert_eq!(class.name, "Shape");
        assert_eq!(class.kind, ClassKind::Interface);
        assert_eq!(class.generic(), Some("T"));
    }

    #[test]
    fn test_field_lifecycle() {
        let (mut project, class_id) = project_with_class();
        let field_id = project.add_field(&class_id).unwrap();
        project
            .patch_field(
                &class_id,
                &field_id,
                FieldPatch {
                    name: Some("age".to_string()),
                    field_type: Some("int".to_string()),
                    visibility: Some(Visibility::Protected),
                },
            )
            .unwrap();
        let field = &project.class_by_id(&class_id).unwrap().fields[0];
        assert_eq!(field.name, "age");
        assert_eq!(field.field_type, "int");
        assert_eq!(field.visibility, Visibility::Protected);

        project.delete_field(&class_id, &field_id).unwrap();
        assert!(project.class_by_id(&class_id).unwrap().fields.is_empty());
        assert_eq!(
            project.delete_field(&class_id, &field_id),
            Err(ModelError::unknown_field(field_id))
        );
    }

    #[test]
    fn test_c_project_defaults_members_to_char_pointer() {
        let mut project = factory::initial_project();
        project.set_language(TargetLanguage::C);
        let class_id = project.add_class();
        project.add_field(&class_id).unwrap();
        assert_eq!(
            project.class_by_id(&class_id).unwrap().fields[0].field_type,
            "char*"
        );
    }

    #[test]
    fn test_constructor_patch_forces_concrete_kind() {
        let (mut project, class_id) = project_with_class();
        let method_id = project.add_method(&class_id).unwrap();
        project
            .patch_method(
                &class_id,
                &method_id,
                MethodPatch {
                    kind: Some(MethodKind::Abstract),
                    return_type: Some(CONSTRUCTOR_RETURN_TYPE.to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        let method = &project.class_by_id(&class_id).unwrap().methods[0];
        assert!(method.is_constructor());
        assert_eq!(method.kind, MethodKind::Concrete);
    }

    #[test]
    fn test_param_lifecycle() {
        let (mut project, class_id) = project_with_class();
        let method_id = project.add_method(&class_id).unwrap();
        let param_id = project.add_param(&class_id, &method_id).unwrap();
        project
            .patch_param(
                &class_id,
                &method_id,
                &param_id,
                ParamPatch {
                    name: Some("count".to_string()),
                    param_type: Some("int".to_string()),
                },
            )
            .unwrap();
        let method = &project.class_by_id(&class_id).unwrap().methods[0];
        assert_eq!(method.params[0].name, "count");
        assert_eq!(method.params[0].param_type, "int");

        project.delete_param(&class_id, &method_id, &param_id).unwrap();
        assert!(project.class_by_id(&class_id).unwrap().methods[0]
            .params
            .is_empty());
    }

    #[test]
    fn test_relationship_lifecycle() {
        let mut project = factory::initial_project();
        let a = project.add_class();
        let b = project.add_class();
        let rel_id = project.add_relationship(&a, &b);
        project
            .patch_relationship(
                &rel_id,
                RelationshipPatch {
                    kind: Some(RelationshipKind::Composition),
                    to_multiplicity: Some(Multiplicity::Many),
                    ..Default::default()
                },
            )
            .unwrap();
        let rel = &project.relationships[0];
        assert_eq!(rel.kind, RelationshipKind::Composition);
        assert_eq!(rel.to_multiplicity, Multiplicity::Many);

        project.delete_relationship(&rel_id).unwrap();
        assert_eq!(project.relationship_count(), 0);
    }

    #[test]
    fn test_unknown_ids_are_reported() {
        let (mut project, class_id) = project_with_class();
        assert!(matches!(
            project.add_field("nope"),
            Err(ModelError::UnknownClass { .. })
        ));
        assert!(matches!(
            project.patch_method(&class_id, "nope", MethodPatch::default()),
            Err(ModelError::UnknownMethod { .. })
        ));
    }
}
