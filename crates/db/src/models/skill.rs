//! Skill entity model and DTOs.

use folio_core::forms::SkillForm;
use folio_core::skill::SkillCategory;
use folio_core::types::DocumentId;
use serde::Serialize;

use super::{put_opt, ToFields};
use crate::document::{Document, FieldAccess, Fields};
use crate::error::StoreError;

/// A document from the `skills` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub id: DocumentId,
    pub name: String,
    pub category: SkillCategory,
    pub icon: String,
    pub proficiency: i64,
    pub featured: bool,
}

impl Skill {
    /// Fails with [`StoreError::Decode`] when the stored category is not one
    /// of the known values.
    pub fn from_document(doc: &Document) -> Result<Self, StoreError> {
        let f = &doc.fields;
        let category = f
            .string("category")
            .parse::<SkillCategory>()
            .map_err(|e| StoreError::Decode(format!("skill {}: {e}", doc.id)))?;
        Ok(Self {
            id: doc.id.clone(),
            name: f.string("name"),
            category,
            icon: f.string("icon"),
            proficiency: f.integer("proficiency"),
            featured: f.boolean("featured"),
        })
    }
}

impl ToFields for SkillForm {
    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.insert("name".into(), self.name.clone().into());
        f.insert("category".into(), self.category.clone().into());
        f.insert("icon".into(), self.icon.clone().into());
        f.insert("proficiency".into(), self.proficiency.into());
        f.insert("featured".into(), self.featured.into());
        f
    }
}

/// Partial update of a skill.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSkill {
    pub name: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub proficiency: Option<i64>,
    pub featured: Option<bool>,
}

impl From<SkillForm> for UpdateSkill {
    fn from(form: SkillForm) -> Self {
        Self {
            name: Some(form.name),
            category: Some(form.category),
            icon: Some(form.icon),
            proficiency: Some(form.proficiency),
            featured: Some(form.featured),
        }
    }
}

impl UpdateSkill {
    /// Copy the present fields onto `skill`. A category that does not parse
    /// leaves the current one in place.
    pub fn apply_to(&self, skill: &mut Skill) {
        if let Some(name) = &self.name {
            skill.name = name.clone();
        }
        if let Some(category) = self.category.as_deref().and_then(|c| c.parse::<SkillCategory>().ok()) {
            skill.category = category;
        }
        if let Some(icon) = &self.icon {
            skill.icon = icon.clone();
        }
        if let Some(proficiency) = self.proficiency {
            skill.proficiency = proficiency;
        }
        if let Some(featured) = self.featured {
            skill.featured = featured;
        }
    }
}

impl ToFields for UpdateSkill {
    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        put_opt(&mut f, "name", &self.name);
        put_opt(&mut f, "category", &self.category);
        put_opt(&mut f, "icon", &self.icon);
        put_opt(&mut f, "proficiency", &self.proficiency);
        put_opt(&mut f, "featured", &self.featured);
        f
    }
}
