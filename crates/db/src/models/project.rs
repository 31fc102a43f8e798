//! Project entity model and DTOs.

use folio_core::forms::ProjectForm;
use folio_core::types::{DocumentId, Timestamp};
use serde::Serialize;

use super::{put_opt, ToFields};
use crate::document::{Document, FieldAccess, Fields};

/// A document from the `projects` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_url: String,
    pub github_url: String,
    pub demo_url: String,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    pub fn from_document(doc: &Document) -> Self {
        let f = &doc.fields;
        Self {
            id: doc.id.clone(),
            title: f.string("title"),
            description: f.string("description"),
            tech_stack: f.string_list("techStack"),
            image_url: f.string("imageUrl"),
            github_url: f.string("githubUrl"),
            demo_url: f.string("demoUrl"),
            featured: f.boolean("featured"),
            created_at: f.timestamp_or_now("createdAt"),
            updated_at: f.timestamp_or_now("updatedAt"),
        }
    }
}

impl ToFields for ProjectForm {
    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.insert("title".into(), self.title.clone().into());
        f.insert("description".into(), self.description.clone().into());
        f.insert("techStack".into(), self.tech_stack.clone().into());
        f.insert("imageUrl".into(), self.image_url.clone().into());
        f.insert("githubUrl".into(), self.github_url.clone().into());
        f.insert("demoUrl".into(), self.demo_url.clone().into());
        f.insert("featured".into(), self.featured.into());
        f
    }
}

/// Partial update of a project. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub featured: Option<bool>,
}

impl From<ProjectForm> for UpdateProject {
    fn from(form: ProjectForm) -> Self {
        Self {
            title: Some(form.title),
            description: Some(form.description),
            tech_stack: Some(form.tech_stack),
            image_url: Some(form.image_url),
            github_url: Some(form.github_url),
            demo_url: Some(form.demo_url),
            featured: Some(form.featured),
        }
    }
}

impl UpdateProject {
    /// Copy the present fields onto `project`.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(title) = &self.title {
            project.title = title.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(tech_stack) = &self.tech_stack {
            project.tech_stack = tech_stack.clone();
        }
        if let Some(image_url) = &self.image_url {
            project.image_url = image_url.clone();
        }
        if let Some(github_url) = &self.github_url {
            project.github_url = github_url.clone();
        }
        if let Some(demo_url) = &self.demo_url {
            project.demo_url = demo_url.clone();
        }
        if let Some(featured) = self.featured {
            project.featured = featured;
        }
    }
}

impl ToFields for UpdateProject {
    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        put_opt(&mut f, "title", &self.title);
        put_opt(&mut f, "description", &self.description);
        put_opt(&mut f, "techStack", &self.tech_stack);
        put_opt(&mut f, "imageUrl", &self.image_url);
        put_opt(&mut f, "githubUrl", &self.github_url);
        put_opt(&mut f, "demoUrl", &self.demo_url);
        put_opt(&mut f, "featured", &self.featured);
        f
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FieldValue;

    #[test]
    fn form_fields_use_stored_names() {
        let form = ProjectForm {
            title: "Weather".into(),
            tech_stack: vec!["Flutter".into()],
            ..Default::default()
        };
        let f = form.to_fields();
        assert_eq!(f["title"], FieldValue::from("Weather"));
        assert_eq!(f["techStack"], FieldValue::from(vec!["Flutter"]));
        assert!(f.contains_key("demoUrl"));
        assert!(!f.contains_key("createdAt"));
    }

    #[test]
    fn apply_leaves_absent_fields_alone() {
        let mut project = Project::from_document(&Document {
            id: "p1".into(),
            fields: ProjectForm {
                title: "Weather".into(),
                description: "Forecasts".into(),
                ..Default::default()
            }
            .to_fields(),
        });
        UpdateProject {
            title: Some("Weather Pro".into()),
            featured: Some(true),
            ..Default::default()
        }
        .apply_to(&mut project);

        assert_eq!(project.title, "Weather Pro");
        assert_eq!(project.description, "Forecasts");
        assert!(project.featured);
    }

    #[test]
    fn patch_only_writes_present_fields() {
        let patch = UpdateProject {
            featured: Some(true),
            ..Default::default()
        };
        let f = patch.to_fields();
        assert_eq!(f.len(), 1);
        assert_eq!(f["featured"], FieldValue::Boolean(true));
    }

    #[test]
    fn from_document_tolerates_missing_fields() {
        let doc = Document {
            id: "p1".into(),
            fields: Fields::new(),
        };
        let p = Project::from_document(&doc);
        assert_eq!(p.id, "p1");
        assert!(p.tech_stack.is_empty());
        assert!(!p.featured);
    }
}
