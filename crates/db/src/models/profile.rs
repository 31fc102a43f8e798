//! Profile singleton model, its nested records, and the first-run defaults.

use folio_core::forms::{ProfileForm, SocialLinks};
use folio_core::types::DocumentId;
use serde::{Deserialize, Serialize};

use super::{put_opt, ToFields};
use crate::document::{Document, FieldAccess, FieldValue, Fields};

/// The single document in the `profile` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: DocumentId,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_image: String,
    pub email: String,
    pub location: String,
    pub university: String,
    pub department: String,
    pub hometown: String,
    pub resume_url: String,
    pub social_links: SocialLinks,
    pub education: Vec<Education>,
    pub goals: Vec<String>,
    pub experience: Vec<String>,
}

/// One entry of the education timeline. Dates are free-form display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl Profile {
    pub fn from_document(doc: &Document) -> Self {
        let f = &doc.fields;
        let social_links = f
            .map("socialLinks")
            .map(|links| SocialLinks {
                github: links.string("github"),
                linkedin: links.string("linkedin"),
                email: links.string("email"),
            })
            .unwrap_or_default();
        let education = f
            .array("education")
            .iter()
            .filter_map(|v| match v {
                FieldValue::Map(entry) => Some(education_from_fields(entry)),
                _ => None,
            })
            .collect();

        Self {
            id: doc.id.clone(),
            name: f.string("name"),
            title: f.string("title"),
            bio: f.string("bio"),
            profile_image: f.string("profileImage"),
            email: f.string("email"),
            location: f.string("location"),
            university: f.string("university"),
            department: f.string("department"),
            hometown: f.string("hometown"),
            resume_url: f.string("resumeUrl"),
            social_links,
            education,
            goals: f.string_list("goals"),
            experience: f.string_list("experience"),
        }
    }
}

fn education_from_fields(f: &Fields) -> Education {
    Education {
        institution: f.string("institution"),
        degree: f.string("degree"),
        field: f.string("field"),
        start_date: f.string("startDate"),
        end_date: f.string("endDate"),
        current: f.boolean("current"),
        description: f.string("description"),
    }
}

impl From<SocialLinks> for FieldValue {
    fn from(links: SocialLinks) -> Self {
        let mut f = Fields::new();
        f.insert("github".into(), links.github.into());
        f.insert("linkedin".into(), links.linkedin.into());
        f.insert("email".into(), links.email.into());
        FieldValue::Map(f)
    }
}

impl From<Education> for FieldValue {
    fn from(e: Education) -> Self {
        let mut f = Fields::new();
        f.insert("institution".into(), e.institution.into());
        f.insert("degree".into(), e.degree.into());
        f.insert("field".into(), e.field.into());
        f.insert("startDate".into(), e.start_date.into());
        f.insert("endDate".into(), e.end_date.into());
        f.insert("current".into(), e.current.into());
        f.insert("description".into(), e.description.into());
        FieldValue::Map(f)
    }
}

impl ToFields for ProfileForm {
    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.insert("name".into(), self.name.clone().into());
        f.insert("title".into(), self.title.clone().into());
        f.insert("bio".into(), self.bio.clone().into());
        f.insert("profileImage".into(), self.profile_image.clone().into());
        f.insert("email".into(), self.email.clone().into());
        f.insert("location".into(), self.location.clone().into());
        f.insert("university".into(), self.university.clone().into());
        f.insert("department".into(), self.department.clone().into());
        f.insert("hometown".into(), self.hometown.clone().into());
        f.insert("resumeUrl".into(), self.resume_url.clone().into());
        f.insert("socialLinks".into(), self.social_links.clone().into());
        f
    }
}

/// Partial update of the profile. Only the editable settings fields and the
/// optional timeline lists are patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub university: Option<String>,
    pub department: Option<String>,
    pub hometown: Option<String>,
    pub resume_url: Option<String>,
    pub social_links: Option<SocialLinks>,
    pub education: Option<Vec<Education>>,
    pub goals: Option<Vec<String>>,
    pub experience: Option<Vec<String>>,
}

impl From<ProfileForm> for UpdateProfile {
    fn from(form: ProfileForm) -> Self {
        Self {
            name: Some(form.name),
            title: Some(form.title),
            bio: Some(form.bio),
            profile_image: Some(form.profile_image),
            email: Some(form.email),
            location: Some(form.location),
            university: Some(form.university),
            department: Some(form.department),
            hometown: Some(form.hometown),
            resume_url: Some(form.resume_url),
            social_links: Some(form.social_links),
            ..Default::default()
        }
    }
}

impl ToFields for UpdateProfile {
    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        put_opt(&mut f, "name", &self.name);
        put_opt(&mut f, "title", &self.title);
        put_opt(&mut f, "bio", &self.bio);
        put_opt(&mut f, "profileImage", &self.profile_image);
        put_opt(&mut f, "email", &self.email);
        put_opt(&mut f, "location", &self.location);
        put_opt(&mut f, "university", &self.university);
        put_opt(&mut f, "department", &self.department);
        put_opt(&mut f, "hometown", &self.hometown);
        put_opt(&mut f, "resumeUrl", &self.resume_url);
        put_opt(&mut f, "socialLinks", &self.social_links);
        put_opt(&mut f, "education", &self.education);
        put_opt(&mut f, "goals", &self.goals);
        put_opt(&mut f, "experience", &self.experience);
        f
    }
}

// ---------------------------------------------------------------------------
// First-run defaults
// ---------------------------------------------------------------------------

const DEFAULT_BIO: &str = "I am a passionate and dedicated Flutter developer and \
Software Engineering student at UET Lahore. I love building beautiful, modern, and \
functional mobile applications. With a strong foundation in programming and continuous \
learning, I aim to become a professional mobile app developer and begin my freelancing \
journey.";

const DEFAULT_IMAGE: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d\
?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D\
&auto=format&fit=crop&w=200&h=200&q=80";

/// The profile written when the collection is found empty.
pub fn default_profile() -> ProfileForm {
    ProfileForm {
        name: "Muhammad Ahmar Saleem".into(),
        title: "Flutter Developer | Software Engineering Student".into(),
        bio: DEFAULT_BIO.into(),
        profile_image: DEFAULT_IMAGE.into(),
        email: "ahmar@example.com".into(),
        location: "Okara, Punjab, Pakistan".into(),
        university: "University of Engineering & Technology (UET), Lahore".into(),
        department: "Software Engineering".into(),
        hometown: "Okara, Punjab, Pakistan".into(),
        resume_url: String::new(),
        social_links: SocialLinks {
            github: "https://github.com/ahmar".into(),
            linkedin: "https://linkedin.com/in/ahmar".into(),
            email: "mailto:ahmar@example.com".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::validation::{has_errors, validate_profile_form};

    #[test]
    fn default_profile_passes_validation() {
        let errors = validate_profile_form(&default_profile());
        assert!(!has_errors(&errors), "{errors:?}");
    }

    #[test]
    fn default_image_is_single_url() {
        assert!(!DEFAULT_IMAGE.contains(' '));
        assert!(DEFAULT_IMAGE.ends_with("q=80"));
    }

    #[test]
    fn round_trips_nested_social_links_and_education() {
        let mut fields = default_profile().to_fields();
        fields.insert(
            "education".into(),
            vec![Education {
                institution: "UET".into(),
                current: true,
                ..Default::default()
            }]
            .into(),
        );
        let doc = Document {
            id: "me".into(),
            fields,
        };

        let profile = Profile::from_document(&doc);
        assert_eq!(profile.social_links.github, "https://github.com/ahmar");
        assert_eq!(profile.education.len(), 1);
        assert!(profile.education[0].current);
        assert!(profile.goals.is_empty());
    }

    #[test]
    fn settings_patch_leaves_timeline_untouched() {
        let patch = UpdateProfile::from(default_profile());
        let f = patch.to_fields();
        assert!(f.contains_key("socialLinks"));
        assert!(!f.contains_key("education"));
        assert!(!f.contains_key("goals"));
    }
}
