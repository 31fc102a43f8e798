//! Form-shaped records submitted by the public site and the admin panel.
//!
//! These are the inputs to [`crate::validation`] and the create payloads for
//! the repositories. Field names serialize as camelCase to match the stored
//! document fields.

use serde::{Deserialize, Serialize};

/// Public contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Admin project editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Absolute URL of the cover image.
    pub image_url: String,
    pub github_url: String,
    /// Optional; empty when the project has no live demo.
    #[serde(default)]
    pub demo_url: String,
    #[serde(default)]
    pub featured: bool,
}

/// Admin skill editor.
///
/// `category` is kept as the raw submitted string so the validator can report
/// an unknown value instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillForm {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub icon: String,
    pub proficiency: i64,
    #[serde(default)]
    pub featured: bool,
}

/// Social links shown in the footer and contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub email: String,
}

/// Admin profile settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub profile_image: String,
    pub email: String,
    pub location: String,
    pub university: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub hometown: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub social_links: SocialLinks,
}

/// Admin login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}
