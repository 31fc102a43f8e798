//! Per-form validators and their fixed-shape error structs.

use serde::Serialize;

use super::rules::{then, validate_email, validate_min_length, validate_required, validate_url};
use super::FieldErrors;
use crate::forms::{ContactForm, LoginForm, ProfileForm, ProjectForm, SkillForm};
use crate::skill::{is_valid_category, is_valid_proficiency, PROFICIENCY_MAX, PROFICIENCY_MIN};

// ---------------------------------------------------------------------------
// Minimum lengths
// ---------------------------------------------------------------------------

const NAME_MIN: usize = 2;
const MESSAGE_MIN: usize = 10;
const PROJECT_TITLE_MIN: usize = 3;
const DESCRIPTION_MIN: usize = 10;
const SKILL_NAME_MIN: usize = 2;
const PROFILE_TITLE_MIN: usize = 5;
const PROFILE_BIO_MIN: usize = 50;
const PASSWORD_MIN: usize = 6;

/// Required, then at least `min` characters.
fn required_min(value: &str, min: usize, field: &str) -> String {
    then(validate_required(value, field), || {
        validate_min_length(value, min, field)
    })
}

/// Required, then a well-formed email.
fn required_email(value: &str) -> String {
    then(validate_required(value, "Email"), || validate_email(value))
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormErrors {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldErrors for ContactFormErrors {
    fn messages(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.message.as_str()]
    }
}

pub fn validate_contact_form(form: &ContactForm) -> ContactFormErrors {
    ContactFormErrors {
        name: required_min(&form.name, NAME_MIN, "Name"),
        email: required_email(&form.email),
        message: required_min(&form.message, MESSAGE_MIN, "Message"),
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFormErrors {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub github_url: String,
    pub demo_url: String,
    pub tech_stack: String,
}

impl FieldErrors for ProjectFormErrors {
    fn messages(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.image_url.as_str(),
            self.github_url.as_str(),
            self.demo_url.as_str(),
            self.tech_stack.as_str(),
        ]
    }
}

pub fn validate_project_form(form: &ProjectForm) -> ProjectFormErrors {
    let demo_url = if form.demo_url.is_empty() {
        String::new()
    } else {
        validate_url(&form.demo_url, "Demo URL")
    };

    let tech_stack = if form.tech_stack.iter().all(|t| t.trim().is_empty()) {
        "At least one technology is required".to_string()
    } else {
        String::new()
    };

    ProjectFormErrors {
        title: required_min(&form.title, PROJECT_TITLE_MIN, "Title"),
        description: required_min(&form.description, DESCRIPTION_MIN, "Description"),
        image_url: validate_url(&form.image_url, "Image URL"),
        github_url: validate_url(&form.github_url, "GitHub URL"),
        demo_url,
        tech_stack,
    }
}

// ---------------------------------------------------------------------------
// Skill
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillFormErrors {
    pub name: String,
    pub category: String,
    pub icon: String,
    pub proficiency: String,
}

impl FieldErrors for SkillFormErrors {
    fn messages(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.category.as_str(),
            self.icon.as_str(),
            self.proficiency.as_str(),
        ]
    }
}

pub fn validate_skill_form(form: &SkillForm) -> SkillFormErrors {
    let category = then(validate_required(&form.category, "Category"), || {
        if is_valid_category(&form.category) {
            String::new()
        } else {
            "Please select a valid category".to_string()
        }
    });

    let proficiency = if is_valid_proficiency(form.proficiency) {
        String::new()
    } else {
        format!("Proficiency must be between {PROFICIENCY_MIN} and {PROFICIENCY_MAX}")
    };

    SkillFormErrors {
        name: required_min(&form.name, SKILL_NAME_MIN, "Skill name"),
        category,
        icon: validate_required(&form.icon, "Icon"),
        proficiency,
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileFormErrors {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub location: String,
    pub university: String,
}

impl FieldErrors for ProfileFormErrors {
    fn messages(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.title.as_str(),
            self.bio.as_str(),
            self.email.as_str(),
            self.location.as_str(),
            self.university.as_str(),
        ]
    }
}

pub fn validate_profile_form(form: &ProfileForm) -> ProfileFormErrors {
    ProfileFormErrors {
        name: required_min(&form.name, NAME_MIN, "Name"),
        title: required_min(&form.title, PROFILE_TITLE_MIN, "Title"),
        bio: required_min(&form.bio, PROFILE_BIO_MIN, "Bio"),
        email: required_email(&form.email),
        location: validate_required(&form.location, "Location"),
        university: validate_required(&form.university, "University"),
    }
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginFormErrors {
    pub email: String,
    pub password: String,
}

impl FieldErrors for LoginFormErrors {
    fn messages(&self) -> Vec<&str> {
        vec![self.email.as_str(), self.password.as_str()]
    }
}

pub fn validate_login_form(form: &LoginForm) -> LoginFormErrors {
    LoginFormErrors {
        email: required_email(&form.email),
        password: required_min(&form.password, PASSWORD_MIN, "Password"),
    }
}
