//! Form validation.
//!
//! Pure, synchronous checks that map a submitted form to a fixed-shape error
//! struct with one message per validated input. An empty message means the
//! field is valid. Validators never fail; they always return every field.
//!
//! - [`rules`] -- single-field rules (required, min length, email, URL).
//! - [`forms`] -- per-form validators and their error structs.

pub mod forms;
pub mod rules;

pub use forms::{
    validate_contact_form, validate_login_form, validate_profile_form, validate_project_form,
    validate_skill_form, ContactFormErrors, LoginFormErrors, ProfileFormErrors,
    ProjectFormErrors, SkillFormErrors,
};
pub use rules::sanitize_input;

/// A fixed-shape set of per-field error messages.
pub trait FieldErrors {
    /// Every field's message, valid fields included.
    fn messages(&self) -> Vec<&str>;

    /// `true` iff at least one field carries a non-empty message.
    fn has_errors(&self) -> bool {
        self.messages().iter().any(|m| !m.is_empty())
    }
}

/// Free-function form of [`FieldErrors::has_errors`].
pub fn has_errors<E: FieldErrors + ?Sized>(errors: &E) -> bool {
    errors.has_errors()
}
