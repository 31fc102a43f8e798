/// Address of the hosted backend project.
///
/// The API key identifies the project to the hosted services; it is not a
/// secret and is treated as static configuration.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: String,
    /// Informational; shown in startup logs.
    pub auth_domain: String,
}

impl FirebaseConfig {
    /// Load the backend bundle from environment variables.
    ///
    /// | Env Var                 | Required | Default                        |
    /// |-------------------------|----------|--------------------------------|
    /// | `FIREBASE_API_KEY`      | **yes**  | --                             |
    /// | `FIREBASE_PROJECT_ID`   | **yes**  | --                             |
    /// | `FIREBASE_AUTH_DOMAIN`  | no       | `{project_id}.firebaseapp.com` |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or empty.
    pub fn from_env() -> Self {
        let api_key = required_var("FIREBASE_API_KEY");
        let project_id = required_var("FIREBASE_PROJECT_ID");
        let auth_domain = std::env::var("FIREBASE_AUTH_DOMAIN")
            .unwrap_or_else(|_| format!("{project_id}.firebaseapp.com"));

        Self {
            api_key,
            project_id,
            auth_domain,
        }
    }

    /// Base URL for document paths in the project's default database.
    pub fn documents_url(&self) -> String {
        format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
            self.project_id
        )
    }
}

fn required_var(name: &str) -> String {
    let value = std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set"));
    assert!(!value.is_empty(), "{name} must not be empty");
    value
}
