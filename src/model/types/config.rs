use serde::{Deserialize, Serialize};

pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Settings shared through the leptos context.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub users_endpoint: String,
}

impl AppConfig {
    pub fn new(users_endpoint: impl Into<String>) -> Self {
        Self {
            users_endpoint: users_endpoint.into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(USERS_ENDPOINT)
    }
}
