use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Company {
    pub name: String,
}

/// A user row as shown in the table, after every field has been coerced.
///
/// `id` keeps the numeric coercion of the source value, so a malformed id is
/// `NaN` rather than a missing field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: f64,
    pub name: String,
    pub email: String,
    pub company: Company,
}
