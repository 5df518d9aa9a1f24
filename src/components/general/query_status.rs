use crate::components::UsersTable;
use crate::model::{Error, User};
use leptos::{either::EitherOf3, prelude::*};

/// What the users page currently has to show for its fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum UsersQuery {
    Loading,
    Failed(String),
    Ready(Vec<User>),
}

impl From<Result<Vec<User>, Error>> for UsersQuery {
    fn from(result: Result<Vec<User>, Error>) -> Self {
        match result {
            Ok(users) => UsersQuery::Ready(users),
            Err(e) => UsersQuery::Failed(e.into()),
        }
    }
}

#[component]
pub fn QueryStatus(state: UsersQuery) -> impl IntoView {
    match state {
        UsersQuery::Loading => EitherOf3::A(view! { <p>"Loading..."</p> }),
        UsersQuery::Failed(message) => EitherOf3::B(view! {
            <p role="alert">{format!("Error: {message}")}</p>
        }),
        UsersQuery::Ready(users) => {
            let users = Signal::derive(move || users.clone());
            EitherOf3::C(view! { <UsersTable users /> })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_result_maps_to_state() {
        let failed = UsersQuery::from(Err::<Vec<User>, _>(Error::Http(404)));
        assert_eq!(failed, UsersQuery::Failed("HTTP 404".to_string()));

        let ready = UsersQuery::from(Ok::<_, Error>(Vec::new()));
        assert_eq!(ready, UsersQuery::Ready(Vec::new()));
    }
}
