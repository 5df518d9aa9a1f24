mod home_page;
mod users_page;

pub use home_page::*;
pub use users_page::*;
