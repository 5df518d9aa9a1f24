mod user;
pub use user::*;

mod sorting;
pub use sorting::*;
