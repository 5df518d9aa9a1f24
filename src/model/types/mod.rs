pub mod config;
pub mod error;
pub mod sorting;
pub mod user;

pub use config::*;
pub use error::*;
pub use sorting::*;
pub use user::*;
