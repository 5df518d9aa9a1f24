pub mod query_status;
pub mod users_table;

#[allow(unused_imports)]
pub use query_status::*;
#[allow(unused_imports)]
pub use users_table::*;
