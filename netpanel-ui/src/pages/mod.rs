mod home;

pub use home::{check_connection, CheckConnectionFn, HomePage};
