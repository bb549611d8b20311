pub mod error;
pub mod log;
pub mod parse_func;
pub mod serde_func;

pub use error::{http::HttpError, parse::ParseError, serde::SerdeError, Error};
pub use log::{init_log, init_test_log};
