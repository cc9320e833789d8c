pub mod cancel;
pub mod parameter_error_handler;
pub mod time;
pub mod validate;

pub use cancel::run_cancellable;
pub use parameter_error_handler::{json_error_handler, path_error_handler, query_error_handler};
