pub mod error_code;
pub mod lifecycle;
pub mod patch;
pub mod response;

pub use error_code::ErrorCode;
pub use lifecycle::Lifecycle;
pub use patch::Patch;
pub use response::ApiResponse;
