pub mod file_magic;
pub mod multipart;
pub mod parameter_error_handler;
pub mod time;
pub mod validate;

pub use file_magic::is_supported_image;
pub use multipart::{FormPayload, collect_form};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use time::format_local_timestamp;
