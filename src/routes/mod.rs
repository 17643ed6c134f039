pub mod attendance;

pub mod uploads;

pub mod frontend;

pub use attendance::configure_attendance_routes;
pub use frontend::configure_frontend_routes;
pub use uploads::configure_upload_routes;
