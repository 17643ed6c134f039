//! Google REST 存储实现
//!
//! 服务账号 JWT 授权 + Drive v3 / Sheets v4 REST 调用。

mod auth;
mod drive;
mod sheets;

pub use auth::{GoogleAuthenticator, ServiceAccountKey};
pub use drive::GoogleDriveStorage;
pub use sheets::GoogleSheetsStorage;
