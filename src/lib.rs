//! Attendance Drive - 拍照打卡转发服务
//!
//! 基于 Actix Web 的小型表单后端：接收相机照片，转存 Google Drive，
//! 并把打卡记录追加到 Google Sheets 的月度分表。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（编排流水线）
//! - `storage`: 远端存储层（Drive v3 / Sheets v4）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
