//! 配置管理
//!
//! 配置来源按优先级从低到高：默认值、`config.toml`、`config.{APP_ENV}.toml`、
//! `SCHOOL_ADMIN_*` 环境变量，以及少量约定俗成的环境变量覆盖。

mod r#impl;
mod structs;

pub use structs::*;
