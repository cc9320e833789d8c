//! 配置管理
//!
//! 按 `config.toml` -> `config.{APP_ENV}` -> `LEARNHUB_*` 环境变量 -> 显式覆盖的顺序加载。

mod r#impl;
mod structs;

pub use structs::*;
