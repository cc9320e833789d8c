//! LearnHub - 学习平台领域核心
//!
//! 基于 Actix Web 与 SeaORM 构建的课程、选课、测评、提交与通知服务。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 领域实体与请求定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务编排层
//! - `storage`: 数据存储层（实体存储、工作单元、SeaORM 实现）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
