//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 领域错误（NotFound / InvalidState / InvalidArgument / Conflict / PersistenceConflict）
//! 由编排层产生，其余为基础设施错误。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_platform_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum PlatformError {
            $($variant(String),)*
        }

        impl PlatformError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PlatformError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PlatformError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PlatformError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PlatformError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PlatformError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_platform_errors! {
    NotFound("E001", "Not Found"),
    InvalidState("E002", "Invalid State"),
    InvalidArgument("E003", "Invalid Argument"),
    Conflict("E004", "Conflict"),
    PersistenceConflict("E005", "Persistence Conflict"),
    Cancelled("E006", "Operation Cancelled"),
    DatabaseConfig("E007", "Database Configuration Error"),
    DatabaseConnection("E008", "Database Connection Error"),
    DatabaseOperation("E009", "Database Operation Error"),
    Serialization("E010", "Serialization Error"),
}

impl PlatformError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PlatformError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for PlatformError {
    fn from(err: sea_orm::DbErr) -> Self {
        PlatformError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PlatformError {
    fn from(err: serde_json::Error) -> Self {
        PlatformError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlatformError>;
