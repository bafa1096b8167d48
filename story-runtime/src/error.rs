//! # Error 模块
//!
//! 定义 story-runtime 中使用的错误类型。
//!
//! ## 错误分类
//!
//! - 致命配置错误（故事树与执行状态不一致，引擎无法继续）：
//!   [`RuntimeError::BlockNotFound`]、[`RuntimeError::UndefinedVariable`]、
//!   [`RuntimeError::TypeMismatch`]
//! - 用户输入错误（引擎状态不变，调用方重新提示即可）：
//!   [`RuntimeError::UnknownChoice`]
//!
//! 可恢复异常（如重复的选项 ID）不走错误通道，
//! 以 [`crate::diagnostic::Diagnostic`] 形式记录。

use thiserror::Error;

/// 运行时错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// 块路径下降时块名缺失（致命）
    #[error("块 '{name}' 未找到")]
    BlockNotFound { name: String },

    /// 条件引用了未定义的变量（致命）
    #[error("变量 '{name}' 未定义")]
    UndefinedVariable { name: String },

    /// 比较双方标签不一致，或运算符对该标签无定义（致命）
    #[error("类型不匹配：期望 {expected}，实际 {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// 未知的选项 ID（用户输入错误）
    #[error("没有 ID 为 '{id}' 的选项")]
    UnknownChoice { id: String },
}

/// Result 类型别名
pub type RuntimeResult<T> = Result<T, RuntimeError>;
