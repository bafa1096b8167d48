//! # Value 模块
//!
//! 定义故事变量的值类型。
//!
//! ## 设计说明
//!
//! - 封闭的带标签联合体（Int / Text / Bool），值自带标签
//! - 构造后不可变；比较只在同标签之间进行（见 [`crate::runtime::condition`]）
//! - 不做任何隐式类型转换

use serde::{Deserialize, Serialize};

/// 故事变量值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// 整数
    Int(i64),
    /// 文本
    Text(String),
    /// 布尔值
    Bool(bool),
}

impl Value {
    /// 标签名称（用于错误信息）
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Bool(_) => "bool",
        }
    }

    /// 是否与另一个值同标签
    pub fn same_type(&self, other: &Value) -> bool {
        self.type_name() == other.type_name()
    }
}
