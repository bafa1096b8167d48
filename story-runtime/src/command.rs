//! # Command 模块
//!
//! 定义故事指令。
//!
//! ## 设计说明
//!
//! Command 是封闭的和类型，引擎用穷尽匹配分发，
//! "无法识别的指令"在结构上不可达。
//! 持有嵌套内容的指令（Choice / If）独占该内容的所有权。

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::story::Content;
use crate::value::Value;

/// 比较运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    /// 等于
    Equals,
    /// 不等于
    NotEquals,
    /// 小于
    LessThan,
    /// 小于等于
    AtMost,
    /// 大于
    GreaterThan,
    /// 大于等于
    AtLeast,
}

impl CompareOp {
    /// 是否为顺序比较（只对 Int 有定义）
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Self::LessThan | Self::AtMost | Self::GreaterThan | Self::AtLeast
        )
    }
}

/// 比较对象：字面量或另一个变量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparand {
    /// 字面量值
    Literal(Value),
    /// 变量名（求值时在变量表中解析）
    Var(String),
}

/// If 指令的条件
///
/// Bool 变量是无运算符的真值测试，不读 `op` 和 `comparand`
/// （见 [`crate::runtime::condition`]）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// 测试变量名
    pub var: String,
    /// 比较运算符
    pub op: CompareOp,
    /// 比较对象
    pub comparand: Comparand,
}

/// 故事指令
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// 输出一行文本
    Print {
        /// 文本内容
        text: String,
    },

    /// 注册一个选项
    ///
    /// 执行时只把嵌套内容的地址记入选项表，随后越过继续；
    /// 分支只在玩家选中该选项时发生。
    Choice {
        /// 选项 ID（一次暂停的待决选项中唯一）
        id: String,
        /// 选中后执行的内容
        body: Content,
    },

    /// 无条件跳转
    ///
    /// 目标是绝对地址，按原样替换当前地址。
    Goto {
        /// 跳转目标
        target: Address,
    },

    /// 条件分支
    ///
    /// 条件为真时进入嵌套内容，执行完毕后落在 If 之后一条指令；
    /// 条件为假时整段嵌套内容被跳过。
    If {
        /// 分支条件
        condition: Condition,
        /// 条件为真时执行的内容
        body: Content,
    },
}

impl Command {
    /// 嵌套内容（仅 Choice / If 持有）
    pub fn body(&self) -> Option<&Content> {
        match self {
            Self::Choice { body, .. } | Self::If { body, .. } => Some(body),
            Self::Print { .. } | Self::Goto { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_op_is_ordering() {
        assert!(CompareOp::LessThan.is_ordering());
        assert!(CompareOp::AtMost.is_ordering());
        assert!(CompareOp::GreaterThan.is_ordering());
        assert!(CompareOp::AtLeast.is_ordering());
        assert!(!CompareOp::Equals.is_ordering());
        assert!(!CompareOp::NotEquals.is_ordering());
    }

    #[test]
    fn test_command_body() {
        let print = Command::Print {
            text: "hi".to_string(),
        };
        assert!(print.body().is_none());

        let goto = Command::Goto {
            target: Address::start(),
        };
        assert!(goto.body().is_none());

        let choice = Command::Choice {
            id: "begin".to_string(),
            body: Content::new(vec![print.clone()]),
        };
        assert_eq!(choice.body().map(Content::len), Some(1));

        let branch = Command::If {
            condition: Condition {
                var: "flag".to_string(),
                op: CompareOp::Equals,
                comparand: Comparand::Literal(Value::Bool(true)),
            },
            body: Content::default(),
        };
        assert_eq!(branch.body().map(Content::len), Some(0));
    }

    #[test]
    fn test_command_serialization() {
        let command = Command::If {
            condition: Condition {
                var: "gold".to_string(),
                op: CompareOp::AtLeast,
                comparand: Comparand::Var("price".to_string()),
            },
            body: Content::new(vec![Command::Print {
                text: "deal".to_string(),
            }]),
        };

        let json = serde_json::to_string(&command).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(command, deserialized);
    }
}
