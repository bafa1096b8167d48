//! # Condition 模块
//!
//! If 指令的条件求值。
//!
//! ## 求值规则
//!
//! - 测试变量和变量形式的比较对象都在故事变量表中解析，未定义是致命错误
//! - 比较双方必须同标签，不做隐式转换
//! - Int 支持全部六种运算符；Text 只支持 Equals / NotEquals（字典序相等）
//! - Bool 是无运算符的真值测试：不读运算符和比较对象

use crate::command::{CompareOp, Comparand, Condition};
use crate::error::{RuntimeError, RuntimeResult};
use crate::story::Story;
use crate::value::Value;

/// 求值一个条件
pub fn evaluate(story: &Story, condition: &Condition) -> RuntimeResult<bool> {
    let test = story
        .var(&condition.var)
        .ok_or_else(|| RuntimeError::UndefinedVariable {
            name: condition.var.clone(),
        })?;

    // Bool：真值测试，到此为止
    if let Value::Bool(flag) = test {
        return Ok(*flag);
    }

    let comparand = match &condition.comparand {
        Comparand::Literal(value) => value,
        Comparand::Var(name) => {
            story
                .var(name)
                .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() })?
        }
    };

    match (test, comparand) {
        (Value::Int(a), Value::Int(b)) => Ok(compare_int(*a, *b, condition.op)),

        (Value::Text(a), Value::Text(b)) => match condition.op {
            CompareOp::Equals => Ok(a == b),
            CompareOp::NotEquals => Ok(a != b),
            _ => Err(RuntimeError::TypeMismatch {
                expected: "int".to_string(),
                actual: "text".to_string(),
            }),
        },

        (a, b) => Err(RuntimeError::TypeMismatch {
            expected: a.type_name().to_string(),
            actual: b.type_name().to_string(),
        }),
    }
}

fn compare_int(a: i64, b: i64, op: CompareOp) -> bool {
    match op {
        CompareOp::Equals => a == b,
        CompareOp::NotEquals => a != b,
        CompareOp::LessThan => a < b,
        CompareOp::AtMost => a <= b,
        CompareOp::GreaterThan => a > b,
        CompareOp::AtLeast => a >= b,
    }
}
