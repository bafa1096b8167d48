//! # 诊断模块
//!
//! 提供故事静态检查和诊断 API，不依赖 IO 或引擎。
//!
//! ## 设计原则
//!
//! - 纯函数 API，可在无 IO 环境下运行
//! - 诊断分级：Error（必须修复）、Warn（建议修复）、Info（信息提示）
//! - 检查加载器契约：Goto 目标块存在、条件引用的变量已定义、
//!   同一内容中选项 ID 不重复
//!
//! 引擎在执行中记录的可恢复异常（重复注册选项 ID）复用同一套类型。

use std::collections::HashSet;

use crate::command::{Command, Comparand, Condition};
use crate::story::{Block, Content, Story};
use crate::value::Value;

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticLevel {
    /// 信息提示
    Info,
    /// 警告（建议修复）
    Warn,
    /// 错误（必须修复）
    Error,
}

impl std::fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// 诊断条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 诊断消息
    pub message: String,
    /// 出问题的位置（块路径，如 `start.new_block`），可选
    pub context: Option<String>,
}

impl Diagnostic {
    /// 创建错误诊断
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
            context: None,
        }
    }

    /// 创建警告诊断
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warn,
            message: message.into(),
            context: None,
        }
    }

    /// 创建信息诊断
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            message: message.into(),
            context: None,
        }
    }

    /// 设置位置
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] ", self.level)?;
        if let Some(context) = &self.context {
            write!(f, "{}: ", context)?;
        }
        write!(f, "{}", self.message)
    }
}

/// 静态检查整个故事
///
/// 在开局前验证加载器契约，返回发现的所有问题。
/// 返回空列表表示故事良构。
pub fn analyze_story(story: &Story) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut path = Vec::new();
    analyze_block(story, &story.root, &mut path, &mut diagnostics);
    diagnostics
}

fn analyze_block(
    story: &Story,
    block: &Block,
    path: &mut Vec<String>,
    out: &mut Vec<Diagnostic>,
) {
    analyze_content(story, &block.content, path, out);

    for (name, child) in &block.children {
        path.push(name.clone());
        analyze_block(story, child, path, out);
        path.pop();
    }
}

fn analyze_content(
    story: &Story,
    content: &Content,
    path: &mut Vec<String>,
    out: &mut Vec<Diagnostic>,
) {
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for command in &content.commands {
        match command {
            Command::Print { .. } => {}

            Command::Choice { id, body } => {
                if !seen_ids.insert(id.as_str()) {
                    out.push(
                        Diagnostic::warn(format!("同一内容中重复的选项 ID '{id}'"))
                            .with_context(block_context(path)),
                    );
                }
                analyze_content(story, body, path, out);
            }

            Command::Goto { target } => {
                // 只验证块路径；指令索引越界是合法的作用域结束信号
                let mut block = &story.root;
                for name in &target.block_path {
                    match block.child(name) {
                        Some(child) => block = child,
                        None => {
                            out.push(
                                Diagnostic::error(format!("跳转目标块 '{name}' 不存在"))
                                    .with_context(block_context(path)),
                            );
                            break;
                        }
                    }
                }
            }

            Command::If { condition, body } => {
                check_condition(story, condition, path, out);
                analyze_content(story, body, path, out);
            }
        }
    }
}

fn check_condition(
    story: &Story,
    condition: &Condition,
    path: &[String],
    out: &mut Vec<Diagnostic>,
) {
    let Some(test) = story.var(&condition.var) else {
        out.push(
            Diagnostic::error(format!("条件引用了未定义的变量 '{}'", condition.var))
                .with_context(block_context(path)),
        );
        return;
    };

    // Bool 条件是真值测试，不读运算符和比较对象
    if matches!(test, Value::Bool(_)) {
        return;
    }

    let comparand = match &condition.comparand {
        Comparand::Literal(value) => value,
        Comparand::Var(name) => match story.var(name) {
            Some(value) => value,
            None => {
                out.push(
                    Diagnostic::error(format!("条件引用了未定义的变量 '{name}'"))
                        .with_context(block_context(path)),
                );
                return;
            }
        },
    };

    if !test.same_type(comparand) {
        out.push(
            Diagnostic::error(format!(
                "条件比较双方类型不一致：{} 和 {}",
                test.type_name(),
                comparand.type_name()
            ))
            .with_context(block_context(path)),
        );
    } else if matches!(test, Value::Text(_)) && condition.op.is_ordering() {
        out.push(
            Diagnostic::error("text 类型不支持顺序比较".to_string())
                .with_context(block_context(path)),
        );
    }
}

/// 块路径的显示形式，根块显示为 `start`
fn block_context(path: &[String]) -> String {
    if path.is_empty() {
        "start".to_string()
    } else {
        format!("start.{}", path.join("."))
    }
}
