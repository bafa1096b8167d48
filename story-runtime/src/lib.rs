//! # Story Runtime
//!
//! 分支叙事执行引擎的核心运行时库。
//!
//! ## 架构概述
//!
//! `story-runtime` 是纯逻辑核心，不依赖任何 IO 或渲染引擎。
//! 它解释一棵树状的故事定义（命名块，每块持有一个有序指令列表），
//! 以显式、可序列化的 [`Address`] 作为程序计数器驱动执行，
//! 取代隐式调用栈：
//!
//! ```text
//! Host                          Runtime
//!   │                              │
//!   │──── step(sink) ────────────►│  解析地址，执行一条指令
//!   │◄─── bool（是否继续） ───────│  Print 文本写入注入的 sink
//!   │                              │
//!   │──── choose(id) ────────────►│  应用玩家选择
//!   │◄─── Result ────────────────│
//! ```
//!
//! 引擎停下（`step` 返回 `false`）时，宿主检查待决选项表：
//! 非空则让玩家选择，为空则故事正常结束。
//!
//! ## 核心类型
//!
//! - [`Story`]：故事树（块层级 + 变量表）
//! - [`Command`]：四种指令（Print / Choice / Goto / If）
//! - [`Address`]：显式程序计数器（块路径 + 作用域栈 + 指令索引）
//! - [`StoryRuntime`]：执行引擎，暴露 step / choose
//! - [`TextSink`]：注入的文本输出通道
//!
//! ## 模块结构
//!
//! - [`value`]：变量值定义
//! - [`story`]：故事树数据模型
//! - [`command`]：指令定义
//! - [`address`]：地址定义
//! - [`state`]：可序列化运行时状态
//! - [`error`]：错误类型定义
//! - [`output`]：文本输出通道
//! - [`diagnostic`]：故事静态检查
//! - [`runtime`]：执行引擎

pub mod address;
pub mod command;
pub mod diagnostic;
pub mod error;
pub mod output;
pub mod runtime;
pub mod state;
pub mod story;
pub mod value;

// 重导出核心类型
pub use address::Address;
pub use command::{Command, Comparand, CompareOp, Condition};
pub use diagnostic::{Diagnostic, DiagnosticLevel, analyze_story};
pub use error::{RuntimeError, RuntimeResult};
pub use output::TextSink;
pub use runtime::StoryRuntime;
pub use state::RuntimeState;
pub use story::{Block, Content, Story};
pub use value::Value;
