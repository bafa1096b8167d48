//! # Runtime 模块
//!
//! 执行引擎相关功能。
//!
//! ## 模块结构
//!
//! - [`engine`]：StoryRuntime 执行引擎
//! - [`resolver`]：地址解析
//! - [`condition`]：条件求值

pub mod condition;
pub mod engine;
pub mod resolver;

pub use engine::StoryRuntime;
