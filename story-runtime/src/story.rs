//! # Story 模块
//!
//! 故事树数据模型。
//!
//! ## 设计说明
//!
//! - 加载后不可变：树结构和指令索引在整个执行期间保持稳定
//! - 单一所有权的容器类型构成严格层级，结构上不存在环和共享子块
//! - 变量表由 Story 持有，修改只经由引擎进行（当前指令集不含写入，
//!   作为未来扩展点保留）

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::value::Value;

/// 指令序列
///
/// 故事执行的基本单位，也是引擎作用域的单位。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Content {
    /// 指令列表
    pub commands: Vec<Command>,
}

impl Content {
    /// 创建指令序列
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// 获取指定索引的指令
    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    /// 指令数量
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// 命名块
///
/// 持有一个 [`Content`] 和若干命名子块。子块名在兄弟之间唯一
/// （由映射的键保证）。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    /// 块的指令序列
    pub content: Content,
    /// 命名子块
    pub children: BTreeMap<String, Block>,
}

impl Block {
    /// 创建没有子块的块
    pub fn new(content: Content) -> Self {
        Self {
            content,
            children: BTreeMap::new(),
        }
    }

    /// 添加命名子块（构造故事树用）
    pub fn with_child(mut self, name: impl Into<String>, child: Block) -> Self {
        self.children.insert(name.into(), child);
        self
    }

    /// 查找命名子块
    pub fn child(&self, name: &str) -> Option<&Block> {
        self.children.get(name)
    }
}

/// 完整的故事定义
///
/// 根块加变量表，由加载器构造一次。加载器的契约见仓库文档：
/// 兄弟块名唯一、嵌套内容所有权良构、Goto 目标有效
/// （可用 [`crate::diagnostic::analyze_story`] 在开局前检查）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// 根块
    pub root: Block,
    /// 变量表：变量名 -> 当前值
    pub vars: BTreeMap<String, Value>,
}

impl Story {
    /// 创建没有变量的故事
    pub fn new(root: Block) -> Self {
        Self {
            root,
            vars: BTreeMap::new(),
        }
    }

    /// 添加初始变量（构造故事用）
    pub fn with_var(mut self, name: impl Into<String>, value: Value) -> Self {
        self.vars.insert(name.into(), value);
        self
    }

    /// 查找变量
    pub fn var(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_indexing() {
        let content = Content::new(vec![
            Command::Print {
                text: "a".to_string(),
            },
            Command::Print {
                text: "b".to_string(),
            },
        ]);

        assert_eq!(content.len(), 2);
        assert!(!content.is_empty());
        assert!(matches!(content.get(0), Some(Command::Print { text }) if text == "a"));
        assert!(content.get(2).is_none());
    }

    #[test]
    fn test_block_children() {
        let block = Block::new(Content::default())
            .with_child("left", Block::default())
            .with_child("right", Block::default());

        assert!(block.child("left").is_some());
        assert!(block.child("right").is_some());
        assert!(block.child("missing").is_none());
    }

    #[test]
    fn test_story_vars() {
        let story = Story::new(Block::default())
            .with_var("gold", Value::Int(10))
            .with_var("name", Value::Text("hero".to_string()));

        assert_eq!(story.var("gold"), Some(&Value::Int(10)));
        assert!(story.var("missing").is_none());
    }

    #[test]
    fn test_story_serialization() {
        let story = Story::new(Block::new(Content::new(vec![Command::Print {
            text: "hi".to_string(),
        }])))
        .with_var("flag", Value::Bool(true));

        let json = serde_json::to_string(&story).unwrap();
        let deserialized: Story = serde_json::from_str(&json).unwrap();
        assert_eq!(story, deserialized);
    }
}
