//! # State 模块
//!
//! 引擎的可序列化运行时状态。
//!
//! ## 设计原则
//!
//! - 所有状态必须**显式建模**
//! - 所有状态必须**可序列化**
//! - 不允许隐式全局状态

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::address::Address;

/// 运行时状态
///
/// 引擎**唯一的可变状态**：当前地址加待决选项表。
///
/// 选项表是瞬态的：每次故事产生新的选择点时重建，
/// 玩家做出决定时整表清空（一次暂停只做一个决定）。
/// 表中存的都是绝对地址，指向对应 Choice 的嵌套内容第 0 条指令。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeState {
    /// 当前执行地址
    pub address: Address,

    /// 待决选项：选项 ID -> 选中后恢复执行的地址
    ///
    /// BTreeMap 保证宿主列出选项时顺序确定。
    pub choices: BTreeMap<String, Address>,
}

impl RuntimeState {
    /// 创建指向故事开头的状态
    pub fn new() -> Self {
        Self::at(Address::start())
    }

    /// 创建从指定地址开始的状态
    pub fn at(address: Address) -> Self {
        Self {
            address,
            choices: BTreeMap::new(),
        }
    }

    /// 是否有待决选项
    pub fn has_open_choices(&self) -> bool {
        !self.choices.is_empty()
    }

    /// 清空选项表
    pub fn clear_choices(&mut self) {
        self.choices.clear();
    }
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self::new()
    }
}
