//! # Address 模块
//!
//! 定义故事树中的可寻址坐标。
//!
//! ## 设计说明
//!
//! Address 是显式的、可序列化的"程序计数器"，取代调用栈：
//!
//! - `block_path`：从根块出发、逐级下降的块名序列（从前往后消费）
//! - `content_path`：作用域栈，每项记录一层嵌套内容在其上一层中的指令索引；
//!   内容执行完毕时据此回到上一层（见 [`Address::exit_scope`]）
//! - `instr_num`：当前内容中的指令索引
//!
//! Address 是值类型：被复制、存入选项表，从不被共享引用。
//! 地址始终是绝对地址（`block_path` 自根块起算），选项表中不存相对地址。

use serde::{Deserialize, Serialize};

/// 故事树中的执行地址
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    /// 从根块出发的块名路径
    pub block_path: Vec<String>,
    /// 作用域栈：每层嵌套内容在上一层中的指令索引
    pub content_path: Vec<usize>,
    /// 当前内容中的指令索引
    pub instr_num: usize,
}

impl Address {
    /// 创建指向根块第一条指令的地址
    pub fn start() -> Self {
        Self::default()
    }

    /// 创建指向指定块第一条指令的地址
    pub fn in_block<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            block_path: path.into_iter().map(Into::into).collect(),
            content_path: Vec::new(),
            instr_num: 0,
        }
    }

    /// 前进到下一条指令
    pub fn advance(&mut self) {
        self.instr_num += 1;
    }

    /// 进入当前指令持有的嵌套内容
    ///
    /// 把当前指令索引压入作用域栈，指令索引归零。
    /// Choice 注册恢复地址和 If 条件为真时都走这条路径。
    pub fn enter_nested(&mut self) {
        self.content_path.push(self.instr_num);
        self.instr_num = 0;
    }

    /// 当前内容执行完毕时回到上一层作用域
    ///
    /// 弹出栈顶的恢复点，把 `instr_num` 设为持有该嵌套内容的指令之后一条。
    /// 栈为空时返回 `false`，表示没有外层作用域（故事到达终态）。
    pub fn exit_scope(&mut self) -> bool {
        match self.content_path.pop() {
            Some(resume) => {
                self.instr_num = resume + 1;
                true
            }
            None => false,
        }
    }

    /// 当前嵌套深度
    pub fn depth(&self) -> usize {
        self.content_path.len()
    }
}
