//! # Resolver 模块
//!
//! 地址解析：把 [`Address`] 解析为故事树中的具体指令。
//!
//! ## 契约
//!
//! - 纯函数：不修改 Address，相同输入得到相同结果
//! - 块路径下降时块名缺失是致命错误（树构造不一致），不是内容结束
//! - `content_path` 条目或 `instr_num` 越界返回 `Ok(None)`，
//!   这是正常的作用域结束信号

use crate::address::Address;
use crate::command::Command;
use crate::error::{RuntimeError, RuntimeResult};
use crate::story::Story;

/// 解析地址处的指令
///
/// 返回 `Ok(None)` 表示当前内容已执行完毕（区别于配置错误）。
pub fn resolve<'a>(story: &'a Story, addr: &Address) -> RuntimeResult<Option<&'a Command>> {
    // 1. 沿 block_path 从根块逐级下降
    let mut block = &story.root;
    for name in &addr.block_path {
        block = block
            .child(name)
            .ok_or_else(|| RuntimeError::BlockNotFound { name: name.clone() })?;
    }

    // 2. 沿 content_path 进入嵌套内容
    let mut content = &block.content;
    for &index in &addr.content_path {
        let Some(command) = content.get(index) else {
            return Ok(None);
        };
        // 只有 Choice / If 持有嵌套内容
        let Some(body) = command.body() else {
            return Ok(None);
        };
        content = body;
    }

    // 3. 取出当前指令
    Ok(content.get(addr.instr_num))
}
