//! # Engine 模块
//!
//! 故事执行引擎。
//!
//! ## 执行模型
//!
//! ```text
//! loop {
//!     while runtime.step(&mut sink)? {}
//!     // 引擎停下：有待决选项则让玩家选择，否则故事结束
//! }
//! ```
//!
//! 1. 解析当前地址得到指令（见 [`super::resolver`]）
//! 2. 按指令种类更新状态（见 [`StoryRuntime::step`] 各分支）
//! 3. 内容耗尽时回到外层作用域；没有外层作用域即终止
//!
//! 引擎是单线程的同步状态机，step / choose 之间的暂停是协作式的：
//! 引擎从不阻塞等待输入，随时把控制权交还宿主。

use std::collections::BTreeMap;

use crate::address::Address;
use crate::command::Command;
use crate::diagnostic::Diagnostic;
use crate::error::{RuntimeError, RuntimeResult};
use crate::output::TextSink;
use crate::runtime::{condition, resolver};
use crate::state::RuntimeState;
use crate::story::Story;
use crate::value::Value;

/// 故事执行引擎
///
/// 持有故事定义和唯一的可变运行时状态，暴露 `step` / `choose`。
///
/// # 使用示例
///
/// ```ignore
/// let mut runtime = StoryRuntime::new(story);
/// let mut sink: Vec<String> = Vec::new();
///
/// while runtime.step(&mut sink)? {}
///
/// if runtime.state().has_open_choices() {
///     runtime.choose("begin")?;
/// }
/// ```
pub struct StoryRuntime {
    /// 故事定义（执行期间只读，变量修改除外）
    story: Story,
    /// 运行时状态
    state: RuntimeState,
    /// 执行中记录的可恢复异常（如重复的选项 ID）
    warnings: Vec<Diagnostic>,
}

impl StoryRuntime {
    /// 创建新的引擎实例，从故事开头执行
    pub fn new(story: Story) -> Self {
        Self::restore(story, RuntimeState::new())
    }

    /// 从指定状态恢复引擎
    ///
    /// # 参数
    ///
    /// - `story`: 故事定义（必须与状态产生时相同）
    /// - `state`: 之前通过 [`StoryRuntime::state`] 取得的状态
    pub fn restore(story: Story, state: RuntimeState) -> Self {
        Self {
            story,
            state,
            warnings: Vec::new(),
        }
    }

    /// 执行一条指令
    ///
    /// 返回 `Ok(true)` 表示还有后续，`Ok(false)` 表示故事到达终态
    /// （没有外层作用域且没有剩余指令）。终态配合空选项表即正常结束。
    ///
    /// Print 文本写入 `sink`，这是引擎对玩家唯一可见的输出。
    pub fn step(&mut self, sink: &mut dyn TextSink) -> RuntimeResult<bool> {
        let Some(command) = resolver::resolve(&self.story, &self.state.address)? else {
            // 当前内容执行完毕：回到外层作用域，或者终止
            return Ok(self.state.address.exit_scope());
        };

        match command {
            Command::Print { text } => {
                sink.print(text);
                self.state.address.advance();
            }

            Command::Choice { id, .. } => {
                // 记录选中后恢复执行的地址：该选项嵌套内容的第 0 条指令
                let mut resume = self.state.address.clone();
                resume.enter_nested();

                if self.state.choices.contains_key(id) {
                    // 重复注册：保留先前的映射，记录异常后继续
                    self.warnings.push(Diagnostic::warn(format!(
                        "选项 ID '{id}' 已被使用，保留先前的映射"
                    )));
                } else {
                    self.state.choices.insert(id.clone(), resume);
                }

                // 执行越过 Choice 继续；分支只在玩家选中时发生
                self.state.address.advance();
            }

            Command::Goto { target } => {
                // 目标地址按原样使用，不改写任何字段
                self.state.address = target.clone();
            }

            Command::If { condition, .. } => {
                if condition::evaluate(&self.story, condition)? {
                    // 进入嵌套内容；执行完毕后经作用域回退落在 If 之后
                    self.state.address.enter_nested();
                } else {
                    // 整段嵌套内容被跳过
                    self.state.address.advance();
                }
            }
        }

        Ok(true)
    }

    /// 应用玩家的选择
    ///
    /// 未知 ID 返回 [`RuntimeError::UnknownChoice`] 且不改变任何状态，
    /// 调用方可以重新提示。命中时用记录的地址替换当前地址，
    /// 并清空整张选项表：一次暂停只做一个决定，其余待决选项全部作废。
    pub fn choose(&mut self, id: &str) -> RuntimeResult<()> {
        let Some(resume) = self.state.choices.get(id) else {
            return Err(RuntimeError::UnknownChoice { id: id.to_string() });
        };

        self.state.address = resume.clone();
        self.state.clear_choices();
        Ok(())
    }

    /// 获取当前状态（可序列化）
    pub fn state(&self) -> &RuntimeState {
        &self.state
    }

    /// 恢复状态
    ///
    /// 调用方需要确保状态产生于同一个故事。
    pub fn restore_state(&mut self, state: RuntimeState) {
        self.state = state;
    }

    /// 待决选项表
    pub fn choices(&self) -> &BTreeMap<String, Address> {
        &self.state.choices
    }

    /// 故事定义
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// 设置故事变量
    ///
    /// 当前指令集不包含变量写入，修改只经由引擎进行（未来扩展点）。
    pub fn set_var(&mut self, name: impl Into<String>, value: Value) {
        self.story.vars.insert(name.into(), value);
    }

    /// 查找故事变量
    pub fn get_var(&self, name: &str) -> Option<&Value> {
        self.story.var(name)
    }

    /// 取走执行中记录的异常
    pub fn take_warnings(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.warnings)
    }
}
