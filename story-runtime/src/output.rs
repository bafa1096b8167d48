//! # Output 模块
//!
//! 引擎的文本输出通道。
//!
//! ## 设计说明
//!
//! 引擎本身不做任何 IO：Print 指令的文本写入调用方注入的 [`TextSink`]，
//! 由宿主决定文本去向（控制台、界面、测试中的缓冲区）。
//! 这是引擎对玩家唯一可见的输出，顺序与 Print 指令的执行顺序严格一致。

/// 文本输出接收器
pub trait TextSink {
    /// 输出一行文本
    fn print(&mut self, text: &str);
}

/// 缓冲输出：测试和播放记录用
impl TextSink for Vec<String> {
    fn print(&mut self, text: &str) {
        self.push(text.to_string());
    }
}
