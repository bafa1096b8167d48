//! # 控制台宿主
//!
//! 驱动 story-runtime 的最小展示层：
//! 反复 `step` 直到引擎停下，列出待决选项，读取玩家输入后 `choose`。
//! 未知选项只重新提示，不消耗引擎状态。
//!
//! 故事加载器是外部协作者，这里直接在代码里构造内置演示故事。

use std::io::{self, BufRead, Write};

use anyhow::Result;
use story_runtime::{
    Address, Block, Command, Comparand, CompareOp, Condition, Content, Story, StoryRuntime,
    TextSink, Value,
};

/// 标准输出 sink
struct StdoutSink;

impl TextSink for StdoutSink {
    fn print(&mut self, text: &str) {
        println!("{text}");
    }
}

fn print(text: &str) -> Command {
    Command::Print {
        text: text.to_string(),
    }
}

/// 构造内置演示故事
///
/// 根块打印问候并提供 "begin" 选项；选中后跳转到 new_block，
/// 那里演示 If 指令。
fn demo_story() -> Story {
    let begin_body = Content::new(vec![
        print("You started the game!"),
        Command::Goto {
            target: Address::in_block(["new_block"]),
        },
    ]);

    let new_block = Block::new(Content::new(vec![
        print("You have reached the end of the game!"),
        print("No, wait, we need to test if commands first!"),
        Command::If {
            condition: Condition {
                var: "test_var".to_string(),
                op: CompareOp::Equals,
                comparand: Comparand::Literal(Value::Int(0)),
            },
            body: Content::new(vec![print("The 'if' worked!")]),
        },
    ]));

    let root = Block::new(Content::new(vec![
        print("Hello, World!"),
        Command::Choice {
            id: "begin".to_string(),
            body: begin_body,
        },
    ]))
    .with_child("new_block", new_block);

    Story::new(root).with_var("test_var", Value::Int(0))
}

fn main() -> Result<()> {
    let story = demo_story();

    // 开局前静态检查，问题打到 stderr
    for diagnostic in story_runtime::analyze_story(&story) {
        eprintln!("{diagnostic}");
    }

    let mut runtime = StoryRuntime::new(story);
    let mut sink = StdoutSink;
    let stdin = io::stdin();

    loop {
        // 执行直到引擎停下
        while runtime.step(&mut sink)? {}

        for warning in runtime.take_warnings() {
            eprintln!("{warning}");
        }

        if runtime.choices().is_empty() {
            println!();
            println!(
                "Oh, it looks like you have no choices left. That's the end of the story then! Goodbye."
            );
            return Ok(());
        }

        // 列出待决选项，读取输入直到选择有效
        loop {
            println!();
            println!("Valid choices are...");
            for id in runtime.choices().keys() {
                println!("{id}");
            }
            println!();
            println!("Now input your choice!");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(()); // EOF
            }
            let choice = line.trim();

            match runtime.choose(choice) {
                Ok(()) => {
                    println!("--------------------------------------------------");
                    println!("You chose: {choice}");
                    println!();
                    break;
                }
                Err(err) => println!("{err}"),
            }
        }
    }
}
