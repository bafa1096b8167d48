//! 端到端播放测试：内置演示故事的完整一局。
//!
//! 根块打印问候并提供 "begin" 选项；选中后跳转到 new_block，
//! 那里再演示 If 指令。验证输出顺序、选择点和终态。

use story_runtime::{
    Address, Block, Command, Comparand, CompareOp, Condition, Content, Story, StoryRuntime, Value,
};

fn print(text: &str) -> Command {
    Command::Print {
        text: text.to_string(),
    }
}

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

fn drain(runtime: &mut StoryRuntime) -> Vec<String> {
    let mut sink: Vec<String> = Vec::new();
    while runtime.step(&mut sink).unwrap() {}
    sink
}

#[test]
fn test_demo_story_is_well_formed() {
    assert!(story_runtime::analyze_story(&demo_story()).is_empty());
}

#[test]
fn test_full_playthrough() {
    let mut runtime = StoryRuntime::new(demo_story());

    // 第一段：执行到选择点
    let opening = drain(&mut runtime);
    insta::assert_debug_snapshot!(opening, @r###"
    [
        "Hello, World!",
    ]
    "###);

    let choice_ids: Vec<&String> = runtime.choices().keys().collect();
    assert_eq!(choice_ids, vec!["begin"]);

    // 第二段：选中 "begin"，执行到故事结束
    runtime.choose("begin").unwrap();
    let rest = drain(&mut runtime);
    insta::assert_debug_snapshot!(rest, @r###"
    [
        "You started the game!",
        "You have reached the end of the game!",
        "No, wait, we need to test if commands first!",
        "The 'if' worked!",
    ]
    "###);

    // 终态：没有待决选项，正常结束
    assert!(!runtime.state().has_open_choices());
    assert!(runtime.take_warnings().is_empty());
}

#[test]
fn test_playthrough_with_false_condition() {
    let mut runtime = StoryRuntime::new(demo_story());
    runtime.set_var("test_var", Value::Int(1));

    drain(&mut runtime);
    runtime.choose("begin").unwrap();

    // 条件为假：嵌套内容整段跳过
    let rest = drain(&mut runtime);
    assert_eq!(
        rest,
        vec![
            "You started the game!",
            "You have reached the end of the game!",
            "No, wait, we need to test if commands first!",
        ]
    );
}

#[test]
fn test_state_survives_serialization_mid_story() {
    let mut runtime = StoryRuntime::new(demo_story());
    drain(&mut runtime);

    // 在选择点序列化状态，恢复后行为一致
    let json = serde_json::to_string(runtime.state()).unwrap();
    let state: story_runtime::RuntimeState = serde_json::from_str(&json).unwrap();

    let mut restored = StoryRuntime::restore(demo_story(), state);
    restored.choose("begin").unwrap();
    assert_eq!(drain(&mut restored).len(), 4);
}
