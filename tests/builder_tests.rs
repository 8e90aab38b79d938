use serde_json::json;
use slack_reporter::message::{Block, ButtonSpec, ButtonStyle, MessageBuilder, TextObject};

/// Tests for the message builder and the document model's serialization.
/// These verify block ordering, the table expansion rules, and the exact
/// wire shapes Slack expects.

#[test]
fn test_blocks_preserve_append_order() {
    let message = MessageBuilder::new()
        .add_header("One")
        .add_section("Two")
        .add_divider()
        .add_context(["Three"])
        .add_plain_section("Four")
        .build();

    let types: Vec<&str> = message
        .blocks
        .iter()
        .map(|block| match block {
            Block::Header { .. } => "header",
            Block::Section { .. } => "section",
            Block::Divider => "divider",
            Block::Context { .. } => "context",
            Block::Actions { .. } => "actions",
        })
        .collect();

    assert_eq!(
        types,
        vec!["header", "section", "divider", "context", "section"],
        "blocks should render in exactly the order they were appended"
    );
}

#[test]
fn test_header_serializes_as_plain_text_with_emoji() {
    let message = MessageBuilder::new().add_header("Build finished").build();

    let value = serde_json::to_value(&message).expect("message should serialize");
    assert_eq!(
        value["blocks"][0],
        json!({
            "type": "header",
            "text": { "type": "plain_text", "text": "Build finished", "emoji": true }
        }),
        "header blocks should wrap their text as emoji-enabled plain text"
    );
}

#[test]
fn test_section_kinds() {
    let message = MessageBuilder::new()
        .add_section("*bold*")
        .add_plain_section("plain")
        .build();

    let value = serde_json::to_value(&message).expect("message should serialize");
    assert_eq!(
        value["blocks"][0]["text"],
        json!({ "type": "mrkdwn", "text": "*bold*" }),
        "add_section should produce mrkdwn text"
    );
    assert_eq!(
        value["blocks"][1]["text"],
        json!({ "type": "plain_text", "text": "plain" }),
        "add_plain_section should produce plain text without an emoji flag"
    );
}

#[test]
fn test_context_elements_keep_argument_order() {
    let message = MessageBuilder::new()
        .add_context(["first", "second", "third"])
        .build();

    let value = serde_json::to_value(&message).expect("message should serialize");
    let elements = value["blocks"][0]["elements"]
        .as_array()
        .expect("context block should carry elements");

    assert_eq!(elements.len(), 3, "one element per context text");
    assert_eq!(elements[0]["text"], "first");
    assert_eq!(elements[1]["text"], "second");
    assert_eq!(elements[2]["text"], "third");
    assert!(
        elements.iter().all(|e| e["type"] == "mrkdwn"),
        "context elements should all be mrkdwn objects"
    );
}

#[test]
fn test_header_then_buttons_yields_two_blocks() {
    // One add_buttons call must produce a single actions block, not one
    // block per button.
    let message = MessageBuilder::new()
        .add_header("X")
        .add_buttons([
            ButtonSpec::new("A").url("u1"),
            ButtonSpec::new("B").url("u2"),
        ])
        .build();

    assert_eq!(message.blocks.len(), 2, "expected header + one actions block");

    let value = serde_json::to_value(&message).expect("message should serialize");
    let elements = value["blocks"][1]["elements"]
        .as_array()
        .expect("actions block should carry elements");
    assert_eq!(elements.len(), 2, "both buttons should share the actions block");
    assert_eq!(elements[0]["text"]["text"], "A");
    assert_eq!(elements[0]["url"], "u1");
    assert_eq!(elements[1]["text"]["text"], "B");
    assert_eq!(elements[1]["url"], "u2");
}

#[test]
fn test_repeated_add_button_yields_separate_actions_blocks() {
    let message = MessageBuilder::new()
        .add_button("A", "u1", ButtonStyle::Primary)
        .add_button("B", "u2", ButtonStyle::Default)
        .build();

    assert_eq!(
        message.blocks.len(),
        2,
        "each add_button call should append its own actions block"
    );
}

#[test]
fn test_button_style_default_is_omitted_from_payload() {
    let message = MessageBuilder::new()
        .add_buttons([
            ButtonSpec::new("Styled").url("u").style(ButtonStyle::Danger),
            ButtonSpec::new("Unstyled").url("u"),
        ])
        .build();

    let value = serde_json::to_value(&message).expect("message should serialize");
    let elements = value["blocks"][0]["elements"].as_array().unwrap();

    assert_eq!(elements[0]["style"], "danger");
    assert!(
        elements[1].get("style").is_none(),
        "default style should not appear on the wire"
    );
    assert!(
        elements[1].get("action_id").is_none(),
        "unset optional button fields should be omitted, not null"
    );
}

#[test]
fn test_table_expansion_block_count() {
    let headers = ["Name", "Status"];
    let rows = vec![
        vec!["api".to_string(), "ok".to_string()],
        vec!["worker".to_string(), "ok".to_string()],
        vec!["db".to_string(), "degraded".to_string()],
    ];

    let message = MessageBuilder::new().add_table(&headers, &rows).build();

    // Header fields-section + divider, then per row a fields-section +
    // divider.
    assert_eq!(
        message.blocks.len(),
        2 + 2 * rows.len(),
        "table should expand to alternating section/divider pairs"
    );

    let value = serde_json::to_value(&message).expect("message should serialize");
    let header_fields = value["blocks"][0]["fields"].as_array().unwrap();
    assert_eq!(header_fields[0]["text"], "*Name*", "headers render bold");
    assert_eq!(header_fields[1]["text"], "*Status*");
    assert_eq!(value["blocks"][1]["type"], "divider");
    assert_eq!(value["blocks"][2]["fields"][0]["text"], "api");
    assert_eq!(value["blocks"][3]["type"], "divider");
}

#[test]
fn test_table_rows_truncate_to_header_width() {
    let headers = ["A", "B"];
    let rows = vec![
        vec!["1".to_string(), "2".to_string(), "3".to_string()],
        vec!["only".to_string()],
    ];

    let message = MessageBuilder::new().add_table(&headers, &rows).build();
    let value = serde_json::to_value(&message).expect("message should serialize");

    let long_row = value["blocks"][2]["fields"].as_array().unwrap();
    assert_eq!(
        long_row.len(),
        2,
        "rows longer than the header should be truncated to the header width"
    );

    let short_row = value["blocks"][4]["fields"].as_array().unwrap();
    assert_eq!(
        short_row.len(),
        1,
        "rows shorter than the header should keep the cells they have"
    );
}

#[test]
fn test_scalar_setters_last_write_wins() {
    let message = MessageBuilder::with_channel("C1")
        .channel("C2")
        .text("first")
        .text("second")
        .thread_ts("123.456")
        .build();

    assert_eq!(message.channel.as_deref(), Some("C2"));
    assert_eq!(message.text.as_deref(), Some("second"));
    assert_eq!(message.thread_ts.as_deref(), Some("123.456"));
}

#[test]
fn test_custom_block_escape_hatch() {
    let message = MessageBuilder::new()
        .add_custom_block(Block::Section {
            text: Some(TextObject::mrkdwn("custom")),
            fields: None,
            accessory: None,
            block_id: Some("my_block".to_string()),
        })
        .build();

    let value = serde_json::to_value(&message).expect("message should serialize");
    assert_eq!(value["blocks"][0]["block_id"], "my_block");
    assert!(
        value["blocks"][0].get("fields").is_none(),
        "unpopulated section fields should be omitted"
    );
}

#[test]
fn test_serialization_is_deterministic() {
    let build = || {
        MessageBuilder::with_channel("C123")
            .text("fallback")
            .add_header("Report")
            .add_section("body")
            .add_divider()
            .build()
    };

    let first = serde_json::to_string(&build()).expect("message should serialize");
    let second = serde_json::to_string(&build()).expect("message should serialize");
    assert_eq!(
        first, second,
        "serializing the same document twice should be byte-identical"
    );
}

#[test]
fn test_envelope_omits_unset_fields() {
    let message = MessageBuilder::new().add_divider().build();
    let value = serde_json::to_value(&message).expect("message should serialize");

    assert!(value.get("channel").is_none(), "unset channel should be omitted");
    assert!(value.get("text").is_none(), "unset text should be omitted");
    assert!(
        value.get("thread_ts").is_none(),
        "unset thread_ts should be omitted"
    );
    assert_eq!(value["blocks"], json!([{ "type": "divider" }]));
}
