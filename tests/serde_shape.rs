#![cfg(feature = "serde")]

use ffmacro::parser;
use serde_json::json;

#[test]
fn test_command_json_shape() {
    let roots = parser("/기술시전 \"단체 질주\" <mo> <wait.2>").unwrap();
    assert_eq!(
        serde_json::to_value(&roots).unwrap(),
        json!([{
            "node": {
                "type": "command",
                "name": "기술시전",
                "args": [
                    { "type": "command-arg", "value": "단체 질주" },
                    { "type": "placeholder", "key": "mo" },
                ],
            },
            "wait": 2,
        }])
    );
}

#[test]
fn test_text_json_shape() {
    let roots = parser("저는 <me.모험가> 입니다\n<wait>").unwrap();
    assert_eq!(
        serde_json::to_value(&roots).unwrap(),
        json!([
            {
                "node": [
                    { "type": "text", "value": "저는 " },
                    { "type": "placeholder", "key": "me", "value": "모험가" },
                    { "type": "text", "value": " 입니다" },
                ],
                "wait": 0,
            },
            null,
        ])
    );
}

#[test]
fn test_token_json_shape() {
    let tokens = ffmacro::tokenize("/인사 <wait.3>");
    assert_eq!(
        serde_json::to_value(&tokens).unwrap(),
        json!([
            { "type": "command", "value": "인사", "raw": "/인사" },
            { "type": "whitespace", "raw": " " },
            { "type": "wait", "value": 3, "raw": "<wait.3>" },
        ])
    );
}
