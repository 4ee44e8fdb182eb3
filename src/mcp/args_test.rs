//! Tests for tool argument extraction

use serde_json::json;

use crate::mcp::args::{Arguments, ParamType, ToolArgs, ValidationError, input_schema};
use crate::mcp::tools::projects::CreateProjectArgs;
use crate::mcp::tools::tasks::{CreateTaskArgs, GetTasksArgs, UpdateTaskArgs};
use crate::test_support::arguments;

#[test]
fn test_required_number_accepts_integer_float_and_string() {
    for value in [json!(3), json!(3.0), json!("3")] {
        let raw = arguments(json!({ "project_id": value }));
        let project_id: i64 = Arguments::new(&raw).required("project_id").unwrap();
        assert_eq!(project_id, 3);
    }
}

#[test]
fn test_required_number_rejects_fractions_and_text() {
    for value in [json!(3.5), json!("three"), json!(true), json!(null)] {
        let raw = arguments(json!({ "project_id": value }));
        let err = Arguments::new(&raw).required::<i64>("project_id").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Missing {
                name: "project_id",
                expected: ParamType::Number
            }
        );
    }
}

#[test]
fn test_fixed_messages_per_parameter() {
    let raw = arguments(json!({}));
    let args = Arguments::new(&raw);

    assert_eq!(
        args.required::<i64>("project_id").unwrap_err().to_string(),
        "project_id is required and must be a number"
    );
    assert_eq!(
        args.required::<String>("title").unwrap_err().to_string(),
        "title is required and must be a string"
    );
    assert_eq!(
        args.required::<i64>("task_id").unwrap_err().to_string(),
        "task_id is required and must be a number"
    );
}

#[test]
fn test_optional_absent_or_null_is_none() {
    let raw = arguments(json!({ "done": null }));
    let args = Arguments::new(&raw);

    assert_eq!(args.optional::<bool>("done").unwrap(), None);
    assert_eq!(args.optional::<String>("title").unwrap(), None);
}

#[test]
fn test_optional_wrong_type_is_rejected() {
    let raw = arguments(json!({ "done": "yes" }));
    let err = Arguments::new(&raw).optional::<bool>("done").unwrap_err();

    assert_eq!(err.to_string(), "done must be a boolean");
}

#[test]
fn test_create_task_args_default_description_absent() {
    let args = CreateTaskArgs::parse(&arguments(json!({
        "project_id": 3,
        "title": "Buy milk"
    })))
    .unwrap();

    assert_eq!(
        args,
        CreateTaskArgs {
            project_id: 3,
            title: "Buy milk".to_string(),
            description: None,
        }
    );
}

#[test]
fn test_create_task_args_missing_title() {
    let err = CreateTaskArgs::parse(&arguments(json!({ "project_id": 3 }))).unwrap_err();
    assert_eq!(err.to_string(), "title is required and must be a string");
}

#[test]
fn test_update_set_contains_exactly_supplied_fields() {
    let cases = [
        (json!({"task_id": 1}), json!({})),
        (json!({"task_id": 1, "done": true}), json!({"done": true})),
        (json!({"task_id": 1, "title": "New"}), json!({"title": "New"})),
        (
            json!({"task_id": 1, "description": "", "done": false}),
            json!({"description": "", "done": false}),
        ),
        (
            json!({"task_id": 1, "title": "a", "description": "b", "done": true}),
            json!({"title": "a", "description": "b", "done": true}),
        ),
    ];

    for (raw, expected) in cases {
        let args = UpdateTaskArgs::parse(&arguments(raw)).unwrap();
        assert_eq!(serde_json::to_value(args.update_set()).unwrap(), expected);
    }
}

#[test]
fn test_schema_lists_required_parameters() {
    let schema = input_schema::<CreateTaskArgs>();

    assert_eq!(schema["type"], "object");
    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert!(required.contains(&"project_id"));
    assert!(required.contains(&"title"));
    assert!(!required.contains(&"description"));
    assert_eq!(
        schema["properties"]["title"]["description"],
        "Title of the task"
    );
}

#[test]
fn test_schema_for_project_and_task_ids() {
    let schema = input_schema::<GetTasksArgs>();
    assert!(schema["properties"]["project_id"].is_object());

    let schema = input_schema::<CreateProjectArgs>();
    assert!(schema["properties"]["description"].is_object());
}
