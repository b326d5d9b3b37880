//! Input components

use std::collections::BTreeMap;

use opsdeck_compiler::resolve_action_expr;
use opsdeck_core::{ActionIntent, Component, Expr, PropValue};

use super::{with_layout, LayoutOptions};

/// Options for [`text`]
#[derive(Debug, Clone, Default)]
pub struct TextInputOptions {
    /// Label shown above the field
    pub label: Option<Expr<String>>,
    /// Placeholder shown inside the empty field
    pub placeholder: Option<Expr<String>>,
    /// Value the field starts with
    pub initial_value: Option<Expr<String>>,
    /// Whether the field can be interacted with, defaults to enabled
    pub disabled: Option<Expr<bool>>,
    pub layout: LayoutOptions,
}

/// Single-line text field.
///
/// `id` names the state variable holding the typed value; reference it
/// elsewhere in the app as `{{id}}`.
pub fn text(id: &str, options: TextInputOptions) -> Component {
    let component = Component::new("input.text")
        .with_prop("id", id)
        .with_opt_prop("label", options.label)
        .with_opt_prop("placeholder", options.placeholder)
        .with_opt_prop("initialValue", options.initial_value)
        .with_opt_prop("disabled", options.disabled);
    with_layout(component, options.layout)
}

/// Options for [`toggle`]
#[derive(Debug, Clone, Default)]
pub struct ToggleOptions {
    /// Label shown next to the switch
    pub label: Option<Expr<String>>,
    /// Whether the switch starts on, defaults to off
    pub initial_value: Option<Expr<bool>>,
    /// Whether the switch can be interacted with, defaults to enabled
    pub disabled: Option<Expr<bool>>,
    pub layout: LayoutOptions,
}

/// On/off switch bound to a boolean state variable
pub fn toggle(id: &str, options: ToggleOptions) -> Component {
    let component = Component::new("input.toggle")
        .with_prop("id", id)
        .with_opt_prop("label", options.label)
        .with_opt_prop("initialValue", options.initial_value)
        .with_opt_prop("disabled", options.disabled);
    with_layout(component, options.layout)
}

/// One entry of a [`select`] dropdown
#[derive(Debug, Clone)]
pub struct SelectOption {
    label: String,
    value: PropValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<PropValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    fn into_prop(self) -> PropValue {
        let mut map = BTreeMap::new();
        map.insert("label".to_string(), PropValue::from(self.label));
        map.insert("value".to_string(), self.value);
        PropValue::Object(map)
    }
}

/// Options for [`select`]
#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    /// Label shown above the dropdown
    pub label: Option<Expr<String>>,
    /// Placeholder shown before anything is selected
    pub placeholder: Option<Expr<String>>,
    /// Allow selecting more than one option, defaults to single-select
    pub multi: Option<Expr<bool>>,
    /// Entries selected when the page loads
    pub initial_value: Vec<SelectOption>,
    /// Whether the dropdown can be interacted with, defaults to enabled
    pub disabled: Option<Expr<bool>>,
    pub layout: LayoutOptions,
}

/// Dropdown bound to a state variable holding the selected option
pub fn select(id: &str, options_list: Vec<SelectOption>, options: SelectOptions) -> Component {
    let initial_value = if options.initial_value.is_empty() {
        None
    } else {
        Some(PropValue::Array(
            options
                .initial_value
                .into_iter()
                .map(SelectOption::into_prop)
                .collect(),
        ))
    };

    let component = Component::new("input.select")
        .with_prop("id", id)
        .with_prop(
            "options",
            PropValue::Array(
                options_list
                    .into_iter()
                    .map(SelectOption::into_prop)
                    .collect(),
            ),
        )
        .with_opt_prop("label", options.label)
        .with_opt_prop("placeholder", options.placeholder)
        .with_opt_prop("multi", options.multi)
        .with_opt_prop("initialValue", initial_value)
        .with_opt_prop("disabled", options.disabled);
    with_layout(component, options.layout)
}

/// Options for [`chat`]
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    /// Placeholder shown in the empty message field
    pub placeholder: Option<Expr<String>>,
    /// Whether the chat can be interacted with, defaults to enabled
    pub disabled: Option<Expr<bool>>,
    pub layout: LayoutOptions,
}

/// Chat box that triggers an action for every submitted message.
///
/// `id` names the state variable holding the latest message. `on_message`
/// may be a bare intent or a runtime if-expression; it is resolved here,
/// with the clean projection stored in the props and the required IAM
/// statements attached to the component.
pub fn chat(id: &str, on_message: impl Into<Expr<ActionIntent>>, options: ChatOptions) -> Component {
    let (on_message, statements) = resolve_action_expr(on_message.into());

    let component = Component::new("input.chat")
        .with_prop("id", id)
        .with_prop("onMessage", on_message.into_prop())
        .with_opt_prop("placeholder", options.placeholder)
        .with_opt_prop("disabled", options.disabled)
        .with_iam_statements(statements);
    with_layout(component, options.layout)
}

/// Options for [`button`]
#[derive(Debug, Clone, Default)]
pub struct ButtonOptions {
    /// Variant: `primary` (default), `secondary` or `tertiary`
    pub kind: Option<Expr<String>>,
    /// Intent: `default`, `positive` or `negative`
    pub intent: Option<Expr<String>>,
    /// Whether the button can be clicked, defaults to enabled
    pub disabled: Option<Expr<bool>>,
    /// Action invoked after `on_click` finishes, commonly a page change
    pub on_click_finished: Option<Expr<ActionIntent>>,
    pub layout: LayoutOptions,
}

/// Clickable button that triggers an action.
///
/// Both `on_click` and `on_click_finished` may be bare intents or runtime
/// if-expressions choosing between intents. Their trees are resolved here:
/// the stored props carry only the clean action projections while the
/// required IAM statements attach to the component, `on_click` statements
/// first.
pub fn button(
    label: impl Into<Expr<String>>,
    on_click: impl Into<Expr<ActionIntent>>,
    options: ButtonOptions,
) -> Component {
    let (on_click, mut statements) = resolve_action_expr(on_click.into());

    let on_click_finished = options.on_click_finished.map(|expr| {
        let (resolved, finished_statements) = resolve_action_expr(expr);
        statements.extend(finished_statements);
        resolved
    });

    let component = Component::new("input.button")
        .with_prop("label", label.into())
        .with_prop("onClick", on_click.into_prop())
        .with_opt_prop("onClickFinished", on_click_finished.map(Expr::into_prop))
        .with_opt_prop("kind", options.kind)
        .with_opt_prop("intent", options.intent)
        .with_opt_prop("disabled", options.disabled)
        .with_iam_statements(statements);
    with_layout(component, options.layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::app::{change_page, AppActionOptions};
    use crate::actions::aws::lambda;
    use crate::actions::aws::AwsActionOptions;
    use crate::expr::{eq, when};
    use serde_json::json;

    fn invoke(arn: &str) -> ActionIntent {
        lambda::invoke(arn, "us-east-1", json!(null), AwsActionOptions::default())
    }

    #[test]
    fn test_text_input_shape() {
        let component = text(
            "email",
            TextInputOptions {
                label: Some("Email".into()),
                placeholder: Some("you@example.com".into()),
                ..TextInputOptions::default()
            },
        );

        assert_eq!(
            component.serialize_component().to_json(),
            json!({
                "typeName": "input.text",
                "props": {
                    "id": "email",
                    "label": "Email",
                    "placeholder": "you@example.com"
                }
            })
        );
    }

    #[test]
    fn test_select_options_shape() {
        let component = select(
            "plan",
            vec![
                SelectOption::new("Free", "free"),
                SelectOption::new("Paid", "paid"),
            ],
            SelectOptions::default(),
        );

        let json = component.serialize_component().to_json();
        assert_eq!(
            json["props"]["options"],
            json!([
                { "label": "Free", "value": "free" },
                { "label": "Paid", "value": "paid" }
            ])
        );
    }

    #[test]
    fn test_button_stores_clean_action_and_collects_statements() {
        let component = button(
            "Save",
            invoke("arn:saver"),
            ButtonOptions {
                on_click_finished: Some(
                    change_page("DonePage", AppActionOptions::default()).into(),
                ),
                ..ButtonOptions::default()
            },
        );

        let json = component.serialize_component().to_json();
        assert_eq!(json["props"]["onClick"]["type"], "aws");
        assert!(json["props"]["onClick"].get("iamStatements").is_none());
        assert_eq!(json["props"]["onClickFinished"]["command"], "changePage");

        let statements = component.resolve_iam_statements();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].resources, vec!["arn:saver"]);
    }

    #[test]
    fn test_chat_resolves_on_message() {
        let component = chat(
            "question",
            when(
                eq("{{model}}", "fast"),
                invoke("arn:fast"),
                invoke("arn:slow"),
            ),
            ChatOptions {
                placeholder: Some("Ask anything...".into()),
                ..ChatOptions::default()
            },
        );

        let json = component.serialize_component().to_json();
        assert_eq!(json["typeName"], "input.chat");
        assert_eq!(json["props"]["id"], "question");
        assert_eq!(json["props"]["placeholder"], "Ask anything...");
        assert_eq!(
            json["props"]["onMessage"]["runtimeExpression"]["typeName"],
            "if"
        );
        assert!(
            json["props"]["onMessage"]["runtimeExpression"]["positive"]
                .get("iamStatements")
                .is_none()
        );

        let statements = component.resolve_iam_statements();
        let resources: Vec<&str> = statements
            .iter()
            .map(|s| s.resources[0].as_str())
            .collect();
        assert_eq!(resources, vec!["arn:fast", "arn:slow"]);
    }

    #[test]
    fn test_button_conditional_on_click() {
        let component = button(
            "Go",
            when(eq("{{env}}", "prod"), invoke("arn:prod"), invoke("arn:dev")),
            ButtonOptions::default(),
        );

        let json = component.serialize_component().to_json();
        let node = &json["props"]["onClick"]["runtimeExpression"];
        assert_eq!(node["typeName"], "if");
        assert_eq!(node["positive"]["type"], "aws");

        let statements = component.resolve_iam_statements();
        let resources: Vec<&str> = statements
            .iter()
            .map(|s| s.resources[0].as_str())
            .collect();
        assert_eq!(resources, vec!["arn:prod", "arn:dev"]);
    }
}
