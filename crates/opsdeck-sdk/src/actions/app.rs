//! In-app navigation actions

use opsdeck_core::{ActionIntent, AppActionProps, Expr};
use serde_json::{Map, Value as JsonValue};

/// Common options for navigation actions
#[derive(Debug, Clone, Default)]
pub struct AppActionOptions {
    /// Identifier for referencing the action result elsewhere in the app
    pub id: Option<String>,
}

/// Navigate to another page of the same app.
///
/// The target may be a fixed page id or a runtime if-expression choosing
/// between pages. Navigation needs no IAM statements.
pub fn change_page(page_id: impl Into<Expr<String>>, options: AppActionOptions) -> ActionIntent {
    let mut input = Map::new();
    input.insert("newPageId".to_string(), page_id.into().into_prop().to_json());

    ActionIntent::app(AppActionProps {
        id: options.id,
        command: "changePage".to_string(),
        input: JsonValue::Object(input),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{eq, when};
    use opsdeck_compiler::translate_intent;
    use serde_json::json;

    #[test]
    fn test_change_page_fixed_target() {
        let intent = change_page("DonePage", AppActionOptions::default());

        let (props, statements) = translate_intent(intent);
        assert!(statements.is_empty());
        assert_eq!(
            serde_json::to_value(&props).unwrap(),
            json!({
                "type": "app",
                "command": "changePage",
                "input": { "newPageId": "DonePage" }
            })
        );
    }

    #[test]
    fn test_change_page_conditional_target() {
        let intent = change_page(
            when(eq("{{ok}}", "true"), "DonePage", "ErrorPage"),
            AppActionOptions::default(),
        );

        let (props, _) = translate_intent(intent);
        assert_eq!(
            serde_json::to_value(&props).unwrap()["input"]["newPageId"],
            json!({
                "runtimeExpression": {
                    "typeName": "if",
                    "statement": { "eq": ["{{ok}}", "true"] },
                    "positive": "DonePage",
                    "negative": "ErrorPage"
                }
            })
        );
    }

    #[test]
    fn test_change_page_with_id() {
        let intent = change_page(
            "Next",
            AppActionOptions {
                id: Some("goNext".to_string()),
            },
        );
        assert_eq!(intent.id(), Some("goNext"));
    }
}
