//! Page template codegen

use std::collections::BTreeMap;

use log::debug;
use opsdeck_core::{ActionProps, IamStatement, PageDefinition, SerializedComponent};
use serde::Serialize;

use crate::resolver::translate_intent;

/// Serializable page template consumed by the provisioning framework
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTemplate {
    pub page_id_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub is_first_page: bool,
    pub body: Vec<SerializedComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<BTreeMap<String, ActionProps>>,
}

/// Compiles one page definition into its template plus the aggregated IAM
/// statements for that page
pub struct PageCompiler;

impl PageCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Compile a page.
    ///
    /// Statement order: initial-state intents in declaration order first,
    /// then every body component's resolved statements in body order. No
    /// deduplication.
    pub fn compile(
        &self,
        id: &str,
        page: &PageDefinition,
        is_first_page: bool,
    ) -> (PageTemplate, Vec<IamStatement>) {
        let mut statements = Vec::new();

        let initial_state = if page.initial_state.is_empty() {
            None
        } else {
            let mut state = BTreeMap::new();
            for (state_id, intent) in &page.initial_state {
                let (props, intent_statements) = translate_intent(intent.clone());
                statements.extend(intent_statements);
                state.insert(state_id.clone(), props);
            }
            Some(state)
        };

        let body: Vec<SerializedComponent> = page
            .body
            .iter()
            .map(|component| component.serialize_component())
            .collect();
        for component in &page.body {
            statements.extend(component.resolve_iam_statements());
        }

        debug!(
            "compiled page {id}: {} components, {} iam statements",
            body.len(),
            statements.len()
        );

        (
            PageTemplate {
                page_id_name: id.to_string(),
                title: page.title.clone(),
                subtitle: page.subtitle.clone(),
                is_first_page,
                body,
                initial_state,
            },
            statements,
        )
    }
}

impl Default for PageCompiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_core::{ActionIntent, AwsActionProps, Component, PropValue};
    use serde_json::json;

    fn invoke_intent(arn: &str) -> ActionIntent {
        ActionIntent::aws(
            AwsActionProps {
                id: None,
                region: "us-east-1".to_string(),
                service: "lambda".to_string(),
                command: "invoke".to_string(),
                input: json!({ "FunctionName": arn }),
                output_path: None,
                execution_role: None,
            },
            vec![IamStatement::allow(&["lambda:InvokeFunction"], &[arn])],
        )
    }

    #[test]
    fn test_empty_page() {
        let (template, statements) =
            PageCompiler::new().compile("InputPage", &PageDefinition::default(), true);

        assert_eq!(template.page_id_name, "InputPage");
        assert!(template.is_first_page);
        assert!(template.body.is_empty());
        assert_eq!(template.initial_state, None);
        assert!(statements.is_empty());
    }

    #[test]
    fn test_initial_state_statements_come_before_body_statements() {
        let page = PageDefinition {
            initial_state: vec![("user".to_string(), invoke_intent("arn:loader"))],
            body: vec![Component::new("input.button")
                .with_prop("label", "Save")
                .with_iam_statements(vec![IamStatement::allow(
                    &["lambda:InvokeFunction"],
                    &["arn:saver"],
                )])],
            ..PageDefinition::default()
        };

        let (template, statements) = PageCompiler::new().compile("Page", &page, false);

        let resources: Vec<&str> = statements
            .iter()
            .map(|s| s.resources[0].as_str())
            .collect();
        assert_eq!(resources, vec!["arn:loader", "arn:saver"]);

        let state = template.initial_state.expect("initial state present");
        assert!(state.contains_key("user"));
        // The stored projection is clean: statements live only in the side
        // channel.
        assert_eq!(
            serde_json::to_value(&state["user"]).unwrap()["type"],
            "aws"
        );
    }

    #[test]
    fn test_body_serialized_in_order() {
        let page = PageDefinition {
            body: vec![
                Component::new("display.heading").with_prop("label", "Title"),
                Component::new("display.text").with_prop("label", "Body"),
            ],
            ..PageDefinition::default()
        };

        let (template, _) = PageCompiler::new().compile("Page", &page, false);
        let names: Vec<&str> = template
            .body
            .iter()
            .map(|c| c.type_name.as_str())
            .collect();
        assert_eq!(names, vec!["display.heading", "display.text"]);
    }

    #[test]
    fn test_nested_component_statements_counted_through_props() {
        let nested = Component::new("display.text")
            .with_prop("label", "x")
            .with_iam_statements(vec![IamStatement::allow(&["s3:GetObject"], &["arn:obj"])]);
        let page = PageDefinition {
            body: vec![Component::new("display.section")
                .with_prop("body", PropValue::Array(vec![PropValue::Component(nested)]))],
            ..PageDefinition::default()
        };

        let (_, statements) = PageCompiler::new().compile("Page", &page, false);
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].resources, vec!["arn:obj"]);
    }
}
