//! Action intents
//!
//! Build-time descriptions of a single external-service call or internal
//! navigation command. A provider (AWS) intent carries the IAM statements
//! required to make the call; the resolver strips them into a side channel
//! and leaves the clean `ActionProps` projection for serialization.
//! Navigation intents never need statements.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::types::iam::IamStatement;
use crate::types::PropValue;

/// Caller identity override for provider calls.
///
/// When an intent carries one, the call is made through this role and the
/// intent attaches no IAM statements of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainExecutionRole {
    pub role_arn: String,
    pub external_id: String,
}

/// Serializable projection of an AWS provider call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsActionProps {
    /// Identifier for referencing the call result elsewhere in the app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub region: String,
    pub service: String,
    pub command: String,
    /// Structured input forwarded to the service call
    pub input: JsonValue,
    /// Path used to extract a subset of the call result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role: Option<PlainExecutionRole>,
}

/// Serializable projection of an internal navigation command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppActionProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub command: String,
    pub input: JsonValue,
}

/// Clean (statement-stripped) action projection, tagged by provider kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionProps {
    Aws(AwsActionProps),
    App(AppActionProps),
}

/// Build-time action intent: a projection plus the statements required to
/// perform it.
///
/// Created once by an action factory, immutable afterwards, consumed by the
/// resolver which splits it into `(ActionProps, Vec<IamStatement>)`.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionIntent {
    /// External provider call with its required IAM statements
    Aws {
        props: AwsActionProps,
        iam_statements: Vec<IamStatement>,
    },
    /// Internal navigation command
    App { props: AppActionProps },
}

impl ActionIntent {
    /// Create a provider-call intent
    pub fn aws(props: AwsActionProps, iam_statements: Vec<IamStatement>) -> Self {
        ActionIntent::Aws {
            props,
            iam_statements,
        }
    }

    /// Create a navigation intent
    pub fn app(props: AppActionProps) -> Self {
        ActionIntent::App { props }
    }

    /// User-supplied identifier for referencing the action result
    pub fn id(&self) -> Option<&str> {
        match self {
            ActionIntent::Aws { props, .. } => props.id.as_deref(),
            ActionIntent::App { props } => props.id.as_deref(),
        }
    }
}

impl ActionProps {
    /// Prop-bag projection matching the serde wire shape
    pub fn into_prop(self) -> PropValue {
        let mut map = BTreeMap::new();
        match self {
            ActionProps::Aws(props) => {
                map.insert("type".to_string(), PropValue::from("aws"));
                if let Some(id) = props.id {
                    map.insert("id".to_string(), PropValue::from(id));
                }
                map.insert("region".to_string(), PropValue::from(props.region));
                map.insert("service".to_string(), PropValue::from(props.service));
                map.insert("command".to_string(), PropValue::from(props.command));
                map.insert("input".to_string(), PropValue::from(props.input));
                if let Some(output_path) = props.output_path {
                    map.insert("outputPath".to_string(), PropValue::from(output_path));
                }
                if let Some(role) = props.execution_role {
                    let mut role_map = BTreeMap::new();
                    role_map.insert("roleArn".to_string(), PropValue::from(role.role_arn));
                    role_map.insert("externalId".to_string(), PropValue::from(role.external_id));
                    map.insert("executionRole".to_string(), PropValue::Object(role_map));
                }
            }
            ActionProps::App(props) => {
                map.insert("type".to_string(), PropValue::from("app"));
                if let Some(id) = props.id {
                    map.insert("id".to_string(), PropValue::from(id));
                }
                map.insert("command".to_string(), PropValue::from(props.command));
                map.insert("input".to_string(), PropValue::from(props.input));
            }
        }
        PropValue::Object(map)
    }
}

impl From<ActionProps> for PropValue {
    fn from(props: ActionProps) -> Self {
        props.into_prop()
    }
}
