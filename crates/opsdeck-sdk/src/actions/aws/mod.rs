//! AWS service actions
//!
//! Every factory here follows the same permission rule: when the action
//! carries its own execution role, the call is made through that role and no
//! IAM statements are attached; otherwise the factory attaches the minimal
//! statement the call needs, scoped to the target resource.

use opsdeck_core::{ActionIntent, AwsActionProps, IamStatement, PlainExecutionRole};

pub mod bedrock;
pub mod dynamodb;
pub mod lambda;

/// Common options for AWS actions
#[derive(Debug, Clone, Default)]
pub struct AwsActionOptions {
    /// Identifier for referencing the call result elsewhere in the app
    pub id: Option<String>,
    /// Path used to extract a subset of the call result
    pub output_path: Option<String>,
    /// Role assumed for the call instead of the app's own permissions
    pub execution_role: Option<PlainExecutionRole>,
}

pub(crate) fn provider_intent(
    props: AwsActionProps,
    statements: Vec<IamStatement>,
) -> ActionIntent {
    let statements = if props.execution_role.is_some() {
        Vec::new()
    } else {
        statements
    };
    ActionIntent::aws(props, statements)
}
