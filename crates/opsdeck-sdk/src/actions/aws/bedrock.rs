//! Bedrock actions

use opsdeck_core::{ActionIntent, AwsActionProps, IamStatement};
use serde_json::{Map, Value as JsonValue};

use super::{provider_intent, AwsActionOptions};

const DEFAULT_REGION: &str = "us-east-1";

/// Invoke a Bedrock foundation model.
///
/// `body` is the model-specific request body, forwarded as-is. When `region`
/// is `None` the call defaults to `us-east-1`. Without an execution role the
/// intent requires `bedrock:InvokeModel` on the model's foundation-model ARN.
pub fn invoke_model(
    model_id: &str,
    region: Option<&str>,
    body: JsonValue,
    options: AwsActionOptions,
) -> ActionIntent {
    let region = region.unwrap_or(DEFAULT_REGION);

    let mut input = Map::new();
    input.insert("body".to_string(), body);
    input.insert(
        "modelId".to_string(),
        JsonValue::String(model_id.to_string()),
    );

    let model_arn = format!("arn:aws:bedrock:{region}::foundation-model/{model_id}");

    provider_intent(
        AwsActionProps {
            id: options.id,
            region: region.to_string(),
            service: "bedrockRuntime".to_string(),
            command: "invokeModel".to_string(),
            input: JsonValue::Object(input),
            output_path: options.output_path,
            execution_role: options.execution_role,
        },
        vec![IamStatement::allow(
            &["bedrock:InvokeModel"],
            &[model_arn.as_str()],
        )],
    )
}
