//! Lambda actions

use opsdeck_core::{ActionIntent, AwsActionProps, IamStatement};
use serde_json::{Map, Value as JsonValue};

use super::{provider_intent, AwsActionOptions};

/// Invoke a Lambda function.
///
/// `payload` is forwarded as the invocation payload; pass `Value::Null` to
/// invoke without one. Without an execution role the intent requires
/// `lambda:InvokeFunction` on the function's ARN.
pub fn invoke(
    function_arn: &str,
    region: &str,
    payload: JsonValue,
    options: AwsActionOptions,
) -> ActionIntent {
    let mut input = Map::new();
    input.insert(
        "FunctionName".to_string(),
        JsonValue::String(function_arn.to_string()),
    );
    if !payload.is_null() {
        input.insert("Payload".to_string(), payload);
    }

    provider_intent(
        AwsActionProps {
            id: options.id,
            region: region.to_string(),
            service: "lambda".to_string(),
            command: "invoke".to_string(),
            input: JsonValue::Object(input),
            output_path: options.output_path,
            execution_role: options.execution_role,
        },
        vec![IamStatement::allow(
            &["lambda:InvokeFunction"],
            &[function_arn],
        )],
    )
}
