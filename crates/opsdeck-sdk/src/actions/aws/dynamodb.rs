//! DynamoDB actions

use opsdeck_core::{ActionIntent, AwsActionProps, IamStatement};
use serde_json::{Map, Value as JsonValue};

use super::{provider_intent, AwsActionOptions};

/// Write an item into a DynamoDB table.
///
/// `item` is the attribute-value map of the item to store. Without an
/// execution role the intent requires `dynamodb:PutItem` on the table's ARN.
pub fn put_item(
    table_name: &str,
    table_arn: &str,
    region: &str,
    item: JsonValue,
    options: AwsActionOptions,
) -> ActionIntent {
    let mut input = Map::new();
    input.insert(
        "TableName".to_string(),
        JsonValue::String(table_name.to_string()),
    );
    input.insert("Item".to_string(), item);

    provider_intent(
        AwsActionProps {
            id: options.id,
            region: region.to_string(),
            service: "dynamodb".to_string(),
            command: "putItem".to_string(),
            input: JsonValue::Object(input),
            output_path: options.output_path,
            execution_role: options.execution_role,
        },
        vec![IamStatement::allow(&["dynamodb:PutItem"], &[table_arn])],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_compiler::translate_intent;
    use serde_json::json;

    #[test]
    fn test_put_item_wire_shape() {
        let intent = put_item(
            "Users",
            "arn:aws:dynamodb:eu-west-1:123:table/Users",
            "eu-west-1",
            json!({ "pk": { "S": "{{email}}" } }),
            AwsActionOptions::default(),
        );

        let (props, statements) = translate_intent(intent);
        assert_eq!(
            serde_json::to_value(&props).unwrap(),
            json!({
                "type": "aws",
                "region": "eu-west-1",
                "service": "dynamodb",
                "command": "putItem",
                "input": {
                    "TableName": "Users",
                    "Item": { "pk": { "S": "{{email}}" } }
                }
            })
        );
        assert_eq!(
            statements,
            vec![IamStatement::allow(
                &["dynamodb:PutItem"],
                &["arn:aws:dynamodb:eu-west-1:123:table/Users"],
            )]
        );
    }
}
