//! Component builders
//!
//! One factory function per UI widget. Every factory returns a plain
//! [`Component`](opsdeck_core::Component) value; page builders serialize it
//! and aggregate its IAM statements at synthesis time.

use opsdeck_core::{Component, PropValue};

pub mod display;
pub mod input;

/// Spacing and width options shared by every visual component
#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    /// Space above the component (`none`, `sm`, `md`, `lg`, `xl` or a
    /// `{{variable}}` reference)
    pub spacing_top: Option<String>,
    /// Space below the component
    pub spacing_bottom: Option<String>,
    /// Width of the component, in grid units 1-4
    pub width: Option<u32>,
}

fn with_layout(component: Component, layout: LayoutOptions) -> Component {
    component
        .with_opt_prop("spacingTop", layout.spacing_top)
        .with_opt_prop("spacingBottom", layout.spacing_bottom)
        .with_opt_prop("width", layout.width)
}

fn component_list(body: Vec<Component>) -> PropValue {
    PropValue::Array(body.into_iter().map(PropValue::Component).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_layout_props_applied_when_set() {
        let component = with_layout(
            Component::new("display.text").with_prop("label", "x"),
            LayoutOptions {
                spacing_top: Some("md".to_string()),
                spacing_bottom: None,
                width: Some(2),
            },
        );

        assert_eq!(
            component.serialize_component().to_json(),
            json!({
                "typeName": "display.text",
                "props": { "label": "x", "spacingTop": "md", "width": 2 }
            })
        );
    }
}
