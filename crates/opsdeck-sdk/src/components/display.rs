//! Display components

use std::collections::BTreeMap;

use opsdeck_compiler::resolve_action_expr;
use opsdeck_core::{ActionIntent, Component, Expr, PropValue};

use super::{component_list, with_layout, LayoutOptions};

/// Options for [`heading`]
#[derive(Debug, Clone, Default)]
pub struct HeadingOptions {
    /// Further description shown under the heading
    pub subtitle: Option<Expr<String>>,
    /// Heading level 1-4, defaults to 1
    pub level: Option<u32>,
    pub layout: LayoutOptions,
}

/// Bold heading with large font size
pub fn heading(label: impl Into<Expr<String>>, options: HeadingOptions) -> Component {
    let component = Component::new("display.heading")
        .with_prop("label", label.into())
        .with_opt_prop("subtitle", options.subtitle)
        .with_opt_prop("level", options.level);
    with_layout(component, options.layout)
}

/// Plain text paragraph
pub fn text(label: impl Into<Expr<String>>, options: LayoutOptions) -> Component {
    with_layout(
        Component::new("display.text").with_prop("label", label.into()),
        options,
    )
}

/// Markdown-rendered block
pub fn markdown(markdown: impl Into<Expr<String>>, options: LayoutOptions) -> Component {
    with_layout(
        Component::new("display.markdown").with_prop("markdown", markdown.into()),
        options,
    )
}

/// Options for [`image`]
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    /// Alternative text shown when the image cannot be rendered
    pub alt: Option<Expr<String>>,
    pub layout: LayoutOptions,
}

/// Image loaded from a URL
pub fn image(url: impl Into<Expr<String>>, options: ImageOptions) -> Component {
    let component = Component::new("display.image")
        .with_prop("url", url.into())
        .with_opt_prop("alt", options.alt);
    with_layout(component, options.layout)
}

/// Pretty-printed JSON viewer
pub fn json(value: impl Into<PropValue>, options: LayoutOptions) -> Component {
    with_layout(
        Component::new("display.json").with_prop("json", value),
        options,
    )
}

/// Options for [`section`]
#[derive(Debug, Clone, Default)]
pub struct SectionOptions {
    /// Initial collapsed state, defaults to expanded
    pub collapsed: Option<Expr<bool>>,
    pub layout: LayoutOptions,
}

/// Collapsible section with a label and nested body components
pub fn section(
    label: impl Into<Expr<String>>,
    body: Vec<Component>,
    options: SectionOptions,
) -> Component {
    let component = Component::new("display.section")
        .with_prop("label", label.into())
        .with_prop("body", component_list(body))
        .with_opt_prop("collapsed", options.collapsed);
    with_layout(component, options.layout)
}

/// One column of a [`grid`]
#[derive(Debug, Clone)]
pub struct GridColumn {
    size: Option<u32>,
    body: Vec<Component>,
}

impl GridColumn {
    pub fn new(body: Vec<Component>) -> Self {
        Self { size: None, body }
    }

    /// Column width in grid units; the sum across columns must not exceed 4
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    fn into_prop(self) -> PropValue {
        let mut map = BTreeMap::new();
        if let Some(size) = self.size {
            map.insert("size".to_string(), PropValue::from(size));
        }
        map.insert("body".to_string(), component_list(self.body));
        PropValue::Object(map)
    }
}

/// Grid-based layout of nested component columns
pub fn grid(columns: Vec<GridColumn>, options: LayoutOptions) -> Component {
    let component = Component::new("display.grid").with_prop(
        "columns",
        PropValue::Array(columns.into_iter().map(GridColumn::into_prop).collect()),
    );
    with_layout(component, options)
}

/// Options for [`code`]
#[derive(Debug, Clone, Default)]
pub struct CodeOptions {
    /// Title shown above the code block
    pub title: Option<Expr<String>>,
    /// Frame style: `code` (default), `terminal`, `none` or `auto`
    pub frame: Option<Expr<String>>,
    pub layout: LayoutOptions,
}

/// Syntax-highlighted code block
pub fn code(
    code: impl Into<Expr<String>>,
    language: impl Into<Expr<String>>,
    options: CodeOptions,
) -> Component {
    let component = Component::new("display.code")
        .with_prop("code", code.into())
        .with_prop("language", language.into())
        .with_opt_prop("title", options.title)
        .with_opt_prop("frame", options.frame);
    with_layout(component, options.layout)
}

/// Options for [`video`]
#[derive(Debug, Clone, Default)]
pub struct VideoOptions {
    /// Whether the video starts muted, defaults to unmuted
    pub muted: Option<Expr<bool>>,
    pub layout: LayoutOptions,
}

/// Embedded video player.
///
/// `url` must be a direct video source, not an iframe embed link.
pub fn video(url: impl Into<Expr<String>>, options: VideoOptions) -> Component {
    let component = Component::new("display.video")
        .with_prop("url", url.into())
        .with_opt_prop("muted", options.muted);
    with_layout(component, options.layout)
}

/// Options for [`button`]
#[derive(Debug, Clone, Default)]
pub struct DisplayButtonOptions {
    /// Variant: `primary` (default), `secondary` or `tertiary`
    pub variant: Option<Expr<String>>,
    /// Whether the button can be clicked, defaults to enabled
    pub disabled: Option<Expr<bool>>,
    /// Action invoked after `on_click` finishes
    pub on_click_finished: Option<Expr<ActionIntent>>,
    pub layout: LayoutOptions,
}

/// Inline button rendered among display content.
///
/// Actions resolve exactly as in [`input::button`](crate::components::input::button):
/// the stored props carry the clean projections, the collected IAM
/// statements attach to the component, `on_click` statements first.
pub fn button(
    label: impl Into<Expr<String>>,
    on_click: impl Into<Expr<ActionIntent>>,
    options: DisplayButtonOptions,
) -> Component {
    let (on_click, mut statements) = resolve_action_expr(on_click.into());

    let on_click_finished = options.on_click_finished.map(|expr| {
        let (resolved, finished_statements) = resolve_action_expr(expr);
        statements.extend(finished_statements);
        resolved
    });

    let component = Component::new("display.button")
        .with_prop("label", label.into())
        .with_prop("onClick", on_click.into_prop())
        .with_opt_prop("onClickFinished", on_click_finished.map(Expr::into_prop))
        .with_opt_prop("variant", options.variant)
        .with_opt_prop("disabled", options.disabled)
        .with_iam_statements(statements);
    with_layout(component, options.layout)
}
