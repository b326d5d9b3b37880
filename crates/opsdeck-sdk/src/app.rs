//! App declaration and synthesis
//!
//! An [`App`] collects pages declaratively and hands the finished definition
//! to the compiler, which turns it into the serializable template and the
//! per-page IAM policies the provisioning framework deploys.

use opsdeck_compiler::{AppCompiler, AppTemplate, PagePolicy};
use opsdeck_core::{ActionIntent, AppDefinition, Component, PageDefinition, PlainExecutionRole};
use tracing::debug;

use crate::error::{Result, SdkError};

/// App-level configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Display name of the app
    pub name: String,
    /// Optional longer description shown in the app catalog
    pub description: Option<String>,
    /// Deployment stage, defaults to `production`
    pub stage: Option<String>,
    /// Free-form tags; duplicates and empty tags are dropped at synthesis
    pub tags: Vec<String>,
    /// API key authenticating the deployment
    pub api_key: Option<String>,
    /// Role assumed for every action of the app unless the action overrides it
    pub execution_role: Option<PlainExecutionRole>,
}

/// Page content passed to [`App::page`]
#[derive(Debug, Clone, Default)]
pub struct PageProps {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Actions executed when the page loads, keyed by the state variable
    /// that receives each result
    pub initial_state: Vec<(String, ActionIntent)>,
    pub body: Vec<Component>,
}

/// A declared app: pages plus configuration, ready to synthesize
#[derive(Debug, Clone)]
pub struct App {
    definition: AppDefinition,
    api_key: String,
}

impl App {
    /// Create an app from its configuration.
    ///
    /// Fails when no API key is configured. Structural validation of the
    /// definition itself (stage, execution role, page ids) happens at
    /// [`synth`](Self::synth) time.
    pub fn new(config: AppConfig) -> Result<Self> {
        let api_key = config.api_key.ok_or(SdkError::MissingApiKey)?;

        Ok(Self {
            definition: AppDefinition {
                name: config.name,
                description: config.description.unwrap_or_default(),
                stage: config.stage.unwrap_or_else(|| "production".to_string()),
                tags: config.tags,
                execution_role: config.execution_role,
                pages: Vec::new(),
            },
            api_key,
        })
    }

    /// Add a page. The first page added becomes the landing page; page order
    /// is declaration order.
    pub fn page(mut self, id: impl Into<String>, props: PageProps) -> Self {
        self.definition.pages.push((
            id.into(),
            PageDefinition {
                title: props.title,
                subtitle: props.subtitle,
                initial_state: props.initial_state,
                body: props.body,
            },
        ));
        self
    }

    /// API key used to authenticate the deployment
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Compile the declared pages into the app template and the per-page
    /// IAM policies. Synthesis never mutates the app; calling it twice
    /// yields identical output.
    pub fn synth(&self) -> Result<(AppTemplate, Vec<PagePolicy>)> {
        let (template, policies) = AppCompiler::new().compile(&self.definition)?;
        debug!(
            app = %template.name,
            pages = template.pages.len(),
            "synthesized app template"
        );
        Ok((template, policies))
    }
}
