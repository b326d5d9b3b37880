//! App template codegen

use std::collections::HashSet;

use log::debug;
use opsdeck_core::{AppDefinition, IamStatement, PlainExecutionRole};
use serde::Serialize;

use crate::codegen::page::{PageCompiler, PageTemplate};
use crate::error::{CompileError, Result};

/// Serializable app template consumed by the provisioning framework
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppTemplate {
    pub name: String,
    pub stage: String,
    pub tags: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role: Option<PlainExecutionRole>,
    pub pages: Vec<PageTemplate>,
}

/// IAM statements collected for one page, keyed by its id.
///
/// The provisioning framework attaches these to the app's execution role
/// as per-page policies.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePolicy {
    pub page_id: String,
    pub statements: Vec<IamStatement>,
}

/// Compiles an app definition into its template and per-page policies
pub struct AppCompiler {
    page_compiler: PageCompiler,
}

impl AppCompiler {
    pub fn new() -> Self {
        Self {
            page_compiler: PageCompiler::new(),
        }
    }

    /// Compile the whole app.
    ///
    /// Pages compile in insertion order; the first page gets the landing
    /// flag. Tags are deduplicated (first occurrence wins) and empty tags
    /// are dropped.
    pub fn compile(&self, app: &AppDefinition) -> Result<(AppTemplate, Vec<PagePolicy>)> {
        if app.stage.is_empty() {
            return Err(CompileError::EmptyStage);
        }
        if let Some(role) = &app.execution_role {
            if role.external_id.len() < 6 {
                return Err(CompileError::ExternalIdTooShort);
            }
        }

        let mut seen_ids = HashSet::new();
        for (id, _) in &app.pages {
            if !seen_ids.insert(id.as_str()) {
                return Err(CompileError::DuplicatePageId(id.clone()));
            }
        }

        let mut pages = Vec::new();
        let mut policies = Vec::new();
        for (index, (id, page)) in app.pages.iter().enumerate() {
            let (template, statements) = self.page_compiler.compile(id, page, index == 0);
            pages.push(template);
            policies.push(PagePolicy {
                page_id: id.clone(),
                statements,
            });
        }

        debug!("compiled app {}: {} pages", app.name, pages.len());

        Ok((
            AppTemplate {
                name: app.name.clone(),
                stage: app.stage.clone(),
                tags: normalize_tags(&app.tags),
                description: app.description.clone(),
                execution_role: app.execution_role.clone(),
                pages,
            },
            policies,
        ))
    }
}

impl Default for AppCompiler {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .filter(|tag| !tag.is_empty() && seen.insert(tag.as_str()))
        .cloned()
        .collect()
}
