//! Mock implementations of the catalog service ports

#![allow(dead_code)]

use std::path::PathBuf;

use async_trait::async_trait;
use uicb_application::{
    ComponentIndexInterface, ComponentReaderInterface, ExampleServiceInterface,
    RulesServiceInterface,
};
use uicb_domain::error::{Error, NotFoundReason, Result};
use uicb_domain::value_objects::{ComponentEntry, ComponentSource, SourceDocument};

/// Component index returning a fixed list, or failing on demand
#[derive(Default)]
pub struct MockComponentIndex {
    entries: Vec<ComponentEntry>,
    should_fail: bool,
}

impl MockComponentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(mut self, entries: Vec<ComponentEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

#[async_trait]
impl ComponentIndexInterface for MockComponentIndex {
    async fn list_components(&self, category: Option<&str>) -> Result<Vec<ComponentEntry>> {
        if self.should_fail {
            return Err(Error::directory_access(
                "/missing",
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            ));
        }
        Ok(self
            .entries
            .iter()
            .filter(|entry| category.is_none_or(|c| entry.matches_category(c)))
            .cloned()
            .collect())
    }
}

/// Component reader knowing exactly one component
pub struct MockComponentReader {
    name: String,
    content: String,
}

impl MockComponentReader {
    pub fn new(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            content: content.to_string(),
        }
    }
}

#[async_trait]
impl ComponentReaderInterface for MockComponentReader {
    async fn read_component(&self, name: &str) -> Result<ComponentSource> {
        if name != self.name {
            return Err(Error::component_not_found(
                name,
                NotFoundReason::MissingDirectory,
            ));
        }
        Ok(ComponentSource {
            name: name.to_string(),
            document: SourceDocument::new(
                PathBuf::from(format!("/ui/{name}/{name}.tsx")),
                self.content.clone(),
            ),
        })
    }
}

/// Example service echoing the resolved example type
#[derive(Default)]
pub struct MockExampleService;

impl MockExampleService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExampleServiceInterface for MockExampleService {
    async fn get_example(
        &self,
        component: &str,
        example_type: Option<&str>,
    ) -> Result<SourceDocument> {
        let example_type = example_type.unwrap_or("Basic");
        if example_type == "Missing" {
            return Err(Error::example_not_found(
                component,
                example_type,
                format!("/docs/{component}/{example_type}.md"),
            ));
        }
        Ok(SourceDocument::new(
            format!("/docs/{component}/{example_type}.md"),
            format!("# {component} {example_type}\n"),
        ))
    }
}

/// Rules service with optional content
#[derive(Default)]
pub struct MockRulesService {
    content: Option<String>,
}

impl MockRulesService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }
}

#[async_trait]
impl RulesServiceInterface for MockRulesService {
    async fn get_rules(&self) -> Result<SourceDocument> {
        match &self.content {
            Some(content) => Ok(SourceDocument::new("/RULES.MD", content.clone())),
            None => Err(Error::rules_not_found("/RULES.MD")),
        }
    }
}
