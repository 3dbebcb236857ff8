//! In-memory page fixtures. Selector strings are looked up literally,
//! so tests wire the exact catalog selectors they want to resolve and
//! everything else behaves as "no match".

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::error::{QueryError, QueryResult};
use crate::page::{PageNode, PageSession, ProfilePage};

#[derive(Debug, Clone, Default)]
pub struct FixtureNode {
    text: String,
    attributes: HashMap<String, String>,
    children: HashMap<String, Vec<FixtureNode>>,
}

impl FixtureNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(value: &str) -> Self {
        Self {
            text: value.to_string(),
            ..Self::default()
        }
    }

    pub fn with_child(self, selector: &str, child: FixtureNode) -> Self {
        self.with_children(selector, vec![child])
    }

    pub fn with_children(mut self, selector: &str, children: Vec<FixtureNode>) -> Self {
        self.children
            .entry(selector.to_string())
            .or_default()
            .extend(children);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }
}

#[async_trait]
impl PageNode for FixtureNode {
    async fn find_all(&self, selector: &str) -> QueryResult<Vec<Self>> {
        Ok(self.children.get(selector).cloned().unwrap_or_default())
    }

    async fn text(&self) -> QueryResult<String> {
        Ok(self.text.clone())
    }

    async fn attribute(&self, name: &str) -> QueryResult<Option<String>> {
        Ok(self.attributes.get(name).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FixturePage {
    nodes: HashMap<String, Vec<FixtureNode>>,
    failing: HashSet<String>,
}

impl FixturePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nodes(mut self, selector: &str, nodes: Vec<FixtureNode>) -> Self {
        self.nodes
            .entry(selector.to_string())
            .or_default()
            .extend(nodes);
        self
    }

    /// Queries for `selector` report a transient failure instead of
    /// matching.
    pub fn with_failing(mut self, selector: &str) -> Self {
        self.failing.insert(selector.to_string());
        self
    }
}

#[async_trait]
impl ProfilePage for FixturePage {
    type Node = FixtureNode;

    async fn find_all(&self, selector: &str) -> QueryResult<Vec<FixtureNode>> {
        if self.failing.contains(selector) {
            return Err(QueryError::Timeout);
        }
        Ok(self.nodes.get(selector).cloned().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FixtureSession {
    pages: HashMap<String, FixturePage>,
}

impl FixtureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, page: FixturePage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }
}

#[async_trait]
impl PageSession for FixtureSession {
    type Page = FixturePage;

    async fn load(&self, url: &str) -> QueryResult<FixturePage> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| QueryError::Backend(format!("no fixture page for {}", url)))
    }
}
