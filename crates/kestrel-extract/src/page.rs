use async_trait::async_trait;

use crate::error::QueryResult;

/// A node handle inside a rendered page.
#[async_trait]
pub trait PageNode: Send + Sync + Sized {
    /// Nodes matching `selector` within this node's sub-tree, in
    /// document order. An empty vec is a valid answer, not an error.
    async fn find_all(&self, selector: &str) -> QueryResult<Vec<Self>>;

    /// Visible text of this node.
    async fn text(&self) -> QueryResult<String>;

    /// Raw attribute value, `None` when the attribute is absent.
    async fn attribute(&self, name: &str) -> QueryResult<Option<String>>;
}

/// A rendered page, queryable but otherwise opaque. The extractor
/// never binds to a concrete document or browser type through this
/// seam, so it runs unchanged against synthetic fixtures.
#[async_trait]
pub trait ProfilePage: Send + Sync {
    type Node: PageNode;

    /// Nodes matching `selector` anywhere in the document, in document
    /// order.
    async fn find_all(&self, selector: &str) -> QueryResult<Vec<Self::Node>>;
}

/// Loads pages for extraction.
///
/// A session's page handles are stateful and inherently sequential:
/// one session must not serve concurrent extractions. Run one session
/// per worker instead.
#[async_trait]
pub trait PageSession: Send + Sync {
    type Page: ProfilePage;

    async fn load(&self, url: &str) -> QueryResult<Self::Page>;
}
