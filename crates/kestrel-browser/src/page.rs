use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::element::Element;
use chromiumoxide::error::CdpError;
use chromiumoxide::page::Page;

use kestrel_extract::{PageNode, ProfilePage, QueryError, QueryResult};

/// Bound on any single structural query so a stuck page cannot block a
/// worker indefinitely. Expiry reads as "pattern did not match".
const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

async fn bounded<T, F>(op: F) -> QueryResult<T>
where
    F: std::future::Future<Output = std::result::Result<T, CdpError>>,
{
    match tokio::time::timeout(QUERY_TIMEOUT, op).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(CdpError::Timeout)) => Err(QueryError::Timeout),
        Ok(Err(e)) => Err(QueryError::Backend(e.to_string())),
        Err(_) => Err(QueryError::Timeout),
    }
}

/// Structural-query view of a live CDP tab.
#[derive(Clone)]
pub struct CdpPage {
    page: Page,
}

impl CdpPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

#[async_trait]
impl ProfilePage for CdpPage {
    type Node = CdpElement;

    async fn find_all(&self, selector: &str) -> QueryResult<Vec<CdpElement>> {
        let elements = bounded(self.page.find_elements(selector)).await?;
        Ok(elements.into_iter().map(CdpElement::new).collect())
    }
}

/// A DOM element handle scoped to one rendered document. Queries fail
/// with `Detached` once the document navigates away underneath it.
pub struct CdpElement {
    element: Element,
}

impl CdpElement {
    fn new(element: Element) -> Self {
        Self { element }
    }
}

#[async_trait]
impl PageNode for CdpElement {
    async fn find_all(&self, selector: &str) -> QueryResult<Vec<Self>> {
        match bounded(self.element.find_elements(selector)).await {
            Ok(elements) => Ok(elements.into_iter().map(CdpElement::new).collect()),
            Err(QueryError::Backend(msg)) if msg.contains("node") => {
                Err(QueryError::Detached(msg))
            }
            Err(e) => Err(e),
        }
    }

    async fn text(&self) -> QueryResult<String> {
        let text = bounded(self.element.inner_text()).await?;
        Ok(text.unwrap_or_default().trim().to_string())
    }

    async fn attribute(&self, name: &str) -> QueryResult<Option<String>> {
        bounded(self.element.attribute(name)).await
    }
}
