use reqwest::Client;
use serde_json::Value;

use crate::data_models::{Scope, SearchQuery, SearchResult};
use crate::error::{LookupError, Result};

/// Keyed, site-restricted web search. One `cx` per scope.
#[derive(Debug, Clone)]
pub struct SearchClient {
    endpoint: String,
    api_key: String,
    catalog_cx: String,
    encyclopedia_cx: String,
}

impl SearchClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        catalog_cx: impl Into<String>,
        encyclopedia_cx: impl Into<String>,
    ) -> SearchClient {
        SearchClient {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            catalog_cx: catalog_cx.into(),
            encyclopedia_cx: encyclopedia_cx.into(),
        }
    }

    pub fn site_id(&self, scope: Scope) -> &str {
        match scope {
            Scope::Catalog => &self.catalog_cx,
            Scope::Encyclopedia => &self.encyclopedia_cx,
        }
    }

    /// Runs one search and returns the link of the first hit. No retries.
    pub async fn search(&self, http: &Client, query: &SearchQuery) -> Result<SearchResult> {
        log::debug!("searching {} scope for {:?}", query.scope, query.title);

        let params = [
            ("key", self.api_key.as_str()),
            ("cx", self.site_id(query.scope)),
            ("q", query.title.as_str()),
        ];
        let res = http
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|e| LookupError::transport(&self.endpoint, e))?;

        let status = res.status();
        if !status.is_success() {
            return Err(LookupError::from_status(&self.endpoint, status));
        }

        let body = res
            .text()
            .await
            .map_err(|e| LookupError::transport(&self.endpoint, e))?;

        first_link(&body, query.scope)
    }
}

/// Picks `items[0].link` out of a search response body.
///
/// The body must be a JSON object. The API leaves `items` out entirely when
/// nothing matched, so a missing or `null` array counts as an empty one.
pub fn first_link(body: &str, scope: Scope) -> Result<SearchResult> {
    let response: Value = serde_json::from_str(body)
        .map_err(|e| LookupError::MalformedResponse(format!("invalid JSON body: {e}")))?;

    let response = response.as_object().ok_or_else(|| {
        LookupError::MalformedResponse("response body is not a JSON object".to_string())
    })?;

    let items = match response.get("items") {
        None | Some(Value::Null) => &[][..],
        Some(Value::Array(items)) => items.as_slice(),
        Some(_) => {
            return Err(LookupError::MalformedResponse(
                "items is not an array".to_string(),
            ));
        }
    };
    let first = items.first().ok_or(LookupError::NoResults { scope })?;

    let link = first
        .get("link")
        .and_then(Value::as_str)
        .ok_or_else(|| LookupError::MalformedResponse("first item has no link".to_string()))?;

    Ok(SearchResult {
        link: link.to_string(),
    })
}
