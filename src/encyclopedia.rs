use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

use crate::data_models::{EncyclopediaEntry, Scope, SearchQuery};
use crate::error::{LookupError, Result};
use crate::lookup::FilmSource;
use crate::search::SearchClient;

pub const DEFAULT_CONTENT_ID: &str = "mw-content-text";

/// Finds the encyclopedia article for a title and pulls a description and a
/// poster out of its markup.
///
/// Extraction is purely structural and always takes the first match:
/// - description: first `<p>` without a `class` attribute inside the content
///   container
/// - poster: `src` of the first `<img>` inside the first `<a class="image">`,
///   minus its first two characters (the `//` of a protocol-relative URL)
#[derive(Debug, Clone)]
pub struct EncyclopediaLookup {
    search: SearchClient,
    content_id: String,
}

impl EncyclopediaLookup {
    pub fn new(search: SearchClient, content_id: impl Into<String>) -> EncyclopediaLookup {
        EncyclopediaLookup {
            search,
            content_id: content_id.into(),
        }
    }

    async fn fetch_page(&self, http: &Client, url: &str) -> Result<String> {
        let res = http
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::transport(url, e))?;

        let status = res.status();
        if !status.is_success() {
            return Err(LookupError::from_status(url, status));
        }

        res.text().await.map_err(|e| LookupError::transport(url, e))
    }

    /// Parses a fetched article into an entry.
    pub fn parse_page(&self, html: &str) -> Result<EncyclopediaEntry> {
        let document = Html::parse_document(html);
        Ok(EncyclopediaEntry {
            description: extract_description(&document, &self.content_id)?,
            poster_ref: extract_poster_ref(&document)?,
        })
    }
}

impl FilmSource for EncyclopediaLookup {
    type Output = EncyclopediaEntry;

    async fn lookup(&self, http: &Client, title: &str) -> Result<EncyclopediaEntry> {
        let query = SearchQuery::new(Scope::Encyclopedia, title);
        let hit = self.search.search(http, &query).await?;

        log::debug!("fetching encyclopedia page {}", hit.link);
        let html = self.fetch_page(http, &hit.link).await?;

        self.parse_page(&html)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| LookupError::Parse(format!("selector {css:?}: {e}")))
}

fn first<'a>(scope: ElementRef<'a>, css: &str, what: &str) -> Result<ElementRef<'a>> {
    let sel = selector(css)?;
    scope
        .select(&sel)
        .next()
        .ok_or_else(|| LookupError::Parse(what.to_string()))
}

fn body(document: &Html) -> Result<ElementRef<'_>> {
    first(document.root_element(), "body", "<body>")
}

/// Text of the first unclassed paragraph in the container with `content_id`.
/// Whatever that paragraph holds is returned, even when it is empty.
pub fn extract_description(document: &Html, content_id: &str) -> Result<String> {
    let body = body(document)?;

    // Attribute form keeps ids that are not valid CSS identifiers usable.
    let container_css = format!("div[id=\"{}\"]", content_id.replace('"', "\\\""));
    let container = first(body, &container_css, &format!("container #{content_id}"))?;

    let paragraph = first(container, "p:not([class])", "an unclassed paragraph")?;
    Ok(paragraph.text().collect::<String>())
}

/// `src` of the first image inside the first image link, without its first
/// two characters.
pub fn extract_poster_ref(document: &Html) -> Result<String> {
    let body = body(document)?;
    let link = first(body, "a.image", "an image link")?;
    let img = first(link, "img", "an <img> inside the image link")?;

    let src = img
        .value()
        .attr("src")
        .ok_or_else(|| LookupError::Parse("src on the poster <img>".to_string()))?;

    Ok(src.chars().skip(2).collect())
}
