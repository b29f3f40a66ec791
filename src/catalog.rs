use reqwest::Client;

use crate::data_models::{CatalogEntry, Scope, SearchQuery};
use crate::error::Result;
use crate::lookup::FilmSource;
use crate::search::SearchClient;

/// Finds the film-database page for a title. Nothing is fetched beyond the
/// search itself.
#[derive(Debug, Clone)]
pub struct CatalogLookup {
    search: SearchClient,
}

impl CatalogLookup {
    pub fn new(search: SearchClient) -> CatalogLookup {
        CatalogLookup { search }
    }
}

impl FilmSource for CatalogLookup {
    type Output = CatalogEntry;

    async fn lookup(&self, http: &Client, title: &str) -> Result<CatalogEntry> {
        let query = SearchQuery::new(Scope::Catalog, title);
        let hit = self.search.search(http, &query).await?;
        Ok(CatalogEntry {
            catalog_link: hit.link,
        })
    }
}
