use reqwest::Client;

use crate::catalog::CatalogLookup;
use crate::data_models::FilmSummary;
use crate::encyclopedia::EncyclopediaLookup;
use crate::error::Result;
use crate::search::SearchClient;

/// A source of film information keyed by a free-text title.
pub trait FilmSource {
    type Output;

    fn lookup(
        &self,
        http: &Client,
        title: &str,
    ) -> impl Future<Output = Result<Self::Output>> + Send;
}

/// Answers `film_info` requests by combining the catalog and encyclopedia
/// lookups.
pub struct FilmService {
    catalog: CatalogLookup,
    encyclopedia: EncyclopediaLookup,
}

impl FilmService {
    pub fn new(catalog: CatalogLookup, encyclopedia: EncyclopediaLookup) -> FilmService {
        FilmService {
            catalog,
            encyclopedia,
        }
    }

    /// Both lookups share one search client; the encyclopedia side looks for
    /// its description inside the element with `content_id`.
    pub fn from_search(search: SearchClient, content_id: impl Into<String>) -> FilmService {
        FilmService::new(
            CatalogLookup::new(search.clone()),
            EncyclopediaLookup::new(search, content_id),
        )
    }

    /// Looks a title up in both sources. The title is used verbatim.
    ///
    /// The HTTP client lives for this call only and is dropped on every exit
    /// path. The two lookups run concurrently and the first error wins.
    pub async fn film_info(&self, title: &str) -> Result<FilmSummary> {
        let http = Client::new();

        let (encyclopedia, catalog) = futures::try_join!(
            self.encyclopedia.lookup(&http, title),
            self.catalog.lookup(&http, title),
        )?;

        log::info!("found film info for {:?}", title);
        Ok(FilmSummary::new(encyclopedia, catalog))
    }
}
