use std::fmt;

use serde::{Deserialize, Serialize};

/// Which site a search is restricted to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Catalog,
    Encyclopedia,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Catalog => write!(f, "catalog"),
            Scope::Encyclopedia => write!(f, "encyclopedia"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: String,
    pub scope: Scope,
}

impl SearchQuery {
    pub fn new(scope: Scope, title: &str) -> SearchQuery {
        SearchQuery {
            title: title.to_string(),
            scope,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub link: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub catalog_link: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EncyclopediaEntry {
    pub description: String,
    pub poster_ref: String,
}

/// The merged reply for one title. Built once per request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FilmSummary {
    pub description: String,
    pub poster_ref: String,
    pub catalog_link: String,
}

impl FilmSummary {
    pub fn new(encyclopedia: EncyclopediaEntry, catalog: CatalogEntry) -> FilmSummary {
        FilmSummary {
            description: encyclopedia.description,
            poster_ref: encyclopedia.poster_ref,
            catalog_link: catalog.catalog_link,
        }
    }

    /// Caption sent along with the poster in a chat reply.
    pub fn caption(&self) -> String {
        format!(
            "{}\n\nWatch link: {}\n",
            self.description, self.catalog_link
        )
    }
}

#[test]
fn test_caption_layout() {
    let summary = FilmSummary {
        description: "A 2010 film.".to_string(),
        poster_ref: "upload.site/poster.jpg".to_string(),
        catalog_link: "https://catalog.example/film/447301/".to_string(),
    };
    assert_eq!(
        summary.caption(),
        "A 2010 film.\n\nWatch link: https://catalog.example/film/447301/\n"
    );
}
