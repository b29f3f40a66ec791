use mockito::{Matcher, Mock, Server, ServerGuard};
use reqwest::Client;

use filmbot::catalog::CatalogLookup;
use filmbot::data_models::{EncyclopediaEntry, FilmSummary, Scope};
use filmbot::encyclopedia::{DEFAULT_CONTENT_ID, EncyclopediaLookup};
use filmbot::error::LookupError;
use filmbot::lookup::{FilmService, FilmSource};
use filmbot::search::SearchClient;

mod test_helpers {
    use super::*;

    pub const SEARCH_PATH: &str = "/customsearch/v1";
    pub const CATALOG_CX: &str = "cx-catalog";
    pub const ENCYCLOPEDIA_CX: &str = "cx-wiki";

    pub const INCEPTION_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Inception - Wiki</title></head>
<body>
  <div id="siteNotice"><p>Donate today</p></div>
  <div id="mw-content-text">
    <table class="infobox">
      <tr><td>
        <a href="/wiki/File:Inception.jpg" class="image"><img src="//upload.site/poster.jpg" alt="Poster"></a>
      </td></tr>
    </table>
    <p class="mw-empty-elt"></p>
    <p>A 2010 film...</p>
    <p>Second paragraph.</p>
  </div>
</body>
</html>"#;

    pub fn search_client(server: &ServerGuard) -> SearchClient {
        SearchClient::new(
            format!("{}{}", server.url(), SEARCH_PATH),
            "test-key",
            CATALOG_CX,
            ENCYCLOPEDIA_CX,
        )
    }

    pub fn items_body(links: &[&str]) -> String {
        let items: Vec<serde_json::Value> = links
            .iter()
            .map(|link| serde_json::json!({ "link": link }))
            .collect();
        serde_json::json!({ "items": items }).to_string()
    }

    pub async fn mock_search(server: &mut ServerGuard, cx: &str, title: &str, body: String) -> Mock {
        server
            .mock("GET", SEARCH_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("cx".into(), cx.into()),
                Matcher::UrlEncoded("q".into(), title.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    pub async fn mock_page(server: &mut ServerGuard, path: &str, html: &str) -> Mock {
        server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(html)
            .create_async()
            .await
    }
}

use test_helpers::*;

#[tokio::test]
async fn test_encyclopedia_lookup_inception() {
    let mut server = Server::new_async().await;
    let page_url = format!("{}/wiki/Inception", server.url());
    let search = mock_search(&mut server, ENCYCLOPEDIA_CX, "Inception", items_body(&[&page_url])).await;
    let page = mock_page(&mut server, "/wiki/Inception", INCEPTION_PAGE).await;

    let lookup = EncyclopediaLookup::new(search_client(&server), DEFAULT_CONTENT_ID);
    let entry = lookup.lookup(&Client::new(), "Inception").await.unwrap();

    assert_eq!(
        entry,
        EncyclopediaEntry {
            description: "A 2010 film...".to_string(),
            poster_ref: "upload.site/poster.jpg".to_string(),
        }
    );
    search.assert_async().await;
    page.assert_async().await;
}

#[tokio::test]
async fn test_encyclopedia_lookup_missing_container_is_parse_error() {
    let mut server = Server::new_async().await;
    let page_url = format!("{}/wiki/Stub", server.url());
    let _search = mock_search(&mut server, ENCYCLOPEDIA_CX, "Stub", items_body(&[&page_url])).await;
    let _page = mock_page(
        &mut server,
        "/wiki/Stub",
        r#"<html><body><div id="content"><p>Text</p><a class="image"><img src="//x/y.jpg"></a></div></body></html>"#,
    )
    .await;

    let lookup = EncyclopediaLookup::new(search_client(&server), DEFAULT_CONTENT_ID);
    let err = lookup.lookup(&Client::new(), "Stub").await.unwrap_err();
    assert!(matches!(err, LookupError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_encyclopedia_lookup_page_fetch_failure_is_transport_error() {
    let mut server = Server::new_async().await;
    let page_url = format!("{}/wiki/Gone", server.url());
    let _search = mock_search(&mut server, ENCYCLOPEDIA_CX, "Gone", items_body(&[&page_url])).await;
    let _page = server
        .mock("GET", "/wiki/Gone")
        .with_status(404)
        .create_async()
        .await;

    let lookup = EncyclopediaLookup::new(search_client(&server), DEFAULT_CONTENT_ID);
    let err = lookup.lookup(&Client::new(), "Gone").await.unwrap_err();
    assert!(matches!(err, LookupError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_encyclopedia_lookup_no_results_skips_page_fetch() {
    let mut server = Server::new_async().await;
    let _search = mock_search(&mut server, ENCYCLOPEDIA_CX, "", items_body(&[])).await;
    let page = server
        .mock("GET", Matcher::Regex("^/wiki/".to_string()))
        .expect(0)
        .create_async()
        .await;

    let lookup = EncyclopediaLookup::new(search_client(&server), DEFAULT_CONTENT_ID);
    let err = lookup.lookup(&Client::new(), "").await.unwrap_err();

    assert!(matches!(
        err,
        LookupError::NoResults {
            scope: Scope::Encyclopedia
        }
    ));
    page.assert_async().await;
}

#[tokio::test]
async fn test_catalog_lookup_returns_link_unchanged() {
    let mut server = Server::new_async().await;
    let link = "https://catalog.example/film/447301/?utm=search";
    let _search = mock_search(
        &mut server,
        CATALOG_CX,
        "Inception",
        items_body(&[link, "https://catalog.example/film/2/"]),
    )
    .await;

    let lookup = CatalogLookup::new(search_client(&server));
    let entry = lookup.lookup(&Client::new(), "Inception").await.unwrap();
    assert_eq!(entry.catalog_link, link);
}

#[tokio::test]
async fn test_film_service_merges_both_lookups() {
    let mut server = Server::new_async().await;
    let page_url = format!("{}/wiki/Inception", server.url());
    let _search = mock_search(&mut server, ENCYCLOPEDIA_CX, "Inception", items_body(&[&page_url])).await;
    let _catalog = mock_search(
        &mut server,
        CATALOG_CX,
        "Inception",
        items_body(&["https://catalog.example/film/447301/"]),
    )
    .await;
    let _page = mock_page(&mut server, "/wiki/Inception", INCEPTION_PAGE).await;

    let service = FilmService::from_search(search_client(&server), DEFAULT_CONTENT_ID);
    let summary = service.film_info("Inception").await.unwrap();

    assert_eq!(
        summary,
        FilmSummary {
            description: "A 2010 film...".to_string(),
            poster_ref: "upload.site/poster.jpg".to_string(),
            catalog_link: "https://catalog.example/film/447301/".to_string(),
        }
    );
}

#[tokio::test]
async fn test_film_service_surfaces_catalog_error() {
    let mut server = Server::new_async().await;
    let page_url = format!("{}/wiki/Inception", server.url());
    let _search = mock_search(&mut server, ENCYCLOPEDIA_CX, "Inception", items_body(&[&page_url])).await;
    let _catalog = mock_search(&mut server, CATALOG_CX, "Inception", items_body(&[])).await;
    let _page = mock_page(&mut server, "/wiki/Inception", INCEPTION_PAGE).await;

    let service = FilmService::from_search(search_client(&server), DEFAULT_CONTENT_ID);
    let err = service.film_info("Inception").await.unwrap_err();

    assert!(matches!(
        err,
        LookupError::NoResults {
            scope: Scope::Catalog
        }
    ));
}

#[tokio::test]
async fn test_film_service_does_not_trim_title() {
    let mut server = Server::new_async().await;
    let _catalog = mock_search(&mut server, CATALOG_CX, "  Alien ", items_body(&[])).await;
    let _encyclopedia = mock_search(&mut server, ENCYCLOPEDIA_CX, "  Alien ", items_body(&[])).await;

    let service = FilmService::from_search(search_client(&server), DEFAULT_CONTENT_ID);
    let err = service.film_info("  Alien ").await.unwrap_err();

    assert!(matches!(err, LookupError::NoResults { .. }));
}
