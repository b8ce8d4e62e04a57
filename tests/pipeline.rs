//! End-to-end scrape path against a local mock server.

use jobwatch::fetch::Clients;
use jobwatch::process::scrape_site;
use jobwatch::sites::{Abb, Azercell, Pashabank, Rabitabank, Site};
use jobwatch::PostingTable;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AZERCELL_PAGE: &str = r#"
    <section class="section_vacancies">
      <a class="vacancies__link" href="/az/careers/1"><h4 class="vacancies__name">Data Engineer</h4></a>
      <a class="vacancies__link" href="/az/careers/2"><h4 class="vacancies__name">Scrum Master</h4></a>
      <a class="vacancies__link" href="/az/careers/3"><h4 class="vacancies__name">Senior Auditor</h4></a>
    </section>"#;

const RABITABANK_PAGE: &str = r#"
    <div id="vacancies">
      <div><a href="/v/1">Fraud Analyst</a></div>
      <div><a href="/v/2">Compliance Officer</a></div>
      <div><a href="/v/3">Branch Manager</a></div>
    </div>"#;

#[tokio::test]
async fn failed_site_is_skipped_and_the_rest_aggregate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/az/about-us/career.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(AZERCELL_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/insan-resurslari/vakansiyalar"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RABITABANK_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/az/page/vakansiyalar"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let clients = Clients::build().unwrap();
    let sites: Vec<Box<dyn Site>> = vec![
        Box::new(Azercell::with_base_url(server.uri())),
        Box::new(Pashabank::with_base_url(server.uri())),
        Box::new(Rabitabank::with_base_url(server.uri())),
    ];

    let mut results = Vec::new();
    let mut failed = Vec::new();
    for site in &sites {
        match scrape_site(&clients, site.as_ref()).await {
            Ok(postings) => results.push((site.name(), postings)),
            Err(err) => failed.push((site.name(), err)),
        }
    }

    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].0, "pashabank");
    assert!(failed[0].1.to_string().contains("500"));

    let table = PostingTable::aggregate(results);
    assert_eq!(table.len(), 6);
    let sources: Vec<_> = table.rows().iter().map(|p| p.source.as_str()).collect();
    assert_eq!(
        sources,
        ["azercell", "azercell", "azercell", "rabitabank", "rabitabank", "rabitabank"]
    );
    assert!(table
        .rows()
        .iter()
        .all(|p| !p.title.is_empty() && !p.link.is_empty()));
}

#[tokio::test]
async fn paginated_site_walks_pages_until_an_empty_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vacancy/v2/get"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data":[{"title":"Risk Analyst","url":"https://x/1"},{"title":"SQL Developer","url":"https://x/2"}]}"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/vacancy/v2/get"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
        .mount(&server)
        .await;

    let clients = Clients::build().unwrap();
    let site = Abb::with_base_url(server.uri());

    let postings = scrape_site(&clients, &site).await.unwrap();
    assert_eq!(postings.len(), 2);
    assert_eq!(postings[0].title, "Risk Analyst");
}
