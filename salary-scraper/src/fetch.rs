use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Client,
};
use serde::de::DeserializeOwned;

use crate::salary::SalaryRange;
use crate::types::{Error, Result};

const CLIENT_USER_AGENT: &str = concat!("salary-scraper/", env!("CARGO_PKG_VERSION"));

/// A single GET against a search endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl PageRequest {
    pub fn new(url: String) -> Self {
        Self {
            url,
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: &'static str, value: String) -> Self {
        self.headers.push((name, value));
        self
    }
}

/// Performs requests and hands back the raw response body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, request: &PageRequest) -> Result<String>;
}

#[async_trait]
impl Transport for Client {
    async fn fetch(&self, request: &PageRequest) -> Result<String> {
        let mut builder = self.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let error_body = resp.text().await;
            log::error!(
                "request to {} failed with status: {}, error resp body: {:?}",
                request.url,
                status,
                error_body,
            );
            return Err(Error::RequestNotOk {
                url: request.url.clone(),
                status: status.as_u16(),
            });
        }
        Ok(resp.text().await?)
    }
}

/// Client used against the real job boards.
pub fn http_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
    Ok(Client::builder().default_headers(headers).build()?)
}

/// A vacancy normalized across job boards
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    pub currency: Option<String>,
    pub salary: SalaryRange,
}

impl Listing {
    /// Only salaries quoted in `currency` are comparable, others yield no estimate
    pub fn estimate(&self, currency: &str) -> Option<f64> {
        match self.currency.as_deref() {
            Some(listed) if listed == currency => self.salary.estimate(),
            _ => None,
        }
    }
}

/// Adapter describing how a job board is queried and how its pages are read.
pub trait VacancySource {
    type Page: DeserializeOwned;

    /// Table title, board and region
    fn title(&self) -> &str;
    /// Currency code the board uses for local salaries
    fn currency(&self) -> &str;
    fn page_request(&self, query: &str, page: u32) -> PageRequest;
    /// Number of vacancies matching the query, independent of paging
    fn total(&self, page: &Self::Page) -> u32;
    fn page_count(&self, page: &Self::Page) -> u32;
    fn listings(&self, page: Self::Page) -> Vec<Listing>;
}

/// Result of searching one query on one board
#[derive(Debug, Clone, PartialEq)]
pub struct Vacancies {
    pub found: u32,
    /// One entry per listing, `None` where no salary could be derived
    pub estimates: Vec<Option<f64>>,
}

async fn fetch_page<S, T>(source: &S, transport: &T, query: &str, page: u32) -> Result<S::Page>
where
    S: VacancySource,
    T: Transport + ?Sized,
{
    let request = source.page_request(query, page);
    log::debug!(
        "requesting vacancies from {}, page: {}, query: {}",
        source.title(),
        page,
        query
    );
    let body = transport.fetch(&request).await?;
    serde_json::from_str(&body).map_err(|err| Error::MalformedResponse {
        url: request.url,
        source: err,
    })
}

/// Walk every result page for `query` and estimate a salary per listing.
/// The first page doubles as page 0, so each page is requested exactly once.
pub async fn fetch_vacancies<S, T>(source: &S, transport: &T, query: &str) -> Result<Vacancies>
where
    S: VacancySource,
    T: Transport + ?Sized,
{
    let first_page = fetch_page(source, transport, query, 0).await?;
    let found = source.total(&first_page);
    let pages = source.page_count(&first_page);
    let mut listings = source.listings(first_page);
    for page in 1..pages {
        let next_page = fetch_page(source, transport, query, page).await?;
        listings.extend(source.listings(next_page));
    }
    log::debug!(
        "collected {} listings over {} pages from {}, query: {}",
        listings.len(),
        pages,
        source.title(),
        query
    );
    let estimates = listings
        .iter()
        .map(|listing| listing.estimate(source.currency()))
        .collect();
    Ok(Vacancies { found, estimates })
}
