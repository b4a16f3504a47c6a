pub(crate) mod types;

use std::cmp::min;

use crate::fetch::{Listing, PageRequest, VacancySource};
use crate::salary::SalaryRange;
use types::ApiResponse;

const DEFAULT_BASE_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
const API_KEY_HEADER: &str = "X-Api-App-Id";
/// "Development, programming" catalogue
const CATALOGUE: u32 = 48;
/// superjob.ru town id
const MOSCOW: u32 = 4;
const PERIOD_DAYS: u32 = 30;
const RESULTS_PER_PAGE: u32 = 20;
/// The API refuses to page beyond this many results
const MAX_RESULTS: u32 = 500;

/// superjob.ru vacancy search, salaries in roubles are tagged `rub`
pub struct SuperJob {
    api_key: String,
    base_url: String,
}

impl SuperJob {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
        }
    }
}

impl VacancySource for SuperJob {
    type Page = ApiResponse;

    fn title(&self) -> &str {
        "SuperJob, Moscow"
    }

    fn currency(&self) -> &str {
        "rub"
    }

    fn page_request(&self, query: &str, page: u32) -> PageRequest {
        PageRequest::new(format!(
            "{}?catalogues={}&town={}&period={}&keywords={}&page={}&count={}",
            self.base_url,
            CATALOGUE,
            MOSCOW,
            PERIOD_DAYS,
            urlencoding::encode(query),
            page,
            RESULTS_PER_PAGE
        ))
        .header(API_KEY_HEADER, self.api_key.clone())
    }

    fn total(&self, page: &ApiResponse) -> u32 {
        page.total
    }

    fn page_count(&self, page: &ApiResponse) -> u32 {
        min(page.total, MAX_RESULTS).div_ceil(RESULTS_PER_PAGE)
    }

    fn listings(&self, page: ApiResponse) -> Vec<Listing> {
        page.objects
            .into_iter()
            .map(|vacancy| Listing {
                currency: Some(vacancy.currency),
                salary: SalaryRange::new(vacancy.payment_from, vacancy.payment_to),
            })
            .collect()
    }
}
