pub(crate) mod types;

use crate::fetch::{Listing, PageRequest, VacancySource};
use crate::salary::SalaryRange;
use types::ApiResponse;

const DEFAULT_BASE_URL: &str = "https://api.hh.ru/vacancies";
/// hh.ru area id
const MOSCOW: u32 = 1;
const PERIOD_DAYS: u32 = 30;

/// hh.ru vacancy search, salaries in roubles are tagged `RUR`
pub struct HeadHunter {
    base_url: String,
}

impl Default for HeadHunter {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl HeadHunter {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl VacancySource for HeadHunter {
    type Page = ApiResponse;

    fn title(&self) -> &str {
        "HeadHunter, Moscow"
    }

    fn currency(&self) -> &str {
        "RUR"
    }

    fn page_request(&self, query: &str, page: u32) -> PageRequest {
        PageRequest::new(format!(
            "{}?text={}&area={}&period={}&page={}",
            self.base_url,
            urlencoding::encode(query),
            MOSCOW,
            PERIOD_DAYS,
            page
        ))
    }

    fn total(&self, page: &ApiResponse) -> u32 {
        page.found
    }

    fn page_count(&self, page: &ApiResponse) -> u32 {
        page.pages
    }

    fn listings(&self, page: ApiResponse) -> Vec<Listing> {
        page.items
            .into_iter()
            .map(|vacancy| match vacancy.salary {
                Some(salary) => Listing {
                    currency: Some(salary.currency),
                    salary: SalaryRange::new(salary.from, salary.to),
                },
                None => Listing::default(),
            })
            .collect()
    }
}
