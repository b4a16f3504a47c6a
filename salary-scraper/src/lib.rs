pub mod config;
pub mod fetch;
pub mod headhunter;
pub mod report;
pub mod salary;
pub mod superjob;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use fetch::{fetch_vacancies, http_client, Transport, VacancySource};
pub use report::{LanguageSummary, Report};
pub use types::{Error, Result};

pub const LANGUAGES: [&str; 10] = [
    "Python",
    "JavaScript",
    "Java",
    "C++",
    "Ruby",
    "PHP",
    "C#",
    "C",
    "TypeScript",
    "Go",
];

/// Both boards are searched for "Programmer <language>"
const QUERY_PREFIX: &str = "Программист";

pub fn search_query(language: &str) -> String {
    format!("{} {}", QUERY_PREFIX, language)
}

/// Search every language on one board, in order, and summarize the salaries found
pub async fn build_report<S, T>(source: &S, transport: &T, languages: &[String]) -> Result<Report>
where
    S: VacancySource,
    T: Transport + ?Sized,
{
    let mut summaries = Vec::with_capacity(languages.len());
    for language in languages {
        let vacancies = fetch_vacancies(source, transport, &search_query(language)).await?;
        let aggregate = salary::aggregate(&vacancies.estimates);
        log::info!(
            "{}: {} found, {} processed for {}",
            source.title(),
            vacancies.found,
            aggregate.processed,
            language
        );
        summaries.push(LanguageSummary::new(
            language.as_str(),
            vacancies.found,
            aggregate,
        ));
    }
    Ok(Report::new(source.title(), summaries))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::headhunter::HeadHunter;
    use crate::superjob::SuperJob;
    use crate::testing::{query_param, FakeTransport};

    fn languages() -> Vec<String> {
        LANGUAGES.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_search_query() {
        assert_eq!(search_query("C#"), "Программист C#");
    }

    #[tokio::test]
    async fn test_headhunter_report() {
        // two rouble listings, one in dollars
        let transport = FakeTransport::new(|_| {
            Ok(r#"{"found": 3, "pages": 1, "items": [
                {"salary": {"from": 100000, "to": 150000, "currency": "RUR"}},
                {"salary": {"from": 90001, "to": null, "currency": "RUR"}},
                {"salary": {"from": 5000, "to": 7000, "currency": "USD"}}
            ]}"#
            .to_owned())
        });
        let report = build_report(&HeadHunter::default(), &transport, &languages())
            .await
            .expect("Report should build");

        assert_eq!(transport.requests().len(), 10);
        assert_eq!(report.title, "HeadHunter, Moscow");
        let names = report
            .summaries
            .iter()
            .map(|summary| summary.language.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, LANGUAGES.to_vec());
        // (125000 + 108001.2) / 2 = 116500.6
        for summary in &report.summaries {
            assert_eq!(summary.vacancies_found, 3);
            assert_eq!(summary.vacancies_processed, 2);
            assert_eq!(summary.average_salary, Some(116500));
        }
        assert!(report
            .to_string()
            .contains("| TypeScript |               3 |                   2 |         116500 |"));
    }

    #[tokio::test]
    async fn test_superjob_report() {
        let transport = FakeTransport::new(|request| {
            let keywords = query_param(&request.url, "keywords").expect("keywords parameter");
            if keywords == "Программист C" {
                return Ok(r#"{"total": 0, "objects": []}"#.to_owned());
            }
            Ok(r#"{"total": 3, "objects": [
                {"payment_from": 80000, "payment_to": 120000, "currency": "rub"},
                {"payment_from": 0, "payment_to": 75000, "currency": "rub"},
                {"payment_from": 3000, "payment_to": 0, "currency": "usd"}
            ]}"#
            .to_owned())
        });
        let source = SuperJob::new("key".to_owned());
        let report = build_report(&source, &transport, &languages())
            .await
            .expect("Report should build");

        let python = &report.summaries[0];
        assert_eq!(python.vacancies_processed, 2);
        // (100000 + 60000) / 2
        assert_eq!(python.average_salary, Some(80000));

        let c = &report.summaries[7];
        assert_eq!(c.language, "C");
        assert_eq!(c.vacancies_found, 0);
        assert_eq!(c.vacancies_processed, 0);
        assert_eq!(c.average_salary, None);
        assert!(report
            .to_string()
            .contains("| C          |               0 |                   0 |            n/a |"));
    }

    #[tokio::test]
    async fn test_failure_aborts_report() {
        let transport = FakeTransport::new(|request| {
            Err(Error::RequestNotOk {
                url: request.url.clone(),
                status: 403,
            })
        });
        let result = build_report(&HeadHunter::default(), &transport, &languages()).await;
        assert!(matches!(result, Err(Error::RequestNotOk { status: 403, .. })));
        assert_eq!(transport.requests().len(), 1);
    }
}
