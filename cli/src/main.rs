use clap::Parser;
use dotenv::dotenv;
use salary_scraper::{
    build_report, config::Config, headhunter::HeadHunter, http_client, superjob::SuperJob,
    Transport, VacancySource,
};

/// Compare vacancy counts and average salaries of programming languages
/// on HeadHunter and SuperJob in Moscow
// No options, parsed only to serve --help and --version
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

/// Print the board's table, returns false when the board could not be searched
async fn report<S: VacancySource>(source: &S, transport: &dyn Transport, languages: &[String]) -> bool {
    log::info!("Collecting vacancies from {}", source.title());
    match build_report(source, transport, languages).await {
        Ok(report) => {
            println!("{}", report);
            println!();
            true
        }
        Err(e) => {
            log::error!("Failed to build report for {}: {}", source.title(), e);
            false
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let _cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let client = match http_client() {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build http client: {}", e);
            std::process::exit(1);
        }
    };

    let head_hunter = HeadHunter::default();
    let super_job = SuperJob::new(config.superjob_api_key.clone());
    let head_hunter_ok = report(&head_hunter, &client, &config.languages).await;
    let super_job_ok = report(&super_job, &client, &config.languages).await;
    if !(head_hunter_ok && super_job_ok) {
        std::process::exit(1);
    }
}
