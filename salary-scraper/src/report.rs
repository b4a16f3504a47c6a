use std::fmt::{self, Display};

use crate::salary::Aggregate;

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];
const NO_DATA: &str = "n/a";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSummary {
    pub language: String,
    /// Matches reported by the board, paging aside
    pub vacancies_found: u32,
    /// Listings that produced a salary estimate
    pub vacancies_processed: usize,
    pub average_salary: Option<u64>,
}

impl LanguageSummary {
    pub fn new(language: impl Into<String>, vacancies_found: u32, aggregate: Aggregate) -> Self {
        Self {
            language: language.into(),
            vacancies_found,
            vacancies_processed: aggregate.processed,
            average_salary: aggregate.average,
        }
    }

    fn cells(&self) -> [String; 4] {
        [
            self.language.clone(),
            self.vacancies_found.to_string(),
            self.vacancies_processed.to_string(),
            self.average_salary
                .map(|salary| salary.to_string())
                .unwrap_or_else(|| NO_DATA.to_owned()),
        ]
    }
}

/// Salary summaries of one board, rendered as an ascii table through `Display`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub summaries: Vec<LanguageSummary>,
}

impl Report {
    pub fn new(title: impl Into<String>, summaries: Vec<LanguageSummary>) -> Self {
        Self {
            title: title.into(),
            summaries,
        }
    }
}

fn border(widths: &[usize]) -> String {
    let segments = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>();
    format!("+{}+", segments.join("+"))
}

/// The title replaces the start of the top border when it fits
fn top_border(widths: &[usize], title: &str) -> String {
    let border = border(widths);
    let title_len = title.chars().count();
    if title_len + 2 > border.chars().count() {
        return border;
    }
    let rest = border.chars().skip(title_len + 1).collect::<String>();
    format!("+{}{}", title, rest)
}

fn row(cells: &[String], widths: &[usize]) -> String {
    let cells = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, width))| match column {
            0 => format!(" {:<width$} ", cell, width = *width),
            _ => format!(" {:>width$} ", cell, width = *width),
        })
        .collect::<Vec<_>>();
    format!("|{}|", cells.join("|"))
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = HEADERS.map(String::from);
        let rows = self
            .summaries
            .iter()
            .map(LanguageSummary::cells)
            .collect::<Vec<_>>();
        let mut widths = header.iter().map(|cell| cell.chars().count()).collect::<Vec<_>>();
        for cells in &rows {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(f, "{}", top_border(&widths, &self.title))?;
        writeln!(f, "{}", row(&header, &widths))?;
        writeln!(f, "{}", border(&widths))?;
        for cells in &rows {
            writeln!(f, "{}", row(cells, &widths))?;
        }
        write!(f, "{}", border(&widths))
    }
}
