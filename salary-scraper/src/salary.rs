use serde::{Deserialize, Serialize};

/// Salary bounds as published by a job board.
/// A bound of zero counts as missing, SuperJob reports `0` when a bound is not given.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct SalaryRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl SalaryRange {
    pub fn new(from: Option<f64>, to: Option<f64>) -> Self {
        Self { from, to }
    }

    pub fn estimate(&self) -> Option<f64> {
        estimate(self.from, self.to)
    }
}

/// Point estimate for a salary range.
/// A lone floor is scaled up by 20%, a lone ceiling scaled down by 20%.
pub fn estimate(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    let from = from.filter(|value| *value > 0.0);
    let to = to.filter(|value| *value > 0.0);
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    pub processed: usize,
    /// `None` when no listing produced an estimate
    pub average: Option<u64>,
}

pub fn aggregate(estimates: &[Option<f64>]) -> Aggregate {
    let (processed, sum) = estimates
        .iter()
        .flatten()
        .fold((0usize, 0.0f64), |(count, sum), salary| (count + 1, sum + salary));
    let average = match processed {
        0 => None,
        n => Some((sum / n as f64).trunc() as u64),
    };
    Aggregate { processed, average }
}
