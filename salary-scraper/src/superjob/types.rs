use serde::{Deserialize, Serialize};

/// SuperJob sends `0` instead of `null` for a missing bound
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub payment_from: Option<f64>,
    pub payment_to: Option<f64>,
    pub currency: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse {
    pub total: u32,
    pub objects: Vec<Vacancy>,
}
