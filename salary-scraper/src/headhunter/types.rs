use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub salary: Option<Salary>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse {
    pub found: u32,
    pub pages: u32,
    pub items: Vec<Vacancy>,
}
