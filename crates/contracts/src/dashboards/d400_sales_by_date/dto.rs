use crate::domain::a005_order::Order;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Размер временного интервала для группировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    pub fn code(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Granularity::Daily),
            "weekly" => Some(Granularity::Weekly),
            "monthly" => Some(Granularity::Monthly),
            _ => None,
        }
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::Daily
    }
}

/// Request for sales-by-date dashboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SalesByDateRequest {
    #[serde(default)]
    pub granularity: Granularity,
}

/// One time bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateBucket {
    /// "YYYY-MM-DD" for days and weeks (week start, Monday), "YYYY-MM" for months
    pub label: String,
    /// First day covered by the bucket
    pub period_start: NaiveDate,
    pub order_count: usize,
    pub total: f64,
    pub orders: Vec<Order>,
}

/// Response for sales-by-date dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesByDateResponse {
    pub granularity: Granularity,
    /// Buckets in chronological order
    pub buckets: Vec<DateBucket>,
    pub grand_total: f64,
    /// Records skipped because of an unreadable row or date
    pub skipped: usize,
}
