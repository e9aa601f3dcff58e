use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Календарный месяц
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Period in format "YYYY-MM"
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Request for ingredient usage dashboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IngredientUsageRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientUsageRow {
    pub ingredient: String,
    pub count: u32,
}

/// Response for ingredient usage dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientUsageResponse {
    /// Period in format "YYYY-MM", None for all time
    pub period: Option<String>,
    /// Sorted by count (descending), then by name
    pub rows: Vec<IngredientUsageRow>,
    /// Records skipped because of an unreadable row, date or ingredient list
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month() {
        assert!(YearMonth::new(2024, 13).is_none());
        let ym = YearMonth::new(2024, 2).unwrap();
        assert_eq!(ym.label(), "2024-02");
        assert!(ym.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!ym.contains(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()));
    }
}
