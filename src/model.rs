use std::fmt::{Display, Formatter};

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Number;

const DATE_FORMAT: &str = "%Y-%m-%d";
const WINDOW_DAYS: i64 = 7;

/// Identifiers are numbers for most App Annie resources but strings for some
/// stores, so both are accepted and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(u64),
    Text(String),
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Id::Number(id) => write!(f, "{id}"),
            Id::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Accounts {
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub(crate) account_id: Id,
    pub(crate) account_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Products {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub(crate) product_id: Id,
    pub(crate) product_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SalesReport {
    pub(crate) market: String,
    pub(crate) sales_list: Vec<Sales>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Sales {
    pub(crate) units: Units,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Units {
    pub(crate) product: ProductUnits,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProductUnits {
    #[serde(default)]
    pub(crate) downloads: Option<Number>,
    #[serde(default)]
    pub(crate) updates: Option<Number>,
}

/// The seven calendar days ending today.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateWindow {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
}

impl DateWindow {
    pub fn trailing_week() -> DateWindow {
        DateWindow::ending(Local::now().date_naive())
    }

    pub fn ending(end: NaiveDate) -> DateWindow {
        DateWindow {
            start: end - Duration::days(WINDOW_DAYS),
            end,
        }
    }

    pub fn start_date(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_date(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_week_spans_seven_days_across_month_boundary() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();

        let window = DateWindow::ending(end);

        assert_eq!(window.start_date(), "2024-02-25");
        assert_eq!(window.end_date(), "2024-03-03");
    }

    #[test]
    fn ids_keep_their_json_representation() {
        let accounts: Accounts = serde_json::from_str(
            r#"{"accounts": [
                {"account_id": 42, "account_name": "Acme Corp", "vertical": "apps"},
                {"account_id": "gp-7", "account_name": "Acme Play"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(accounts.accounts[0].account_id.to_string(), "42");
        assert_eq!(accounts.accounts[1].account_id.to_string(), "gp-7");
    }

    #[test]
    fn missing_unit_counts_decode_as_none() {
        let units: ProductUnits = serde_json::from_str(r#"{"downloads": null}"#).unwrap();

        assert!(units.downloads.is_none());
        assert!(units.updates.is_none());
    }
}
