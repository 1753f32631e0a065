use std::fs;

use serde_json::{Number, Value};

use crate::error::Error;
use crate::model::{Account, Product, SalesReport};

const HEADER: [&str; 5] = ["App_Name", "Account_Name", "Store", "Downloads", "Updates"];

#[derive(Debug, PartialEq)]
pub struct ReportRow {
    pub(crate) app_name: String,
    pub(crate) account_name: String,
    pub(crate) market: String,
    pub(crate) downloads: String,
    pub(crate) updates: String,
}

impl ReportRow {
    /// Builds the row from the first entry of the sales list. Anything after it
    /// is ignored.
    ///
    /// App and account are named as App Annie returned them, not by the
    /// prefixes given on the command line, so an empty app prefix still yields
    /// the name of the app that was picked.
    pub fn from_stats(stats: Value, account: &Account, product: &Product) -> Result<ReportRow, Error> {
        let report = serde_json::from_value::<SalesReport>(stats)
            .map_err(|e| Error::DataShape(format!("Unexpected sales response: {e}")))?;
        let first = report.sales_list.into_iter().next().ok_or_else(|| {
            Error::DataShape(format!(
                "No sales data returned for {app}.",
                app = product.product_name
            ))
        })?;
        let units = first.units.product;

        Ok(ReportRow {
            app_name: product.product_name.clone(),
            account_name: account.account_name.clone(),
            market: report.market,
            downloads: count(units.downloads),
            updates: count(units.updates),
        })
    }

    pub fn to_csv(&self) -> String {
        let row = [
            self.app_name.as_str(),
            self.account_name.as_str(),
            self.market.as_str(),
            self.downloads.as_str(),
            self.updates.as_str(),
        ];
        format!("{}\n{}\n", csv_line(&HEADER), csv_line(&row))
    }
}

fn count(value: Option<Number>) -> String {
    value.map_or_else(|| "0".to_string(), |n| n.to_string())
}

fn csv_line(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Replaces whatever is at `path` with `csv`.
pub fn write_report(path: &str, csv: &str) -> Result<(), Error> {
    fs::write(path, csv)?;
    Ok(())
}
