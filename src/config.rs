use tracing::warn;

use crate::error::Error;

pub const DEFAULT_OUTPUT_PATH: &str = "output.csv";

/// Everything a single export run needs. Built once from the command line and
/// only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub(crate) account_prefix: String,
    pub(crate) app_prefix: String,
    pub(crate) api_key: String,
    pub(crate) output_path: String,
}

impl Config {
    /// Validates the raw flag values. The account name and API key are
    /// mandatory, the app name falls back to the first app of the account and
    /// the output path to `output.csv`.
    pub fn resolve(
        account: Option<String>,
        app: Option<String>,
        key: Option<String>,
        out: Option<String>,
    ) -> Result<Config, Error> {
        let account_prefix = non_empty(account).ok_or_else(|| {
            Error::Configuration(
                "Missing account name argument. Required to gather stats.".to_string(),
            )
        })?;
        let api_key = non_empty(key).ok_or_else(|| {
            Error::Configuration("Missing api key. Required to gather stats.".to_string())
        })?;

        let app_prefix = non_empty(app).unwrap_or_else(|| {
            warn!("No app given, defaulting to the first app of the account.");
            String::new()
        });
        let output_path = non_empty(out).unwrap_or_else(|| {
            warn!("No output file given, defaulting to '{DEFAULT_OUTPUT_PATH}'.");
            DEFAULT_OUTPUT_PATH.to_string()
        });

        Ok(Config {
            account_prefix,
            app_prefix,
            api_key,
            output_path,
        })
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
