use std::time::Duration;

use async_trait::async_trait;
use http::header::AUTHORIZATION;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Error;
use crate::model::{Account, Accounts, DateWindow, Product, Products};
use crate::progress::SpinnerHelper;
use crate::report::{write_report, ReportRow};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait StatsLoader {
    /// Runs account lookup, app lookup, stats download and report writing in
    /// that order. Returns the path of the written report.
    async fn export_weekly_stats(&self, config: &Config) -> Result<String, Error>;
}

pub struct AppAnnieService {
    pub client: Client,
}

impl AppAnnieService {
    pub fn new() -> Result<AppAnnieService, Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(AppAnnieService { client })
    }
}

#[async_trait]
impl StatsLoader for AppAnnieService {
    async fn export_weekly_stats(&self, config: &Config) -> Result<String, Error> {
        let spinner = SpinnerHelper::create(format!(
            "Looking up account `{prefix}`",
            prefix = config.account_prefix
        ))?;
        let account = self.find_account(config).await;
        SpinnerHelper::conclude(&spinner, &account, "account found.".to_string());
        let account = account?;

        let spinner = SpinnerHelper::create(format!(
            "Looking up app `{prefix}` in {account}",
            prefix = config.app_prefix,
            account = account.account_name
        ))?;
        let product = self.find_product(config, &account).await;
        SpinnerHelper::conclude(&spinner, &product, "app found.".to_string());
        let product = product?;

        let window = DateWindow::trailing_week();
        let spinner = SpinnerHelper::create(format!(
            "Fetching stats for {app} from {start} to {end}",
            app = product.product_name,
            start = window.start_date(),
            end = window.end_date()
        ))?;
        let stats = self.get_app_stats(config, &account, &product, &window).await;
        SpinnerHelper::conclude(&spinner, &stats, "stats downloaded.".to_string());

        let csv = ReportRow::from_stats(stats?, &account, &product)?.to_csv();
        write_report(config.output_path(), &csv)?;
        info!(path = config.output_path(), "report written");

        Ok(config.output_path().to_string())
    }
}

impl AppAnnieService {
    async fn find_account(&self, config: &Config) -> Result<Account, Error> {
        let accounts = self
            .get_json(&format!("{url}/accounts", url = url()), &[], &config.api_key)
            .await?;

        let account = decode::<Accounts>(accounts, "accounts")?
            .accounts
            .into_iter()
            .find(|a| a.account_name.starts_with(config.account_prefix.as_str()))
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Couldn't find account for {prefix}.",
                    prefix = config.account_prefix
                ))
            })?;

        info!(id = %account.account_id, name = account.account_name.as_str(), "account resolved");
        Ok(account)
    }

    /// An empty app prefix matches every product, so the first listed app of
    /// the account is picked.
    async fn find_product(&self, config: &Config, account: &Account) -> Result<Product, Error> {
        let products = self
            .get_json(
                &format!(
                    "{url}/accounts/{account_id}/products",
                    url = url(),
                    account_id = account.account_id
                ),
                &[],
                &config.api_key,
            )
            .await?;

        let product = decode::<Products>(products, "products")?
            .products
            .into_iter()
            .find(|p| p.product_name.starts_with(config.app_prefix.as_str()))
            .ok_or_else(|| {
                Error::NotFound(format!("Couldn't find app for {prefix}.", prefix = config.app_prefix))
            })?;

        info!(id = %product.product_id, name = product.product_name.as_str(), "app resolved");
        Ok(product)
    }

    async fn get_app_stats(
        &self,
        config: &Config,
        account: &Account,
        product: &Product,
        window: &DateWindow,
    ) -> Result<Value, Error> {
        self.get_json(
            &format!(
                "{url}/accounts/{account_id}/products/{product_id}/sales",
                url = url(),
                account_id = account.account_id,
                product_id = product.product_id
            ),
            &[("start_date", window.start_date()), ("end_date", window.end_date())],
            &config.api_key,
        )
        .await
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        api_key: &str,
    ) -> Result<Value, Error> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .query(query)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let response_body = response.text().await?;
                Ok(serde_json::from_str::<Value>(&response_body)?)
            }
            status => Err(Error::Api(format!(
                "Something went wrong calling {url}. Status code: {status}. Body: {body}",
                body = response.text().await?
            ))),
        }
    }
}

fn decode<T: DeserializeOwned>(value: Value, resource: &str) -> Result<T, Error> {
    serde_json::from_value(value)
        .map_err(|e| Error::DataShape(format!("Unexpected {resource} response: {e}")))
}

#[cfg(test)]
use mockito::server_url;

#[cfg(not(test))]
const APP_ANNIE_URL: &str = "https://api.appannie.com/v1.2";

fn url() -> String {
    #[cfg(not(test))]
    let url = String::from(APP_ANNIE_URL);
    #[cfg(test)]
    let url = server_url();
    url
}
