use clap::Parser;

/// Exports the downloads and updates of the last seven days for one app of an App Annie
/// account into a CSV file.
#[derive(Parser)]
#[clap(version)]
pub(crate) struct Cli {
  /// Name of the account (App Store/Google Play) to inspect. The first account whose name
  /// starts with this value is used, so `Acme` matches `Acme Corp` but not `The Acme Corp`.
  #[clap(long, short = 'A')]
  pub(crate) account: Option<String>,
  /// Name of the app within the account. Matched by prefix like the account. When omitted
  /// the first app of the account is used.
  #[clap(long, short = 'a')]
  pub(crate) app: Option<String>,
  /// File the CSV report is written to. [default: output.csv]
  #[clap(long, short = 'o')]
  pub(crate) out: Option<String>,
  /// Your App Annie API key
  /// (see https://support.appannie.com/hc/en-us/categories/200261564-Analytics-API-v1-2-).
  #[clap(long, short = 'k', env = "APPANNIE_API_KEY", hide_env_values = true)]
  pub(crate) key: Option<String>,
}
