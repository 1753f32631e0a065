use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Error;

pub struct SpinnerHelper;

impl SpinnerHelper {
  pub fn create(message: String) -> Result<ProgressBar, Error> {
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_style(
      ProgressStyle::default_spinner()
        .tick_strings(&[
          "□ □ □ □ □",
          "■ □ □ □ □",
          "□ ■ □ □ □",
          "□ □ ■ □ □",
          "□ □ □ ■ □",
          "□ □ □ □ ■",
          "■ ■ ■ ■ ■",
        ])
        .template("{spinner:.blue} {msg}")?,
    );
    spinner.set_message(message);
    Ok(spinner)
  }

  /// Closes the spinner with a success or failure line depending on `result`.
  pub fn conclude<T>(spinner: &ProgressBar, result: &Result<T, Error>, success: String) {
    match result {
      Ok(_) => spinner.finish_with_message(format!("SUCCESS – {success}")),
      Err(e) => spinner.abandon_with_message(format!("FAILURE – {e}")),
    }
  }
}
