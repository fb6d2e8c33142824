use indicatif::{ProgressBar, ProgressStyle};

/// Template for the spinner shown while assets are written
const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {pos} files {msg}";

/// Build a spinner that counts written files
pub fn build_progress_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    match ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
        Ok(style) => pb.set_style(style),
        Err(why) => log::warn!("Unable to style progress spinner: {why}"),
    }
    pb
}
