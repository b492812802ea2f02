use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Highlights a result value for terminal output.
pub fn style_value(text: &str) -> String {
    style(text).green().bold().to_string()
}

/// Creates a spinner for indeterminate network work.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
