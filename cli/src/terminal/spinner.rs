use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

pub fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(init_spinner)
}

fn init_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb
}

/// Hides the spinner entirely when running quiet.
pub fn init(quiet: u8) {
    if quiet > 0 {
        get_spinner().set_draw_target(ProgressDrawTarget::hidden());
    }
}

pub fn start(message: String) {
    let pb = get_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
}

pub fn set_message(message: String) {
    get_spinner().set_message(message);
}

pub fn finish() {
    get_spinner().finish_and_clear();
}

/// Log sink that keeps stderr lines from tearing through the spinner.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        get_spinner().suspend(|| std::io::stderr().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()
    }
}
