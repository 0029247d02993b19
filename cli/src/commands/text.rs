use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use ipresolve_common::config::Config;
use ipresolve_core::Resolver;

use crate::terminal::{print, spinner};

struct Input {
    label: String,
    contents: String,
}

pub async fn text(
    resolver: &Resolver,
    files: &[PathBuf],
    output: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let inputs: Vec<Input> = read_inputs(files)?;
    let start_time: Instant = Instant::now();

    spinner::start("Resolving addresses...".to_string());
    let mut rendered: String = String::new();
    let mut line_count: usize = 0;
    for input in &inputs {
        spinner::set_message(format!("Resolving addresses in {}", input.label));
        line_count += input.contents.split('\n').count();
        rendered.push_str(&resolver.process_text(&input.contents).await);
    }
    spinner::finish();

    write_output(&rendered, output)?;
    print_summary(line_count, start_time.elapsed(), cfg);
    Ok(())
}

fn read_inputs(files: &[PathBuf]) -> anyhow::Result<Vec<Input>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    files
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                return read_stdin();
            }
            let contents = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(Input {
                label: path.display().to_string(),
                contents,
            })
        })
        .collect()
}

fn read_stdin() -> anyhow::Result<Input> {
    let mut contents: String = String::new();
    io::stdin()
        .read_to_string(&mut contents)
        .context("reading stdin")?;
    Ok(Input {
        label: "stdin".to_string(),
        contents,
    })
}

fn write_output(rendered: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes()).context("writing stdout")?;
            stdout.flush().context("writing stdout")
        }
    }
}

fn print_summary(line_count: usize, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    let lines: ColoredString = format!("{line_count} lines").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    print::fat_separator(cfg.quiet);
    print::print_status(format!("Processed {lines} in {total_time}"));
}
