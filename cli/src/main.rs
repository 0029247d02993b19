mod commands;
mod terminal;

use anyhow::Context;
use commands::{CommandLine, Commands, lookup, text};
use ipresolve_common::config::Config;
use ipresolve_core::{Resolver, Session};
use terminal::{logging, print, spinner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet, commands.verbose);
    spinner::init(commands.quiet);
    print::banner(commands.quiet);

    let cfg: Config = commands.config();

    print::header("connecting to controller", cfg.quiet);
    let mut resolver: Resolver = Resolver::new(Session::new(&cfg)?);
    resolver
        .authenticate(&commands.credentials())
        .await
        .with_context(|| format!("authenticating against {}", cfg.host))?;

    match commands.command {
        Commands::Text { files, output } => {
            text::text(&resolver, &files, output.as_deref(), &cfg).await
        }
        Commands::Lookup { ips } => lookup::lookup(&resolver, &ips, &cfg).await,
    }
}
