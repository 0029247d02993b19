pub mod lookup;
pub mod text;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use ipresolve_common::config::{Config, Credentials};

#[derive(Parser)]
#[command(name = "ipresolve")]
#[command(version)]
#[command(about = "Swap IPv4 addresses in text for hostnames known to the network controller.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Controller address without scheme (e.g. sandboxdnac.cisco.com)
    #[arg(long, env = "IPRESOLVE_HOST")]
    pub host: String,

    #[arg(short, long, env = "IPRESOLVE_USERNAME")]
    pub username: String,

    #[arg(short, long, env = "IPRESOLVE_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Verify the controller's TLS certificate
    #[arg(long)]
    pub verify_tls: bool,

    /// Give up on a request after this many consecutive rate-limit answers
    #[arg(long, value_name = "COUNT")]
    pub max_retries: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Less output, repeat for even less (-qq)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show every request made to the controller
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace addresses in files (or stdin) and print the result
    #[command(alias = "t")]
    Text {
        /// Input files, `-` or nothing reads stdin
        files: Vec<PathBuf>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Resolve individual addresses
    #[command(alias = "l")]
    Lookup {
        #[arg(required = true)]
        ips: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            host: self.host.clone(),
            verify_tls: self.verify_tls,
            max_rate_limit_retries: self.max_retries,
            timeout: self.timeout.map(Duration::from_secs),
            quiet: self.quiet,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}
