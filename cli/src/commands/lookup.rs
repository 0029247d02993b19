use colored::*;
use ipresolve_common::config::Config;
use ipresolve_core::Resolver;
use tracing::warn;

use crate::terminal::{colors, print};

pub async fn lookup(resolver: &Resolver, ips: &[String], cfg: &Config) -> anyhow::Result<()> {
    print::header("device lookup", cfg.quiet);

    for ip in ips {
        if !Resolver::is_valid_ipv4(ip) {
            warn!("{ip} is not a valid IPv4 address, skipping");
            continue;
        }

        let address: ColoredString = ip.as_str().color(colors::IPV4_ADDR);
        let arrow: ColoredString = "->".color(colors::SEPARATOR);
        match resolver.resolve(ip).await {
            Some(hostname) => println!("{address} {arrow} {}", hostname.color(colors::ACCENT)),
            None => println!("{address} {arrow} {}", "not found".dimmed()),
        }
    }

    Ok(())
}
