//! Altmap - a translation-aware sitemap generator for bilingual blogs.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod post;
mod sitemap;
mod store;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // `--color auto` leaves owo-colors to its own TTY detection
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Init { name } => cli::init::new_project(&config, name.is_some()),
        Commands::Build { .. } => cli::build::build_site(&config),
        Commands::Check { args } => cli::check::check_site(&config, args),
        Commands::Query { args } => cli::query::run_query(&config, args),
    }
}
