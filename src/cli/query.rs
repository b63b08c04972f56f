//! Query command: print sitemap entries as JSON.
//!
//! Emits the same entry list the build writes into XML, in the JSON shape
//! downstream tooling consumes (`loc`, `alternatives`, `_sitemap`).

use std::fs;
use std::io::Write;

use anyhow::Result;

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::sitemap::{SitemapEntry, build_entries};
use crate::store::FsStore;

/// Build the entry list and print it as JSON.
pub fn run_query(config: &SiteConfig, args: &QueryArgs) -> Result<()> {
    let store = FsStore::new(&config.build.content);
    let entries = build_entries(&store)?;
    output_entries(&entries, args)
}

fn output_entries(entries: &[SitemapEntry], args: &QueryArgs) -> Result<()> {
    let formatted = if args.pretty {
        serde_json::to_string_pretty(entries)?
    } else {
        serde_json::to_string(entries)?
    };

    match &args.output {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{formatted}")?;
            log!("query"; "wrote output to {}", path.display());
        }
        None => println!("{formatted}"),
    }

    Ok(())
}
