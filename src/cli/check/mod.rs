//! Content store health checks.
//!
//! Three passes over the parsed store: translation coverage (does every
//! post have its sibling?), frontmatter dates, and internal links in post
//! bodies. Links and dates are hard errors; coverage gaps only fail the
//! command under `--strict`.

mod report;
mod scan;

use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::cli::CheckArgs;
use crate::config::SiteConfig;
use crate::core::{Lang, LinkKind, UrlPath};
use crate::log;
use crate::post::{PostRecord, frontmatter};
use crate::sitemap::{TranslationGroups, parse_records};
use crate::store::{ContentStore, FsStore};
use crate::utils::date::DateTimeUtc;
use crate::utils::{counted, plural};

use report::CheckReport;
use scan::scan_body;

/// Check translation coverage, dates, and internal links.
pub fn check_site(config: &SiteConfig, args: &CheckArgs) -> Result<()> {
    let store = FsStore::new(&config.build.content);

    // An unparseable store aborts here, exactly like `build` would
    let records = parse_records(&store)?;
    if records.is_empty() {
        log!("check"; "no posts found");
        return Ok(());
    }
    let groups = TranslationGroups::collect(&records)?;

    log!("check"; "checking {}", counted(records.len(), "post"));

    let report = Arc::new(RwLock::new(CheckReport::default()));

    check_links(&store, &records, &report)?;
    check_dates(&records, &report);
    check_coverage(&records, &groups, &report);

    // Log link results
    let count = report.read().link_error_count();
    if count > 0 {
        log!("check"; "found {} broken internal link{}", count, plural(count));
    } else {
        log!("check"; "all internal links valid");
    }

    // Log date results
    let count = report.read().date_error_count();
    if count > 0 {
        log!("check"; "found {} invalid date{}", count, plural(count));
    } else {
        log!("check"; "all dates valid");
    }

    // Log coverage results
    let count = report.read().coverage_gap_count();
    if count > 0 {
        log!("check"; "found {} translation gap{}", count, plural(count));
    } else {
        log!("check"; "full translation coverage");
    }

    // Workers are joined, nothing else holds the lock
    let report = Arc::try_unwrap(report).unwrap().into_inner();
    report.print();

    print_summary(&report, args.strict)
}

/// Validate internal links in every post body against the known URL set.
///
/// Only site-root links (`/...`) are validated; external, fragment, and
/// file-relative destinations pass through unchecked.
fn check_links<S: ContentStore + Sync>(
    store: &S,
    records: &[PostRecord],
    report: &Arc<RwLock<CheckReport>>,
) -> Result<()> {
    let known = known_urls(records);
    let keys = store.keys()?;

    keys.par_iter().try_for_each(|key| -> Result<()> {
        let bytes = store.read(key)?;
        // The parse stage already rejected non-UTF-8 content
        let content = std::str::from_utf8(&bytes)?;
        let body = frontmatter::extract(content)?
            .map(|(_meta, body)| body)
            .unwrap_or(content);

        for link in scan_body(body) {
            if let LinkKind::SiteRoot(path) = link.kind()
                && !known.contains(normalize_target(path))
            {
                report.write().add_link(
                    key.clone(),
                    format!("`{}`", link.dest),
                    "does not resolve".to_string(),
                );
            }
        }
        Ok(())
    })
}

/// Report frontmatter dates that fail to parse.
fn check_dates(records: &[PostRecord], report: &Arc<RwLock<CheckReport>>) {
    for record in records {
        let Some(date) = record.meta.date.as_deref() else {
            continue;
        };
        if DateTimeUtc::parse(date).is_none() {
            report.write().add_date(
                record.source_label(),
                format!("`{date}`"),
                "not a YYYY-MM-DD or RFC 3339 date".to_string(),
            );
        }
    }
}

/// Report records whose translation group is missing a language.
fn check_coverage(
    records: &[PostRecord],
    groups: &TranslationGroups,
    report: &Arc<RwLock<CheckReport>>,
) {
    for record in records {
        let Some(group) = groups.get(&record.translation_key) else {
            continue;
        };
        for lang in Lang::ALL {
            if !group.contains_key(&lang) {
                report.write().add_coverage(
                    record.source_label(),
                    format!("`{}`", record.translation_key),
                    format!("no {lang} translation"),
                );
            }
        }
    }
}

/// Every URL the site serves: language homepages, blog section roots, and
/// one URL per post.
fn known_urls(records: &[PostRecord]) -> FxHashSet<UrlPath> {
    let mut known = FxHashSet::default();
    for lang in Lang::ALL {
        known.insert(UrlPath::from_path(lang.site_root()));
        known.insert(UrlPath::from_path(lang.url_prefix()));
    }
    for record in records {
        known.insert(record.url_path());
    }
    known
}

/// Reduce a link target to its bare path: drop query and fragment, trim
/// the trailing slash (the root `/` stays as-is).
fn normalize_target(path: &str) -> &str {
    let path = path.split(['#', '?']).next().unwrap_or(path);
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Print final summary and return error if the check failed
fn print_summary(report: &CheckReport, strict: bool) -> Result<()> {
    let links = report.link_error_count();
    let dates = report.date_error_count();
    let gaps = report.coverage_gap_count();

    let mut parts = Vec::new();
    if links > 0 {
        parts.push(counted(links, "broken link"));
    }
    if dates > 0 {
        parts.push(counted(dates, "invalid date"));
    }
    if gaps > 0 && strict {
        parts.push(counted(gaps, "translation gap"));
    }

    if !parts.is_empty() {
        anyhow::bail!("found {}", parts.join(", "));
    }

    if links == 0 && dates == 0 && gaps == 0 {
        log!("check"; "{report}");
    }
    Ok(())
}
