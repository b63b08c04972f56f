//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural;

/// A single check finding.
#[derive(Debug, Clone)]
pub struct CheckError {
    /// The link, date, or translation key that failed.
    pub target: String,
    /// Why it failed; empty when the target alone says enough.
    pub reason: String,
}

/// Findings from all check categories, grouped by store key.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Broken internal links.
    pub links: BTreeMap<String, Vec<CheckError>>,
    /// Unparseable frontmatter dates.
    pub dates: BTreeMap<String, Vec<CheckError>>,
    /// Missing sibling translations.
    pub coverage: BTreeMap<String, Vec<CheckError>>,
}

impl CheckReport {
    /// Add a broken internal link.
    pub fn add_link(&mut self, source: String, link: String, reason: String) {
        self.links.entry(source).or_default().push(CheckError {
            target: link,
            reason,
        });
    }

    /// Add an invalid frontmatter date.
    pub fn add_date(&mut self, source: String, date: String, reason: String) {
        self.dates.entry(source).or_default().push(CheckError {
            target: date,
            reason,
        });
    }

    /// Add a translation coverage gap.
    pub fn add_coverage(&mut self, source: String, key: String, reason: String) {
        self.coverage.entry(source).or_default().push(CheckError {
            target: key,
            reason,
        });
    }

    /// Total broken link count.
    pub fn link_error_count(&self) -> usize {
        tally(&self.links)
    }

    /// Total invalid date count.
    pub fn date_error_count(&self) -> usize {
        tally(&self.dates)
    }

    /// Total coverage gap count.
    pub fn coverage_gap_count(&self) -> usize {
        tally(&self.coverage)
    }

    /// Print the full report to stderr (links -> dates -> coverage).
    pub fn print(&self) {
        let categories = [
            ("links", &self.links),
            ("dates", &self.dates),
            ("coverage", &self.coverage),
        ];
        for (name, errors) in categories {
            print_section(name, errors);
        }
    }
}

fn tally(errors: &BTreeMap<String, Vec<CheckError>>) -> usize {
    errors.values().map(Vec::len).sum()
}

/// One category: a counted header, then per-file finding lines.
fn print_section(name: &str, errors: &BTreeMap<String, Vec<CheckError>>) {
    if errors.is_empty() {
        return;
    }
    eprintln!();

    let files = errors.len();
    let total = tally(errors);
    let counts = format!(
        "({files} file{}, {total} error{})",
        plural(files),
        plural(total)
    );
    eprintln!("{} {}", name.red().bold(), counts.dimmed());

    let arrow = "→".red();
    for (source, errs) in errors {
        eprintln!("[{}]", source.cyan());
        for e in errs {
            match e.reason.as_str() {
                "" => eprintln!("{arrow} {}", e.target),
                reason => eprintln!("{arrow} {} {reason}", e.target),
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.link_error_count() + self.date_error_count() + self.coverage_gap_count();

        if total == 0 {
            return write!(f, "{}", "all checks passed".green());
        }

        let count = total.to_string();
        let label = format!("error{}", plural(total));
        write!(
            f,
            "{} {} {}",
            "found".dimmed(),
            count.red().bold(),
            label.dimmed()
        )
    }
}
