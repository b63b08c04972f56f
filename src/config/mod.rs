//! Site configuration management for `altmap.toml`.
//!
//! # Sections
//!
//! | Section           | Purpose                                     |
//! |-------------------|---------------------------------------------|
//! | `[site]`          | Site metadata (title, base url)             |
//! | `[build]`         | Store and output paths, XML minification    |
//! | `[build.sitemap]` | Sitemap index filename                      |
//! | `[build.robots]`  | robots.txt generation                       |

pub mod error;
pub mod section;
mod util;

use util::{expand_tilde, find_config_file};

pub use error::{ConfigError, ValidationReport};
pub use section::{BuildSectionConfig, SiteSectionConfig};

use crate::{
    cli::{Cli, Commands},
    log,
    utils::path::normalize_path,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Everything `altmap.toml` configures, plus the resolved paths and the
/// CLI handle the commands read their options from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Parsed CLI arguments; set once during `load`.
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path of the loaded config file.
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root, the config file's parent directory.
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load and validate the configuration for one invocation.
    ///
    /// The config file is found by upward search from the current
    /// directory. `init` runs on defaults (there is nothing to load
    /// yet); every other command requires the file to exist.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::locate_config(cli)?;

        // init writes a fresh config, everything else needs one to read
        let mut config = if cli.is_init() {
            Self::default()
        } else if exists {
            Self::load_file(&config_path)?
        } else {
            log!(
                "error";
                "No config file '{}' here or in any parent directory. Run 'altmap init' to start a project.",
                cli.config.display()
            );
            std::process::exit(1);
        };

        config.config_path = config_path;
        config.cli = Some(cli);
        config.anchor_root(cli);
        config.apply_cli_flags(cli);

        // init has no config file yet, nothing to validate against
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Find the config file this command should use.
    ///
    /// `init <name>` points at the new project directory and plain
    /// `init` at the current one; other commands search upward from
    /// the working directory.
    fn locate_config(cli: &Cli) -> Result<(PathBuf, bool)> {
        if let Commands::Init { name } = &cli.command {
            let mut dir = std::env::current_dir()?;
            if let Some(name) = name {
                dir.push(name);
            }
            let path = dir.join(&cli.config);
            let exists = path.exists();
            return Ok((path, exists));
        }

        match find_config_file(&cli.config) {
            Some(found) => Ok((found, true)),
            None => Ok((std::env::current_dir()?.join(&cli.config), false)),
        }
    }

    /// Read one TOML file into a config, stopping on unrecognized
    /// fields unless the user waves them through.
    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        let (config, unknown) = Self::parse_lenient(&content)?;

        if unknown.is_empty() {
            return Ok(config);
        }
        Self::warn_unknown_fields(&unknown, path);
        if Self::ask_to_continue()? {
            return Ok(config);
        }
        bail!("aborted: config has fields altmap does not recognize")
    }

    /// Parse TOML content, collecting paths of fields no section knows.
    fn parse_lenient(content: &str) -> Result<(Self, Vec<String>)> {
        let mut unknown = Vec::new();
        let config = serde_ignored::deserialize(
            toml::Deserializer::new(content),
            |path: serde_ignored::Path| unknown.push(path.to_string()),
        )
        .map_err(ConfigError::Toml)?;
        Ok((config, unknown))
    }

    fn warn_unknown_fields(fields: &[String], path: &Path) {
        // The config sits at the project root, the filename alone reads better
        let name = path.file_name().unwrap_or(path.as_os_str());
        eprintln!();
        log!("warning"; "{} has fields no section recognizes:", name.to_string_lossy());
        for field in fields {
            eprintln!("- {field}");
        }
        eprintln!();
    }

    /// Anything but an explicit yes counts as no.
    fn ask_to_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Keep going anyway? [y/N] ");
        io::stderr().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        let line = line.trim();
        Ok(line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes"))
    }

    /// Resolve the project root and re-anchor configured paths on it.
    ///
    /// `sitemap.index` and `robots.path` stay relative: they are joined
    /// onto the output directory at write time.
    fn anchor_root(&mut self, cli: &Cli) {
        let cwd = std::env::current_dir().unwrap_or_default();
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => cwd.join(name),
            Commands::Init { name: None } => cwd,
            _ => self
                .config_path
                .parent()
                .map_or_else(PathBuf::new, Path::to_path_buf),
        };
        let root = normalize_path(&root);

        self.config_path = normalize_path(&self.config_path);
        self.build.content = Self::resolve_dir(&self.build.content, &root);
        self.build.output = Self::resolve_dir(&self.build.output, &root);
        self.set_root(&root);
    }

    /// Expand `~`, then make relative paths absolute under `root`.
    fn resolve_dir(path: &Path, root: &Path) -> PathBuf {
        let expanded = expand_tilde(path);
        let absolute = if expanded.is_relative() {
            root.join(&expanded)
        } else {
            expanded
        };
        normalize_path(&absolute)
    }

    /// Fold command-line flags into the loaded config.
    fn apply_cli_flags(&mut self, cli: &Cli) {
        let Commands::Build { build_args } = &cli.command else {
            return;
        };

        crate::logger::set_verbose(build_args.verbose);

        if let Some(minify) = build_args.minify {
            self.build.minify = minify;
        }
        if let Some(robots) = build_args.robots {
            self.build.robots.enable = robots;
        }
    }

    pub fn get_root(&self) -> &Path {
        &self.root
    }

    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Strip the project root from a path, for compact log output.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// CLI handle, set during `load`.
    pub const fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Base URL for absolute locs, trailing slash trimmed.
    ///
    /// `validate()` guarantees `site.url` is present for the build
    /// command; other commands may hit the error here.
    pub fn base_url(&self) -> Result<&str> {
        match self.site.base_url() {
            Some(url) => Ok(url),
            None => bail!("site.url is not configured"),
        }
    }

    /// Run every section's validation and report all problems at once.
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!(ConfigError::Validation(
                "config file no longer exists".to_string()
            ));
        }

        let mut report = ValidationReport::new();
        // Only build writes absolute locs; check/query run without a URL
        self.site.validate(self.get_cli().is_build(), &mut report);
        self.build.validate(&mut report);

        report.finish().map_err(|e| ConfigError::Invalid(e).into())
    }
}

/// Parse config with minimal required `[site]` fields.
/// Panics on unknown fields to catch typos in test fixtures.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\nurl = \"https://example.com\"\n{extra}");
    let (parsed, unknown) = SiteConfig::parse_lenient(&config).unwrap();
    assert!(
        unknown.is_empty(),
        "fixture has unrecognized fields: {unknown:?}"
    );
    parsed
}
