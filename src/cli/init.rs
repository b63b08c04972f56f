//! Project initialization command.
//!
//! Creates the bilingual content layout with a default config and a
//! sample translated post pair.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::SiteConfig;
use crate::log;

/// Default config filename
const CONFIG_FILE: &str = "altmap.toml";

/// Standard content layout: one subdirectory per language.
const LANG_DIRS: [&str; 2] = ["content/cs", "content/en"];

/// Starter config. Parsed in tests to catch drift against the config
/// structs.
const CONFIG_TEMPLATE: &str = concat!(
    "# altmap configuration file (v",
    env!("CARGO_PKG_VERSION"),
    ")\n\n",
    "[site]\n",
    "title = \"My bilingual blog\"\n",
    "url = \"https://example.com\"\n",
    "\n",
    "[build]\n",
    "content = \"content\"\n",
    "output = \"public\"\n",
    "minify = true\n",
    "\n",
    "[build.sitemap]\n",
    "index = \"sitemap_index.xml\"\n",
    "\n",
    "[build.robots]\n",
    "enable = true\n",
    "path = \"robots.txt\"\n",
);

/// Sample post pair: one Czech, one English, joined by a shared
/// translationKey while each keeps its own slug.
const SAMPLE_POSTS: [(&str, &str); 2] = [
    (
        "content/cs/prvni-prispevek.md",
        "---\n\
         title: První příspěvek\n\
         description: Ukázkový článek s překladem.\n\
         date: 2025-01-01\n\
         translationKey: first-post\n\
         ---\n\
         \n\
         Ahoj! Anglická verze tohoto příspěvku je na [/en/blog/first-post](/en/blog/first-post).\n",
    ),
    (
        "content/en/first-post.md",
        "---\n\
         title: First post\n\
         description: A sample article with a translation.\n\
         date: 2025-01-01\n\
         translationKey: first-post\n\
         ---\n\
         \n\
         Hello! The Czech version of this post lives at [/blog/prvni-prispevek](/blog/prvni-prispevek).\n",
    ),
];

/// Scaffold a new project at the configured root.
///
/// `altmap init` fills the current directory and insists it is empty;
/// `altmap init <name>` creates a fresh subdirectory and refuses to
/// touch an existing one.
pub fn new_project(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    if let Err(e) = check_target(root, has_name) {
        log!("error"; "{e}");
        std::process::exit(1);
    }

    create_layout(root)?;
    write_config(root)?;
    write_samples(root)?;

    log!("init"; "Project initialized successfully");
    Ok(())
}

fn check_target(root: &Path, into_subdir: bool) -> Result<()> {
    if into_subdir {
        if root.exists() {
            bail!(
                "Target directory `{}` already exists.\n\
                 Pick another name or remove it first.",
                root.display()
            );
        }
        return Ok(());
    }

    if !dir_is_empty(root)? {
        bail!(
            "The current directory is not empty.\n\
             Run `altmap init <name>` to scaffold into a fresh subdirectory."
        );
    }
    Ok(())
}

/// A missing directory counts as empty.
fn dir_is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("cannot read directory `{}`", path.display()))?;
    Ok(entries.next().is_none())
}

fn create_layout(root: &Path) -> Result<()> {
    for dir in LANG_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("cannot create directory `{}`", path.display()))?;
    }
    Ok(())
}

fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("cannot write config file `{}`", path.display()))
}

/// Existing files win; samples never overwrite a user's post.
fn write_samples(root: &Path) -> Result<()> {
    for (rel_path, content) in SAMPLE_POSTS {
        let path = root.join(rel_path);
        if path.exists() {
            continue;
        }
        fs::write(&path, content)
            .with_context(|| format!("cannot write `{}`", path.display()))?;
    }
    Ok(())
}
