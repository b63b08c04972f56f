//! One submodule per `altmap.toml` table.

mod build;
mod site;

pub use build::BuildSectionConfig;
pub use site::SiteSectionConfig;
