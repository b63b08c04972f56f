//! Typed frontmatter fields.

use serde::Deserialize;

use super::JsonMap;

/// `tags: null` reads as an empty list.
fn null_as_empty<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(de)?.unwrap_or_default())
}

/// The frontmatter fields a blog post carries.
///
/// | Field            | Type          | Purpose                            |
/// |------------------|---------------|------------------------------------|
/// | `title`          | `String`      | Post title                         |
/// | `description`    | `String`      | Short teaser text                  |
/// | `date`           | `String`      | Publication date, ISO form         |
/// | `tags`           | `Vec<String>` | Topic labels                       |
/// | `readingTime`    | `f64`         | Estimated minutes to read          |
/// | `translationKey` | `String`      | Joins language variants of a post  |
///
/// `translationKey` is the only field the sitemap builder requires; it is
/// optional here so the `check` command can report its absence per file
/// instead of dying on deserialization. Unrecognized fields collect in
/// `extra` as raw JSON.
#[derive(Debug, Clone, Default, serde::Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    pub reading_time: Option<f64>,
    /// Identifier shared by all language variants of the same article.
    pub translation_key: Option<String>,
    #[serde(flatten, default)]
    pub extra: JsonMap,
}
