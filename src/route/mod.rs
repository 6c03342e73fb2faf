//! Route metadata parsed from YAML front matter.

use serde::{Deserialize, Serialize};
use serde_json::Number;

pub mod loader;

/// Deserialize photos, treating `null` as empty vec
fn deserialize_photos<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Route metadata from the front-matter block of one metadata file
///
/// # Fields
///
/// | Field         | Type          | Description                        |
/// |---------------|---------------|------------------------------------|
/// | `title`       | `String`      | Route display name                 |
/// | `slug`        | `String`      | Filename/URL identifier, verbatim  |
/// | `distance_km` | `Number`      | Length in km (optional)            |
/// | `elevation_m` | `Number`      | Total climbing in m (optional)     |
/// | `asphalt_pct` | `Number`      | Paved share in percent (optional)  |
/// | `gravel_pct`  | `Number`      | Gravel share in percent (optional) |
/// | `gpx_file`    | `String`      | Track filename under the gpx dir   |
/// | `description` | `String`      | Free text, may span multiple lines |
/// | `thumbnail`   | `String`      | Preview image filename (optional)  |
/// | `photos`      | `Vec<String>` | Gallery image filenames            |
///
/// The numeric fields stay `serde_json::Number` so a value keeps its
/// written form when re-embedded into page data: `55` stays `55`,
/// `42.5` stays `42.5`. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteMeta {
    pub title: String,
    pub slug: String,
    pub distance_km: Option<Number>,
    pub elevation_m: Option<Number>,
    pub asphalt_pct: Option<Number>,
    pub gravel_pct: Option<Number>,
    pub gpx_file: String,
    #[serde(default)]
    pub description: String,
    /// Preview image filename.
    #[allow(dead_code)] // Accepted in front matter, not rendered
    pub thumbnail: Option<String>,
    /// Gallery image filenames under the area's images directory.
    #[serde(default, deserialize_with = "deserialize_photos")]
    pub photos: Vec<String>,
}

/// Compact route entry embedded into the area index page for
/// client-side filtering.
///
/// Field names are the embedded data contract: the filter script reads
/// `r.distance`, `r.elevation` and so on. Absent numerics serialize as
/// `null`, never as a string.
#[derive(Debug, Serialize)]
pub struct RouteCard<'a> {
    title: &'a str,
    slug: &'a str,
    distance: Option<&'a Number>,
    elevation: Option<&'a Number>,
    asphalt: Option<&'a Number>,
    gravel: Option<&'a Number>,
}

impl<'a> RouteCard<'a> {
    pub fn from_meta(meta: &'a RouteMeta) -> Self {
        Self {
            title: &meta.title,
            slug: &meta.slug,
            distance: meta.distance_km.as_ref(),
            elevation: meta.elevation_m.as_ref(),
            asphalt: meta.asphalt_pct.as_ref(),
            gravel: meta.gravel_pct.as_ref(),
        }
    }
}
