//! Area index page generation.
//!
//! One `index.html` per area: a filter form plus a script that renders
//! the route list client-side from an embedded JSON array.

use crate::debug;
use crate::generator::template::{Template, TemplateVars};
use crate::route::{RouteCard, RouteMeta};
use crate::utils::html::escape;
use crate::utils::text::capitalize;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Variables for area_index.html.
pub struct AreaIndexVars {
    /// Display name of the area, shown in title and heading.
    pub area_name: String,
    /// JSON array of route summaries read by the filter script.
    pub routes_json: String,
}

impl AreaIndexVars {
    /// Build page variables from an area's loaded routes.
    pub fn build(area: &str, routes: &[RouteMeta]) -> Result<Self> {
        let cards: Vec<RouteCard> = routes.iter().map(RouteCard::from_meta).collect();
        let routes_json = serde_json::to_string(&cards)
            .with_context(|| format!("Failed to serialize route data for area `{area}`"))?;
        Ok(Self {
            area_name: escape(&capitalize(area)).into_owned(),
            routes_json,
        })
    }
}

impl TemplateVars for AreaIndexVars {
    fn apply(&self, content: &str) -> String {
        // JSON goes last so route titles containing marker-like text
        // survive untouched.
        content
            .replace("__AREA__", &self.area_name)
            .replace("__ROUTES_JSON__", &self.routes_json)
    }
}

/// Area index page template.
pub const AREA_INDEX_HTML: Template<AreaIndexVars> =
    Template::new(include_str!("templates/area_index.html"));

/// Render and write the index page for one area.
pub fn write_area_index(area: &str, routes: &[RouteMeta], path: &Path) -> Result<()> {
    let vars = AreaIndexVars::build(area, routes)?;
    let html = AREA_INDEX_HTML.render(&vars);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, html)
        .with_context(|| format!("Failed to write area index to {}", path.display()))?;

    debug!("write"; "{}", path.display());
    Ok(())
}
