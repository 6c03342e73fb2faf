//! Root index page generation.
//!
//! The site entry point: a plain list linking to every area index.

use crate::debug;
use crate::generator::template::{Template, TemplateVars};
use crate::utils::html::escape;
use crate::utils::text::capitalize;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Variables for root_index.html.
pub struct RootIndexVars {
    /// Pre-rendered `<li>` lines, one per area, each newline-terminated.
    pub area_list: String,
}

impl RootIndexVars {
    /// Build the area list in the order given.
    pub fn build(areas: &[String]) -> Self {
        let area_list = areas
            .iter()
            .map(|area| {
                format!(
                    "      <li><a href='areas/{area}/index.html'>{}</a></li>\n",
                    escape(&capitalize(area))
                )
            })
            .collect();
        Self { area_list }
    }
}

impl TemplateVars for RootIndexVars {
    fn apply(&self, content: &str) -> String {
        content.replace("__AREA_LIST__", &self.area_list)
    }
}

/// Root index page template.
pub const ROOT_INDEX_HTML: Template<RootIndexVars> =
    Template::new(include_str!("templates/root_index.html"));

/// Render and write the root index page.
pub fn write_root_index(areas: &[String], path: &Path) -> Result<()> {
    let vars = RootIndexVars::build(areas);
    let html = ROOT_INDEX_HTML.render(&vars);

    fs::write(path, html)
        .with_context(|| format!("Failed to write root index to {}", path.display()))?;

    debug!("write"; "{}", path.display());
    Ok(())
}
