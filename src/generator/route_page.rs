//! Route detail page generation.
//!
//! One page per route under `routes/<slug>.html`: facts block, Leaflet
//! map loading the GPX track, description, photo gallery and a download
//! link. All asset references are relative, so a generated page works
//! from `file://` as well as behind any web root.

use crate::debug;
use crate::generator::template::{Template, TemplateVars};
use crate::route::RouteMeta;
use crate::utils::html::{escape, escape_attr};
use anyhow::{Context, Result};
use serde_json::Number;
use std::fs;
use std::path::Path;

/// Variables for route_page.html.
pub struct RoutePageVars {
    pub title: String,
    pub distance: String,
    pub elevation: String,
    pub asphalt: String,
    pub gravel: String,
    pub gpx_file: String,
    pub description: String,
    pub photos: String,
}

/// Format an optional numeric fact. Absent values leave the slot empty
/// so the label and unit still render.
fn fact(n: Option<&Number>) -> String {
    n.map(Number::to_string).unwrap_or_default()
}

impl RoutePageVars {
    pub fn from_meta(meta: &RouteMeta) -> Self {
        let alt_title = escape_attr(&meta.title);
        let photos: String = meta
            .photos
            .iter()
            .map(|img| format!("<li><img src=\"../images/{img}\" alt=\"Foto {alt_title}\"></li>"))
            .collect();

        Self {
            title: escape(&meta.title).into_owned(),
            distance: fact(meta.distance_km.as_ref()),
            elevation: fact(meta.elevation_m.as_ref()),
            asphalt: fact(meta.asphalt_pct.as_ref()),
            gravel: fact(meta.gravel_pct.as_ref()),
            gpx_file: meta.gpx_file.clone(),
            description: escape(&meta.description).replace('\n', "<br>"),
            photos,
        }
    }
}

impl TemplateVars for RoutePageVars {
    fn apply(&self, content: &str) -> String {
        // Free-text fields go last so titles or descriptions containing
        // marker-like text survive untouched.
        content
            .replace("__DISTANCE__", &self.distance)
            .replace("__ELEVATION__", &self.elevation)
            .replace("__ASPHALT__", &self.asphalt)
            .replace("__GRAVEL__", &self.gravel)
            .replace("__GPX_FILE__", &self.gpx_file)
            .replace("__TITLE__", &self.title)
            .replace("__DESCRIPTION__", &self.description)
            .replace("__PHOTOS__", &self.photos)
    }
}

/// Route page template.
pub const ROUTE_PAGE_HTML: Template<RoutePageVars> =
    Template::new(include_str!("templates/route_page.html"));

/// Render and write the page for one route.
pub fn write_route_page(meta: &RouteMeta, path: &Path) -> Result<()> {
    let vars = RoutePageVars::from_meta(meta);
    let html = ROUTE_PAGE_HTML.render(&vars);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, html)
        .with_context(|| format!("Failed to write route page to {}", path.display()))?;

    debug!("write"; "{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn meta() -> RouteMeta {
        RouteMeta {
            title: "Rundan".to_string(),
            slug: "runda-1".to_string(),
            distance_km: Some(Number::from(55u32)),
            elevation_m: Some(Number::from(600u32)),
            asphalt_pct: Some(Number::from(30u32)),
            gravel_pct: Some(Number::from(70u32)),
            gpx_file: "runda-1.gpx".to_string(),
            description: "Fin tur.\nMest grus.".to_string(),
            thumbnail: None,
            photos: vec![],
        }
    }

    #[test]
    fn test_render_title_and_facts() {
        let html = ROUTE_PAGE_HTML.render(&RoutePageVars::from_meta(&meta()));

        assert!(html.contains("<title>Rundan – Gravelrutt</title>"));
        assert!(html.contains("<h1>Rundan</h1>"));
        assert!(html.contains("<p><strong>Distans:</strong> 55 km</p>"));
        assert!(html.contains("<p><strong>Höjdmeter:</strong> 600 m</p>"));
        assert!(html.contains("<p><strong>Andel asfalt:</strong> 30 %</p>"));
        assert!(html.contains("<p><strong>Andel grus:</strong> 70 %</p>"));
        assert!(!html.contains("__TITLE__"));
        assert!(!html.contains("__DISTANCE__"));
    }

    #[test]
    fn test_render_gpx_references() {
        let html = ROUTE_PAGE_HTML.render(&RoutePageVars::from_meta(&meta()));

        assert!(html.contains("const gpxPath = '../../gpx/runda-1.gpx';"));
        assert!(html.contains("<a href='../../gpx/runda-1.gpx'>Ladda ned GPX-fil</a>"));
        assert!(!html.contains("__GPX_FILE__"));
    }

    #[test]
    fn test_render_absent_facts_leave_slot_empty() {
        let mut m = meta();
        m.distance_km = None;
        m.elevation_m = None;
        let html = ROUTE_PAGE_HTML.render(&RoutePageVars::from_meta(&m));

        assert!(html.contains("<p><strong>Distans:</strong>  km</p>"));
        assert!(html.contains("<p><strong>Höjdmeter:</strong>  m</p>"));
    }

    #[test]
    fn test_render_description_linebreaks() {
        let html = ROUTE_PAGE_HTML.render(&RoutePageVars::from_meta(&meta()));

        assert!(html.contains("<p>Fin tur.<br>Mest grus.</p>"));
    }

    #[test]
    fn test_render_escapes_free_text() {
        let mut m = meta();
        m.title = "Berg & dal".to_string();
        m.description = "<b>fet</b> text".to_string();
        let html = ROUTE_PAGE_HTML.render(&RoutePageVars::from_meta(&m));

        assert!(html.contains("<title>Berg &amp; dal – Gravelrutt</title>"));
        assert!(html.contains("<h1>Berg &amp; dal</h1>"));
        assert!(html.contains("<p>&lt;b&gt;fet&lt;/b&gt; text</p>"));
    }

    #[test]
    fn test_render_photo_gallery() {
        let mut m = meta();
        m.photos = vec!["utsikt.jpg".to_string(), "grusvag.jpg".to_string()];
        let html = ROUTE_PAGE_HTML.render(&RoutePageVars::from_meta(&m));

        assert!(html.contains(
            "<ul class='photo-gallery'>\
             <li><img src=\"../images/utsikt.jpg\" alt=\"Foto Rundan\"></li>\
             <li><img src=\"../images/grusvag.jpg\" alt=\"Foto Rundan\"></li>\
             </ul>"
        ));
    }

    #[test]
    fn test_render_empty_gallery() {
        let html = ROUTE_PAGE_HTML.render(&RoutePageVars::from_meta(&meta()));

        assert!(html.contains("<ul class='photo-gallery'></ul>"));
    }

    #[test]
    fn test_render_map_script_block() {
        let html = ROUTE_PAGE_HTML.render(&RoutePageVars::from_meta(&meta()));

        // Blank line between the map div and its script block.
        assert!(html.contains("</div>\n\n    <script>"));
        assert!(html.contains("L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png'"));
    }

    #[test]
    fn test_write_creates_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("areas/fryksas/routes/runda-1.html");

        write_route_page(&meta(), &path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
    }
}
