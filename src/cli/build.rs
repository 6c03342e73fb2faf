//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Collect** - Enumerate area directories under `areas/`
//! - **Load** - Parse every metadata file of one area
//! - **Generate** - Area index first, then one page per route
//! - **Finalize** - Root index over all areas, summary logging
//!
//! Areas build in name order, one at a time. A malformed metadata file
//! aborts the run before any of that area's pages are written; output
//! already written for earlier areas stays in place.

use crate::{
    debug,
    generator::{
        area_index::write_area_index, root_index::write_root_index,
        route_page::write_route_page,
    },
    layout::SiteLayout,
    log,
    route::loader::load_area,
    utils::text::plural_count,
};
use anyhow::{Context, Result};
use std::fs;

/// Counts of what one run generated.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub areas: usize,
    pub routes: usize,
}

/// Build the whole site: every area's pages, then the root index.
pub fn build_site(layout: &SiteLayout) -> Result<BuildSummary> {
    let areas = collect_areas(layout)?;
    if areas.is_empty() {
        log!("warn"; "no areas found in {}", layout.areas_dir().display());
    }

    let mut summary = BuildSummary::default();
    for area in &areas {
        summary.routes += build_area(layout, area)?;
        summary.areas += 1;
    }

    write_root_index(&areas, &layout.root_index())?;

    log_build_result(&summary);
    Ok(summary)
}

/// Enumerate area directories, sorted by name.
fn collect_areas(layout: &SiteLayout) -> Result<Vec<String>> {
    let areas_dir = layout.areas_dir();
    let entries = fs::read_dir(&areas_dir)
        .with_context(|| format!("Failed to read areas directory {}", areas_dir.display()))?;

    let mut areas = Vec::new();
    for entry in entries.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => areas.push(name),
            Err(name) => debug!("scan"; "skipping non-unicode directory {:?}", name),
        }
    }
    areas.sort();
    Ok(areas)
}

/// Build one area: load all metadata, then write index and route pages.
///
/// Loading happens before any write, so a parse failure leaves the
/// area's previous output untouched.
fn build_area(layout: &SiteLayout, area: &str) -> Result<usize> {
    let routes = load_area(&layout.metadata_dir(area))
        .with_context(|| format!("Failed to load routes for area `{area}`"))?;

    write_area_index(area, &routes, &layout.area_index(area))?;
    for route in &routes {
        write_route_page(route, &layout.route_page(area, &route.slug))?;
    }

    log!("area"; "{}: {}", area, plural_count(routes.len(), "route"));
    Ok(routes.len())
}

/// Summary line for the finished run.
fn log_build_result(summary: &BuildSummary) {
    // One page per route, one index per area, plus the root index.
    let pages = summary.routes + summary.areas + 1;
    log!("build"; "generated {} across {}",
        plural_count(pages, "page"), plural_count(summary.areas, "area"));
}
