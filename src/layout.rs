//! Fixed filesystem layout of a route archive.
//!
//! Every input and output location derives from one project root:
//!
//! ```text
//! <root>/
//! ├── index.html                  (generated root index)
//! ├── shared/style.css            (supplied by the repository)
//! └── areas/
//!     └── <area>/
//!         ├── index.html          (generated area index)
//!         ├── metadata/*.md       (route front matter, input)
//!         ├── routes/<slug>.html  (generated route pages)
//!         ├── images/             (referenced by route pages)
//!         └── gpx/                (referenced by route pages)
//! ```
//!
//! The generated pages reach the stylesheet, images and gpx tracks via
//! fixed relative offsets, so this layout is part of the output contract
//! and is not configurable.

use std::path::PathBuf;

const AREAS_DIR: &str = "areas";
const METADATA_DIR: &str = "metadata";
const ROUTES_DIR: &str = "routes";

/// Resolves input and output paths from the project root.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory containing one subdirectory per area.
    pub fn areas_dir(&self) -> PathBuf {
        self.root.join(AREAS_DIR)
    }

    /// Metadata source directory for one area.
    pub fn metadata_dir(&self, area: &str) -> PathBuf {
        self.areas_dir().join(area).join(METADATA_DIR)
    }

    /// Output file for an area's index page.
    pub fn area_index(&self, area: &str) -> PathBuf {
        self.areas_dir().join(area).join("index.html")
    }

    /// Output file for one route page.
    pub fn route_page(&self, area: &str, slug: &str) -> PathBuf {
        self.areas_dir()
            .join(area)
            .join(ROUTES_DIR)
            .join(format!("{slug}.html"))
    }

    /// Output file for the root index page.
    pub fn root_index(&self) -> PathBuf {
        self.root.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_layout_paths() {
        let layout = SiteLayout::new("/site");
        assert_eq!(layout.areas_dir(), Path::new("/site/areas"));
        assert_eq!(
            layout.metadata_dir("fryksas"),
            Path::new("/site/areas/fryksas/metadata")
        );
        assert_eq!(
            layout.area_index("fryksas"),
            Path::new("/site/areas/fryksas/index.html")
        );
        assert_eq!(
            layout.route_page("fryksas", "runda-1"),
            Path::new("/site/areas/fryksas/routes/runda-1.html")
        );
        assert_eq!(layout.root_index(), Path::new("/site/index.html"));
    }

    #[test]
    fn test_layout_relative_root() {
        let layout = SiteLayout::new(".");
        assert_eq!(layout.areas_dir(), Path::new("./areas"));
        assert_eq!(layout.root_index(), Path::new("./index.html"));
    }
}
