//! Page generators for static site output.
//!
//! Renders the three page kinds from loaded route metadata:
//!
//! - **Area index**: filterable route list per area (`areas/<area>/index.html`)
//! - **Route page**: map, facts, description per route (`routes/<slug>.html`)
//! - **Root index**: entry page linking all areas (`index.html`)
//!
//! Each pairs an `include_str!` HTML template with a typed variable
//! struct, so generation is deterministic: the same metadata always
//! produces the same bytes.

pub mod area_index;
pub mod root_index;
pub mod route_page;

mod template;

// Re-export core types
pub use template::{Template, TemplateVars};
