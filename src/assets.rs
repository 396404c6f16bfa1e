//! Embedded static assets.
//!
//! Assets are compiled into the binary and registered in the route table
//! ahead of the content tree, so a content item cannot shadow them.

use crate::routing::router::{DuplicateRoute, Handler, RouteTableBuilder, StaticPage};

/// Stylesheet referenced by every category page.
pub const STYLE_CSS: &str = include_str!("../assets/style.css");

/// Path of the stylesheet.
pub const STYLE_CSS_PATH: &str = "/style.css";

/// A route table pre-seeded with every embedded asset.
pub fn asset_routes() -> Result<RouteTableBuilder, DuplicateRoute> {
    let mut routes = RouteTableBuilder::new();
    routes.insert(
        STYLE_CSS_PATH,
        Handler::StaticPage(StaticPage::new(STYLE_CSS, "text/css; charset=utf-8")),
    )?;
    Ok(routes)
}
