//! Defines the site routes.

use crate::components::views::CatalogView;
use crate::components::{NotFound, PropertyPage, SiteShell};
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(SiteShell)]
        #[route("/")]
        CatalogView {},
        #[route("/property/:id")]
        PropertyPage { id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::CatalogView {} => "Properties",
        AppView::PropertyPage { .. } => "Property",
        AppView::NotFound { .. } => "Not Found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_route_round_trips_through_its_path() {
        let route = AppView::PropertyPage {
            id: "harbour-loft".to_string(),
        };
        assert_eq!(route.to_string(), "/property/harbour-loft");
        assert_eq!("/property/harbour-loft".parse::<AppView>().ok(), Some(route));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = "/listings/42".parse::<AppView>().ok();
        assert!(matches!(route, Some(AppView::NotFound { .. })));
        assert_eq!(view_label(&route.unwrap()), "Not Found");
    }
}
