use crate::catalog::find_property;
use crate::components::views::PropertyDetailView;
use crate::components::{use_toast_provider, view_label, AppView, Icon, ToastHost};
use crate::config::SiteConfig;
use dioxus::prelude::*;

#[component]
pub fn SiteShell() -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let view = use_route::<AppView>();
    use_toast_provider();

    rsx! {
        document::Title { "{view_label(&view)} | {config.brand_name}" }

        div { class: "min-h-screen flex flex-col text-white",
            header { class: "fixed top-0 inset-x-0 z-40 border-b border-white/10 bg-black/60 backdrop-blur-xl",
                nav { class: "max-w-6xl mx-auto flex items-center justify-between px-4 py-4",
                    Link {
                        class: "text-lg font-semibold tracking-wide",
                        to: AppView::CatalogView {},
                        "{config.brand_name}"
                    }
                    Link {
                        class: "text-sm text-white/70 hover:text-white transition-colors",
                        to: AppView::CatalogView {},
                        "Properties"
                    }
                }
            }

            main { class: "flex-1 pt-24 pb-16 px-4", Outlet::<AppView> {} }

            footer { class: "border-t border-white/10 py-8 px-4 text-center text-sm text-white/50",
                "© {config.brand_name}. "
                a {
                    class: "hover:text-white transition-colors",
                    href: "mailto:{config.inquiry_email}",
                    "{config.inquiry_email}"
                }
            }
        }

        ToastHost {}
    }
}

#[component]
pub fn PropertyPage(id: String) -> Element {
    match find_property(&id) {
        Some(property) => rsx! {
            PropertyDetailView { key: "{id}", property: property.clone() }
            document::Title { "{property.title} | {property.location}" }
        },
        None => rsx! {
            MissingPanel { message: "Property not found".to_string() }
        },
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        MissingPanel { message: format!("Nothing lives at /{path}") }
    }
}

#[component]
fn MissingPanel(message: String) -> Element {
    rsx! {
        div { class: "max-w-6xl mx-auto flex flex-col items-center justify-center py-20",
            Icon { name: "map-pin".to_string(), class: "w-16 h-16 text-white/30 mb-4".to_string() }
            p { class: "text-white/60 mb-6", "{message}" }
            Link {
                class: "inline-flex items-center text-sm bg-white/5 hover:bg-white/10 px-3 py-1.5 rounded-md transition-colors",
                to: AppView::CatalogView {},
                Icon { name: "arrow-left".to_string(), class: "mr-1.5 w-4 h-4".to_string() }
                "Browse properties"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::RefCell;

    thread_local! {
        static SELECTED: RefCell<String> = RefCell::new("harbour-loft".to_string());
    }

    #[component]
    fn PageHarness() -> Element {
        use_toast_provider();
        let id = SELECTED.with(|selected| selected.borrow().clone());
        rsx! {
            PropertyPage { id }
        }
    }

    #[test]
    fn switching_listings_remounts_the_detail_view() {
        let mut dom = VirtualDom::new(PageHarness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("data-listing=\"harbour-loft\""));

        SELECTED.with(|selected| *selected.borrow_mut() = "cedar-cottage".to_string());
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("data-listing=\"cedar-cottage\""));
        assert!(html.contains("Cedar Cottage"));
        assert!(!html.contains("harbour-loft"));
    }
}
