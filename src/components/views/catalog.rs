use crate::catalog::load_catalog;
use crate::components::{AppView, Icon};
use crate::diagnostics::log_event;
use crate::model::Property;
use dioxus::prelude::*;

#[component]
pub fn CatalogView() -> Element {
    let properties = match load_catalog() {
        Ok(properties) => properties.to_vec(),
        Err(err) => {
            log_event("catalog", &format!("failed to parse bundled listings: {err}"));
            Vec::new()
        }
    };

    rsx! {
        div { class: "max-w-6xl mx-auto space-y-8",
            header {
                h1 { class: "text-3xl font-semibold", "Properties" }
                p { class: "text-muted-foreground mt-1", "{properties.len()} listings" }
            }

            if properties.is_empty() {
                div { class: "flex flex-col items-center justify-center py-20",
                    Icon { name: "map-pin".to_string(), class: "w-16 h-16 text-white/30 mb-4".to_string() }
                    p { class: "text-white/60", "No listings available" }
                }
            } else {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for property in properties {
                        PropertyCard { key: "{property.id}", property }
                    }
                }
            }
        }
    }
}

#[component]
fn PropertyCard(property: Property) -> Element {
    let cover = property.display_images().remove(0);

    rsx! {
        Link {
            class: "glass-morphism rounded-lg overflow-hidden block hover:bg-white/5 transition-colors",
            to: AppView::PropertyPage {
                id: property.id.clone(),
            },
            div { class: "h-48 overflow-hidden",
                img {
                    class: "w-full h-full object-cover",
                    src: "{cover}",
                    alt: "{property.title}",
                }
            }
            div { class: "p-4 space-y-1",
                p { class: "text-xs uppercase tracking-wide text-white/50", "{property.kind}" }
                h2 { class: "text-lg font-semibold", "{property.title}" }
                p { class: "text-sm text-muted-foreground", "{property.location}" }
                p { class: "text-base font-bold pt-2", "{property.price}" }
            }
        }
    }
}
