// Long-form sections under the gallery.

const VIDEO_IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[component]
pub fn DetailSections(property: Property) -> Element {
    let video_url = property.video_embed_url();

    rsx! {
        div { class: "mt-8 grid grid-cols-1 gap-6",
            if let Some(description) = property.description() {
                div { class: "glass-morphism p-6 rounded-lg",
                    h2 { class: "text-xl font-semibold mb-4", "Property Description" }
                    p { class: "text-muted-foreground whitespace-pre-line", "{description}" }
                }
            }

            if let Some(url) = video_url {
                div { class: "glass-morphism p-6 rounded-lg",
                    h2 { class: "text-xl font-semibold mb-4", "Property Video" }
                    div { class: "aspect-video bg-white/5 rounded-lg overflow-hidden",
                        iframe {
                            class: "w-full h-full",
                            src: "{url}",
                            title: "Property Video",
                            allow: VIDEO_IFRAME_ALLOW,
                            allowfullscreen: true,
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn LocationSection(property: Property) -> Element {
    rsx! {
        div { class: "mt-8 glass-morphism p-6 rounded-lg",
            h2 { class: "text-xl font-semibold mb-4", "Location" }
            div { class: "h-[300px] rounded-lg overflow-hidden",
                {
                    match property.maps_embed() {
                        Some(embed) => rsx! {
                            div {
                                class: "map-embed w-full h-full",
                                dangerous_inner_html: sized_map_embed(embed),
                            }
                        },
                        None => rsx! {
                            div { class: "w-full h-full bg-white/5 flex items-center justify-center",
                                div { class: "text-center",
                                    p { class: "text-muted-foreground mb-3", "Map not available" }
                                    a {
                                        class: "inline-flex items-center text-sm font-medium hover:underline",
                                        href: maps_search_link(&property.location),
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "View on Google Maps"
                                        Icon { name: "external-link".to_string(), class: "ml-1 w-3 h-3".to_string() }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
