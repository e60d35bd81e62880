// Primary visual column: carousel, single photo or 360° viewer.

const OVERLAY_BUTTON_CLASS: &str = "absolute bottom-4 left-4 inline-flex items-center text-sm px-3 py-1.5 rounded-md bg-black/70 backdrop-blur-md border border-white/10 text-white";
const ROUND_BUTTON_CLASS: &str = "bg-black/50 hover:bg-black/70 backdrop-blur-md border border-white/10 text-white rounded-full w-10 h-10 p-0 flex items-center justify-center";

#[component]
pub fn Gallery(
    property: Property,
    state: DetailState,
    on_share: EventHandler<()>,
    on_favorite: EventHandler<()>,
    on_toggle_panorama: EventHandler<bool>,
) -> Element {
    let has_panorama = property.panorama_url().is_some();
    let favorite_class = if state.is_favorite {
        format!("{ROUND_BUTTON_CLASS} text-red-500")
    } else {
        ROUND_BUTTON_CLASS.to_string()
    };
    let heart = if state.is_favorite { "heart-filled" } else { "heart" };

    rsx! {
        div { class: "lg:col-span-2 relative",
            {
                match state.primary_visual(&property) {
                    PrimaryVisual::Panorama(url) => rsx! {
                        div { class: "h-[400px] md:h-[500px] relative rounded-lg overflow-hidden",
                            PanoramaViewer { panorama_url: url }
                            button {
                                class: OVERLAY_BUTTON_CLASS,
                                onclick: move |_| on_toggle_panorama.call(false),
                                "Exit 360° View"
                            }
                        }
                    },
                    PrimaryVisual::Carousel(images) => rsx! {
                        ImageCarousel { images, title: property.title.clone() }
                    },
                    PrimaryVisual::Single(image) => rsx! {
                        div { class: "single-image h-[400px] md:h-[500px] relative overflow-hidden rounded-lg",
                            img {
                                class: "w-full h-full object-cover",
                                src: "{image}",
                                alt: "{property.title}",
                            }
                        }
                    },
                }
            }

            if has_panorama && !state.show_panorama {
                button {
                    class: OVERLAY_BUTTON_CLASS,
                    onclick: move |_| on_toggle_panorama.call(true),
                    Icon { name: "panorama".to_string(), class: "w-4 h-4 mr-2".to_string() }
                    "View 360°"
                }
            }

            div { class: "absolute top-4 right-4 flex space-x-2",
                button {
                    class: ROUND_BUTTON_CLASS,
                    aria_label: "Share property",
                    onclick: move |_| on_share.call(()),
                    Icon { name: "share".to_string(), class: "w-4 h-4".to_string() }
                }
                button {
                    class: "{favorite_class}",
                    aria_label: if state.is_favorite { "Remove from favorites" } else { "Add to favorites" },
                    onclick: move |_| on_favorite.call(()),
                    Icon { name: heart.to_string(), class: "w-4 h-4".to_string() }
                }
            }

            div { class: "absolute top-4 left-4 bg-black/50 backdrop-blur-md px-3 py-1.5 rounded-md text-xs font-medium",
                "{property.kind}"
            }
        }
    }
}
