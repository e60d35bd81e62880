//! Property detail page: gallery, summary card, and extra sections.

use crate::components::{ImageCarousel, Icon, Notify, PanoramaViewer, Toasts};
use crate::config::SiteConfig;
use crate::diagnostics::log_event;
use crate::links::{mailto_link, maps_search_link, share_text, sized_map_embed, whatsapp_link};
use crate::model::Property;
use crate::platform::{
    copy_current_url, open_external, share, share_follow_up, ShareFollowUp, ShareRequest,
    ShareStatus,
};
use dioxus::prelude::*;

// Favorite/panorama flags and the primary visual they select.
include!("state.rs");
// Carousel or panorama area with share/favorite overlay controls.
include!("gallery.rs");
// Title, price, key facts and contact actions.
include!("summary_card.rs");
// Description, video and location sections below the fold.
include!("sections.rs");


#[component]
pub fn PropertyDetailView(property: Property) -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let mut toasts = use_context::<Toasts>();
    let listing_id = property.id.clone();
    let mut state = use_signal(move || DetailState::for_listing(&listing_id));

    let on_share = {
        let property = property.clone();
        move |_: ()| {
            let request = ShareRequest {
                title: property.title.clone(),
                text: share_text(&property),
            };
            spawn(async move {
                let follow_up = match share(&request).await {
                    Ok(status) => {
                        if let ShareStatus::Failed { name, message } = &status {
                            log_event("share", &format!("share failed: {name} {message}"));
                        }
                        share_follow_up(&status)
                    }
                    Err(err) => {
                        log_event("share", &format!("share bridge error: {err}"));
                        ShareFollowUp::CopyLink
                    }
                };
                if follow_up == ShareFollowUp::CopyLink {
                    let copied = copy_current_url().await;
                    finish_link_copy(copied, &mut toasts);
                }
            });
        }
    };

    let on_favorite = move |_: ()| {
        state.with_mut(|state| press_favorite(state, &mut toasts));
    };

    let has_panorama = property.panorama_url().is_some();
    let on_toggle_panorama = move |open: bool| {
        state.with_mut(|state| {
            if open {
                state.open_panorama(has_panorama);
            } else {
                state.close_panorama();
            }
        });
    };

    let whatsapp = whatsapp_link(&config.whatsapp_number, &property);
    let on_contact = move |_: ()| open_external(&whatsapp);

    let mounted_for = state.read().listing_id.clone();

    rsx! {
        div {
            class: "max-w-6xl mx-auto",
            "data-listing": "{mounted_for}",
            button {
                class: "inline-flex items-center text-sm mb-4 md:mb-6 bg-white/5 hover:bg-white/10 text-white px-3 py-1.5 rounded-md transition-colors",
                aria_label: "Back to properties",
                onclick: move |_| navigator().go_back(),
                Icon { name: "arrow-left".to_string(), class: "mr-1.5 w-4 h-4".to_string() }
                span { class: "whitespace-nowrap", "Back to Properties" }
            }

            div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                Gallery {
                    property: property.clone(),
                    state: state(),
                    on_share,
                    on_favorite,
                    on_toggle_panorama,
                }
                SummaryCard {
                    property: property.clone(),
                    mailto: mailto_link(&config.inquiry_email, &property),
                    on_contact,
                }
            }

            DetailSections { property: property.clone() }
            LocationSection { property: property.clone() }
        }
    }
}
