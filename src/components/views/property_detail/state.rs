// Local UI flags for the detail page. Reset whenever the view remounts.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    /// Listing this state was created for.
    pub listing_id: String,
    pub is_favorite: bool,
    pub show_panorama: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PrimaryVisual {
    Panorama(String),
    Carousel(Vec<String>),
    Single(String),
}

impl DetailState {
    pub fn for_listing(listing_id: &str) -> Self {
        Self {
            listing_id: listing_id.to_string(),
            ..Self::default()
        }
    }

    /// Flips the favorite flag and returns the notice for the new state.
    pub fn toggle_favorite(&mut self) -> &'static str {
        self.is_favorite = !self.is_favorite;
        if self.is_favorite {
            "Added to favorites"
        } else {
            "Removed from favorites"
        }
    }

    pub fn open_panorama(&mut self, available: bool) {
        if available {
            self.show_panorama = true;
        }
    }

    pub fn close_panorama(&mut self) {
        self.show_panorama = false;
    }

    pub fn primary_visual(&self, property: &Property) -> PrimaryVisual {
        if self.show_panorama {
            if let Some(url) = property.panorama_url() {
                return PrimaryVisual::Panorama(url.to_string());
            }
        }
        let mut images = property.display_images();
        if images.len() > 1 {
            PrimaryVisual::Carousel(images)
        } else {
            PrimaryVisual::Single(images.remove(0))
        }
    }
}

/// Flips the favorite flag and announces the new state.
pub fn press_favorite(state: &mut DetailState, notifier: &mut impl Notify) {
    let notice = state.toggle_favorite();
    notifier.notify(notice);
}

pub const LINK_COPIED_NOTICE: &str = "Link copied to clipboard";

/// Announces the clipboard fallback of a share attempt.
pub fn finish_link_copy(copied: bool, notifier: &mut impl Notify) {
    if !copied {
        log_event("share", "clipboard write failed");
    }
    notifier.notify(LINK_COPIED_NOTICE);
}
