//! The components module contains all shared components for the site.

mod app;
mod app_view;
mod carousel;
mod icons;
mod panorama;
mod toast;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use carousel::*;
pub use icons::*;
pub use panorama::*;
pub use toast::*;
// Views are accessed via views::ViewName
