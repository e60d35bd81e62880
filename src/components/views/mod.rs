mod catalog;
mod property_detail;

pub use catalog::CatalogView;
pub use property_detail::PropertyDetailView;
