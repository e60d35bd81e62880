use serde::{Deserialize, Serialize};
use url::Url;

/// Image shown when a listing carries no photos at all.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Property {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub location: String,
    /// Already formatted for display, e.g. "$1,250,000".
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub panorama: Option<String>,
    #[serde(default, alias = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(default, alias = "mapsEmbed")]
    pub maps_embed: Option<String>,
    #[serde(default, alias = "powerSupply")]
    pub power_supply: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl Property {
    /// Images to show in the primary visual area. Never empty.
    pub fn display_images(&self) -> Vec<String> {
        if let Some(images) = self.images.as_ref().filter(|images| !images.is_empty()) {
            return images.clone();
        }
        match self.image.as_deref().filter(|image| !image.is_empty()) {
            Some(image) => vec![image.to_string()],
            None => vec![PLACEHOLDER_IMAGE.to_string()],
        }
    }

    pub fn panorama_url(&self) -> Option<&str> {
        non_blank(&self.panorama)
    }

    /// The video address, only when it is a well-formed absolute http(s) URL.
    pub fn video_embed_url(&self) -> Option<String> {
        let raw = self.video_url.as_deref()?;
        let parsed = Url::parse(raw).ok()?;
        matches!(parsed.scheme(), "http" | "https").then(|| raw.to_string())
    }

    pub fn maps_embed(&self) -> Option<&str> {
        non_blank(&self.maps_embed)
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(&self.description)
    }

    pub fn subtitle(&self) -> Option<&str> {
        non_blank(&self.subtitle)
    }

    pub fn power_supply(&self) -> Option<&str> {
        non_blank(&self.power_supply)
    }

    pub fn style(&self) -> Option<&str> {
        non_blank(&self.style)
    }

    /// Floor area for the summary tile; missing or unusable values read as 0.
    pub fn area_label(&self) -> String {
        match self.area {
            Some(area) if area.is_finite() && area != 0.0 => format!("{area}"),
            _ => "0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Property {
        Property {
            id: "p-1".to_string(),
            title: "Harbour Loft".to_string(),
            location: "Lisbon, Portugal".to_string(),
            price: "$850,000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn display_images_fall_back_to_placeholder() {
        let mut property = listing();
        assert_eq!(property.display_images(), vec![PLACEHOLDER_IMAGE.to_string()]);

        property.images = Some(Vec::new());
        property.image = Some(String::new());
        assert_eq!(property.display_images(), vec![PLACEHOLDER_IMAGE.to_string()]);
    }

    #[test]
    fn display_images_prefer_list_over_single_image() {
        let mut property = listing();
        property.image = Some("/cover.jpg".to_string());
        assert_eq!(property.display_images(), vec!["/cover.jpg".to_string()]);

        property.images = Some(vec!["/a.jpg".to_string(), "/b.jpg".to_string()]);
        assert_eq!(
            property.display_images(),
            vec!["/a.jpg".to_string(), "/b.jpg".to_string()]
        );
    }

    #[test]
    fn video_url_must_be_absolute() {
        let mut property = listing();
        assert_eq!(property.video_embed_url(), None);

        property.video_url = Some("not a url".to_string());
        assert_eq!(property.video_embed_url(), None);

        property.video_url = Some("/relative/path".to_string());
        assert_eq!(property.video_embed_url(), None);

        property.video_url = Some(String::new());
        assert_eq!(property.video_embed_url(), None);

        property.video_url = Some("https://example.com/v".to_string());
        assert_eq!(
            property.video_embed_url().as_deref(),
            Some("https://example.com/v")
        );
    }

    #[test]
    fn video_url_rejects_script_and_data_schemes() {
        let mut property = listing();
        for raw in [
            "javascript:alert(1)",
            "data:text/html,<script>alert(1)</script>",
            "file:///etc/passwd",
        ] {
            property.video_url = Some(raw.to_string());
            assert_eq!(property.video_embed_url(), None, "{raw}");
        }

        property.video_url = Some("http://example.com/tour".to_string());
        assert!(property.video_embed_url().is_some());
    }

    #[test]
    fn area_label_reads_zero_when_missing() {
        let mut property = listing();
        assert_eq!(property.area_label(), "0");

        property.area = Some(f64::NAN);
        assert_eq!(property.area_label(), "0");

        property.area = Some(1200.0);
        assert_eq!(property.area_label(), "1200");

        property.area = Some(84.5);
        assert_eq!(property.area_label(), "84.5");
    }

    #[test]
    fn blank_optional_text_is_treated_as_absent() {
        let mut property = listing();
        property.panorama = Some("   ".to_string());
        property.subtitle = Some(String::new());
        assert_eq!(property.panorama_url(), None);
        assert_eq!(property.subtitle(), None);

        property.panorama = Some("/pano/loft.jpg".to_string());
        assert_eq!(property.panorama_url(), Some("/pano/loft.jpg"));
    }

    #[test]
    fn deserializes_listing_record() {
        let json = r#"{
            "id": "villa-7",
            "title": "Cliffside Villa",
            "location": "Amalfi, Italy",
            "price": "€2,400,000",
            "bedrooms": 5,
            "bathrooms": 4,
            "area": 4100,
            "type": "Villa",
            "video_url": "https://www.youtube.com/embed/abc",
            "power_supply": "Solar + grid"
        }"#;
        let property: Property = serde_json::from_str(json).expect("valid listing");
        assert_eq!(property.kind, "Villa");
        assert_eq!(property.area_label(), "4100");
        assert_eq!(property.power_supply(), Some("Solar + grid"));
        assert!(property.images.is_none());
        assert!(property.maps_embed().is_none());
    }
}
