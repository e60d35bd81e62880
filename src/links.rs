//! Outbound link builders for the detail page.

use crate::model::Property;

const WHATSAPP_BASE: &str = "https://wa.me";
const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search";
const MAP_IFRAME_STYLE: &str = "width:100%; height:100%; min-height:300px; border:0;";

pub fn share_text(property: &Property) -> String {
    format!(
        "Check out this property: {} at {} for {}",
        property.title, property.location, property.price
    )
}

pub fn whatsapp_link(number: &str, property: &Property) -> String {
    let message = format!("I'm interested in {}", property.title);
    format!(
        "{WHATSAPP_BASE}/{number}?text={}",
        urlencoding::encode(&message)
    )
}

pub fn mailto_link(address: &str, property: &Property) -> String {
    let subject = format!("Inquiry: {}", property.title);
    format!("mailto:{address}?subject={}", urlencoding::encode(&subject))
}

pub fn maps_search_link(location: &str) -> String {
    format!("{MAPS_SEARCH_BASE}/{}", urlencoding::encode(location))
}

/// Forces the first embedded iframe to fill the map panel.
pub fn sized_map_embed(embed: &str) -> String {
    embed.replacen("<iframe", &format!("<iframe style=\"{MAP_IFRAME_STYLE}\""), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Property {
        Property {
            title: "Harbour Loft & Studio".to_string(),
            location: "Lisbon, Portugal".to_string(),
            price: "$850,000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn share_text_mentions_title_location_and_price() {
        assert_eq!(
            share_text(&listing()),
            "Check out this property: Harbour Loft & Studio at Lisbon, Portugal for $850,000"
        );
    }

    #[test]
    fn whatsapp_message_is_percent_encoded() {
        assert_eq!(
            whatsapp_link("1234567890", &listing()),
            "https://wa.me/1234567890?text=I%27m%20interested%20in%20Harbour%20Loft%20%26%20Studio"
        );
    }

    #[test]
    fn mailto_carries_subject() {
        assert_eq!(
            mailto_link("info@grayscale.com", &listing()),
            "mailto:info@grayscale.com?subject=Inquiry%3A%20Harbour%20Loft%20%26%20Studio"
        );
    }

    #[test]
    fn maps_link_encodes_location() {
        assert_eq!(
            maps_search_link("Lisbon, Portugal"),
            "https://www.google.com/maps/search/Lisbon%2C%20Portugal"
        );
    }

    #[test]
    fn only_first_iframe_is_resized() {
        let embed = r#"<iframe src="a"></iframe><iframe src="b"></iframe>"#;
        assert_eq!(
            sized_map_embed(embed),
            r#"<iframe style="width:100%; height:100%; min-height:300px; border:0;" src="a"></iframe><iframe src="b"></iframe>"#
        );
        assert_eq!(sized_map_embed("<div>map</div>"), "<div>map</div>");
    }
}
