use serde::{Deserialize, Serialize};

/// Site-wide contact and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand_name: String,
    /// Digits only, as wa.me expects.
    pub whatsapp_number: String,
    pub inquiry_email: String,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_toast_duration_ms() -> u64 {
    3000
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "Grayscale".to_string(),
            whatsapp_number: "1234567890".to_string(),
            inquiry_email: "info@grayscale.com".to_string(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_duration_defaults_when_omitted() {
        let config: SiteConfig = serde_json::from_str(
            r#"{"brand_name":"Acme","whatsapp_number":"15550001","inquiry_email":"hi@acme.test"}"#,
        )
        .expect("valid config");
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.brand_name, "Acme");
    }
}
