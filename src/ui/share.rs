//! WhatsApp share deep links.

/// Platform identifiers treated as mobile. On those the native WhatsApp
/// scheme opens the app directly; everywhere else the web endpoint is used.
const MOBILE_PLATFORM_TAGS: &[&str] = &["android", "ios", "iphone", "ipad", "ipod"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Classify the running platform.
    pub fn detect() -> Self {
        Self::from_platform_tag(std::env::consts::OS)
    }

    pub fn from_platform_tag(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        if MOBILE_PLATFORM_TAGS.iter().any(|mobile| tag.contains(mobile)) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Deep link carrying the narrative, shaped per device class.
pub fn whatsapp_share_url(narrative: &str, device: DeviceClass) -> String {
    let encoded = urlencoding::encode(narrative);
    match device {
        DeviceClass::Mobile => format!("whatsapp://send?text={encoded}"),
        DeviceClass::Desktop => format!("https://wa.me/?text={encoded}"),
    }
}

/// Open the share link in the system handler. Fire-and-forget: there is no
/// delivery confirmation to wait for.
pub fn open_share(narrative: &str) {
    let url = whatsapp_share_url(narrative, DeviceClass::detect());
    if let Err(err) = webbrowser::open(&url) {
        log::error!("failed to open share link: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_tag_classification() {
        assert_eq!(DeviceClass::from_platform_tag("android"), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_platform_tag("iOS"), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_platform_tag("iPhone OS"), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_platform_tag("linux"), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_platform_tag("macos"), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_platform_tag("windows"), DeviceClass::Desktop);
    }

    #[test]
    fn share_urls_percent_encode_the_narrative() {
        let url = whatsapp_share_url("halo dunia & kawan", DeviceClass::Desktop);
        assert_eq!(url, "https://wa.me/?text=halo%20dunia%20%26%20kawan");

        let url = whatsapp_share_url("halo", DeviceClass::Mobile);
        assert_eq!(url, "whatsapp://send?text=halo");
    }
}
