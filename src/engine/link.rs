//! Affiliate link construction and validation.

use url::Url;

use super::core::GenerateError;

/// Query parameter every affiliate link must carry.
pub const AFFILIATE_PARAM: &str = "affiliate_code";

/// Build a link from the configured base URL, a program path fragment and a
/// raw code. The code is percent-encoded; base and path concatenate as-is.
pub fn build_affiliate_link(base_url: &str, program_path: &str, code: &str) -> String {
    format!(
        "{base_url}{program_path}?{AFFILIATE_PARAM}={}",
        urlencoding::encode(code)
    )
}

/// Check a user-supplied link: it must parse as an absolute URL and already
/// carry the affiliate parameter (any value, including empty). The link
/// itself is never rewritten.
pub fn validate_supplied_link(link: &str) -> Result<(), GenerateError> {
    let url = Url::parse(link).map_err(|_| GenerateError::LinkMalformed)?;

    if url.query_pairs().any(|(key, _)| key == AFFILIATE_PARAM) {
        Ok(())
    } else {
        Err(GenerateError::LinkMissingAffiliateParam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_link_with_percent_encoded_code() {
        let link = build_affiliate_link("https://x.org", "/promo", "abc");
        assert_eq!(link, "https://x.org/promo?affiliate_code=abc");

        let link = build_affiliate_link("https://x.org", "/promo", "a b&c");
        assert_eq!(link, "https://x.org/promo?affiliate_code=a%20b%26c");
    }

    #[test]
    fn accepts_link_carrying_the_affiliate_parameter() {
        assert!(validate_supplied_link("https://x.org/promo?affiliate_code=abc").is_ok());
        // Parameter with an empty value still counts as present
        assert!(validate_supplied_link("https://x.org/promo?affiliate_code=").is_ok());
        assert!(
            validate_supplied_link("https://x.org/promo?foo=1&affiliate_code=abc").is_ok()
        );
    }

    #[test]
    fn rejects_link_without_the_affiliate_parameter() {
        assert_eq!(
            validate_supplied_link("https://x.org/promo?foo=1"),
            Err(GenerateError::LinkMissingAffiliateParam)
        );
        assert_eq!(
            validate_supplied_link("https://x.org/promo"),
            Err(GenerateError::LinkMissingAffiliateParam)
        );
    }

    #[test]
    fn rejects_relative_or_unparsable_links() {
        assert_eq!(
            validate_supplied_link("x.org/promo?affiliate_code=abc"),
            Err(GenerateError::LinkMalformed)
        );
        assert_eq!(
            validate_supplied_link("not a url"),
            Err(GenerateError::LinkMalformed)
        );
    }

    #[test]
    fn a_similarly_named_parameter_does_not_count() {
        assert_eq!(
            validate_supplied_link("https://x.org/promo?affiliate_codes=abc"),
            Err(GenerateError::LinkMissingAffiliateParam)
        );
    }
}
