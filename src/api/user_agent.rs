use regex::Regex;
use std::sync::LazyLock;

static MOBILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Mobi|Android|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .unwrap_or_else(|e| panic!("mobile user agent pattern is invalid: {e}"))
});

/// Whether a `User-Agent` header belongs to a phone or tablet browser.
pub fn is_mobile(user_agent: &str) -> bool {
    MOBILE_PATTERN.is_match(user_agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_agents() {
        assert!(is_mobile(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
        ));
        assert!(is_mobile("Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile Safari/537.36"));
        assert!(is_mobile("opera mini/8.0"));
    }

    #[test]
    fn test_desktop_agents() {
        assert!(!is_mobile(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36"
        ));
        assert!(!is_mobile(""));
    }
}
