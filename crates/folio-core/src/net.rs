//! Client address helpers.

/// Redact an IP address for display.
///
/// - missing or empty: `"unknown"`
/// - IPv4 (four dotted parts): keep the first two octets, `a.b.*.*`
/// - IPv6 (at least four colon-separated groups): keep the first two groups
/// - loopback forms that match neither shape: `"local"`
/// - anything else is returned as-is
pub fn mask_ip(ip: Option<&str>) -> String {
    let Some(ip) = ip.map(str::trim).filter(|ip| !ip.is_empty()) else {
        return "unknown".to_string();
    };

    if ip.contains('.') {
        let parts: Vec<&str> = ip.split('.').collect();
        if parts.len() == 4 {
            return format!("{}.{}.*.*", parts[0], parts[1]);
        }
    }

    if ip.contains(':') {
        let parts: Vec<&str> = ip.split(':').collect();
        if parts.len() >= 4 {
            return format!("{}:{}:****:****", parts[0], parts[1]);
        }
    }

    if matches!(ip, "localhost" | "127.0.0.1" | "::1") {
        return "local".to_string();
    }

    ip.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_ipv4() {
        assert_eq!(mask_ip(Some("203.0.113.42")), "203.0.*.*");
        assert_eq!(mask_ip(Some("127.0.0.1")), "127.0.*.*");
    }

    #[test]
    fn masks_ipv6() {
        assert_eq!(mask_ip(Some("2001:db8:85a3::8a2e:370:7334")), "2001:db8:****:****");
    }

    #[test]
    fn missing_is_unknown() {
        assert_eq!(mask_ip(None), "unknown");
        assert_eq!(mask_ip(Some("")), "unknown");
        assert_eq!(mask_ip(Some("   ")), "unknown");
    }

    #[test]
    fn short_loopback_is_local() {
        assert_eq!(mask_ip(Some("::1")), "local");
        assert_eq!(mask_ip(Some("localhost")), "local");
    }

    #[test]
    fn unrecognized_passes_through() {
        assert_eq!(mask_ip(Some("10.0.1")), "10.0.1");
        assert_eq!(mask_ip(Some("unknown")), "unknown");
    }
}
