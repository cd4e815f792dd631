//! Field grammars for zone-file records.
//!
//! Every pattern is compiled once into [`GRAMMARS`] on first use and never
//! mutated afterwards, so the predicates here are cheap to call from any
//! thread.

use std::net::Ipv6Addr;
use std::sync::LazyLock;

use regex::Regex;

struct Grammars {
    fqdn: Regex,
    fqdn_no_underscore: Regex,
    ipv4: Regex,
    mx: Regex,
    subdomain: Regex,
    subdomain_plain: Regex,
    txt_subdomain: Regex,
    ttl: Regex,
    escaped_whitespace: Regex,
}

impl Grammars {
    fn compile() -> Self {
        let re = |pattern: &str| Regex::new(pattern).expect("Failed to parse an internal regex!");
        Self {
            // first label, at least one more dot-terminated part, single trailing dot
            fqdn: re(r"\A[-a-z0-9_]+\.[-.a-z0-9_]*\.\z"),
            fqdn_no_underscore: re(r"\A[-a-z0-9]+\.[-.a-z0-9]*\.\z"),
            ipv4: re(concat!(
                r"\A(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}",
                r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\z"
            )),
            // ASCII whitespace only; U+2003 and friends are not separators
            mx: re(r"\A(?P<priority>[0-9]+)(?-u:\s)(?P<domain>.*)\z"),
            // a lone "*" or an optional "*." prefix on the least significant label
            subdomain: re(r"\A(?:\*\.)?[-_.a-z0-9]*\z|\A\*\z"),
            subdomain_plain: re(r"\A[-.a-z0-9]*\z"),
            txt_subdomain: re(r"\A[-_.a-zA-Z0-9]*\z"),
            ttl: re(r"\A[0-9]+\z"),
            escaped_whitespace: re(r"\\\s"),
        }
    }
}

static GRAMMARS: LazyLock<Grammars> = LazyLock::new(Grammars::compile);

/// Lower-case, dot-terminated domain name with at least two labels.
pub fn is_fqdn(name: &str, allow_underscore: bool) -> bool {
    if allow_underscore {
        GRAMMARS.fqdn.is_match(name)
    } else {
        GRAMMARS.fqdn_no_underscore.is_match(name)
    }
}

/// Dotted-quad IPv4 address, every octet in `0..=255`.
pub fn is_ipv4(address: &str) -> bool {
    GRAMMARS.ipv4.is_match(address)
}

/// IPv6 address in any textual form: at most one `::`, up to eight groups of
/// one to four hex digits, optionally ending in an embedded IPv4 address.
pub fn is_ipv6(address: &str) -> bool {
    address.parse::<Ipv6Addr>().is_ok()
}

/// `<priority> <fqdn>` with exactly one whitespace character between them.
pub fn is_mx(priority_and_domain: &str, allow_underscore: bool) -> bool {
    GRAMMARS
        .mx
        .captures(priority_and_domain)
        .and_then(|caps| caps.name("domain"))
        .is_some_and(|domain| is_fqdn(domain.as_str(), allow_underscore))
}

/// Subdomain of a non-TXT record. Blank is rejected; the apex is `@`.
///
/// Without `extended`, only lower-case letters, digits, `-` and `.` are
/// allowed: no `_` and no wildcard.
pub fn is_subdomain(subdomain: &str, extended: bool) -> bool {
    match subdomain {
        "" => false,
        "@" => true,
        other if extended => GRAMMARS.subdomain.is_match(other),
        other => GRAMMARS.subdomain_plain.is_match(other),
    }
}

/// Subdomain of a TXT record: like [`is_subdomain`] but mixed case and
/// underscores are fine (`_dmarc`, `Selector1._domainkey`) and wildcards are not.
pub fn is_txt_subdomain(subdomain: &str) -> bool {
    match subdomain {
        "" => false,
        "@" => true,
        other => GRAMMARS.txt_subdomain.is_match(other),
    }
}

/// Parse a TTL written as plain decimal digits.
///
/// Signs, whitespace and values that overflow `u64` are rejected.
pub fn parse_ttl(ttl: &str) -> Option<u64> {
    if !GRAMMARS.ttl.is_match(ttl) {
        return None;
    }
    ttl.parse().ok()
}

/// `true` if some `;` in the data is not written as `\;`.
pub fn has_unescaped_semicolons(data: &str) -> bool {
    let semicolons = data.matches(';').count();
    let escaped = data.matches("\\;").count();
    escaped < semicolons
}

/// `true` if some whitespace character in the data is not preceded by `\`.
pub fn has_unescaped_whitespace(data: &str) -> bool {
    let whitespace = data.chars().filter(|c| c.is_whitespace()).count();
    let escaped = GRAMMARS.escaped_whitespace.find_iter(data).count();
    escaped < whitespace
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── fqdn ─────────────────────────────────────────────────────────────────

    #[test]
    fn fqdn_accepts_trivial_and_long_names() {
        assert!(is_fqdn("example.com.", true));
        assert!(is_fqdn("this.is-a.surprisingly.long.example.1.com.", true));
    }

    #[test]
    fn fqdn_requires_a_tld_and_a_domain() {
        assert!(!is_fqdn("example.", true));
        assert!(!is_fqdn(".com.", true));
    }

    #[test]
    fn fqdn_requires_trailing_period() {
        assert!(!is_fqdn("example.com", true));
        assert!(!is_fqdn("bad_example.com", true));
    }

    #[test]
    fn fqdn_rejects_unicode_and_uppercase() {
        assert!(!is_fqdn("båd-éxämple.com.", true));
        assert!(!is_fqdn("BAD-EXAMPLE.COM.", true));
    }

    #[test]
    fn fqdn_underscore_follows_policy() {
        assert!(is_fqdn("_dmarc.example.com.", true));
        assert!(!is_fqdn("bad_example.com.", false));
        assert!(is_fqdn("good-example.com.", false));
    }

    #[test]
    fn fqdn_is_false_whenever_trailing_dot_is_missing() {
        for name in ["a.b", "x.example.com", "a.b.c.d.e", "ns1.example.co.uk"] {
            assert!(!is_fqdn(name, true), "{name}");
            assert!(is_fqdn(&format!("{name}."), true), "{name}.");
        }
    }

    // ── ipv4 / ipv6 ──────────────────────────────────────────────────────────

    #[test]
    fn ipv4_bounds() {
        assert!(is_ipv4("127.0.0.1"));
        assert!(is_ipv4("0.0.0.0"));
        assert!(is_ipv4("255.255.255.255"));
        assert!(!is_ipv4("256.256.256.256"));
    }

    #[test]
    fn ipv4_shape() {
        assert!(!is_ipv4("1.1.1"));
        assert!(!is_ipv4("1.1.1.1.1"));
        assert!(!is_ipv4("d.e.a.d"));
        assert!(!is_ipv4("1.1.1.1 "));
    }

    #[test]
    fn ipv6_forms() {
        assert!(is_ipv6("2001:db8::1"));
        assert!(is_ipv6("2001:0db8:0000:0000:0000:ff00:0042:8329"));
        assert!(is_ipv6("::1"));
        assert!(is_ipv6("::ffff:192.0.2.128"));
        assert!(is_ipv6("2001:DB8::1"));
    }

    #[test]
    fn ipv6_rejects_malformed() {
        assert!(!is_ipv6("2001:db8::1::1"));
        assert!(!is_ipv6("2001:db8:0:0:0:0:0:0:1"));
        assert!(!is_ipv6("12345::1"));
        assert!(!is_ipv6("127.0.0.1"));
        assert!(!is_ipv6(""));
    }

    // ── mx ───────────────────────────────────────────────────────────────────

    #[test]
    fn mx_accepts_priority_and_fqdn() {
        assert!(is_mx("10 example.com.", true));
        assert!(is_mx("10412 longer.test-example.com.", true));
    }

    #[test]
    fn mx_rejects_other_shapes() {
        assert!(!is_mx("10", true));
        assert!(!is_mx("example.com.", true));
        assert!(!is_mx("example.com. 10", true));
        assert!(!is_mx("10  example.com.", true));
    }

    #[test]
    fn mx_separator_is_ascii_whitespace() {
        assert!(is_mx("10\texample.com.", true));
        assert!(!is_mx("10\u{2003}example.com.", true));
        assert!(!is_mx("10\u{a0}example.com.", true));
    }

    #[test]
    fn mx_rejects_invalid_fqdn() {
        assert!(!is_mx("10 .com.", true));
        assert!(!is_mx("10 0.0.0.0", true));
        assert!(!is_mx("10 foo_bar.com", true));
        assert!(!is_mx("10 foo_bar.com.", false));
    }

    // ── subdomains ───────────────────────────────────────────────────────────

    #[test]
    fn subdomain_accepts_origin_labels_and_wildcards() {
        assert!(is_subdomain("@", true));
        assert!(is_subdomain("example", true));
        assert!(is_subdomain("long-example66", true));
        assert!(is_subdomain("dotted.example", true));
        assert!(is_subdomain("*", true));
        assert!(is_subdomain("*.example", true));
    }

    #[test]
    fn subdomain_rejects_blank_uppercase_and_misplaced_wildcards() {
        assert!(!is_subdomain("", true));
        assert!(!is_subdomain("b@d-example", true));
        assert!(!is_subdomain("BAD-EXAMPLE", true));
        assert!(!is_subdomain("example.*", true));
        assert!(!is_subdomain("*.*.example", true));
    }

    #[test]
    fn plain_subdomain_has_no_wildcards_or_underscores() {
        assert!(is_subdomain("@", false));
        assert!(is_subdomain("dotted.example", false));
        assert!(!is_subdomain("*", false));
        assert!(!is_subdomain("*.example", false));
        assert!(!is_subdomain("under_score", false));
        assert!(is_subdomain("under_score", true));
    }

    #[test]
    fn txt_subdomain_allows_underscores_and_case() {
        assert!(is_txt_subdomain("@"));
        assert!(is_txt_subdomain("_dmarc"));
        assert!(is_txt_subdomain("Selector1._domainkey"));
        assert!(!is_txt_subdomain(""));
        assert!(!is_txt_subdomain("*.example"));
    }

    // ── ttl ──────────────────────────────────────────────────────────────────

    #[test]
    fn ttl_parses_plain_digits_only() {
        assert_eq!(parse_ttl("300"), Some(300));
        assert_eq!(parse_ttl(""), None);
        assert_eq!(parse_ttl("+300"), None);
        assert_eq!(parse_ttl("3OO"), None);
        assert_eq!(parse_ttl(" 300"), None);
        assert_eq!(parse_ttl("99999999999999999999999"), None);
    }

    // ── txt escaping ─────────────────────────────────────────────────────────

    #[test]
    fn semicolons_must_be_escaped() {
        assert!(!has_unescaped_semicolons("v=spf1 include:example.com ~all"));
        assert!(!has_unescaped_semicolons(r"v=DMARC1\; p=none"));
        assert!(has_unescaped_semicolons("v=DMARC1; p=none"));
        assert!(has_unescaped_semicolons(r"a\;b;c"));
    }

    #[test]
    fn whitespace_must_be_escaped() {
        assert!(!has_unescaped_whitespace("nospaces"));
        assert!(!has_unescaped_whitespace(r"escaped\ space"));
        assert!(has_unescaped_whitespace("raw space"));
    }
}
