//! Format rules: email, URL, domain names, addresses, identifiers

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::arg_text;
use crate::value::to_text;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i)(?:(?:https?|ftp)://)?(?:[^\s:@/]+(?::[^\s:@/]*)?@)?(?P<host>\[[0-9a-f:.]+\]|[^\s/:?#\[\]]+)(?::(?P<port>[0-9]{1,5}))?(?:[/?#]\S*)?$",
    )
    .unwrap()
});

static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)#?(?:[0-9a-f]{3}|[0-9a-f]{4}|[0-9a-f]{6}|[0-9a-f]{8})$").unwrap()
});

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-(?P<version>[0-9a-f])[0-9a-f]{3}-(?P<variant>[0-9a-f])[0-9a-f]{3}-[0-9a-f]{12}$").unwrap()
});

const FQDN_MAX_LEN: usize = 253;
const LABEL_MAX_LEN: usize = 63;

// ============================================================================
// EMAIL / URL
// ============================================================================

/// `isEmail(value)`.
pub fn is_email(value: &Value, _args: &[Value]) -> bool {
    let text = to_text(value);
    // The domain part must still be a real domain name.
    EMAIL_REGEX.is_match(&text)
        && text
            .rsplit_once('@')
            .is_some_and(|(_, domain)| fqdn(domain))
}

/// `isURL(value)`: optional `http`/`https`/`ftp` scheme, host that is a
/// domain name or IP address, optional port and path.
pub fn is_url(value: &Value, _args: &[Value]) -> bool {
    let text = to_text(value);
    let Some(caps) = URL_REGEX.captures(&text) else {
        return false;
    };
    if let Some(port) = caps.name("port")
        && port.as_str().parse::<u16>().is_err()
    {
        return false;
    }
    let host = &caps["host"];
    match host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        Some(v6) => v6.parse::<Ipv6Addr>().is_ok(),
        None => fqdn(host) || host.parse::<Ipv4Addr>().is_ok(),
    }
}

// ============================================================================
// DOMAIN NAME
// ============================================================================

/// `isFQDN(value)`: a fully qualified domain name with an alphabetic TLD.
pub fn is_fqdn(value: &Value, _args: &[Value]) -> bool {
    fqdn(&to_text(value))
}

fn fqdn(input: &str) -> bool {
    if input.is_empty() || input.len() > FQDN_MAX_LEN {
        return false;
    }
    let labels: Vec<&str> = input.split('.').collect();
    let Some((tld, _)) = labels.split_last() else {
        return false;
    };
    if labels.len() < 2 || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= LABEL_MAX_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

// ============================================================================
// ADDRESSES
// ============================================================================

/// `isIP(value, version?)`: version `4`, `6`, or any when omitted.
pub fn is_ip(value: &Value, args: &[Value]) -> bool {
    let text = to_text(value);
    let version = arg_text(args, 0).unwrap_or_default();
    match &*version {
        "" => text.parse::<Ipv4Addr>().is_ok() || text.parse::<Ipv6Addr>().is_ok(),
        "4" => text.parse::<Ipv4Addr>().is_ok(),
        "6" => text.parse::<Ipv6Addr>().is_ok(),
        _ => false,
    }
}

/// `isMACAddress(value)`: six hex octets separated by `:` or `-`, or twelve
/// hex digits with no separator. Separators must be consistent.
pub fn is_mac_address(value: &Value, _args: &[Value]) -> bool {
    let text = to_text(value);
    let octets: Vec<&str> = if text.contains(':') {
        text.split(':').collect()
    } else if text.contains('-') {
        text.split('-').collect()
    } else if text.len() == 12 {
        return text.chars().all(|c| c.is_ascii_hexdigit());
    } else {
        return false;
    };
    octets.len() == 6 && octets.iter().copied().all(is_hex_octet)
}

fn is_hex_octet(octet: &str) -> bool {
    octet.len() == 2 && octet.chars().all(|c| c.is_ascii_hexdigit())
}

// ============================================================================
// IDENTIFIERS / ENCODINGS
// ============================================================================

/// `isUUID(value, version?)`: version `3`, `4`, `5`, or any (`all`) when
/// omitted.
pub fn is_uuid(value: &Value, args: &[Value]) -> bool {
    let text = to_text(value);
    let Some(caps) = UUID_REGEX.captures(&text) else {
        return false;
    };
    let variant_ok = || {
        matches!(
            caps["variant"].to_ascii_lowercase().as_str(),
            "8" | "9" | "a" | "b"
        )
    };
    let version = arg_text(args, 0).unwrap_or_default();
    match &*version {
        "" | "all" => true,
        v @ ("3" | "4" | "5") => &caps["version"] == v && (v == "3" || variant_ok()),
        _ => false,
    }
}

/// `isHexColor(value)`: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`, hash optional.
pub fn is_hex_color(value: &Value, _args: &[Value]) -> bool {
    HEX_COLOR_REGEX.is_match(&to_text(value))
}

/// `isJSON(value)`: text that parses as a JSON object or array.
///
/// An object or array value is accepted as-is.
pub fn is_json(value: &Value, _args: &[Value]) -> bool {
    match value {
        Value::Object(_) | Value::Array(_) => true,
        Value::String(s) => matches!(
            serde_json::from_str::<Value>(s),
            Ok(Value::Object(_) | Value::Array(_))
        ),
        _ => false,
    }
}

/// `isBase64(value)`: standard alphabet, padded to a multiple of four.
pub fn is_base64(value: &Value, _args: &[Value]) -> bool {
    let text = to_text(value);
    let len = text.len();
    if !len.is_multiple_of(4) || !text.chars().all(is_base64_char) {
        return false;
    }
    match text.find('=') {
        None => true,
        Some(idx) if idx == len - 1 => true,
        Some(idx) => idx == len - 2 && text.ends_with('='),
    }
}

fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}
