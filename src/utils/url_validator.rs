// URL well-formedness checks for analysis
// A URL is analyzable when it has a scheme, a `//authority` part and a host

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::{Host, Url};

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Missing authority in URL")]
    MissingAuthority,

    #[error("Missing host in URL")]
    MissingHost,
}

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// A URL that passed validation, keeping the text the user typed.
///
/// Heuristics look at the raw text (`raw`, `authority`) so they see exactly
/// what was submitted; the parsed `Url` is only used for structural facts
/// such as the scheme and host kind.
#[derive(Debug, Clone)]
pub struct ParsedUrl<'a> {
    raw: &'a str,
    authority: &'a str,
    url: Url,
}

impl<'a> ParsedUrl<'a> {
    /// The URL exactly as submitted
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Raw `userinfo@host:port` text between `//` and the path
    pub fn authority(&self) -> &'a str {
        self.authority
    }

    /// Lowercased scheme
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host_str(&self) -> Option<&str> {
        self.url.host_str()
    }

    pub fn is_https(&self) -> bool {
        self.url.scheme() == "https"
    }

    /// True for dotted (`10.0.0.1`) and numeric (`http://167772161/`) IPv4 hosts
    pub fn is_ipv4_host(&self) -> bool {
        matches!(self.url.host(), Some(Host::Ipv4(_)))
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Parse a URL for analysis.
///
/// Requires an absolute URL with a scheme, an explicit `//` authority and a
/// non-empty host. `example.com`, `mailto:a@b.c` and `http:example.com` are
/// all rejected.
pub fn parse_analyzable_url(raw: &str) -> Result<ParsedUrl<'_>, UrlValidationError> {
    let url = Url::parse(raw).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    // The `//` must follow the scheme directly; `url` repairs `http:/host`
    // and `http:\\host`, which would leave the authority to a later `://`
    let scheme_len = url.scheme().len();
    let has_scheme_prefix = raw
        .get(..scheme_len)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(url.scheme()))
        && raw
            .get(scheme_len..)
            .is_some_and(|rest| rest.starts_with("://"));
    if !has_scheme_prefix {
        return Err(UrlValidationError::MissingAuthority);
    }

    let authority = raw_authority(raw).ok_or(UrlValidationError::MissingAuthority)?;
    if authority.is_empty() {
        return Err(UrlValidationError::MissingAuthority);
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {},
        _ => return Err(UrlValidationError::MissingHost),
    }

    Ok(ParsedUrl {
        raw,
        authority,
        url,
    })
}

/// Raw authority text: everything after `scheme://` up to the next `/`, `?`
/// or `#`. `None` unless `://` directly follows the scheme.
pub fn raw_authority(raw: &str) -> Option<&str> {
    let (scheme, rest) = raw.split_once(':')?;
    if scheme.is_empty() {
        return None;
    }
    let rest = rest.strip_prefix("//")?;
    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
