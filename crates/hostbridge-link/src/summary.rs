//! Log-friendly view of a link.

use std::fmt;

use url::Url;

/// Scheme and host of a link, without path or query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkSummary {
    /// A link that parsed as a URL.
    Parsed {
        /// URL scheme, e.g. `https`.
        scheme: String,

        /// Host, if the URL has one.
        host: Option<String>,
    },

    /// A link the URL parser rejected.
    Opaque {
        /// Length of the raw link in bytes.
        len: usize,
    },
}

impl LinkSummary {
    /// Summarize a raw link.
    pub fn of(uri: &str) -> Self {
        match Url::parse(uri) {
            Ok(url) => Self::Parsed {
                scheme: url.scheme().to_string(),
                host: url.host_str().map(str::to_string),
            },
            Err(_) => Self::Opaque { len: uri.len() },
        }
    }
}

impl fmt::Display for LinkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed {
                scheme,
                host: Some(host),
            } => write!(f, "{scheme}://{host}"),
            Self::Parsed { scheme, host: None } => write!(f, "{scheme}:"),
            Self::Opaque { len } => write!(f, "<opaque link, {len} bytes>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_drops_path_and_query() {
        let summary = LinkSummary::of("https://maya.ravan.ai/x?token=secret");
        assert_eq!(summary.to_string(), "https://maya.ravan.ai");
    }

    #[test]
    fn test_custom_scheme_without_host() {
        let summary = LinkSummary::of("maya:open");
        assert!(matches!(summary, LinkSummary::Parsed { host: None, .. }));
        assert_eq!(summary.to_string(), "maya:");
    }

    #[test]
    fn test_unparsable_link_is_opaque() {
        let summary = LinkSummary::of("not a link");
        assert_eq!(summary, LinkSummary::Opaque { len: 10 });
    }
}
