// sentinel-core/src/domain/remediation/location.rs

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::domain::error::DomainError;

fn re_uri() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<scheme>[a-z][a-z0-9+.-]*)://(?P<rest>.*)$")
            // hardcoded pattern: the fallback matches nothing
            .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
    })
}

/// Where quarantined objects live. Object-store URIs are split into bucket and
/// key prefix; anything else is a local directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuarantineLocation {
    Local { path: PathBuf },
    ObjectStore {
        scheme: String,
        bucket: String,
        prefix: String,
    },
}

impl QuarantineLocation {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::InvalidLocation(raw.to_string()));
        }

        let Some(caps) = re_uri().captures(raw) else {
            return Ok(Self::Local {
                path: PathBuf::from(raw),
            });
        };

        let scheme = caps["scheme"].to_string();
        let rest = &caps["rest"];

        if scheme == "file" {
            if rest.is_empty() {
                return Err(DomainError::InvalidLocation(raw.to_string()));
            }
            return Ok(Self::Local {
                path: PathBuf::from(rest),
            });
        }

        let (bucket, prefix) = rest.split_once('/').unwrap_or((rest, ""));
        if bucket.is_empty() {
            return Err(DomainError::InvalidLocation(raw.to_string()));
        }

        Ok(Self::ObjectStore {
            scheme,
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
        })
    }
}

impl fmt::Display for QuarantineLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { path } => write!(f, "{}", path.display()),
            Self::ObjectStore {
                scheme,
                bucket,
                prefix,
            } => write!(f, "{}://{}/{}", scheme, bucket, prefix),
        }
    }
}
