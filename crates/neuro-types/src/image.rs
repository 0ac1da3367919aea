use crate::{Error, Result};

const IMAGE_SCHEME: &str = "image://";
const DEFAULT_TAG: &str = "latest";

/// Recognizes images hosted on the platform's own registry.
///
/// The platform hands back fully qualified references such as
/// `registry.neu.ro/bob/swiss-box:red`; users know them as
/// `image://bob/swiss-box:red`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNameParser {
    registry_host: String,
}

impl ImageNameParser {
    /// Build a parser from the registry URL (`https://registry.neu.ro`).
    pub fn new(registry_url: &str) -> Result<Self> {
        let without_scheme = registry_url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(registry_url);
        let host = without_scheme.split('/').next().unwrap_or("");

        if host.is_empty() {
            return Err(Error::RegistryUrl(registry_url.to_string()));
        }

        Ok(Self {
            registry_host: host.to_string(),
        })
    }

    /// Short `image://user/name:tag` form for registry images, the input
    /// unchanged for anything else.
    pub fn short_form(&self, image: &str) -> String {
        match self.strip_registry(image) {
            Some(path) if has_tag(path) => format!("{}{}", IMAGE_SCHEME, path),
            Some(path) => format!("{}{}:{}", IMAGE_SCHEME, path, DEFAULT_TAG),
            None => image.to_string(),
        }
    }

    fn strip_registry<'a>(&self, image: &'a str) -> Option<&'a str> {
        image
            .strip_prefix(self.registry_host.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|path| !path.is_empty())
    }
}

fn has_tag(path: &str) -> bool {
    let last_segment = path.rsplit('/').next().unwrap_or(path);
    last_segment.contains(':')
}
