use std::fmt;

/// A container image reference: repository name plus tag, optionally
/// qualified with a registry host.
///
/// Renders as `repository:tag` via [`fmt::Display`], which is the form
/// every docker subcommand accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    repository: String,
    tag: String,
}

impl ImageRef {
    /// A local (unqualified) reference like `webapp:abc1234`.
    pub fn local(repository: &str, tag: &str) -> Self {
        Self {
            repository: repository.to_owned(),
            tag: tag.to_owned(),
        }
    }

    /// The same image qualified with a registry host:
    /// `123456789012.dkr.ecr.us-east-1.amazonaws.com/webapp:abc1234`.
    pub fn in_registry(&self, host: &str) -> Self {
        Self {
            repository: format!(
                "{host}/{repository}",
                host = host.trim_end_matches('/'),
                repository = self.repository,
            ),
            tag: self.tag.clone(),
        }
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.tag)
    }
}
