use path_clean::PathClean;
use std::path::{Component, Path, PathBuf};

/// How entry names are mapped onto the output directory
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PathPolicy {
    /// Normalize names and refuse any that would land outside the output
    /// directory: absolute names, drive prefixes and leading `..` segments.
    #[default]
    Sanitize,
    /// Join names onto the output directory exactly as stored
    Verbatim,
}

impl PathPolicy {
    /// Destination of the entry called `name` when extracting into `output`
    pub fn resolve(self, output: &Path, name: &str) -> Result<PathBuf, super::Error> {
        match self {
            PathPolicy::Verbatim => Ok(output.join(name)),
            PathPolicy::Sanitize => {
                let cleaned = Path::new(name).clean();
                let contained = cleaned.components().next().is_some()
                    && cleaned
                        .components()
                        .all(|c| matches!(c, Component::Normal(_)));
                if !contained {
                    return Err(super::Error::UnsafePath(name.to_owned()));
                }
                Ok(output.join(cleaned))
            }
        }
    }
}
