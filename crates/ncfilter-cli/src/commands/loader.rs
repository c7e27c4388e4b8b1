use std::fs;
use std::io::{self, Read};
use std::path::Path;

use ncfilter_compiler::FilterPayload;
use ncfilter_core::{RegistryError, SchemaRegistry};

/// Failure to read command input.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("invalid registry '{path}': {source}")]
    Registry { path: String, source: RegistryError },
}

pub fn load_registry(path: &Path) -> Result<SchemaRegistry, LoadError> {
    let json = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    SchemaRegistry::from_json(&json).map_err(|source| LoadError::Registry {
        path: path.display().to_string(),
        source,
    })
}

/// Filter body from inline text, a file, or stdin (`-`).
///
/// `None` means no body was given at all, which is not the same as an
/// empty body.
pub fn load_filter(
    filter_path: Option<&Path>,
    filter_text: Option<&str>,
) -> Result<Option<FilterPayload>, LoadError> {
    if let Some(text) = filter_text {
        return Ok(Some(FilterPayload::Text(text.to_owned())));
    }

    let Some(path) = filter_path else {
        return Ok(None);
    };

    // Files are handed over as bytes; UTF-8 is checked by the dispatcher.
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(LoadError::Stdin)?;
        return Ok(Some(FilterPayload::Bytes(buf)));
    }

    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(FilterPayload::Bytes(bytes)))
}
