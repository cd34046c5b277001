use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::{expand_path, Config, DEFAULT_LOGO_PATH};
use crate::error::{InvoiceError, Result};

const SVG_MIME: &str = "image/svg+xml";

/// "Your Logo Here" SVG, base64 encoded
pub const PLACEHOLDER_LOGO: &str = "PHN2ZyB3aWR0aD0iMjAwIiBoZWlnaHQ9IjYwIiB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciPg0KICAgIDxyZWN0IHdpZHRoPSIxMDAlIiBoZWlnaHQ9IjEwMCUiIGZpbGw9Im5vbmUiLz4NCiAgICA8dGV4dCB4PSI1MCUiIHk9IjUwJSIgZm9udC1mYW1pbHk9IkFyaWFsIiBmb250LXNpemU9IjI0IiBmaWxsPSIjNjY2IiB0ZXh0LWFuY2hvcj0ibWlkZGxlIiBkb21pbmFudC1iYXNlbGluZT0ibWlkZGxlIj4NCiAgICAgICAgWW91ciBMb2dvIEhlcmUNCiAgICA8L3RleHQ+DQo8L3N2Zz4=";

/// A logo ready to be embedded as a `data:` URI
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub mime: &'static str,
    /// Standard base64 of the image bytes
    pub data: String,
}

impl Logo {
    pub fn placeholder() -> Self {
        Self {
            mime: SVG_MIME,
            data: PLACEHOLDER_LOGO.to_string(),
        }
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data)
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => SVG_MIME,
    }
}

/// Read and encode one candidate. `Ok(None)` means the file does not exist.
fn load_candidate(path: &Path) -> Result<Option<Logo>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(Logo {
            mime: mime_for(path),
            data: STANDARD.encode(bytes),
        })),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(InvoiceError::AssetRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Resolve the logo from the configured path, then the default logo path,
/// then the built-in placeholder.
pub fn resolve_logo(config: &Config) -> Result<Logo> {
    resolve_logo_with_default(config, Path::new(DEFAULT_LOGO_PATH))
}

/// [`resolve_logo`] with an explicit second candidate in place of the default logo path
pub fn resolve_logo_with_default(config: &Config, default_logo: &Path) -> Result<Logo> {
    let mut candidates: Vec<PathBuf> = vec![expand_path(&config.logo_path)];
    if !candidates.iter().any(|c| c == default_logo) {
        candidates.push(default_logo.to_path_buf());
    }

    first_available(&candidates)
}

/// Try each candidate in order; only a missing file moves on to the next one
fn first_available(candidates: &[PathBuf]) -> Result<Logo> {
    for path in candidates {
        if let Some(logo) = load_candidate(path)? {
            tracing::debug!(path = %path.display(), mime = logo.mime, "using logo");
            return Ok(logo);
        }
        tracing::info!(path = %path.display(), "logo not found");
    }

    tracing::info!("using placeholder logo");
    Ok(Logo::placeholder())
}
