use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

use crate::config::{expand_path, Config};
use crate::error::{InvoiceError, Result};

pub const INVOICE_SUFFIX: &str = "-invoice.html";

/// Build the output file name for a client, e.g. "Acme Corp" -> "acme_corp-invoice.html"
pub fn invoice_filename(org_name: &str) -> String {
    let stem: String = org_name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{stem}{INVOICE_SUFFIX}")
}

/// Write the invoice into the configured output directory, replacing any
/// previous invoice for the same client.
pub fn write_invoice(org_name: &str, html: &str, config: &Config) -> Result<PathBuf> {
    let output_dir = expand_path(&config.output_dir);
    let path = output_dir.join(invoice_filename(org_name));

    fs::create_dir_all(&output_dir).map_err(|source| InvoiceError::FileSystem {
        path: output_dir.clone(),
        source,
    })?;

    // Stage next to the target so the final rename stays on one filesystem
    let mut staged = staging_file(&output_dir).map_err(|source| InvoiceError::FileSystem {
        path: output_dir.clone(),
        source,
    })?;
    staged
        .write_all(html.as_bytes())
        .and_then(|_| staged.flush())
        .and_then(|_| match fs::metadata(&path) {
            // A replaced invoice keeps whatever permissions it had
            Ok(existing) => staged.as_file().set_permissions(existing.permissions()),
            Err(_) => Ok(()),
        })
        .map_err(|source| InvoiceError::FileSystem {
            path: path.clone(),
            source,
        })?;
    staged.persist(&path).map_err(|e| InvoiceError::FileSystem {
        path: path.clone(),
        source: e.error,
    })?;

    tracing::info!(path = %path.display(), bytes = html.len(), "invoice written");
    Ok(path)
}

/// Temp files default to owner-only access; request the usual 0666 so the
/// process umask applies, as it does for a plain `fs::write`.
#[cfg(unix)]
fn staging_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn staging_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
