use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{InvoiceError, Result};

pub const STYLESHEET_FILE: &str = "style.css";

/// Built-in styling used when no stylesheet file is present
pub const DEFAULT_CSS: &str = r#"
body {
    font-family: Arial, sans-serif;
    margin: 0;
    padding: 20px;
    color: #333;
}
.invoice {
    max-width: 800px;
    margin: 0 auto;
    padding: 30px;
    border: 1px solid #ddd;
    box-shadow: 0 0 10px rgba(0,0,0,0.1);
}
.invoice-header-wrapper {
    margin-bottom: 40px;
}
.invoice-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
}
.logo-section {
    flex: 0 0 200px;
}
.logo {
    max-width: 100%;
    height: auto;
}
.header-content {
    flex: 1;
    text-align: right;
}
h1 {
    margin: 0 0 20px;
    color: #2c3e50;
}
.client-info {
    margin-bottom: 20px;
}
.client-label {
    color: #666;
    font-size: 0.9em;
}
.org-name {
    font-size: 1.2em;
    font-weight: bold;
    margin-top: 5px;
}
.tasks-list {
    margin-bottom: 40px;
}
.task-item {
    padding: 20px;
    background: #f9f9f9;
    margin-bottom: 10px;
    border-radius: 4px;
}
.task-details {
    margin-bottom: 15px;
}
.task-meta {
    display: flex;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 20px;
}
.label {
    color: #666;
    font-size: 0.9em;
    margin-bottom: 5px;
}
.value {
    font-weight: bold;
}
.invoice-total {
    text-align: right;
    font-size: 1.2em;
    padding: 20px;
    background: #f9f9f9;
    border-radius: 4px;
}
.invoice-footer {
    margin-top: 40px;
    text-align: center;
    color: #666;
    font-size: 0.9em;
}
.invoice-footer a {
    color: #3498db;
    text-decoration: none;
}
.invoice-footer a:hover {
    text-decoration: underline;
}
"#;

/// Read the stylesheet at `path`, falling back to [`DEFAULT_CSS`] when it does not exist
pub fn read_stylesheet(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(css) => Ok(css),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no stylesheet, using built-in styles");
            Ok(DEFAULT_CSS.to_string())
        }
        Err(source) => Err(InvoiceError::AssetRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}
