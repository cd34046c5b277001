mod logo;
mod stylesheet;

pub use logo::{resolve_logo, resolve_logo_with_default, Logo, PLACEHOLDER_LOGO};
pub use stylesheet::{read_stylesheet, DEFAULT_CSS, STYLESHEET_FILE};

use std::path::Path;

use crate::config::Config;
use crate::error::Result;

/// Static inputs embedded into every rendered invoice
#[derive(Debug, Clone)]
pub struct Assets {
    pub stylesheet: String,
    pub logo: Logo,
}

impl Assets {
    pub fn load(stylesheet_path: &Path, config: &Config) -> Result<Self> {
        Ok(Self {
            stylesheet: read_stylesheet(stylesheet_path)?,
            logo: resolve_logo(config)?,
        })
    }
}
