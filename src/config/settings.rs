use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGO_PATH: &str = "assets/default-logo.svg";

/// Settings shared by every invoice this tool produces.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub company_name: String,
    pub company_url: String,
    pub logo_path: String,
    pub output_dir: String,
    pub currency_symbol: String,
    /// Escape user-entered text before it is placed in the HTML
    pub escape_html: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company_name: "Your Company Name".to_string(),
            company_url: "https://example.com".to_string(),
            logo_path: DEFAULT_LOGO_PATH.to_string(),
            output_dir: "generated_invoices".to_string(),
            currency_symbol: "$".to_string(),
            escape_html: true,
        }
    }
}
