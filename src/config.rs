//! Settings a label builder is constructed with. The sender's address lives
//! here instead of being looked up while a label is drawn.

use crate::address::{locality_line, AddressBlock};
use crate::error::LabelError;
use serde::Deserialize;
use std::path::Path;

/// Printed when no sender name is configured
pub const PLACEHOLDER_NAME: &str = "Sender Name";
/// Printed when no sender street is configured
pub const PLACEHOLDER_STREET: &str = "Sender Street";
/// Printed when no sender city, state and zip are configured
pub const PLACEHOLDER_CITY_STATE_ZIP: &str = "Sender City, State Zip";

/// The sender's address, printed in the top-left corner of every label.
/// Any field left unset is replaced with a placeholder line, so a label never
/// goes out with a blank return address.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReturnAddress {
    pub name: Option<String>,
    pub street1: Option<String>,
    pub city_state_zip: Option<String>,
}

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(placeholder)
}

impl ReturnAddress {
    pub fn to_block(&self) -> AddressBlock {
        AddressBlock::from_lines([
            or_placeholder(&self.name, PLACEHOLDER_NAME),
            or_placeholder(&self.street1, PLACEHOLDER_STREET),
            or_placeholder(&self.city_state_zip, PLACEHOLDER_CITY_STATE_ZIP),
        ])
    }
}

/// Configuration for a [`LabelDocumentBuilder`](crate::LabelDocumentBuilder)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub return_address: ReturnAddress,
    /// Flate-compress the page content stream
    pub compress: bool,
    /// Title written into the document information dictionary. When `None`, no
    /// information dictionary is written at all.
    pub title: Option<String>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        LabelConfig {
            return_address: ReturnAddress::default(),
            compress: true,
            title: Some("Shipping Label".to_string()),
        }
    }
}

impl LabelConfig {
    /// Read the return address from the process environment. See
    /// [LabelConfig::from_lookup] for the variables consulted.
    pub fn from_env() -> LabelConfig {
        LabelConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from a key lookup. The return address comes from
    /// `RETURN_ADDRESS_NAME`, `RETURN_ADDRESS_STREET1` and
    /// `RETURN_ADDRESS_CITY_STATE_ZIP`; if the last is not set, the locality line
    /// is put together from `RETURN_ADDRESS_CITY`, `RETURN_ADDRESS_STATE` and
    /// `RETURN_ADDRESS_ZIP` instead.
    pub fn from_lookup<F>(lookup: F) -> LabelConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let city_state_zip = get("RETURN_ADDRESS_CITY_STATE_ZIP").or_else(|| {
            let city = get("RETURN_ADDRESS_CITY");
            let state = get("RETURN_ADDRESS_STATE");
            let zip = get("RETURN_ADDRESS_ZIP");
            let line = locality_line(city.as_deref(), state.as_deref(), zip.as_deref());
            (!line.is_empty()).then_some(line)
        });

        LabelConfig {
            return_address: ReturnAddress {
                name: get("RETURN_ADDRESS_NAME"),
                street1: get("RETURN_ADDRESS_STREET1"),
                city_state_zip,
            },
            ..LabelConfig::default()
        }
    }

    /// Parse a JSON configuration document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<LabelConfig, LabelError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Load a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<LabelConfig, LabelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| LabelError::Config(format!("{}: {e}", path.display())))?;
        LabelConfig::from_json(&json)
    }

    /// The return address block to print, placeholders included
    pub fn return_block(&self) -> AddressBlock {
        self.return_address.to_block()
    }
}
