//! `?open=<app>[,<app>...]` boot deep links.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::AppId;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeepLinkError {
    #[error("unknown app `{0}` in deep link")]
    UnknownApp(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Parsed deep-link request applied once at boot.
pub struct DeepLinkState {
    /// Apps to open, in link order, without duplicates.
    pub open: Vec<AppId>,
    /// Targets that were skipped.
    pub rejected: Vec<DeepLinkError>,
}

impl DeepLinkState {
    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.rejected.is_empty()
    }
}

/// Parses the value of the `open` query parameter.
pub fn parse_open_param(value: &str) -> DeepLinkState {
    let mut state = DeepLinkState::default();
    for target in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match target.to_ascii_lowercase().parse::<AppId>() {
            Ok(app) if !state.open.contains(&app) => state.open.push(app),
            Ok(_) => {}
            Err(err) => state.rejected.push(err),
        }
    }
    state
}

impl std::str::FromStr for AppId {
    type Err = DeepLinkError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AppId::from_slug(value).ok_or_else(|| DeepLinkError::UnknownApp(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn open_param_keeps_order_and_drops_duplicates() {
        let parsed = parse_open_param("calculator, Trash,calculator,,osdrive");
        assert_eq!(
            parsed.open,
            vec![AppId::Calculator, AppId::Trash, AppId::FileBrowser]
        );
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn unknown_targets_are_reported_not_opened() {
        let parsed = parse_open_param("terminal,about");
        assert_eq!(parsed.open, vec![AppId::About]);
        assert_eq!(
            parsed.rejected,
            vec![DeepLinkError::UnknownApp("terminal".to_string())]
        );
    }
}
