//! Common types shared across masklet crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Navigation target for a front end, e.g. `/no-wallet?redirect=/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    /// Route to navigate to.
    pub path: String,
    /// Query parameters, in order.
    pub query: Vec<(String, String)>,
}

impl Redirect {
    /// The "install a wallet" page, returning to `back` afterwards.
    pub fn no_wallet(back: &str) -> Self {
        Self {
            path: "/no-wallet".to_string(),
            query: vec![("redirect".to_string(), back.to_string())],
        }
    }
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (i, (k, v)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{k}={v}")?;
        }
        Ok(())
    }
}
