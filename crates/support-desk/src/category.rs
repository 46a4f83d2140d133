//! Query Categories

use serde::{Deserialize, Serialize};

/// What a customer question is about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Product details: answered from the knowledge base
    Products,
    /// Returns and refunds: handed to the support team
    Returns,
    /// Anything else: escalated to a human
    General,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Returns => "returns",
            Self::General => "general",
        }
    }

    /// Normalize a free-form model reply. Models often wrap the label in
    /// quotes or a sentence, so this looks for the label inside the reply.
    /// `products` wins over `returns`; anything unrecognised is `General`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.contains("products") {
            Self::Products
        } else if label.contains("returns") {
            Self::Returns
        } else {
            Self::General
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
