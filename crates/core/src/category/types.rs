//! Category domain types.

use serde::{Deserialize, Serialize};

/// Classification of a money movement.
///
/// A transaction record does not store its own direction; the direction is
/// derived from the type of the category it references. Every consumer of
/// transaction history must go through this enum so the derivation rule
/// exists exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    /// Money entering a wallet.
    Income,
    /// Money leaving a wallet.
    Expense,
    /// Money moving between wallets (system-managed).
    Transfer,
}

impl CategoryType {
    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Transfer => "transfer",
        }
    }

    /// Parses a lowercase wire name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            "transfer" => Some(Self::Transfer),
            _ => None,
        }
    }
}

/// Expense sub-classification used for budgeting reports.
///
/// Only `expense` categories carry a priority group; see
/// [`PriorityGroup::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityGroup {
    /// Obligations (mortgage, electricity).
    Fixed,
    /// Necessities (food, transport).
    Living,
    /// Wants (hobbies, coffee).
    Lifestyle,
}

impl PriorityGroup {
    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Living => "living",
            Self::Lifestyle => "lifestyle",
        }
    }

    /// Parses a lowercase wire name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fixed" => Some(Self::Fixed),
            "living" => Some(Self::Living),
            "lifestyle" => Some(Self::Lifestyle),
            _ => None,
        }
    }

    /// Applies the rule that only expense categories carry a priority group.
    ///
    /// Any group supplied for an income or transfer category is dropped.
    #[must_use]
    pub fn normalize(group: Option<Self>, category_type: CategoryType) -> Option<Self> {
        match category_type {
            CategoryType::Expense => group,
            CategoryType::Income | CategoryType::Transfer => None,
        }
    }
}
