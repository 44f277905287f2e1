use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Opportunity-specific enums
// ---------------------------------------------------------------------------

/// Variant of the "mark closed" row button.
///
/// Derived once from the closed flag at ingestion time and only overwritten
/// afterwards by a successful close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Success,
    Neutral,
}

impl ButtonVariant {
    pub fn for_closed(is_closed: bool) -> Self {
        if is_closed { Self::Neutral } else { Self::Success }
    }
}

// ---------------------------------------------------------------------------
// Opportunity domain types
// ---------------------------------------------------------------------------

/// An opportunity exactly as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOpportunity {
    pub id_opp: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stage_name: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub close_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    /// Backend columns this crate does not model; carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A display row: every backend field plus the UI-only button variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id_opp: String,
    pub name: String,
    pub stage_name: String,
    pub amount: Option<f64>,
    pub close_date: Option<NaiveDate>,
    pub is_closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    pub button_variant: ButtonVariant,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<RawOpportunity> for Opportunity {
    fn from(raw: RawOpportunity) -> Self {
        let button_variant = ButtonVariant::for_closed(raw.is_closed);
        Self {
            id_opp: raw.id_opp,
            name: raw.name,
            stage_name: raw.stage_name,
            amount: raw.amount,
            close_date: raw.close_date,
            is_closed: raw.is_closed,
            account_name: raw.account_name,
            button_variant,
            extra: raw.extra,
        }
    }
}

impl From<Opportunity> for RawOpportunity {
    fn from(opp: Opportunity) -> Self {
        Self {
            id_opp: opp.id_opp,
            name: opp.name,
            stage_name: opp.stage_name,
            amount: opp.amount,
            close_date: opp.close_date,
            is_closed: opp.is_closed,
            account_name: opp.account_name,
            extra: opp.extra,
        }
    }
}
