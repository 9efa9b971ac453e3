//! AI advisor client.
//!
//! Builds a short monthly snapshot prompt and calls a Gemini-compatible
//! `generateContent` endpoint via `reqwest`. The returned text is treated
//! as an opaque blob; caching and persistence are the caller's concern.

use rust_decimal::Decimal;
use serde_json::{Value, json};
use thiserror::Error;

use crate::config::AdvisorConfig;

/// Advisor errors.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// No API key configured.
    #[error("Advisor API key is not configured")]
    MissingApiKey,
    /// The HTTP request failed.
    #[error("Advisor request failed: {0}")]
    Request(String),
    /// The response did not contain generated text.
    #[error("Advisor response was malformed")]
    MalformedResponse,
}

/// A read-only monthly snapshot handed to the advisor.
#[derive(Debug, Clone)]
pub struct AdvisorSnapshot {
    /// Total income for the month.
    pub month_income: Decimal,
    /// Total expense for the month.
    pub month_expense: Decimal,
    /// Largest expense categories, ordered by descending total.
    pub top_categories: Vec<(String, Decimal)>,
}

impl AdvisorSnapshot {
    /// Remaining cashflow for the month.
    #[must_use]
    pub fn net_cashflow(&self) -> Decimal {
        self.month_income - self.month_expense
    }
}

/// Client for the generative advisor endpoint.
#[derive(Clone)]
pub struct AdvisorService {
    config: AdvisorConfig,
    http: reqwest::Client,
}

impl AdvisorService {
    /// Creates a new advisor client.
    #[must_use]
    pub fn new(config: AdvisorConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Whether the advisor has an API key and can be called.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    /// Requests a financial summary for the given snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the advisor is not configured, the request
    /// fails, or the response carries no text.
    pub async fn generate_advice(&self, snapshot: &AdvisorSnapshot) -> Result<String, AdvisorError> {
        if !self.is_configured() {
            return Err(AdvisorError::MissingApiKey);
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        );

        let body = json!({
            "contents": [{
                "parts": [{ "text": self.build_prompt(snapshot) }]
            }]
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AdvisorError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| AdvisorError::Request(e.to_string()))?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| AdvisorError::Request(e.to_string()))?;

        extract_text(&payload).ok_or(AdvisorError::MalformedResponse)
    }

    /// Assembles the advisor prompt from the configured household context
    /// and the monthly snapshot.
    #[must_use]
    pub fn build_prompt(&self, snapshot: &AdvisorSnapshot) -> String {
        let top_categories = snapshot
            .top_categories
            .iter()
            .map(|(name, total)| format!("{name} (Rp {total})"))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{context}\n\n\
             LAPORAN BULAN INI:\n\
             - Income: Rp {income}\n\
             - Expense: Rp {expense}\n\
             - Sisa Cashflow: Rp {cashflow}\n\
             - Pengeluaran Terbesar: {top_categories}\n\n\
             TUGAS (Jawab dalam Bahasa Indonesia yang natural):\n\
             1. Diagnosis: Apakah cashflow bulan ini aman?\n\
             2. Action Plan: Alokasikan Rp {cashflow} ini kemana?\n\
             3. Simulasi Kilat: Kapan goal tercapai?\n\n\
             Keep it short, insightful, and actionable.",
            context = self.config.user_context,
            income = snapshot.month_income,
            expense = snapshot.month_expense,
            cashflow = snapshot.net_cashflow(),
        )
    }
}

/// Pulls the first candidate's text out of a `generateContent` response.
fn extract_text(payload: &Value) -> Option<String> {
    let text = payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()?
        .trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
