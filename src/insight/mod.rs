//! External collaborator boundary: summarizes fleet state and forwards it to
//! a hosted text-generation service for a short natural-language report.
//!
//! The core treats this purely as "ledger snapshot in, text or failure out";
//! the returned content is never interpreted.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::InsightConfig;
use crate::errors::FleetError;
use crate::fleet::Fleet;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const MISSING_KEY_MESSAGE: &str = "API Key is missing. Unable to generate insights.";
const REQUEST_FAILED_MESSAGE: &str = "Error generating insights. Please try again later.";
const EMPTY_RESPONSE_MESSAGE: &str = "No insights generated.";

/// Compact snapshot of registry and ledger state embedded in the prompt.
///
/// Field names serialize in the camelCase wire shape the report format uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetDigest {
    pub total_vehicles: usize,
    pub active_vehicles: usize,
    pub total_revenue_last7_days: f64,
    pub total_expenses_last7_days: f64,
    pub recent_transaction_count: usize,
    pub date_of_report: NaiveDate,
}

impl FleetDigest {
    /// Derives the digest from current state, looking back seven days from
    /// `today`.
    pub fn from_fleet(fleet: &Fleet, today: NaiveDate) -> Self {
        let cutoff = today - Duration::days(7);
        let recent: Vec<_> = fleet
            .transactions
            .iter()
            .filter(|transaction| transaction.day() >= cutoff)
            .collect();
        Self {
            total_vehicles: fleet.vehicles.len(),
            active_vehicles: fleet.vehicles.iter().filter(|v| v.is_active()).count(),
            total_revenue_last7_days: recent
                .iter()
                .filter(|t| t.is_income())
                .map(|t| t.amount)
                .sum(),
            total_expenses_last7_days: recent
                .iter()
                .filter(|t| t.is_expense())
                .map(|t| t.amount)
                .sum(),
            recent_transaction_count: recent.len(),
            date_of_report: today,
        }
    }
}

/// Renders the advisory prompt around the serialized digest.
pub fn build_prompt(digest: &FleetDigest) -> Result<String, FleetError> {
    let summary = serde_json::to_string_pretty(digest)?;
    Ok(format!(
        "You are an expert fleet manager assistant. Analyze the following fleet summary data:\n\
         {summary}\n\n\
         Provide 3 concise, actionable bullet points to help the owner improve profitability or efficiency.\n\
         Focus on maintenance, driver performance, or cash flow.\n\
         Keep the tone professional yet encouraging.\n\
         Format the output as simple text with bullet points (no markdown bolding needed)."
    ))
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the text-generation boundary. One attempt per request; no
/// retry or cancellation policy.
pub struct InsightService {
    config: InsightConfig,
    client: reqwest::Client,
}

impl InsightService {
    pub fn new(config: InsightConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(InsightConfig::from_env())
    }

    /// Requests an insight report for the current fleet state.
    ///
    /// Fails with [`FleetError::ExternalService`] when no key is configured
    /// or the request does not succeed; state is never touched either way.
    pub async fn generate(&self, fleet: &Fleet) -> Result<String, FleetError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| FleetError::ExternalService("No API key configured".into()))?;

        let digest = FleetDigest::from_fleet(fleet, Utc::now().date_naive());
        let prompt = build_prompt(&digest)?;
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };
        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.config.model);

        tracing::debug!(model = %self.config.model, "requesting fleet insights");
        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body: GenerateContentResponse = response.json().await?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .unwrap_or_default();
        if text.trim().is_empty() {
            Ok(EMPTY_RESPONSE_MESSAGE.to_string())
        } else {
            Ok(text)
        }
    }

    /// Like [`generate`](Self::generate) but degrades every failure to a
    /// human-readable placeholder instead of an error.
    pub async fn generate_or_fallback(&self, fleet: &Fleet) -> String {
        if self.config.api_key.is_none() {
            tracing::warn!("insight requested without an API key configured");
            return MISSING_KEY_MESSAGE.to_string();
        }
        match self.generate(fleet).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "insight request failed");
                REQUEST_FAILED_MESSAGE.to_string()
            }
        }
    }
}
