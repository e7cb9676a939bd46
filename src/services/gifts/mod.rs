//! Gift suggestion provider.
//!
//! Two-step strategy: ask the Gemini generative API for four short gift
//! ideas constrained to a JSON array-of-strings response, and on any
//! failure at all (missing or placeholder key, network error, malformed
//! body, wrong shape, empty list) fall back to the static table. Callers
//! never observe the difference.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::models::birthday::Relation;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";
const API_KEY_ENV: &str = "GEMINI_API_KEY";
const API_KEY_PLACEHOLDER: &str = "YOUR_GEMINI_API_KEY_HERE";

/// Static fallback suggestions, keyed by age bracket then relation.
pub fn static_suggestions(relation: Relation, age: i32) -> Vec<String> {
    // Children
    if age <= 12 {
        return to_vec(&["Lego/Building Set", "Board Game", "Art Supplies", "Science Kit"]);
    }
    // Teens
    if age <= 18 {
        return to_vec(&["Gift Card", "Headphones", "Trendy Apparel", "Video Game"]);
    }

    // Adults
    match relation {
        Relation::Family => to_vec(&["Photo Album", "Home Decor", "Kitchen Gadget", "Cozy Blanket"]),
        Relation::Work => to_vec(&["Desk Plant", "Quality Pen", "Coffee Voucher", "Tech Accessory"]),
        Relation::Friend => to_vec(&[
            "Concert Tickets",
            "Restaurant Voucher",
            "Best-selling Book",
            "Local Experience",
        ]),
    }
}

fn to_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Fetches gift ideas from the generative API, with the static table as an
/// unconditional fallback.
#[derive(Clone)]
pub struct GiftSuggester {
    client: Client,
    api_key: Option<String>,
}

impl GiftSuggester {
    /// Build a suggester reading the API key from the `GEMINI_API_KEY`
    /// environment variable.
    pub fn new() -> Result<Self> {
        Self::with_api_key(std::env::var(API_KEY_ENV).ok())
    }

    pub fn with_api_key(api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("Failed to build gift suggestion HTTP client")?;

        Ok(Self { client, api_key })
    }

    /// Suggest four gift ideas. Never fails; any remote problem degrades to
    /// the static table and is logged for diagnostics only.
    pub fn suggest(&self, relation: Relation, age: i32, name: &str) -> Vec<String> {
        let Some(api_key) = self.usable_api_key() else {
            log::debug!("No usable gift API key, using static suggestions");
            return static_suggestions(relation, age);
        };

        match self.fetch_remote(api_key, relation, age, name) {
            Ok(ideas) => ideas,
            Err(err) => {
                log::warn!("Gift suggestion API failed, using static fallback: {err:#}");
                static_suggestions(relation, age)
            }
        }
    }

    fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != API_KEY_PLACEHOLDER)
    }

    fn fetch_remote(
        &self,
        api_key: &str,
        relation: Relation,
        age: i32,
        name: &str,
    ) -> Result<Vec<String>> {
        let prompt = format!(
            "List 4 specific, creative, and short gift ideas for a {age} year old {relation} named {name}."
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: ResponseSchema {
                    schema_type: "ARRAY".to_string(),
                    items: SchemaItems {
                        schema_type: "STRING".to_string(),
                    },
                },
            },
        };

        let response = self
            .client
            .post(GEMINI_ENDPOINT)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .context("Network error during gift suggestion fetch")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Gift suggestion request failed with HTTP status {status}"));
        }

        let body: GenerateContentResponse = response
            .json()
            .context("Failed to parse gift suggestion response body")?;

        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| anyhow!("Gift suggestion response contained no text"))?;

        parse_ideas(text)
    }
}

/// Validate the model output against the array-of-strings contract.
fn parse_ideas(text: &str) -> Result<Vec<String>> {
    let ideas: Vec<String> =
        serde_json::from_str(text).context("Gift ideas were not a JSON array of strings")?;

    if ideas.is_empty() {
        return Err(anyhow!("Gift idea list was empty"));
    }

    Ok(ideas)
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: ResponseSchema,
}

#[derive(Debug, Serialize)]
struct ResponseSchema {
    #[serde(rename = "type")]
    schema_type: String,
    items: SchemaItems,
}

#[derive(Debug, Serialize)]
struct SchemaItems {
    #[serde(rename = "type")]
    schema_type: String,
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

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Relation::Friend, 8 ; "friend child")]
    #[test_case(Relation::Family, 8 ; "family child")]
    #[test_case(Relation::Work, 12 ; "work child at bracket edge")]
    fn test_children_get_same_list_regardless_of_relation(relation: Relation, age: i32) {
        assert_eq!(
            static_suggestions(relation, age),
            vec!["Lego/Building Set", "Board Game", "Art Supplies", "Science Kit"]
        );
    }

    #[test_case(Relation::Friend, 13)]
    #[test_case(Relation::Work, 18)]
    fn test_teens_get_teen_list(relation: Relation, age: i32) {
        assert_eq!(
            static_suggestions(relation, age),
            vec!["Gift Card", "Headphones", "Trendy Apparel", "Video Game"]
        );
    }

    #[test]
    fn test_adult_lists_by_relation() {
        assert_eq!(
            static_suggestions(Relation::Work, 30),
            vec!["Desk Plant", "Quality Pen", "Coffee Voucher", "Tech Accessory"]
        );
        assert_eq!(
            static_suggestions(Relation::Family, 45),
            vec!["Photo Album", "Home Decor", "Kitchen Gadget", "Cozy Blanket"]
        );
        assert_eq!(
            static_suggestions(Relation::Friend, 65),
            vec![
                "Concert Tickets",
                "Restaurant Voucher",
                "Best-selling Book",
                "Local Experience"
            ]
        );
    }

    #[test]
    fn test_missing_key_falls_back_to_static() {
        let suggester = GiftSuggester::with_api_key(None).unwrap();
        assert_eq!(
            suggester.suggest(Relation::Work, 30, "Sam"),
            static_suggestions(Relation::Work, 30)
        );
    }

    #[test]
    fn test_placeholder_key_falls_back_to_static() {
        let suggester = GiftSuggester::with_api_key(Some(API_KEY_PLACEHOLDER.to_string())).unwrap();
        assert_eq!(
            suggester.suggest(Relation::Friend, 25, "Sam"),
            static_suggestions(Relation::Friend, 25)
        );
    }

    #[test]
    fn test_parse_ideas_accepts_string_array() {
        let ideas = parse_ideas(r#"["Kite", "Puzzle", "Mug", "Scarf"]"#).unwrap();
        assert_eq!(ideas, vec!["Kite", "Puzzle", "Mug", "Scarf"]);
    }

    #[test]
    fn test_parse_ideas_rejects_empty_array() {
        assert!(parse_ideas("[]").is_err());
    }

    #[test]
    fn test_parse_ideas_rejects_non_array() {
        assert!(parse_ideas(r#"{"ideas": []}"#).is_err());
        assert!(parse_ideas("not json at all").is_err());
    }
}
