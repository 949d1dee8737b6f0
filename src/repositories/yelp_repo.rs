use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::SuggestionError;
use crate::helpers::geo::Coordinate;
use crate::models::restaurant::Restaurant;

const YELP_SEARCH_ENDPOINT: &str = "https://api.yelp.com/v3/businesses/search";

// Filters the provider applies server-side; they are passed through as query
// parameters and never re-applied here.
const CATEGORIES: &str = "restaurants";
const SORT_BY: &str = "rating";
const PRICE_TIERS: &str = "1,2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How much of an unexpected provider body is worth carrying in an error.
const BODY_PREVIEW_LIMIT: usize = 160;

#[derive(Deserialize, Debug)]
struct SearchResponse {
    businesses: Vec<Business>,
}

#[derive(Deserialize, Debug)]
struct Business {
    name: String,
    rating: f64,
    location: Location,
    phone: String,
}

#[derive(Deserialize, Debug)]
struct Location {
    display_address: Vec<String>,
}

// Yelp reports request problems as a structured body, e.g.
// {"error": {"code": "VALIDATION_ERROR", "description": "..."}}.
#[derive(Deserialize, Debug)]
struct YelpErrorPayload {
    error: YelpErrorDetail,
}

#[derive(Deserialize, Debug)]
struct YelpErrorDetail {
    code: String,
    description: String,
}

impl From<Business> for Restaurant {
    fn from(business: Business) -> Self {
        Restaurant {
            name: business.name,
            rating: business.rating,
            address: business.location.display_address.join(", "),
            phone: business.phone,
        }
    }
}

pub struct YelpFusionRepo {
    client: Client,
    api_key: String,
}

impl YelpFusionRepo {
    pub fn new(api_key: String) -> Result<Self, SuggestionError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, api_key })
    }

    /// Runs the one outbound search: currently open restaurants in the two
    /// cheapest price tiers around `location`, sorted by rating by the
    /// provider, at most `limit` of them (the provider caps the limit at 50
    /// and rejects anything larger itself).
    pub async fn search_restaurants(
        &self,
        location: Coordinate,
        radius_meters: i32,
        limit: u32,
    ) -> Result<Vec<Restaurant>, SuggestionError> {
        let params = [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("radius", radius_meters.to_string()),
            ("categories", CATEGORIES.to_string()),
            ("sort_by", SORT_BY.to_string()),
            ("open_now", true.to_string()),
            ("price", PRICE_TIERS.to_string()),
            ("limit", limit.to_string()),
        ];
        debug!("Querying Yelp for restaurants with params: {:?}", params);

        let response = self
            .client
            .get(YELP_SEARCH_ENDPOINT)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("Yelp rejected the search with status: {}", status);
            return Err(provider_error(status, &body));
        }

        parse_search_body(&body)
    }
}

fn parse_search_body(body: &str) -> Result<Vec<Restaurant>, SuggestionError> {
    let payload: SearchResponse = serde_json::from_str(body).map_err(|e| {
        warn!("Failed to parse the Yelp search response due to: {}", e);
        SuggestionError::Provider {
            code: "UNPARSEABLE_RESPONSE".to_string(),
            description: format!("search response did not match the expected schema: {}", e),
        }
    })?;

    Ok(payload
        .businesses
        .into_iter()
        .map(Restaurant::from)
        .collect())
}

fn provider_error(status: StatusCode, body: &str) -> SuggestionError {
    match serde_json::from_str::<YelpErrorPayload>(body) {
        Ok(payload) => SuggestionError::Provider {
            code: payload.error.code,
            description: payload.error.description,
        },
        Err(_) => SuggestionError::Provider {
            code: status.to_string(),
            description: body_preview(body),
        },
    }
}

fn body_preview(body: &str) -> String {
    let compact = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.is_empty() {
        return "no response body".to_string();
    }

    if compact.chars().count() > BODY_PREVIEW_LIMIT {
        let preview: String = compact.chars().take(BODY_PREVIEW_LIMIT).collect();
        format!("{}...", preview)
    } else {
        compact
    }
}
