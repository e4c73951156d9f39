//! AWS Lambda handler for pricing quotes
//!
//! Accepts a client profile and product selection as JSON and returns the
//! priced quote columns and totals.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::NaiveDate;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use premium_quote::{
    aggregate_quote, ClientProfile, Eligibility, Gender, HealthPlanId, LifeInsurance, ProductSelection,
    ProfileError, QuoteResult, RateBook,
};
use serde::{Deserialize, Serialize};

/// Input for one quote
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Actual age; takes precedence over date_of_birth
    #[serde(default)]
    pub age: Option<u8>,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,

    /// Valuation date for date_of_birth (default: today, UTC)
    #[serde(default)]
    pub as_of: Option<NaiveDate>,

    pub gender: Gender,

    #[serde(default)]
    pub health_plans: Vec<HealthPlanId>,

    #[serde(default)]
    pub life_insurance: Option<LifeInsurance>,

    #[serde(default)]
    pub cancer_rider: bool,
}

impl QuoteRequest {
    fn profile(&self) -> Result<ClientProfile, ProfileError> {
        match (self.age, self.date_of_birth) {
            (Some(age), _) => Ok(ClientProfile::with_age(age, self.gender)),
            (None, Some(dob)) => {
                let as_of = self.as_of.unwrap_or_else(|| chrono::Utc::now().date_naive());
                ClientProfile::from_date_of_birth(dob, as_of, self.gender)
            }
            (None, None) => Err(ProfileError::MissingAge),
        }
    }

    fn selection(&self) -> ProductSelection {
        let mut selection = ProductSelection::new().with_health_plans(self.health_plans.iter().copied());
        selection.life_insurance = self.life_insurance;
        selection.cancer_rider = self.cancer_rider;
        selection
    }
}

/// Output for one quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    /// Absent when nothing was selected
    pub quote: Option<QuoteResult>,
    pub eligibility: Vec<Eligibility>,
    pub execution_time_us: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    let body = serde_json::json!({ "error": message }).to_string();
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body))
        .unwrap_or_default()
}

fn json_response(body: &QuoteResponse) -> Response<Body> {
    let text = match serde_json::to_string(body) {
        Ok(text) => text,
        Err(e) => return error_response(500, &format!("Failed to serialize quote: {}", e)),
    };
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(text))
        .unwrap_or_default()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: QuoteRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let profile = match request.profile() {
        Ok(p) => p,
        Err(e) => return Ok(error_response(400, &e.to_string())),
    };
    let selection = request.selection();

    let quote = aggregate_quote(&profile, &selection);
    let eligibility = RateBook::standard().eligible_lines(&profile);

    let response = QuoteResponse {
        quote,
        eligibility,
        execution_time_us: start.elapsed().as_micros() as u64,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: QuoteRequest = serde_json::from_str(r#"{"age": 30, "gender": "male"}"#).unwrap();
        assert!(request.selection().is_empty());
        assert_eq!(request.profile().unwrap().insurance_age(), 31);
    }

    #[test]
    fn test_request_with_products() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "age": 30,
                "gender": "male",
                "health_plans": [2, 5],
                "life_insurance": {"kind": "endowment", "coverage": "100M"},
                "cancer_rider": true
            }"#,
        )
        .unwrap();

        let quote = aggregate_quote(&request.profile().unwrap(), &request.selection()).unwrap();
        assert_eq!(quote.total, 6_489_800);
    }

    #[test]
    fn test_request_needs_an_age() {
        let request: QuoteRequest = serde_json::from_str(r#"{"gender": "female"}"#).unwrap();
        assert_eq!(request.profile(), Err(ProfileError::MissingAge));
    }

    #[test]
    fn test_request_date_of_birth() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{"date_of_birth": "1990-01-01", "as_of": "2025-01-01", "gender": "female"}"#,
        )
        .unwrap();
        assert_eq!(request.profile().unwrap().actual_age(), 35);
    }

    #[test]
    fn test_request_keys_ignore_case() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "age": 30,
                "gender": "Male",
                "life_insurance": {"kind": "universal", "plan": "1000L", "health_tier": "Default"}
            }"#,
        )
        .unwrap();

        let quote = aggregate_quote(&request.profile().unwrap(), &request.selection()).unwrap();
        assert_eq!(quote.total, 1_350_000);
    }
}
