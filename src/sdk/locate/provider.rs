use std::error::Error;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use super::error::{IpStackErrorPayload, LocateError};
use crate::sdk::geo::distance::Coord;
use crate::sdk::util::rate_limit::{block_until_ready, Limiter};

/// Where the caller currently is, as reported by the lookup service.
#[derive(Debug, Clone)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
}

impl GeoLocation {
    pub fn coord(&self) -> Coord {
        (self.latitude, self.longitude)
    }
}

pub trait LocationProvider: Send + Sync {
    /// Looks up the caller's current location from their network address.
    fn lookup(&self) -> Result<GeoLocation, Box<dyn Error>>;
}

#[derive(Debug, Deserialize)]
struct IpStackResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
    city: Option<String>,
    country_name: Option<String>,
}

// --- Remote provider against the IPStack API ---
pub struct IpStackProvider {
    client: Client,
    access_key: String,
    base_url: String,
    limiter: Limiter,
}

impl IpStackProvider {
    pub fn new(access_key: String, limiter: Limiter) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap(),
            access_key,
            base_url: "http://api.ipstack.com".to_string(),
            limiter,
        }
    }
}

impl LocationProvider for IpStackProvider {
    fn lookup(&self) -> Result<GeoLocation, Box<dyn Error>> {
        block_until_ready(&self.limiter);
        let url = format!("{}/check?access_key={}", self.base_url, self.access_key);
        log::debug!("[PROVIDER] Calling IPStack lookup");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            log::error!(
                "IPStack returned non-success status: {}. Body: {}",
                status,
                text
            );
            return Err(Box::new(LocateError::RawApiError(text)));
        }

        // IPStack rejects requests with a 200 status and an error payload,
        // so try the structured error shape before the success shape.
        if let Ok(payload) = serde_json::from_str::<IpStackErrorPayload>(&text) {
            return Err(Box::new(LocateError::ApiError {
                code: payload.error.code,
                info: payload.error.info,
            }));
        }

        Ok(parse_lookup(&text)?)
    }
}

fn parse_lookup(text: &str) -> Result<GeoLocation, LocateError> {
    let body: IpStackResponse = serde_json::from_str(text)?;

    let (latitude, longitude) = match (body.latitude, body.longitude) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(LocateError::MissingCoordinates),
    };

    Ok(GeoLocation {
        latitude,
        longitude,
        city: body.city.unwrap_or_else(|| "Unknown City".to_string()),
        country: body
            .country_name
            .unwrap_or_else(|| "Unknown Country".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_lookup_response() {
        let text = r#"{
            "ip": "1.2.3.4",
            "city": "Chennai",
            "country_name": "India",
            "latitude": 13.0827,
            "longitude": 80.2707
        }"#;
        let location = parse_lookup(text).unwrap();
        assert_eq!(location.coord(), (13.0827, 80.2707));
        assert_eq!(location.city, "Chennai");
        assert_eq!(location.country, "India");
    }

    #[test]
    fn null_coordinates_are_reported_as_missing() {
        let text = r#"{"city": "Chennai", "country_name": "India", "latitude": null, "longitude": null}"#;
        assert!(matches!(
            parse_lookup(text),
            Err(LocateError::MissingCoordinates)
        ));
    }

    #[test]
    fn missing_names_get_placeholders() {
        let text = r#"{"latitude": 12.9294, "longitude": 79.1325}"#;
        let location = parse_lookup(text).unwrap();
        assert_eq!(location.city, "Unknown City");
        assert_eq!(location.country, "Unknown Country");
    }

    #[test]
    fn structured_error_payload_parses() {
        let text = r#"{
            "success": false,
            "error": {"code": 101, "type": "invalid_access_key", "info": "You have not supplied a valid API Access Key."}
        }"#;
        let payload: IpStackErrorPayload = serde_json::from_str(text).unwrap();
        assert_eq!(payload.error.code, 101);
        assert_eq!(payload.error.kind, "invalid_access_key");
    }
}
