pub mod error;
pub mod provider;

pub use error::LocateError;
pub use provider::{GeoLocation, IpStackProvider, LocationProvider};

use crate::sdk::geo::distance::Coord;

/// Where ranking starts when the lookup fails: central Chennai.
pub const DEFAULT_LOCATION: Coord = (13.0827, 80.2707);

/// Looks up the caller's location, falling back to the default location
/// instead of failing. Lookup errors are logged, never fatal.
pub fn locate_or_default(provider: &dyn LocationProvider) -> GeoLocation {
    match provider.lookup() {
        Ok(location) => location,
        Err(err) => {
            log::warn!(
                "Location lookup failed ({}). Falling back to the default location.",
                err
            );
            GeoLocation {
                latitude: DEFAULT_LOCATION.0,
                longitude: DEFAULT_LOCATION.1,
                city: "Chennai".to_string(),
                country: "India".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    struct FixedProvider(GeoLocation);

    impl LocationProvider for FixedProvider {
        fn lookup(&self) -> Result<GeoLocation, Box<dyn Error>> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    impl LocationProvider for FailingProvider {
        fn lookup(&self) -> Result<GeoLocation, Box<dyn Error>> {
            Err(Box::new(LocateError::MissingCoordinates))
        }
    }

    #[test]
    fn passes_a_successful_lookup_through() {
        let provider = FixedProvider(GeoLocation {
            latitude: 12.9294,
            longitude: 79.1325,
            city: "Vellore".to_string(),
            country: "India".to_string(),
        });
        let location = locate_or_default(&provider);
        assert_eq!(location.coord(), (12.9294, 79.1325));
        assert_eq!(location.city, "Vellore");
    }

    #[test]
    fn falls_back_to_chennai_on_failure() {
        let location = locate_or_default(&FailingProvider);
        assert_eq!(location.coord(), DEFAULT_LOCATION);
        assert_eq!(location.city, "Chennai");
        assert_eq!(location.country, "India");
    }
}
