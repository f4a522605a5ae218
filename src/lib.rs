pub mod sdk;

pub use sdk::directory::{emergency_hospital, Doctor, DoctorDirectory, Hospital};
pub use sdk::geo::distance::{haversine_km, Coord};
pub use sdk::geo::rank::{nearest, Located, Ranked};
pub use sdk::locate::provider::{GeoLocation, IpStackProvider, LocationProvider};
pub use sdk::locate::{locate_or_default, DEFAULT_LOCATION};
pub use sdk::report::client::{ReportClient, NO_CONTENT_SENTINEL};
