pub mod distance;
pub mod rank;

pub use distance::{haversine_km, Coord};
pub use rank::{nearest, Located, Ranked};
