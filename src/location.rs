//! Coordinates that identify Intersections in a [`RoadGraph`](crate::RoadGraph)

use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

/// Mean radius of the earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Identifies an Intersection in the Graph and measures straight-line distances.
///
/// A Location is the public face of a Node: every search takes Locations as start and goal
/// and returns the Locations along the Route. The search itself only relies on equality,
/// hashing and [`distance`](Location::distance).
///
/// The provided implementation is [`GeoPoint`] for latitude/longitude pairs. Other coordinate
/// systems (a planar grid, projected coordinates, ...) can implement this Trait themselves.
pub trait Location: Copy + Eq + Hash + Debug {
    /// The straight-line distance between two Locations in kilometers.
    ///
    /// This is used as the Heuristic of the A* searches, so for A* to find optimal Routes it
    /// must never be larger than the length of any Road connecting the two Locations.
    fn distance(&self, other: &Self) -> f64;

    /// Weather this Location may be inserted into a Graph at all.
    ///
    /// Invalid Locations are silently rejected by [`add_vertex`](crate::RoadGraph::add_vertex).
    fn is_valid(&self) -> bool {
        true
    }
}

/// A point on the surface of the earth
///
/// Two GeoPoints are equal if both coordinates are bit-for-bit equal (with `-0.0 == 0.0`),
/// which makes them usable as keys in a HashMap.
///
/// ## Examples
/// ```
/// use road_pathfinding::{GeoPoint, Location};
///
/// let san_diego = GeoPoint::new(32.7157, -117.1611);
/// let los_angeles = GeoPoint::new(34.0522, -118.2437);
///
/// let km = san_diego.distance(&los_angeles);
/// assert!((km - 179.4).abs() < 1.0);
/// ```
#[derive(Clone, Copy)]
pub struct GeoPoint {
    /// degrees north of the equator
    pub latitude: f64,
    /// degrees east of Greenwich
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new GeoPoint from latitude and longitude in degrees
    pub const fn new(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    fn key(&self) -> (u64, u64) {
        // + 0.0 turns -0.0 into 0.0
        ((self.latitude + 0.0).to_bits(), (self.longitude + 0.0).to_bits())
    }
}

impl Location for GeoPoint {
    /// Great-circle distance using the haversine formula
    fn distance(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().min(1.0).asin();

        EARTH_RADIUS_KM * c
    }

    fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &GeoPoint) -> bool {
        self.key() == other.key()
    }
}
impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> GeoPoint {
        GeoPoint::new(latitude, longitude)
    }
}

impl Debug for GeoPoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "GeoPoint({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.latitude, self.longitude)
    }
}
