/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use joggability::LatLon;
///
/// let berkeley = LatLon(37.8715, -122.2730);
/// assert_eq!(berkeley.0, 37.8715); // Latitude
/// assert_eq!(berkeley.1, -122.2730); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);
