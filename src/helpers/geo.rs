use crate::error::SuggestionError;

/// Earth mean radius in miles, the basis for the degree-span conversion.
const EARTH_RADIUS_MILES: f64 = 3963.1676;

const METERS_PER_MILE: f64 = 1609.34;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lon_min: f64,
    pub lat_max: f64,
    pub lon_max: f64,
}

/// Converts a search radius in miles into the whole meters the provider's
/// `radius` parameter expects, truncating toward zero.
pub fn miles_to_meters(miles: f64) -> Result<i32, SuggestionError> {
    if !miles.is_finite() || miles <= 0.0 {
        return Err(SuggestionError::InvalidArgument(format!(
            "search radius must be a positive number of miles, got {}",
            miles
        )));
    }

    Ok((miles * METERS_PER_MILE) as i32)
}

/// Derives the latitude/longitude window approximating a circle of
/// `radius_miles` around `center`. The longitude span is widened by
/// 1/cos(latitude) to correct for meridian convergence, so the poles are
/// rejected before they can turn the span infinite.
pub fn bounding_box(
    center: Coordinate,
    radius_miles: f64,
) -> Result<BoundingBox, SuggestionError> {
    if !center.latitude.is_finite() || !center.longitude.is_finite() {
        return Err(SuggestionError::InvalidArgument(format!(
            "coordinates must be finite, got ({}, {})",
            center.latitude, center.longitude
        )));
    }
    if center.latitude.abs() >= 90.0 {
        return Err(SuggestionError::InvalidArgument(format!(
            "latitude must lie strictly between -90 and 90 degrees, got {}",
            center.latitude
        )));
    }
    if !radius_miles.is_finite() || radius_miles <= 0.0 {
        return Err(SuggestionError::InvalidArgument(format!(
            "search radius must be a positive number of miles, got {}",
            radius_miles
        )));
    }

    let d_lat = (radius_miles / EARTH_RADIUS_MILES).to_degrees();
    let d_lon = (radius_miles
        / (EARTH_RADIUS_MILES * center.latitude.to_radians().cos()))
    .to_degrees();

    Ok(BoundingBox {
        lat_min: center.latitude - d_lat,
        lon_min: center.longitude - d_lon,
        lat_max: center.latitude + d_lat,
        lon_max: center.longitude + d_lon,
    })
}
