use url::Url;

use crate::{
    ForecastError,
    model::Coordinate,
    units::{ExcludeField, UnitSystem},
};

pub const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/onecall";

/// Everything needed to address the One Call endpoint.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub coordinate: Coordinate,
    pub api_key: String,
    pub units: Option<UnitSystem>,
    /// Language code for descriptions, e.g. "ru".
    pub language: Option<String>,
    pub exclude: Vec<ExcludeField>,
}

/// Builds the request URL. Optional parameters that are absent or empty are
/// left out entirely.
pub fn build_request_url(request: &ForecastRequest) -> Result<Url, ForecastError> {
    let lat = format!("{:.3}", request.coordinate.latitude);
    let lon = format!("{:.3}", request.coordinate.longitude);
    let exclude = ExcludeField::join(&request.exclude);

    let optional = [
        ("units", request.units.map(|u| u.as_str()).unwrap_or_default()),
        ("lang", request.language.as_deref().unwrap_or_default()),
        ("exclude", exclude.as_str()),
    ];

    let params = [("lat", lat.as_str()), ("lon", lon.as_str()), ("appid", request.api_key.as_str())]
        .into_iter()
        .chain(optional.into_iter().filter(|(_, value)| !value.is_empty()));

    Ok(Url::parse_with_params(BASE_URL, params)?)
}
