use serde::{Deserialize, Serialize};
use std::env;

use crate::{
    entities::{Coordinates, OpeningHours, Photo},
    error::{geocode_error, invalid_input_error, routing_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeocodedPlace {
    pub geometry: Geometry,
    pub formatted_address: Option<String>,
}

/// A raw nearby-search result. Most fields are optional on the wire.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NearbyPlace {
    pub place_id: String,
    pub name: String,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<i64>,
    pub price_level: Option<u8>,
    pub vicinity: Option<String>,
    pub geometry: Geometry,
    #[serde(default)]
    pub types: Vec<String>,
    pub photos: Option<Vec<Photo>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub website: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub url: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    pub photos: Option<Vec<Photo>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    result: Option<T>,
    results: Option<T>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatrixRow {
    pub elements: Vec<MatrixElement>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatrixElement {
    pub status: String,
    pub duration: Option<MatrixDuration>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatrixDuration {
    pub text: String,
    pub value: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct MatrixResponse {
    status: String,
    rows: Option<Vec<MatrixRow>>,
}

fn check_transport(res: &reqwest::Response) -> Result<(), Error> {
    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(())
}

#[tracing::instrument]
pub async fn geocode(address: &str) -> Result<Coordinates, Error> {
    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("{}/maps/api/geocode/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("address", address)])
        .send()
        .await?;

    check_transport(&res)?;

    let data: Response<Vec<GeocodedPlace>> = res.json().await?;

    // Zero results and any non-success provider status are both address
    // resolution failures from the caller's point of view.
    if data.status != "OK" {
        return Err(geocode_error(address));
    }

    data.results
        .and_then(|results| results.into_iter().next())
        .map(|place| place.geometry.location)
        .ok_or_else(|| geocode_error(address))
}

#[tracing::instrument]
pub async fn search_restaurants(
    center: Coordinates,
    radius: f64,
    keyword: &str,
    min_price: u8,
    max_price: u8,
) -> Result<Vec<NearbyPlace>, Error> {
    let location: String = center.into();

    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("{}/maps/api/place/nearbysearch/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("location", location)])
        .query(&[("radius", radius)])
        .query(&[("type", "restaurant")])
        .query(&[("keyword", keyword)])
        .query(&[("minprice", min_price), ("maxprice", max_price)])
        .send()
        .await?;

    check_transport(&res)?;

    let data: Response<Vec<NearbyPlace>> = res.json().await?;

    if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
        return Err(upstream_error());
    }

    Ok(data.results.unwrap_or_default())
}

/// Transit stations closest to `center`, nearest first.
#[tracing::instrument]
pub async fn nearest_transit_stations(center: Coordinates) -> Result<Vec<NearbyPlace>, Error> {
    let location: String = center.into();

    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("{}/maps/api/place/nearbysearch/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("location", location)])
        .query(&[("rankby", "distance")])
        .query(&[("type", "subway_station")])
        .send()
        .await?;

    check_transport(&res)?;

    let data: Response<Vec<NearbyPlace>> = res.json().await?;

    if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
        return Err(upstream_error());
    }

    Ok(data.results.unwrap_or_default())
}

#[tracing::instrument]
pub async fn place_details(place_id: &str) -> Result<PlaceDetail, Error> {
    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("{}/maps/api/place/details/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("place_id", place_id)])
        .query(&[(
            "fields",
            "name,rating,formatted_phone_number,website,opening_hours,url,photos",
        )])
        .send()
        .await?;

    check_transport(&res)?;

    let data: Response<PlaceDetail> = res.json().await?;

    if data.status != "OK" {
        return Err(upstream_error());
    }

    data.result.ok_or_else(upstream_error)
}

/// One batched transit-duration request: two origins by N destinations.
#[tracing::instrument(skip(destinations))]
pub async fn travel_time_matrix(
    origin_a: Coordinates,
    origin_b: Coordinates,
    destinations: &[Coordinates],
) -> Result<Vec<MatrixRow>, Error> {
    let origins = format!("{}|{}", String::from(origin_a), String::from(origin_b));
    let destinations = destinations
        .iter()
        .map(|c| String::from(*c))
        .collect::<Vec<_>>()
        .join("|");

    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("{}/maps/api/distancematrix/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("origins", origins)])
        .query(&[("destinations", destinations)])
        .query(&[("mode", "transit")])
        .send()
        .await?;

    check_transport(&res)?;

    let data: MatrixResponse = res.json().await?;

    if data.status != "OK" {
        return Err(routing_error(&data.status));
    }

    data.rows.ok_or_else(|| routing_error("MISSING_ROWS"))
}
