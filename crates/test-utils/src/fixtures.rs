//! Common station fixtures.
//!
//! Coordinates are real Tokyo stations; prices are in units of 10,000 JPY and
//! commute times in minutes.

use station_common::StationRecord;

/// Build a record with both coordinates present.
pub fn station(
    name: &str,
    line: &str,
    lat: f64,
    lng: f64,
    price: f64,
    commute_time: f64,
) -> StationRecord {
    StationRecord {
        station: name.to_string(),
        line: line.to_string(),
        lat: Some(lat),
        lng: Some(lng),
        price,
        commute_time,
    }
}

/// Build a record with explicit optional coordinates.
pub fn station_at(
    name: &str,
    lat: Option<f64>,
    lng: Option<f64>,
    price: f64,
    commute_time: f64,
) -> StationRecord {
    StationRecord {
        station: name.to_string(),
        line: "Test Line".to_string(),
        lat,
        lng,
        price,
        commute_time,
    }
}

/// Two records: price 5 / commute 20 and price 10 / commute 40.
pub fn round_trip_pair() -> Vec<StationRecord> {
    vec![
        station("Alpha", "Test Line", 35.6, 139.7, 5.0, 20.0),
        station("Beta", "Test Line", 35.7, 139.8, 10.0, 40.0),
    ]
}

/// A small, realistic result set, all with coordinates.
pub fn tokyo_stations() -> Vec<StationRecord> {
    vec![
        station("Shinjuku", "JR Yamanote", 35.6896, 139.7006, 13.2, 12.0),
        station("Nakano", "JR Chuo", 35.7057, 139.6657, 9.8, 18.0),
        station("Kichijoji", "JR Chuo", 35.7033, 139.5797, 8.9, 27.0),
        station("Ikebukuro", "JR Yamanote", 35.7295, 139.7109, 10.5, 15.0),
        station("Kita-Senju", "Tokyo Metro Hibiya", 35.7497, 139.8049, 7.6, 33.0),
        station("Futako-Tamagawa", "Tokyu Den-en-toshi", 35.6116, 139.6268, 11.1, 31.0),
    ]
}

/// [`tokyo_stations`] plus rows the map cannot plot.
///
/// The unplottable rows carry the cheapest and most expensive prices, so
/// they move the color domain without producing markers.
pub fn stations_with_missing_coordinates() -> Vec<StationRecord> {
    let mut records = tokyo_stations();
    records.push(station_at("Ungeocoded", None, None, 4.0, 60.0));
    records.push(station_at("Zero Latitude", Some(0.0), Some(139.7), 20.0, 5.0));
    records
}
