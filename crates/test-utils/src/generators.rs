//! Generators for synthetic station data.

use station_common::StationRecord;

/// Creates `count` stations with predictable values.
///
/// Station `i` is named `station-{i}`, has price `i` and commute time
/// `100 - i`, and sits on a small grid around central Tokyo.
///
/// # Example
///
/// ```
/// use test_utils::create_station_grid;
///
/// let stations = create_station_grid(4);
/// assert_eq!(stations.len(), 4);
/// assert_eq!(stations[3].price, 3.0);
/// assert_eq!(stations[3].commute_time, 97.0);
/// ```
pub fn create_station_grid(count: usize) -> Vec<StationRecord> {
    (0..count)
        .map(|i| StationRecord {
            station: format!("station-{}", i),
            line: format!("line-{}", i % 3),
            lat: Some(35.60 + (i / 10) as f64 * 0.01),
            lng: Some(139.60 + (i % 10) as f64 * 0.01),
            price: i as f64,
            commute_time: 100.0 - i as f64,
        })
        .collect()
}

/// Creates `count` stations that all share the same price and commute time.
pub fn create_uniform_stations(count: usize, price: f64, commute_time: f64) -> Vec<StationRecord> {
    create_station_grid(count)
        .into_iter()
        .map(|mut record| {
            record.price = price;
            record.commute_time = commute_time;
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_plottable() {
        assert!(create_station_grid(25).iter().all(|r| r.position().is_some()));
    }

    #[test]
    fn test_uniform_values() {
        let stations = create_uniform_stations(3, 8.0, 30.0);
        assert!(stations.iter().all(|r| r.price == 8.0 && r.commute_time == 30.0));
    }
}
