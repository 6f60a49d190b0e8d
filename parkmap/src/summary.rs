//! Single-pass dataset summary: the ordered year keys and global bounds.

use crate::park::ParkCollection;

/// What one scan of the dataset yields: every distinct year key in
/// first-seen order, and the min/max over all year values of all parks.
///
/// An empty collection gives the degenerate `+∞`/`−∞` bounds and no
/// timestamps; callers must guard before sizing anything with it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataSummary {
    pub timestamps: Vec<String>,
    pub min: f64,
    pub max: f64,
}

impl DataSummary {
    #[must_use]
    pub fn of(collection: &ParkCollection) -> Self {
        let mut timestamps: Vec<String> = Vec::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for park in collection.iter() {
            for (key, value) in park.properties.ages() {
                if !timestamps.iter().any(|seen| seen == key) {
                    timestamps.push(key.to_owned());
                }
                if value < min {
                    min = value;
                }
                if value > max {
                    max = value;
                }
            }
        }

        Self {
            timestamps,
            min,
            max,
        }
    }

    /// The slider's initial timestamp.
    #[must_use]
    pub fn first_timestamp(&self) -> Option<&str> {
        self.timestamps.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::DataSummary;
    use crate::park::ParkCollection;

    #[test]
    fn test_summary() {
        let input = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [-110.5, 44.6] },
                    "properties": {
                        "id": "a", "name": "A", "latitude": 44.6, "longitude": -110.5,
                        "1990": 5, "2000": 20
                    }
                },
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [-119.5, 37.9] },
                    "properties": {
                        "id": "b", "name": "B", "latitude": 37.9, "longitude": -119.5,
                        "1990": 8
                    }
                }
            ]
        }"#;
        let collection = ParkCollection::parse(input).unwrap();
        let summary = DataSummary::of(&collection);
        assert_eq!(summary.timestamps, vec!["1990", "2000"]);
        assert_eq!(summary.min, 5.0);
        assert_eq!(summary.max, 20.0);
        assert_eq!(summary.first_timestamp(), Some("1990"));
    }

    #[test]
    fn test_first_seen_order_across_features() {
        let input = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
                    "properties": {
                        "id": "a", "name": "A", "latitude": 0.0, "longitude": 0.0,
                        "2000": 1
                    }
                },
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
                    "properties": {
                        "id": "b", "name": "B", "latitude": 0.0, "longitude": 0.0,
                        "1990": 2, "2000": 3
                    }
                }
            ]
        }"#;
        let collection = ParkCollection::parse(input).unwrap();
        let summary = DataSummary::of(&collection);
        // "2000" was seen first, so it stays first.
        assert_eq!(summary.timestamps, vec!["2000", "1990"]);
    }

    #[test]
    fn test_empty_collection_is_degenerate() {
        let collection = ParkCollection::default();
        let summary = DataSummary::of(&collection);
        assert!(summary.timestamps.is_empty());
        assert_eq!(summary.min, f64::INFINITY);
        assert_eq!(summary.max, f64::NEG_INFINITY);
        assert_eq!(summary.first_timestamp(), None);
    }
}
