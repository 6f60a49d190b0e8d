//! Typed park features over a GeoJSON `FeatureCollection`.
//!
//! Every property key other than the four fixed ones (`id`, `name`,
//! `latitude`, `longitude`) is a year attribute. The attribute key set is
//! dynamic, discovered at load time, and kept in document order: the time
//! slider steps through the keys in the order the dataset declares them.

use geojson::{Feature, FeatureCollection, GeoJson, Value as GeoValue};
use serde_json::{Map, Value};

/// Property keys that are not year attributes.
pub const RESERVED_KEYS: [&str; 4] = ["id", "name", "latitude", "longitude"];

#[derive(Debug)]
pub enum Error {
    GeoJson(geojson::Error),
    /// The document parsed, but was not a `FeatureCollection`.
    NotACollection,
    /// A feature has no geometry or a non-Point geometry.
    Geometry,
    /// A feature has no properties object.
    MissingProperties,
    /// A fixed property is absent or has the wrong type.
    Property(&'static str),
}

impl From<geojson::Error> for Error {
    fn from(e: geojson::Error) -> Self {
        Self::GeoJson(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GeoJson(e) => write!(f, "invalid GeoJSON: {e}"),
            Self::NotACollection => write!(f, "expected a FeatureCollection"),
            Self::Geometry => write!(f, "feature must have a Point geometry"),
            Self::MissingProperties => write!(f, "feature has no properties"),
            Self::Property(key) => write!(f, "missing or invalid property {key}"),
        }
    }
}

impl std::error::Error for Error {}

/// The property bag of one park feature.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkProperties {
    pub id: String,
    pub name: String,
    /// Redundant with the feature geometry; carried, never used for placement.
    pub latitude: f64,
    pub longitude: f64,
    /// Year attributes, in document order.
    ages: Vec<(String, f64)>,
}

impl ParkProperties {
    /// Extracts the fixed fields and the dynamic year attributes from a raw
    /// GeoJSON properties object. Year values that are not numeric are
    /// skipped with a warning rather than poisoning the value bounds.
    ///
    /// # Errors
    ///
    /// Returns `Error::Property` when a fixed field is absent or mistyped.
    pub fn from_map(properties: &Map<String, Value>) -> Result<Self, Error> {
        let id = match properties.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return Err(Error::Property("id")),
        };
        let name = properties
            .get("name")
            .and_then(Value::as_str)
            .ok_or(Error::Property("name"))?
            .to_owned();
        let latitude = properties
            .get("latitude")
            .and_then(Value::as_f64)
            .ok_or(Error::Property("latitude"))?;
        let longitude = properties
            .get("longitude")
            .and_then(Value::as_f64)
            .ok_or(Error::Property("longitude"))?;

        let mut ages = Vec::new();
        for (key, value) in properties {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            match value.as_f64() {
                Some(age) => ages.push((key.clone(), age)),
                None => log::warn!("park {id}: skipping non-numeric attribute {key}"),
            }
        }

        Ok(Self {
            id,
            name,
            latitude,
            longitude,
            ages,
        })
    }

    /// The value of one year attribute, if the feature carries it.
    #[must_use]
    pub fn age(&self, timestamp: &str) -> Option<f64> {
        self.ages
            .iter()
            .find_map(|(key, value)| (key == timestamp).then_some(*value))
    }

    /// Year attributes in document order.
    pub fn ages(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ages.iter().map(|(key, value)| (key.as_str(), *value))
    }
}

/// One park: properties plus the marker position from the Point geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Park {
    pub properties: ParkProperties,
    lat_lng: (f64, f64),
}

impl Park {
    /// # Errors
    ///
    /// Returns an error for features without a Point geometry or without
    /// properties, and propagates property extraction failures.
    pub fn from_feature(feature: &Feature) -> Result<Self, Error> {
        let geometry = feature.geometry.as_ref().ok_or(Error::Geometry)?;
        let lat_lng = match &geometry.value {
            // GeoJSON positions are (longitude, latitude)
            GeoValue::Point(position) => match position.as_slice() {
                [longitude, latitude, ..] => (*latitude, *longitude),
                _ => return Err(Error::Geometry),
            },
            _ => return Err(Error::Geometry),
        };
        let properties = feature
            .properties
            .as_ref()
            .ok_or(Error::MissingProperties)?;
        Ok(Self {
            properties: ParkProperties::from_map(properties)?,
            lat_lng,
        })
    }

    /// Marker position, latitude first (Leaflet order).
    #[must_use]
    pub fn lat_lng(&self) -> (f64, f64) {
        self.lat_lng
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkCollection {
    pub parks: Vec<Park>,
}

impl ParkCollection {
    /// # Errors
    ///
    /// See [`Park::from_feature`]; a `Feature` or bare `Geometry` document
    /// is `Error::NotACollection`.
    pub fn from_geojson(geojson: &GeoJson) -> Result<Self, Error> {
        match geojson {
            GeoJson::FeatureCollection(collection) => Self::from_features(collection),
            GeoJson::Feature(_) | GeoJson::Geometry(_) => Err(Error::NotACollection),
        }
    }

    /// # Errors
    ///
    /// See [`Park::from_feature`].
    pub fn from_features(collection: &FeatureCollection) -> Result<Self, Error> {
        let parks = collection
            .features
            .iter()
            .map(Park::from_feature)
            .collect::<Result<_, _>>()?;
        Ok(Self { parks })
    }

    /// Parses GeoJSON text into a park collection.
    ///
    /// # Errors
    ///
    /// `Error::GeoJson` for unparsable input, otherwise see
    /// [`Self::from_geojson`].
    pub fn parse(input: &str) -> Result<Self, Error> {
        let geojson: GeoJson = input.parse()?;
        Self::from_geojson(&geojson)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Park> {
        self.parks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::ParkCollection;

    const ONE_PARK: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [-110.5, 44.6] },
            "properties": {
                "id": 1,
                "name": "Yellowstone",
                "latitude": 44.6,
                "longitude": -110.5,
                "1990": 118,
                "2000": 128
            }
        }]
    }"#;

    #[test]
    fn test_parse() {
        let collection = ParkCollection::parse(ONE_PARK).unwrap();
        assert_eq!(collection.len(), 1);
        let park = &collection.parks[0];
        assert_eq!(park.properties.id, "1");
        assert_eq!(park.properties.name, "Yellowstone");
        assert_eq!(park.lat_lng(), (44.6, -110.5));
        assert_eq!(park.properties.age("1990"), Some(118.0));
        assert_eq!(park.properties.age("2000"), Some(128.0));
        assert_eq!(park.properties.age("2010"), None);
    }

    #[test]
    fn test_ages_keep_document_order() {
        let collection = ParkCollection::parse(ONE_PARK).unwrap();
        let keys: Vec<&str> = collection.parks[0]
            .properties
            .ages()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["1990", "2000"]);
    }

    #[test]
    fn test_non_numeric_attribute_skipped() {
        let _ = env_logger::builder().is_test(true).try_init();
        let input = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-103.25, 29.25] },
                "properties": {
                    "id": "bibe",
                    "name": "Big Bend",
                    "latitude": 29.25,
                    "longitude": -103.25,
                    "1990": 46,
                    "state": "TX"
                }
            }]
        }"#;
        let collection = ParkCollection::parse(input).unwrap();
        let park = &collection.parks[0];
        assert_eq!(park.properties.age("1990"), Some(46.0));
        assert_eq!(park.properties.age("state"), None);
    }

    #[test]
    fn test_missing_property() {
        let input = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
                "properties": { "id": "x", "latitude": 0.0, "longitude": 0.0 }
            }]
        }"#;
        assert!(ParkCollection::parse(input).is_err());
    }

    #[test]
    fn test_not_a_collection() {
        let input = r#"{ "type": "Point", "coordinates": [0.0, 0.0] }"#;
        assert!(ParkCollection::parse(input).is_err());
    }
}
