//! Basemap identifier vocabulary.
//!
//! Identifiers name tile layers of the Esri basemap service. The vocabulary
//! is defined by the service, not this crate, so identifiers stay strings:
//! an unknown identifier is not an error here, the tile layer just fails to
//! render.

use std::fmt;

/// Basemaps that ship a matching `<name>Labels` overlay.
pub const LABELED: [&str; 5] = ["ShadedRelief", "Oceans", "Gray", "DarkGray", "Terrain"];

/// The gallery offered by the basemap picker.
pub const GALLERY: [&str; 10] = [
    "Streets",
    "Topographic",
    "NationalGeographic",
    "Oceans",
    "Gray",
    "DarkGray",
    "Imagery",
    "ImageryClarity",
    "ShadedRelief",
    "Terrain",
];

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Basemap(String);

impl Basemap {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }

    /// The label overlay to stack on this basemap, if it has one: the
    /// terrain-style set gets its own `<name>Labels` layer, anything
    /// imagery-flavored shares the generic `ImageryLabels` layer.
    #[must_use]
    pub fn label_overlay(&self) -> Option<String> {
        if LABELED.contains(&self.0.as_str()) {
            Some(format!("{}Labels", self.0))
        } else if self.0.contains("Imagery") {
            Some("ImageryLabels".to_owned())
        } else {
            None
        }
    }
}

impl Default for Basemap {
    fn default() -> Self {
        Self("Streets".to_owned())
    }
}

impl fmt::Display for Basemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Basemap {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::Basemap;

    #[test]
    fn test_label_overlay() {
        assert_eq!(Basemap::default().label_overlay(), None);
        assert_eq!(
            Basemap::new("Gray").label_overlay(),
            Some("GrayLabels".to_owned())
        );
        assert_eq!(
            Basemap::new("Terrain").label_overlay(),
            Some("TerrainLabels".to_owned())
        );
        assert_eq!(
            Basemap::new("Imagery").label_overlay(),
            Some("ImageryLabels".to_owned())
        );
        assert_eq!(
            Basemap::new("ImageryClarity").label_overlay(),
            Some("ImageryLabels".to_owned())
        );
        // unknown identifiers are carried, not rejected
        assert_eq!(Basemap::new("Watercolor").label_overlay(), None);
    }

    #[test]
    fn test_default_is_streets() {
        assert_eq!(Basemap::default().id(), "Streets");
    }
}
