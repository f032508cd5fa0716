//! Map style and marker types

use serde::{Deserialize, Serialize};

/// One rule in the map style document.
///
/// Mirrors the hosted `map-style.json` format, where each rule targets a
/// feature/element pair and carries an opaque list of styler objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapStyleRule {
    #[serde(rename = "featureType", default, skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<String>,

    #[serde(rename = "elementType", default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,

    #[serde(default)]
    pub stylers: Vec<serde_json::Value>,
}

/// The full style document, a bare JSON array of rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapStyle {
    pub rules: Vec<MapStyleRule>,
}

impl MapStyle {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

/// A labelled point of interest on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_rule_array() {
        let json = r##"[
            {"featureType": "water", "stylers": [{"color": "#19a0d8"}]},
            {"elementType": "labels.text.stroke", "stylers": [{"color": "#ffffff"}]},
            {"stylers": [{"saturation": -100}]}
        ]"##;
        let style: MapStyle = serde_json::from_str(json).unwrap();
        assert_eq!(style.len(), 3);
        assert_eq!(style.rules[0].feature_type.as_deref(), Some("water"));
        assert!(style.rules[2].feature_type.is_none());
    }

    #[test]
    fn serializes_back_to_array() {
        let style = MapStyle {
            rules: vec![MapStyleRule {
                feature_type: Some("road".to_string()),
                element_type: None,
                stylers: vec![],
            }],
        };
        let json = serde_json::to_value(&style).unwrap();
        assert!(json.is_array());
    }
}
