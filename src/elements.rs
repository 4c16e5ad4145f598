//! Seed interaction elements.
//!
//! A prototype usually starts from a handful of named elements before any
//! generation runs. Each kind carries the skeleton JSON the runtime expects,
//! with neutral defaults for positions, axes and attribute values. The
//! preview command renders these so a user can paste or save a starting
//! `InteractionElements.json` by hand.

use std::fmt;
use std::str::FromStr;

use serde_json::{Value, json};

/// Supported interaction element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    ToggleButton,
    Slider,
    Rotatable,
    TouchArea,
    Movable,
}

impl ElementKind {
    pub const ALL: [ElementKind; 6] = [
        ElementKind::Button,
        ElementKind::ToggleButton,
        ElementKind::Slider,
        ElementKind::Rotatable,
        ElementKind::TouchArea,
        ElementKind::Movable,
    ];

    fn name(&self) -> &'static str {
        match self {
            ElementKind::Button => "Button",
            ElementKind::ToggleButton => "ToggleButton",
            ElementKind::Slider => "Slider",
            ElementKind::Rotatable => "Rotatable",
            ElementKind::TouchArea => "TouchArea",
            ElementKind::Movable => "Movable",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let valid: Vec<&str> = ElementKind::ALL.iter().map(|k| k.name()).collect();
                format!("unknown element kind '{}', expected one of: {}", s, valid.join(", "))
            })
    }
}

/// A named element to seed a prototype with, parsed from `NAME` or
/// `NAME:KIND`. A bare name seeds a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedElement {
    pub name: String,
    pub kind: ElementKind,
}

impl FromStr for SeedElement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, kind) = match s.split_once(':') {
            Some((name, kind)) => (name, ElementKind::from_str(kind)?),
            None => (s, ElementKind::Button),
        };
        if name.is_empty() {
            return Err("element name cannot be empty".to_string());
        }

        Ok(Self {
            name: name.to_string(),
            kind,
        })
    }
}

impl SeedElement {
    /// The skeleton JSON for this element, matching the shape the
    /// interaction runtime loads.
    pub fn seed_json(&self) -> Value {
        match self.kind {
            ElementKind::Button => json!({
                "Type": "Button",
                "Name": self.name,
            }),
            ElementKind::ToggleButton => json!({
                "Type": "ToggleButton",
                "Name": self.name,
                "InitialAttributeValues": [
                    { "Attribute": "VALUE", "Value": "false" },
                ],
            }),
            ElementKind::Slider => json!({
                "Type": "Slider",
                "Name": self.name,
                "MinPosition": { "x": 0.0, "y": 0.0, "z": 0.0 },
                "MaxPosition": { "x": 0.0, "y": 0.0, "z": 0.0 },
                "InitialAttributeValues": [
                    { "Attribute": "VALUE", "Value": "0.0" },
                    { "Attribute": "FIXED", "Value": "false" },
                ],
                "PositionResolution": 0,
                "TransitionTimeInMs": 0,
            }),
            ElementKind::Rotatable => json!({
                "Type": "Rotatable",
                "Name": self.name,
                "MinRotation": 0.0,
                "MaxRotation": 0.0,
                "RotationAxis": {
                    "Origin": { "x": 0.0, "y": 0.0, "z": 0.0 },
                    "Direction": { "x": 0.0, "y": 0.0, "z": 1.0 },
                },
                "InitialAttributeValues": [
                    { "Attribute": "VALUE", "Value": "0.0" },
                    { "Attribute": "FIXED", "Value": "false" },
                ],
                "PositionResolution": 0,
                "AllowsForInfiniteRotation": false,
                "TransitionTimeInMs": 0,
            }),
            ElementKind::TouchArea => json!({
                "Type": "TouchArea",
                "Name": self.name,
                "Plane": { "x": 0.0, "y": 0.0, "z": 1.0 },
                "Resolution": { "x": 0.0, "y": 0.0 },
            }),
            ElementKind::Movable => json!({
                "Type": "Movable",
                "Name": self.name,
                "InitialAttributeValues": [
                    { "Attribute": "POSITION", "Value": "(0.0,0.0,0.0)" },
                    { "Attribute": "ROTATION", "Value": "(0.0,0.0,0.0)" },
                ],
                "SnapPoses": [],
                "TransitionTimeInMs": 0,
            }),
        }
    }
}

/// Wrap seed elements in the top-level document the runtime reads.
pub fn seed_document(elements: &[SeedElement]) -> Value {
    let seeds: Vec<Value> = elements.iter().map(SeedElement::seed_json).collect();
    json!({ "Elements": seeds })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_parses_as_button() {
        let element: SeedElement = "lamp".parse().unwrap();

        assert_eq!(element.name, "lamp");
        assert_eq!(element.kind, ElementKind::Button);
    }

    #[test]
    fn name_and_kind_parse() {
        let element: SeedElement = "volume:Slider".parse().unwrap();

        assert_eq!(element.name, "volume");
        assert_eq!(element.kind, ElementKind::Slider);
    }

    #[test]
    fn kind_parsing_is_case_insensitive() {
        let element: SeedElement = "knob:rotatable".parse().unwrap();

        assert_eq!(element.kind, ElementKind::Rotatable);
    }

    #[test]
    fn unknown_kind_is_rejected_with_choices() {
        let err = "x:Lever".parse::<SeedElement>().unwrap_err();

        assert!(err.contains("Lever"));
        assert!(err.contains("ToggleButton"));
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(":Button".parse::<SeedElement>().is_err());
        assert!("".parse::<SeedElement>().is_err());
    }

    #[test]
    fn button_seed_is_minimal() {
        let element: SeedElement = "power".parse().unwrap();

        assert_eq!(
            element.seed_json(),
            json!({ "Type": "Button", "Name": "power" })
        );
    }

    #[test]
    fn toggle_button_starts_off() {
        let element: SeedElement = "mute:ToggleButton".parse().unwrap();
        let seed = element.seed_json();

        assert_eq!(seed["InitialAttributeValues"][0]["Attribute"], "VALUE");
        assert_eq!(seed["InitialAttributeValues"][0]["Value"], "false");
    }

    #[test]
    fn slider_carries_positions_and_attributes() {
        let element: SeedElement = "volume:Slider".parse().unwrap();
        let seed = element.seed_json();

        assert_eq!(seed["MinPosition"]["z"], 0.0);
        assert_eq!(seed["MaxPosition"]["x"], 0.0);
        assert_eq!(seed["InitialAttributeValues"][1]["Attribute"], "FIXED");
        assert_eq!(seed["TransitionTimeInMs"], 0);
    }

    #[test]
    fn rotatable_axis_points_along_z() {
        let element: SeedElement = "knob:Rotatable".parse().unwrap();
        let seed = element.seed_json();

        assert_eq!(seed["RotationAxis"]["Direction"]["z"], 1.0);
        assert_eq!(seed["AllowsForInfiniteRotation"], false);
    }

    #[test]
    fn movable_uses_vector_tuple_strings() {
        let element: SeedElement = "chess piece:Movable".parse().unwrap();
        let seed = element.seed_json();

        assert_eq!(seed["InitialAttributeValues"][0]["Value"], "(0.0,0.0,0.0)");
        assert_eq!(seed["SnapPoses"], json!([]));
    }

    #[test]
    fn document_preserves_element_order() {
        let elements = vec![
            "b:Button".parse().unwrap(),
            "a:TouchArea".parse().unwrap(),
        ];

        let document = seed_document(&elements);

        assert_eq!(document["Elements"][0]["Name"], "b");
        assert_eq!(document["Elements"][1]["Name"], "a");
        assert_eq!(document["Elements"][1]["Type"], "TouchArea");
    }

    #[test]
    fn display_matches_parse_names() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.to_string().parse::<ElementKind>().unwrap(), kind);
        }
    }
}
