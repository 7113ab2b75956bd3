use std::fmt;
use serde::{Deserialize, Serialize};

/// Declarative description of a star system: the central star plus every
/// orbiting body. Loaded from a JSON file at runtime or built in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemManifest {
    /// The central, non-orbiting body.
    pub star: StarDescriptor,
    /// Top-level orbiting bodies, in display order.
    #[serde(default)]
    pub planets: Vec<BodyDescriptor>,
}

/// The central body. Sits at the origin and never moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarDescriptor {
    pub name: String,
    pub radius: f32,
    /// Texture path key resolved through the asset provider.
    #[serde(default)]
    pub texture: Option<String>,
}

/// Describes one orbiting body (a planet or a moon).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Display name, unique among siblings at its level.
    pub name: String,
    /// Geometric radius of the sphere.
    pub radius: f32,
    /// Fixed orbital radius from the parent origin.
    pub distance: f32,
    /// Radians advanced per frame.
    pub angular_speed: f32,
    /// Texture path key resolved through the asset provider.
    #[serde(default)]
    pub texture: Option<String>,
    /// Ring decoration parameters, for ringed bodies only.
    #[serde(default)]
    pub ring: Option<RingSpec>,
    /// Satellites, in attachment order.
    #[serde(default)]
    pub moons: Vec<BodyDescriptor>,
}

/// Ring decoration parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingSpec {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// RGB in [0, 1].
    pub color: [f32; 3],
    /// Tilt out of the orbital plane, in radians.
    pub inclination: f32,
    #[serde(default = "default_ring_opacity")]
    pub opacity: f32,
}

fn default_ring_opacity() -> f32 {
    0.6
}

/// A descriptor that violates the builder's preconditions.
/// Rejected up front rather than clamped; the builder itself trusts its input.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestError {
    NonPositiveRadius { name: String },
    NegativeDistance { name: String },
    InvalidRing { name: String },
    DuplicateSiblingName { name: String },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRadius { name } => {
                write!(f, "body {name:?} has a non-positive radius")
            }
            Self::NegativeDistance { name } => {
                write!(f, "body {name:?} has a negative orbital distance")
            }
            Self::InvalidRing { name } => {
                write!(f, "body {name:?} has a ring with an empty or negative span")
            }
            Self::DuplicateSiblingName { name } => {
                write!(f, "name {name:?} appears twice in one sibling list")
            }
        }
    }
}

impl std::error::Error for ManifestError {}

impl SystemManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check builder preconditions: positive radii, non-negative distances,
    /// well-formed ring spans, and sibling-unique names. Names only need to
    /// be unique within one sibling list; a moon may share a name with a
    /// planet elsewhere in the system.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.star.radius <= 0.0 {
            return Err(ManifestError::NonPositiveRadius {
                name: self.star.name.clone(),
            });
        }
        check_siblings(&self.planets)?;
        for planet in &self.planets {
            check_body(planet)?;
        }
        Ok(())
    }
}

fn check_body(body: &BodyDescriptor) -> Result<(), ManifestError> {
    if body.radius <= 0.0 {
        return Err(ManifestError::NonPositiveRadius {
            name: body.name.clone(),
        });
    }
    if body.distance < 0.0 {
        return Err(ManifestError::NegativeDistance {
            name: body.name.clone(),
        });
    }
    if let Some(ring) = &body.ring {
        if ring.inner_radius <= 0.0 || ring.outer_radius <= ring.inner_radius {
            return Err(ManifestError::InvalidRing {
                name: body.name.clone(),
            });
        }
    }
    check_siblings(&body.moons)?;
    for moon in &body.moons {
        check_body(moon)?;
    }
    Ok(())
}

fn check_siblings(siblings: &[BodyDescriptor]) -> Result<(), ManifestError> {
    for (i, body) in siblings.iter().enumerate() {
        if siblings[..i].iter().any(|other| other.name == body.name) {
            return Err(ManifestError::DuplicateSiblingName {
                name: body.name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_planet(name: &str) -> BodyDescriptor {
        BodyDescriptor {
            name: name.to_string(),
            radius: 1.0,
            distance: 10.0,
            angular_speed: 0.01,
            texture: None,
            ring: None,
            moons: Vec::new(),
        }
    }

    #[test]
    fn parse_manifest_with_ring_and_moon() {
        let json = r#"{
            "star": { "name": "Sol", "radius": 7.0, "texture": "textures/2k_sun.jpg" },
            "planets": [
                {
                    "name": "Kronos",
                    "radius": 3.5,
                    "distance": 55.0,
                    "angular_speed": 0.003,
                    "ring": {
                        "inner_radius": 4.5,
                        "outer_radius": 7.0,
                        "color": [0.7, 0.61, 0.42],
                        "inclination": 0.4
                    },
                    "moons": [
                        { "name": "Titan", "radius": 1.2, "distance": 6.0, "angular_speed": 0.02 }
                    ]
                }
            ]
        }"#;
        let manifest = SystemManifest::from_json(json).unwrap();
        assert_eq!(manifest.star.name, "Sol");
        assert_eq!(manifest.planets.len(), 1);

        let kronos = &manifest.planets[0];
        let ring = kronos.ring.as_ref().unwrap();
        assert_eq!(ring.opacity, 0.6); // serde default
        assert_eq!(kronos.moons[0].name, "Titan");
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_distance() {
        let mut planet = minimal_planet("Icarus");
        planet.distance = -1.0;
        let manifest = SystemManifest {
            star: StarDescriptor {
                name: "Sol".to_string(),
                radius: 7.0,
                texture: None,
            },
            planets: vec![planet],
        };
        assert_eq!(
            manifest.validate(),
            Err(ManifestError::NegativeDistance {
                name: "Icarus".to_string()
            })
        );
    }

    #[test]
    fn validate_rejects_inverted_ring_span() {
        let mut planet = minimal_planet("Kronos");
        planet.ring = Some(RingSpec {
            inner_radius: 7.0,
            outer_radius: 4.5,
            color: [0.7, 0.61, 0.42],
            inclination: 0.4,
            opacity: 0.6,
        });
        let manifest = SystemManifest {
            star: StarDescriptor {
                name: "Sol".to_string(),
                radius: 7.0,
                texture: None,
            },
            planets: vec![planet],
        };
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::InvalidRing { .. })
        ));
    }

    #[test]
    fn validate_rejects_duplicate_siblings_but_allows_cross_level_repeats() {
        let mut earth = minimal_planet("Gaia");
        earth.moons.push(minimal_planet("Luna"));
        // A moon elsewhere may reuse a planet's name.
        let mut mars = minimal_planet("Ares");
        mars.moons.push(minimal_planet("Gaia"));

        let manifest = SystemManifest {
            star: StarDescriptor {
                name: "Sol".to_string(),
                radius: 7.0,
                texture: None,
            },
            planets: vec![earth, mars],
        };
        assert!(manifest.validate().is_ok());

        let manifest_dup = SystemManifest {
            star: StarDescriptor {
                name: "Sol".to_string(),
                radius: 7.0,
                texture: None,
            },
            planets: vec![minimal_planet("Twin"), minimal_planet("Twin")],
        };
        assert!(matches!(
            manifest_dup.validate(),
            Err(ManifestError::DuplicateSiblingName { .. })
        ));
    }
}
