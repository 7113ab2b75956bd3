/// Body data — radii, orbital distances, and per-frame angular speeds.
///
/// Sizes and distances are exaggerated for readability (to scale, the inner
/// planets would be sub-pixel). Speeds are radians per frame, ordered so
/// inner bodies visibly lap outer ones.

use orrery_engine::{BodyDescriptor, RingSpec, StarDescriptor, SystemManifest};

/// Planets with at least one satellite.
pub const MOONED_PLANETS: usize = 6;
/// Planets carrying ring decorations.
pub const RINGED_PLANETS: usize = 2;

fn moon(name: &str, radius: f32, distance: f32, angular_speed: f32) -> BodyDescriptor {
    BodyDescriptor {
        name: name.to_string(),
        radius,
        distance,
        angular_speed,
        texture: Some("textures/2k_moon.jpg".to_string()),
        ring: None,
        moons: Vec::new(),
    }
}

fn planet(
    name: &str,
    radius: f32,
    distance: f32,
    angular_speed: f32,
    texture: &str,
    ring: Option<RingSpec>,
    moons: Vec<BodyDescriptor>,
) -> BodyDescriptor {
    BodyDescriptor {
        name: name.to_string(),
        radius,
        distance,
        angular_speed,
        texture: Some(texture.to_string()),
        ring,
        moons,
    }
}

/// The full descriptor set: eight planets, ten moons, two ringed giants.
pub fn system_manifest() -> SystemManifest {
    SystemManifest {
        star: StarDescriptor {
            name: "Sun".to_string(),
            radius: 7.0,
            texture: Some("textures/2k_sun.jpg".to_string()),
        },
        planets: vec![
            planet("Mercury", 1.2, 5.0, 0.02, "textures/2k_mercury.jpg", None, vec![]),
            planet("Venus", 1.5, 9.0, 0.015, "textures/2k_venus_surface.jpg", None, vec![]),
            planet(
                "Earth", 2.0, 13.0, 0.01, "textures/2k_earth_daymap.jpg", None,
                vec![moon("Moon", 0.4, 3.0, 0.05)],
            ),
            planet(
                "Mars", 1.7, 18.0, 0.008, "textures/2k_mars.jpg", None,
                vec![
                    moon("Phobos", 0.2, 2.5, 0.05),
                    moon("Deimos", 0.15, 3.0, 0.04),
                ],
            ),
            planet(
                "Jupiter", 4.0, 40.0, 0.005, "textures/2k_jupiter.jpg", None,
                vec![
                    moon("Io", 0.7, 6.0, 0.03),
                    moon("Europa", 0.6, 7.0, 0.025),
                    moon("Ganymede", 0.9, 8.5, 0.02),
                    moon("Callisto", 0.8, 10.0, 0.015),
                ],
            ),
            planet(
                "Saturn", 3.5, 55.0, 0.003, "textures/2k_saturn.jpg",
                Some(RingSpec {
                    inner_radius: 4.5,
                    outer_radius: 7.0,
                    color: [0.70, 0.61, 0.42],
                    inclination: 0.4,
                    opacity: 0.6,
                }),
                vec![moon("Titan", 1.2, 6.0, 0.02)],
            ),
            planet(
                "Uranus", 3.0, 70.0, 0.002, "textures/2k_uranus.jpg",
                Some(RingSpec {
                    inner_radius: 3.5,
                    outer_radius: 5.0,
                    color: [0.55, 0.71, 0.80],
                    inclination: 0.8,
                    opacity: 0.6,
                }),
                vec![moon("Miranda", 0.4, 4.5, 0.02)],
            ),
            planet(
                "Neptune", 3.0, 90.0, 0.001, "textures/2k_neptune.jpg", None,
                vec![moon("Triton", 0.9, 5.0, 0.015)],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_is_valid() {
        assert!(system_manifest().validate().is_ok());
    }

    #[test]
    fn planet_and_moon_counts() {
        let manifest = system_manifest();
        assert_eq!(manifest.planets.len(), 8);

        let mooned = manifest.planets.iter().filter(|p| !p.moons.is_empty()).count();
        assert_eq!(mooned, MOONED_PLANETS);

        let moons: usize = manifest.planets.iter().map(|p| p.moons.len()).sum();
        assert_eq!(moons, 10);
    }

    #[test]
    fn only_the_giants_have_rings() {
        let manifest = system_manifest();
        let ringed: Vec<&str> = manifest
            .planets
            .iter()
            .filter(|p| p.ring.is_some())
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(ringed, ["Saturn", "Uranus"]);
        assert_eq!(ringed.len(), RINGED_PLANETS);
    }

    #[test]
    fn distances_increase_outward() {
        let manifest = system_manifest();
        let distances: Vec<f32> = manifest.planets.iter().map(|p| p.distance).collect();
        assert!(distances.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn inner_planets_orbit_faster() {
        let manifest = system_manifest();
        let speeds: Vec<f32> = manifest.planets.iter().map(|p| p.angular_speed).collect();
        assert!(speeds.windows(2).all(|w| w[0] >= w[1]));
    }
}
