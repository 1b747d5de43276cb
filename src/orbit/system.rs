use crate::error::{Result, ShadowError};
use crate::orbit::body::Body;
use crate::orbit::classify::{classify_checked, classify_scientific_checked};
use crate::orbit::naming::{generate_star_name, planet_name};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::{Range, RangeInclusive};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub name: String,
    pub bodies: Vec<Body>,
}

impl StarSystem {
    pub fn new(name: impl Into<String>, bodies: Vec<Body>) -> Self {
        Self {
            name: name.into(),
            bodies,
        }
    }
}

/// The canonical four-body inner system.
pub fn default_system() -> StarSystem {
    StarSystem::new(
        "Sol Minor",
        vec![
            Body::new("Mercuria", 0.4, 4879.0),
            Body::new("Venusia", 0.7, 12104.0),
            Body::new("Earthia", 1.0, 12742.0),
            Body::new("Marsia", 1.5, 6779.0),
        ],
    )
}

pub fn outer_system() -> StarSystem {
    StarSystem::new(
        "Sol Major",
        vec![
            Body::new("Jovia", 5.2, 139820.0),
            Body::new("Saturnia", 9.5, 116460.0),
            Body::new("Uranis", 19.2, 50724.0),
            Body::new("Neptuna", 30.1, 49244.0),
        ],
    )
}

/// Inner and outer catalogs together.
pub fn full_system() -> StarSystem {
    let mut bodies = default_system().bodies;
    bodies.extend(outer_system().bodies);
    StarSystem::new("Sol", bodies)
}

#[derive(Clone, Debug)]
pub struct SystemConfig {
    pub bodies: RangeInclusive<usize>,
    /// Orbital distance in AU.
    pub distance: Range<f64>,
    /// Diameter in km.
    pub size: Range<f64>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            bodies: 3..=8,
            distance: 0.2..40.0,
            size: 1_000.0..150_000.0,
        }
    }
}

/// Seeded random star systems. The same seed and config always produce
/// the same system.
pub struct SystemGenerator {
    rng: ChaCha8Rng,
    used_names: HashSet<String>,
    config: SystemConfig,
}

impl SystemGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, SystemConfig::default())
    }

    pub fn with_config(seed: u64, config: SystemConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            used_names: HashSet::new(),
            config,
        }
    }

    pub fn generate(&mut self) -> StarSystem {
        let star = generate_star_name(&mut self.rng, &mut self.used_names);
        let count = self.rng.gen_range(self.config.bodies.clone());

        let mut distances: Vec<f64> = (0..count)
            .map(|_| self.rng.gen_range(self.config.distance.clone()))
            .collect();
        distances.sort_by(f64::total_cmp);

        let bodies = distances
            .into_iter()
            .enumerate()
            .map(|(i, distance)| {
                let size = self.rng.gen_range(self.config.size.clone());
                Body::new(planet_name(&star, i), round_to(distance, 2), size.round())
            })
            .collect();

        StarSystem::new(star, bodies)
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SystemInput {
    Named(StarSystem),
    Bare(Vec<Body>),
}

/// Reads a system from JSON: either a bare array of bodies or an object
/// with `name` and `bodies`.
pub fn parse_system(json: &str) -> Result<StarSystem> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| ShadowError::invalid_input(format!("not valid JSON: {e}")))?;
    if !(value.is_array() || value.is_object()) {
        return Err(ShadowError::invalid_input(
            "expected a list of bodies or a system object",
        ));
    }

    match serde_json::from_value(value) {
        Ok(SystemInput::Named(system)) => Ok(system),
        Ok(SystemInput::Bare(bodies)) => Ok(StarSystem::new("Custom", bodies)),
        Err(_) => Err(ShadowError::invalid_input(
            "every body needs a string name and numeric distance and size",
        )),
    }
}

#[derive(Serialize)]
struct ClassifiedView<'a, T> {
    system: &'a str,
    bodies: Vec<T>,
}

pub fn classification_json(system: &StarSystem) -> Result<String> {
    let view = ClassifiedView {
        system: &system.name,
        bodies: classify_checked(&system.bodies)?,
    };
    Ok(serde_json::to_string(&view)?)
}

pub fn scientific_json(system: &StarSystem) -> Result<String> {
    let view = ClassifiedView {
        system: &system.name,
        bodies: classify_scientific_checked(&system.bodies)?,
    };
    Ok(serde_json::to_string(&view)?)
}

pub fn system_json(system: &StarSystem) -> Result<String> {
    Ok(serde_json::to_string(system)?)
}
