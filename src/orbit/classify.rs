use crate::error::Result;
use crate::orbit::body::{validate, Body};
use serde::{Serialize, Serializer};

/// Kilometres in one astronomical unit.
pub const AU_KM: f64 = 149_597_870.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LightIntensity {
    Full,
    Partial,
    None,
    MultipleShadows,
}

impl Serialize for LightIntensity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(light_label(*self))
    }
}

pub fn light_label(light: LightIntensity) -> &'static str {
    match light {
        LightIntensity::Full => "Full",
        LightIntensity::Partial => "Partial",
        LightIntensity::None => "None",
        LightIntensity::MultipleShadows => "None (Multiple Shadows)",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShadowClassification {
    #[serde(flatten)]
    pub body: Body,
    pub shadow_count: usize,
    pub shadowed_by: Vec<String>,
    pub light: LightIntensity,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScientificClassification {
    #[serde(flatten)]
    pub base: ShadowClassification,
    pub shadow_intensity: f64,
    pub light_fraction: f64,
    pub angular_size: f64,
}

fn sorted_by_distance(bodies: &[Body]) -> Vec<Body> {
    let mut sorted = bodies.to_vec();
    // Vec::sort_by is stable, so bodies at equal distance keep input order.
    sorted.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    sorted
}

fn light_for(position: usize, larger_closer: usize) -> LightIntensity {
    match (position, larger_closer) {
        (0, _) => LightIntensity::Full,
        (_, 0) => LightIntensity::Partial,
        (_, 1) => LightIntensity::None,
        _ => LightIntensity::MultipleShadows,
    }
}

/// Classifies the light reaching each body. A body is shadowed only by
/// strictly larger bodies that sit closer to the star.
///
/// The output is sorted by ascending distance and has one entry per input
/// body. Expects validated input; see [`classify_checked`].
pub fn classify(bodies: &[Body]) -> Vec<ShadowClassification> {
    let sorted = sorted_by_distance(bodies);
    let mut results = Vec::with_capacity(sorted.len());

    for (i, body) in sorted.iter().enumerate() {
        let shadowed_by: Vec<String> = sorted[..i]
            .iter()
            .filter(|closer| closer.size > body.size)
            .map(|closer| closer.name.clone())
            .collect();
        let light = light_for(i, shadowed_by.len());
        tracing::debug!(
            body = %body.name,
            shadows = shadowed_by.len(),
            light = light_label(light),
            "classified body"
        );

        results.push(ShadowClassification {
            body: body.clone(),
            shadow_count: shadowed_by.len(),
            shadowed_by,
            light,
        });
    }

    results
}

/// Validates every body first, then classifies.
pub fn classify_checked(bodies: &[Body]) -> Result<Vec<ShadowClassification>> {
    validate(bodies)?;
    Ok(classify(bodies))
}

/// How much of the receiver's light a single closer body takes away.
pub fn caster_intensity(caster_size: f64, receiver_size: f64) -> f64 {
    let ratio = caster_size / receiver_size;
    if ratio >= 1.1 {
        1.0
    } else if ratio >= 0.9 {
        0.6
    } else {
        0.3
    }
}

/// Apparent size of a body as seen from the star, in radians.
pub fn angular_size(body: &Body) -> f64 {
    body.size / (body.distance * AU_KM)
}

/// The categorical classification plus a continuous light fraction.
///
/// Every closer body contributes to the shadow intensity, whatever its size;
/// the sum is clamped to 1.0. The categorical label is the one produced by
/// [`classify`].
pub fn classify_scientific(bodies: &[Body]) -> Vec<ScientificClassification> {
    let base = classify(bodies);
    let mut results = Vec::with_capacity(base.len());

    for (i, entry) in base.iter().enumerate() {
        let receiver = &entry.body;
        let total: f64 = base[..i]
            .iter()
            .map(|closer| caster_intensity(closer.body.size, receiver.size))
            .sum();
        let shadow_intensity = total.min(1.0);

        results.push(ScientificClassification {
            angular_size: angular_size(receiver),
            shadow_intensity,
            light_fraction: 1.0 - shadow_intensity,
            base: entry.clone(),
        });
    }

    results
}

pub fn classify_scientific_checked(bodies: &[Body]) -> Result<Vec<ScientificClassification>> {
    validate(bodies)?;
    Ok(classify_scientific(bodies))
}
