use crate::error::{Field, Result, ShadowError, Violation};
use serde::{Deserialize, Serialize};

/// An orbiting object: distance from the star in AU, diameter in km.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    pub distance: f64,
    #[serde(alias = "diameter")]
    pub size: f64,
}

impl Body {
    pub fn new(name: impl Into<String>, distance: f64, size: f64) -> Self {
        Self {
            name: name.into(),
            distance,
            size,
        }
    }
}

fn positive(value: f64) -> Option<&'static str> {
    if !value.is_finite() {
        Some("must be a finite number")
    } else if value <= 0.0 {
        Some("must be greater than zero")
    } else {
        None
    }
}

/// Checks every body and reports all violations, not just the first.
pub fn validate(bodies: &[Body]) -> Result<()> {
    let mut violations = Vec::new();
    for (index, body) in bodies.iter().enumerate() {
        let mut push = |field, reason: &str| {
            violations.push(Violation {
                index,
                name: body.name.clone(),
                field,
                reason: reason.to_string(),
            })
        };

        if body.name.trim().is_empty() {
            push(Field::Name, "must not be empty");
        }
        if let Some(reason) = positive(body.distance) {
            push(Field::Distance, reason);
        }
        if let Some(reason) = positive(body.size) {
            push(Field::Size, reason);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ShadowError::Validation(violations))
    }
}
