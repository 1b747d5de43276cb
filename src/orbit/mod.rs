pub mod body;
pub mod classify;
pub mod naming;
pub mod system;

pub use body::{validate, Body};
pub use classify::{
    classify, classify_checked, classify_scientific, classify_scientific_checked, light_label,
    LightIntensity, ScientificClassification, ShadowClassification,
};
pub use system::{default_system, full_system, outer_system, StarSystem, SystemGenerator};
