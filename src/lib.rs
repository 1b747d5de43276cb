use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod drift;
pub mod error;
pub mod orbit;
pub mod prompt;
pub mod render;

pub use error::{Result, ShadowError};
use orbit::system::{self, parse_system, StarSystem, SystemGenerator};

#[derive(Serialize)]
struct ErrorView {
    error: String,
}

fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn json_or_error(result: Result<String>) -> String {
    result.unwrap_or_else(|e| {
        serde_json::to_string(&ErrorView {
            error: e.to_string(),
        })
        .unwrap_or_else(|_| "{}".to_string())
    })
}

fn with_system(input: &str, f: impl FnOnce(&StarSystem) -> Result<String>) -> String {
    set_panic_hook();
    json_or_error(parse_system(input).and_then(|system| f(&system)))
}

#[wasm_bindgen]
pub fn classify_json(input: &str) -> String {
    with_system(input, system::classification_json)
}

#[wasm_bindgen]
pub fn scientific_json(input: &str) -> String {
    with_system(input, system::scientific_json)
}

#[wasm_bindgen]
pub fn render_svg(input: &str) -> String {
    set_panic_hook();
    let rendered = parse_system(input).and_then(|system| {
        let results = orbit::classify_checked(&system.bodies)?;
        Ok(render::render_svg(
            &system.name,
            &results,
            &render::RenderConfig::default(),
        ))
    });
    json_or_error(rendered)
}

#[wasm_bindgen]
pub fn default_system_json() -> String {
    json_or_error(system::system_json(&orbit::default_system()))
}

#[wasm_bindgen]
pub fn generate_system_json(seed: u64) -> String {
    let system = SystemGenerator::new(seed).generate();
    json_or_error(system::system_json(&system))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_round_trip_the_default_system() {
        let input = default_system_json();
        let classified: serde_json::Value = serde_json::from_str(&classify_json(&input)).unwrap();
        assert_eq!(classified["system"], "Sol Minor");
        assert_eq!(classified["bodies"].as_array().unwrap().len(), 4);

        let scientific: serde_json::Value =
            serde_json::from_str(&scientific_json(&input)).unwrap();
        assert_eq!(scientific["bodies"][0]["light_fraction"], 1.0);

        assert!(render_svg(&input).starts_with("<svg"));
    }

    #[test]
    fn exports_report_errors_as_json() {
        let invalid: serde_json::Value = serde_json::from_str(&classify_json("null")).unwrap();
        assert!(invalid["error"].as_str().unwrap().contains("invalid input"));

        let rejected: serde_json::Value = serde_json::from_str(&render_svg(
            r#"[{"name": "Flat", "distance": 0, "size": 1}]"#,
        ))
        .unwrap();
        assert!(rejected["error"].as_str().unwrap().contains("distance"));
    }

    #[test]
    fn generated_systems_are_seed_stable() {
        assert_eq!(generate_system_json(9), generate_system_json(9));
        let system = parse_system(&generate_system_json(9)).unwrap();
        assert!(!system.bodies.is_empty());
    }
}
