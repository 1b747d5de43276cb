use crate::orbit::{light_label, LightIntensity, ScientificClassification, ShadowClassification};
use std::fmt::Write;

pub fn explanation(result: &ShadowClassification) -> String {
    match result.light {
        LightIntensity::Full => "Closest to the star, nothing can shadow it".to_string(),
        LightIntensity::Partial => "Closer bodies are all smaller".to_string(),
        LightIntensity::None => format!("Blocked by {}", result.shadowed_by.join(", ")),
        LightIntensity::MultipleShadows => format!(
            "Blocked by {} larger bodies: {}",
            result.shadow_count,
            result.shadowed_by.join(", ")
        ),
    }
}

/// Console table: name, distance, size, light, explanation.
pub fn render_table(results: &[ShadowClassification]) -> String {
    let name_width = results
        .iter()
        .map(|r| r.body.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Body".len());
    let light_width = light_label(LightIntensity::MultipleShadows).len();

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<name_width$}  {:>10}  {:>10}  {:<light_width$}  {}",
        "Body", "Dist (AU)", "Size (km)", "Light", "Explanation"
    );
    let _ = writeln!(
        output,
        "{}",
        "-".repeat(name_width + light_width + 40)
    );

    for result in results {
        let _ = writeln!(
            output,
            "{:<name_width$}  {:>10.2}  {:>10.0}  {:<light_width$}  {}",
            result.body.name,
            result.body.distance,
            result.body.size,
            light_label(result.light),
            explanation(result)
        );
    }

    if results.is_empty() {
        let _ = writeln!(output, "(no bodies)");
    }

    output
}

/// The console table plus light fraction and angular size columns.
pub fn render_scientific_table(results: &[ScientificClassification]) -> String {
    let name_width = results
        .iter()
        .map(|r| r.base.body.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Body".len());
    let light_width = light_label(LightIntensity::MultipleShadows).len();

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<name_width$}  {:>10}  {:>10}  {:<light_width$}  {:>8}  {:>12}  {}",
        "Body", "Dist (AU)", "Size (km)", "Light", "Fraction", "Angle (rad)", "Explanation"
    );
    let _ = writeln!(output, "{}", "-".repeat(name_width + light_width + 64));

    for result in results {
        let body = &result.base.body;
        let _ = writeln!(
            output,
            "{:<name_width$}  {:>10.2}  {:>10.0}  {:<light_width$}  {:>7.0}%  {:>12.3e}  {}",
            body.name,
            body.distance,
            body.size,
            light_label(result.base.light),
            result.light_fraction * 100.0,
            result.angular_size,
            explanation(&result.base)
        );
    }

    if results.is_empty() {
        let _ = writeln!(output, "(no bodies)");
    }

    output
}
