use crate::orbit::{light_label, ScientificClassification};
use std::fmt::Write;

/// Plain-text report with one block per body.
pub fn render_report(system_name: &str, results: &[ScientificClassification]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Shadow report for {}", system_name);
    let _ = writeln!(output, "{} bodies, sorted by distance", results.len());

    for result in results {
        let body = &result.base.body;
        let shadows = if result.base.shadowed_by.is_empty() {
            "none".to_string()
        } else {
            result.base.shadowed_by.join(", ")
        };

        let _ = writeln!(output);
        let _ = writeln!(output, "{}", body.name);
        let _ = writeln!(output, "  Distance:       {:.2} AU", body.distance);
        let _ = writeln!(output, "  Diameter:       {:.0} km", body.size);
        let _ = writeln!(output, "  Shadow type:    {}", light_label(result.base.light));
        let _ = writeln!(
            output,
            "  Light fraction: {:.0}%",
            result.light_fraction * 100.0
        );
        let _ = writeln!(output, "  Shadowed by:    {}", shadows);
    }

    output
}
