use crate::orbit::{light_label, LightIntensity, ShadowClassification};
use std::fmt::Write;

#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub margin: f64,
    pub star_radius: f64,
    pub min_body_radius: f64,
    pub max_body_radius: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 300,
            margin: 40.0,
            star_radius: 28.0,
            min_body_radius: 4.0,
            max_body_radius: 22.0,
        }
    }
}

pub fn light_opacity(light: LightIntensity) -> f64 {
    match light {
        LightIntensity::Full => 1.0,
        LightIntensity::Partial => 0.75,
        LightIntensity::None => 0.45,
        LightIntensity::MultipleShadows => 0.25,
    }
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Draws the star on the left and each body along the horizontal axis at a
/// position proportional to its distance.
pub fn render_svg(
    system_name: &str,
    results: &[ShadowClassification],
    config: &RenderConfig,
) -> String {
    let width = config.width as f64;
    let height = config.height as f64;
    let axis_y = height / 2.0;
    let star_x = config.margin + config.star_radius;
    let track_start = star_x + config.star_radius + config.max_body_radius;
    let track_len = (width - config.margin - config.max_body_radius - track_start).max(1.0);

    let max_distance = results
        .iter()
        .map(|r| r.body.distance)
        .fold(0.0_f64, f64::max);
    let max_size = results.iter().map(|r| r.body.size).fold(0.0_f64, f64::max);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"##,
        w = config.width,
        h = config.height
    );
    let _ = writeln!(svg, "  <title>{}</title>", escape_xml(system_name));
    svg.push_str(concat!(
        "  <defs>\n",
        "    <filter id=\"glow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\n",
        "      <feGaussianBlur stdDeviation=\"4\" result=\"blur\"/>\n",
        "      <feMerge><feMergeNode in=\"blur\"/><feMergeNode in=\"SourceGraphic\"/></feMerge>\n",
        "    </filter>\n",
        "  </defs>\n",
    ));
    let _ = writeln!(
        svg,
        r##"  <rect width="100%" height="100%" fill="black"/>"##
    );
    let _ = writeln!(
        svg,
        r##"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#333" stroke-dasharray="4 4"/>"##,
        star_x,
        axis_y,
        width - config.margin,
        axis_y
    );
    let _ = writeln!(
        svg,
        r##"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="#ffcc33" filter="url(#glow)"/>"##,
        star_x, axis_y, config.star_radius
    );

    for result in results {
        let x = if max_distance > 0.0 {
            track_start + track_len * result.body.distance / max_distance
        } else {
            track_start
        };
        let scale = if max_size > 0.0 {
            (result.body.size / max_size).sqrt()
        } else {
            0.0
        };
        let r = config.min_body_radius + (config.max_body_radius - config.min_body_radius) * scale;
        let glow = if result.light == LightIntensity::Full {
            r##" filter="url(#glow)""##
        } else {
            ""
        };
        let name = escape_xml(&result.body.name);

        let _ = writeln!(
            svg,
            r##"  <g class="body" data-light="{}">"##,
            escape_xml(light_label(result.light))
        );
        let _ = writeln!(
            svg,
            r##"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="#6fa8dc" opacity="{:.2}"{}/>"##,
            x,
            axis_y,
            r,
            light_opacity(result.light),
            glow
        );
        let _ = writeln!(
            svg,
            r##"    <text x="{:.1}" y="{:.1}" fill="white" font-size="12" text-anchor="middle">{}</text>"##,
            x,
            axis_y + config.max_body_radius + 16.0,
            name
        );
        let _ = writeln!(svg, "  </g>");
    }

    svg.push_str("</svg>\n");
    svg
}
