//! Line-by-line entry of bodies from an interactive terminal.

use crate::orbit::Body;
use std::io::{self, BufRead, Write};

enum Answer {
    Line(String),
    Eof,
}

fn ask<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> io::Result<Answer> {
    write!(writer, "{prompt} ")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(Answer::Eof);
    }
    Ok(Answer::Line(line.trim().to_string()))
}

/// Asks until a positive number is entered. `None` on end of input.
fn ask_positive<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Option<f64>> {
    loop {
        let text = match ask(reader, writer, prompt)? {
            Answer::Line(text) => text,
            Answer::Eof => return Ok(None),
        };
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => return Ok(Some(value)),
            _ => writeln!(writer, "  '{text}' is not a positive number, try again.")?,
        }
    }
}

/// Reads name, distance and diameter for each body until an empty name or
/// end of input. Bad numbers re-prompt the same field.
pub fn read_bodies<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> io::Result<Vec<Body>> {
    let mut bodies = Vec::new();

    loop {
        let name = match ask(&mut reader, &mut writer, "Name (empty to finish):")? {
            Answer::Line(name) if !name.is_empty() => name,
            _ => break,
        };
        let Some(distance) = ask_positive(&mut reader, &mut writer, "Distance (AU):")? else {
            break;
        };
        let Some(size) = ask_positive(&mut reader, &mut writer, "Diameter (km):")? else {
            break;
        };

        tracing::debug!(%name, distance, size, "body entered");
        bodies.push(Body::new(name, distance, size));
    }

    Ok(bodies)
}
