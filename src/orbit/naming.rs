use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

const ONSETS: &[&str] = &["h", "k", "l", "m", "n", "s", "t", "v", "th", "gl", "br", "qu"];
const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "ae", "ei", "ou"];
const ENDINGS: &[&str] = &["a", "is", "on", "ara", "ion", "ix", "ea", "ul"];

fn pick<'a>(rng: &mut ChaCha8Rng, options: &'a [&str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn star_name_candidate(rng: &mut ChaCha8Rng) -> String {
    let syllables = rng.gen_range(1..=2);
    let mut name = String::new();
    for _ in 0..syllables {
        name.push_str(pick(rng, ONSETS));
        name.push_str(pick(rng, VOWELS));
    }
    name.push_str(pick(rng, ENDINGS));
    capitalize(&name)
}

/// A pronounceable star name not yet present in `used`.
///
/// Falls back to a numbered catalogue designation once the phoneme space
/// stops producing fresh names.
pub fn generate_star_name(rng: &mut ChaCha8Rng, used: &mut HashSet<String>) -> String {
    for _ in 0..200 {
        let candidate = star_name_candidate(rng);
        if used.insert(candidate.clone()) {
            return candidate;
        }
    }

    let mut n = used.len();
    loop {
        let designation = format!("HD {}", 1000 + n);
        if used.insert(designation.clone()) {
            return designation;
        }
        n += 1;
    }
}

/// Planet designation by orbit order: the first planet is `<star> b`.
pub fn planet_name(star: &str, index: usize) -> String {
    let letter = (b'b' + (index % 25) as u8) as char;
    if index < 25 {
        format!("{} {}", star, letter)
    } else {
        format!("{} {}{}", star, letter, index / 25)
    }
}
