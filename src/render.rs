//! Terminal rendering: the marker map and the round view.
//!
//! The map is a framed equirectangular grid with a dotted graticule and
//! a single unlabeled marker glyph (the player is guessing the name).
//! When the framed map cannot be drawn the caller degrades to a
//! one-line position display.

use crate::session::Round;
use std::fmt;

/// Interior grid dimensions (columns map to longitude, rows to latitude).
const MAP_WIDTH: usize = 61;
const MAP_HEIGHT: usize = 21;

const MARKER: char = '◉';

/// Map rendering failures.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    OutOfRange { lat: f64, lon: f64 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { lat, lon } => write!(
                f,
                "Coordinates out of range: lat {} (-90..90), lon {} (-180..180)",
                lat, lon
            ),
        }
    }
}

impl std::error::Error for RenderError {}

/// Compass-style coordinate formatting: `10.85°N, 76.27°E`.
pub fn format_coords(lat: f64, lon: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.2}°{}, {:.2}°{}", lat.abs(), ns, lon.abs(), ew)
}

/// Draw the framed world grid with one marker at (lat, lon).
pub fn render_marker_map(lat: f64, lon: f64) -> Result<String, RenderError> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(RenderError::OutOfRange { lat, lon });
    }

    let col = (((lon + 180.0) / 360.0) * (MAP_WIDTH - 1) as f64).round() as usize;
    let row = (((90.0 - lat) / 180.0) * (MAP_HEIGHT - 1) as f64).round() as usize;
    let col = col.min(MAP_WIDTH - 1);
    let row = row.min(MAP_HEIGHT - 1);

    let mut out = String::new();
    out.push_str("  ╔");
    out.push_str(&"═".repeat(MAP_WIDTH));
    out.push_str("╗\n");

    for r in 0..MAP_HEIGHT {
        out.push_str("  ║");
        for c in 0..MAP_WIDTH {
            if r == row && c == col {
                out.push(MARKER);
            } else if r % 5 == 0 && c % 5 == 0 {
                out.push('·');
            } else {
                out.push(' ');
            }
        }
        out.push_str("║\n");
    }

    out.push_str("  ╚");
    out.push_str(&"═".repeat(MAP_WIDTH));
    out.push_str("╝\n");
    out.push_str("   180°W        90°W            0°            90°E         180°E\n");

    Ok(out)
}

/// One-line fallback when the framed map cannot be drawn.
pub fn render_plain_position(lat: f64, lon: f64) -> String {
    format!("  Marked position: {}\n", format_coords(lat, lon))
}

/// Full round view: map (or fallback), hint, options, score footer.
///
/// Reprinted after every state change — the view is always recomputed
/// from the session, never patched.
pub fn render_round(round: &Round, score: u32) -> String {
    let q = &round.question;
    let map = render_marker_map(q.lat(), q.lon())
        .unwrap_or_else(|_| render_plain_position(q.lat(), q.lon()));

    let mut out = String::new();
    out.push('\n');
    out.push_str(&map);
    out.push_str(&format!("\n  Hint: {}\n", q.hint));
    out.push_str("\n  Which place is marked?\n");
    for (i, option) in round.options.iter().enumerate() {
        out.push_str(&format!("    {}) {}\n", i + 1, option.name));
    }
    out.push_str(&format!("\n  Score: {}\n", score));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PlaceRecord;

    fn place(name: &str, hint: &str, lat: f64, lon: f64) -> PlaceRecord {
        PlaceRecord {
            name: name.into(),
            hint: hint.into(),
            coords: [lat, lon],
        }
    }

    fn sample_round() -> Round {
        Round {
            question: place("Kerala", "South", 10.85, 76.27),
            options: vec![
                place("Kerala", "South", 10.85, 76.27),
                place("Goa", "West", 15.3, 74.12),
                place("Delhi", "North", 28.7, 77.1),
            ],
        }
    }

    #[test]
    fn test_map_has_exactly_one_marker() {
        let map = render_marker_map(10.85, 76.27).unwrap();
        assert_eq!(map.chars().filter(|c| *c == MARKER).count(), 1);
    }

    #[test]
    fn test_map_corners_stay_in_frame() {
        for (lat, lon) in [(90.0, -180.0), (90.0, 180.0), (-90.0, -180.0), (-90.0, 180.0)] {
            let map = render_marker_map(lat, lon).unwrap();
            assert_eq!(map.chars().filter(|c| *c == MARKER).count(), 1, "({}, {})", lat, lon);
            for line in map.lines().filter(|l| l.contains('║')) {
                assert_eq!(line.chars().count(), 3 + MAP_WIDTH + 1);
            }
        }
    }

    #[test]
    fn test_map_rejects_out_of_range() {
        assert!(render_marker_map(91.0, 0.0).is_err());
        assert!(render_marker_map(0.0, -181.0).is_err());
        assert!(render_marker_map(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_plain_fallback_names_no_place() {
        let line = render_plain_position(10.85, 76.27);
        assert!(line.contains("10.85°N"));
        assert!(line.contains("76.27°E"));
    }

    #[test]
    fn test_format_coords_hemispheres() {
        assert_eq!(format_coords(10.85, 76.27), "10.85°N, 76.27°E");
        assert_eq!(format_coords(-33.87, -70.66), "33.87°S, 70.66°W");
    }

    #[test]
    fn test_round_view_lists_options_and_score() {
        let view = render_round(&sample_round(), 4);
        assert!(view.contains("Hint: South"));
        assert!(view.contains("1) "));
        assert!(view.contains("2) "));
        assert!(view.contains("3) "));
        assert!(view.contains("Score: 4"));
    }

    #[test]
    fn test_round_view_map_carries_no_label() {
        // The frame itself must not leak the answer; the name appears
        // only in the options list.
        let view = render_round(&sample_round(), 0);
        let frame: String = view
            .lines()
            .filter(|l| l.contains('║'))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(!frame.contains("Kerala"));
    }

    #[test]
    fn test_round_view_degrades_on_bad_coords() {
        let mut round = sample_round();
        round.question.coords = [999.0, 999.0];
        let view = render_round(&round, 0);
        assert!(view.contains("Marked position:"));
        assert!(view.contains("Hint: South"));
    }
}
