//! Hexagon tiling generator.
//!
//! A 6x6 grid of pointy-edged hexagons in brick-offset columns, with edge
//! cells duplicated past the right and bottom seams so the canvas tiles
//! seamlessly.

use crate::error::Result;
use crate::svg::{AttrList, Transform};

use super::{remap, Pattern};

pub(crate) fn draw(pattern: &mut Pattern) -> Result<()> {
    let scale = pattern.digest.at(0)?;
    let side_length = remap(f64::from(scale), 0.0, 15.0, 8.0, 60.0) as u32;
    let hex_height = f64::from(side_length) * 3.0_f64.sqrt();
    let hex_width = f64::from(side_length * 2);
    let outline = hexagon_points(side_length);

    pattern.svg.set_size(
        hex_width * 3.0 + f64::from(side_length * 3),
        (hex_height * 6.0).trunc(),
    );

    let mut i = 0;
    for y in 0..6u32 {
        for x in 0..6u32 {
            let val = pattern.digest.at(i)?;
            let dy = if x % 2 == 0 {
                f64::from(y) * hex_height
            } else {
                f64::from(y) * hex_height + hex_height / 2.0
            };

            let styles = AttrList::new()
                .with("fill", pattern.fill_color(val))
                .with("fill-opacity", pattern.fill_opacity(val))
                .with("stroke", pattern.style.stroke_colour.as_str())
                .with("stroke-opacity", pattern.style.stroke_opacity);

            place(
                pattern,
                &outline,
                &styles,
                f64::from(x) * f64::from(side_length) * 1.5 - hex_width / 2.0,
                dy - hex_height / 2.0,
            );

            // Duplicate the left column past the right edge, for tiling.
            if x == 0 {
                place(
                    pattern,
                    &outline,
                    &styles,
                    6.0 * f64::from(side_length) * 1.5 - hex_width / 2.0,
                    dy - hex_height / 2.0,
                );
            }

            // Duplicate the first row past the bottom edge, for tiling.
            if y == 0 {
                let wrapped_dy = if x % 2 == 0 {
                    6.0 * hex_height
                } else {
                    6.0 * hex_height + hex_height / 2.0
                };
                place(
                    pattern,
                    &outline,
                    &styles,
                    f64::from(x) * f64::from(side_length) * 1.5 - hex_width / 2.0,
                    wrapped_dy - hex_height / 2.0,
                );
            }

            // One more for the bottom-right corner.
            if x == 0 && y == 0 {
                place(
                    pattern,
                    &outline,
                    &styles,
                    6.0 * f64::from(side_length) * 1.5 - hex_width / 2.0,
                    5.0 * hex_height + hex_height / 2.0,
                );
            }

            i += 1;
        }
    }

    Ok(())
}

fn place(pattern: &mut Pattern, outline: &str, styles: &AttrList, tx: f64, ty: f64) {
    let id = pattern.svg.polyline(outline, styles.clone());
    pattern
        .svg
        .set_transform(id, &Transform::new().translate(tx, ty));
}

/// Closed hexagon outline: seven comma-joined points, first and last equal.
/// The half-side `a` is truncated to a whole unit.
fn hexagon_points(side_length: u32) -> String {
    let c = f64::from(side_length);
    let a = f64::from(side_length / 2);
    let b = 60.0_f64.to_radians().sin() * c;

    let coords = [
        0.0,
        b,
        a,
        0.0,
        a + c,
        0.0,
        2.0 * c,
        b,
        a + c,
        2.0 * b,
        a,
        2.0 * b,
        0.0,
        b,
    ];

    coords
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_is_closed() {
        let points = hexagon_points(36);
        let parts: Vec<&str> = points.split(',').collect();

        assert_eq!(parts.len(), 14);
        assert_eq!(&parts[0..2], &parts[12..14]);
    }

    #[test]
    fn test_outline_even_side() {
        let parts: Vec<String> = hexagon_points(36)
            .split(',')
            .map(str::to_string)
            .collect();

        assert_eq!(parts[0], "0");
        assert_eq!(parts[2], "18");
        assert_eq!(parts[4], "54");
        assert_eq!(parts[6], "72");
    }

    #[test]
    fn test_outline_odd_side_truncates_half() {
        let parts: Vec<String> = hexagon_points(9)
            .split(',')
            .map(str::to_string)
            .collect();

        assert_eq!(parts[2], "4");
        assert_eq!(parts[4], "13");
        assert_eq!(parts[6], "18");
    }

    #[test]
    fn test_outline_height_is_twice_sin60() {
        let parts: Vec<f64> = hexagon_points(10)
            .split(',')
            .map(|p| p.parse().unwrap())
            .collect();

        let b = parts[1];
        assert!((b - 10.0 * 60.0_f64.to_radians().sin()).abs() < 1e-12);
        assert_eq!(parts[9], 2.0 * b);
    }
}
