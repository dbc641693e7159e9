//! The console walkthrough: prints what each step should produce next to
//! what it actually produced.

use std::io::{self, Write};

use pixgrid_core::{Color, Coordinate, StandardImage};

use crate::config::DemoConfig;

/// Print the color at `coord`, or `Invalid Index!` when it is off the grid.
fn write_color_at(
    out: &mut impl Write,
    image: &StandardImage,
    coord: &Coordinate,
) -> io::Result<()> {
    write!(out, "Color at {coord}: ")?;
    match image.get_color_at_location(coord) {
        Ok(color) => writeln!(out, "{color}"),
        Err(e) => {
            tracing::debug!("{e}");
            writeln!(out, "Invalid Index!")
        }
    }
}

fn set_or_warn(image: &mut StandardImage, coord: &Coordinate, color: &Color) {
    if !image.set_color_at_location(coord, color) {
        tracing::warn!(%coord, "pixel override fell outside the image");
    }
}

/// Run the full walkthrough, writing the transcript to `out`.
pub fn run(out: &mut impl Write, config: &DemoConfig) -> io::Result<()> {
    let policy = config.brightness_clip;
    tracing::info!(%policy, "starting walkthrough");

    let mut color = Color::default();
    let mut coord = Coordinate::default();
    let mut other = Coordinate::new(111, 222);
    let mut image = StandardImage::new();
    let mut images = [StandardImage::new(), StandardImage::new(), StandardImage::new()];

    // Colors
    writeln!(out, "Initial: {color}")?;
    color.set_to_black();
    writeln!(out, "Black: {color}")?;
    color.set_to_green();
    writeln!(out, "Green: {color}")?;
    color.adjust_brightness_with(0.5, policy);
    writeln!(out, "Dimmer Green: {color}")?;

    // Coordinates
    writeln!(out, "Want defaults: {coord}")?;
    coord.set_row_col(2, 8);
    writeln!(out, "Want 2,8: {coord}")?;
    writeln!(out, "Want 111, 222: {other}")?;
    other.set_row_col(4, 2);
    coord.add_row_col_to(&other);
    writeln!(out, "Want 6,10: {coord}")?;

    // Point reads on a solid image
    color.set_to_red();
    image.initialize_to(&color);

    coord.set_row_col(555, 5);
    writeln!(out, "Want: Color at [555,5]: Invalid Index!")?;
    write_color_at(out, &image, &coord)?;

    coord.set_row(4);
    writeln!(out, "Want: Color at [4,5]: R: 1000 G: 0 B: 0")?;
    write_color_at(out, &image, &coord)?;

    // Three solid images with one override each in the last two
    color.set_to_red();
    color.adjust_brightness_with(0.25, policy);
    images[0].initialize_to(&color);
    color.set_to_blue();
    color.adjust_brightness_with(0.75, policy);
    images[1].initialize_to(&color);
    color.set_to_green();
    images[2].initialize_to(&color);

    coord.set_row_col(4, 2);
    color.set_to_white();
    set_or_warn(&mut images[1], &coord, &color);

    coord.set_row_col(2, 4);
    color.set_to_black();
    set_or_warn(&mut images[2], &coord, &color);

    if image.add_images(&images) {
        tracing::info!("summed image clamped at least one pixel");
    }

    writeln!(out, "Added values:")?;
    for col in (0..8).step_by(2) {
        coord.set_row_col(4, col);
        write_color_at(out, &image, &coord)?;
    }
    for row in (0..8).step_by(2) {
        coord.set_row_col(row, 4);
        write_color_at(out, &image, &coord)?;
    }

    writeln!(out, "Printing entire test image:")?;
    write!(out, "{image}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgrid_core::BrightnessClip;

    fn transcript(config: &DemoConfig) -> String {
        let mut buf = Vec::new();
        run(&mut buf, config).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_walkthrough_lines() {
        let text = transcript(&DemoConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        let expected_head = [
            "Initial: R: 1000 G: 1000 B: 1000",
            "Black: R: 0 G: 0 B: 0",
            "Green: R: 0 G: 1000 B: 0",
            "Dimmer Green: R: 0 G: 500 B: 0",
            "Want defaults: [-99999,-99999]",
            "Want 2,8: [2,8]",
            "Want 111, 222: [111,222]",
            "Want 6,10: [6,10]",
            "Want: Color at [555,5]: Invalid Index!",
            "Color at [555,5]: Invalid Index!",
            "Want: Color at [4,5]: R: 1000 G: 0 B: 0",
            "Color at [4,5]: R: 1000 G: 0 B: 0",
            "Added values:",
            "Color at [4,0]: R: 250 G: 1000 B: 750",
            "Color at [4,2]: R: 1000 G: 1000 B: 1000",
            "Color at [4,4]: R: 250 G: 1000 B: 750",
            "Color at [4,6]: R: 250 G: 1000 B: 750",
            "Color at [0,4]: R: 250 G: 1000 B: 750",
            "Color at [2,4]: R: 250 G: 0 B: 750",
            "Color at [4,4]: R: 250 G: 1000 B: 750",
            "Color at [6,4]: R: 250 G: 1000 B: 750",
            "Printing entire test image:",
        ];
        assert_eq!(&lines[..expected_head.len()], &expected_head);

        let grid = &lines[expected_head.len()..];
        assert_eq!(grid.len(), 10);
        for line in grid {
            assert_eq!(line.split("--").count(), 18, "{line}");
        }
        assert!(grid[4].starts_with(
            "R: 250 G: 1000 B: 750--R: 250 G: 1000 B: 750--R: 1000 G: 1000 B: 1000--"
        ));
    }

    #[test]
    fn test_policy_does_not_change_positive_factors() {
        let upper_only = DemoConfig {
            brightness_clip: BrightnessClip::UpperOnly,
        };
        assert_eq!(transcript(&upper_only), transcript(&DemoConfig::default()));
    }
}
