use image::{Rgba, RgbaImage};
use tinct::{blend, dimmed, parse_color, series_colors, BlendRequest, Component, Interpolation};

const SERIES: usize = 10;
const SWATCH_WIDTH: u32 = 100;
const ROW_HEIGHT: u32 = 100;

fn main() {
    let borders = series_colors(SERIES);
    let backgrounds = dimmed(&borders);

    let width = SWATCH_WIDTH * SERIES as u32;
    let mut img = RgbaImage::new(width, ROW_HEIGHT * 3);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let index = (x / SWATCH_WIDTH) as usize;

        let color = match y / ROW_HEIGHT {
            0 => borders[index].clone(),
            1 => backgrounds[index].clone(),
            // The bottom row fades each border color to black.
            _ => {
                let t = (x % SWATCH_WIDTH) as Component / SWATCH_WIDTH as Component;
                blend(&BlendRequest {
                    interpolation: Interpolation::Linear,
                    ..BlendRequest::new(-t, &borders[index])
                })
                .expect("series colors always blend")
            }
        };

        let c = parse_color(&color).expect("series colors always parse");
        *pixel = Rgba([c.red, c.green, c.blue, 255]);
    }

    img.save("out.png")
        .expect("could not write image to out.png");
}
