//! Tests for tiled and flat compositing through a mask

#[cfg(test)]
mod tests {
    use duotile::RenderError;
    use duotile::pattern::{PatternOptions, PatternType, Tile, generate_tile};
    use duotile::pipeline::composite::composite;
    use duotile::style::Color;
    use image::{Rgba, RgbaImage};

    const INK: Color = Color::new(10, 20, 30);
    const PAPER: Color = Color::new(240, 230, 220);

    // Left half selected, right half not
    fn half_mask(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, _| {
            Rgba([0, 0, 0, if x < width / 2 { 255 } else { 0 }])
        })
    }

    fn target(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([1, 2, 3, 4]))
    }

    // Tests unselected pixels are exactly the background on the tiled path
    // Verified by drawing the tile without the mask
    #[test]
    fn test_background_law_tiled() {
        let tile = generate_tile(PatternType::Checker, PatternOptions::default(), INK);
        let mask = half_mask(100, 40);
        let mut output = target(100, 40);

        composite(&mut output, tile.as_ref(), &mask, PAPER, INK).unwrap();

        for (x, _, pixel) in output.enumerate_pixels() {
            if x >= 50 {
                assert_eq!(*pixel, PAPER.to_rgba());
            }
        }
    }

    // Tests unselected pixels are exactly the background on the flat path
    // Verified by skipping the background fill
    #[test]
    fn test_background_law_flat() {
        let mask = half_mask(10, 4);
        let mut output = target(10, 4);

        composite(&mut output, None, &mask, PAPER, INK).unwrap();

        for (x, _, pixel) in output.enumerate_pixels() {
            let expected = if x < 5 { INK } else { PAPER };
            assert_eq!(*pixel, expected.to_rgba());
        }
    }

    // Tests the tile shows through selected pixels with its own layout
    // Verified by sampling the tile at a fixed offset
    #[test]
    fn test_tile_shows_through_mask() {
        let tile = generate_tile(PatternType::Checker, PatternOptions::default(), INK);
        let mask = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        let mut output = target(100, 100);

        composite(&mut output, tile.as_ref(), &mask, PAPER, INK).unwrap();

        assert_eq!(*output.get_pixel(0, 0), INK.to_rgba());
        assert_eq!(*output.get_pixel(20, 0), PAPER.to_rgba());
        // Tile repeats every 80 pixels
        assert_eq!(*output.get_pixel(80, 0), INK.to_rgba());
        assert_eq!(*output.get_pixel(81, 20), PAPER.to_rgba());
    }

    // Tests translucent tile pixels blend over the background
    // Verified by copying tile pixels without blending
    #[test]
    fn test_partial_alpha_blends() {
        let tile = Tile::from_image(RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 128]))).unwrap();
        let mask = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let mut output = target(2, 2);

        composite(&mut output, Some(&tile), &mask, Color::BLACK, INK).unwrap();

        assert_eq!(output.get_pixel(0, 0).0, [128, 0, 0, 255]);
    }

    // Tests output is always opaque
    // Verified by carrying tile alpha into the output
    #[test]
    fn test_output_opaque() {
        let tile = generate_tile(PatternType::Dots, PatternOptions::default(), INK);
        let mask = half_mask(64, 64);
        let mut output = target(64, 64);

        composite(&mut output, tile.as_ref(), &mask, PAPER, INK).unwrap();
        assert!(output.pixels().all(|p| p.0[3] == 255));
    }

    // Tests mismatched target and mask sizes are rejected
    // Verified by zipping buffers of different sizes
    #[test]
    fn test_dimension_mismatch() {
        let mask = half_mask(4, 4);
        let mut output = target(5, 4);

        let result = composite(&mut output, None, &mask, PAPER, INK);
        match result {
            Err(RenderError::DimensionMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, (5, 4));
                assert_eq!(actual, (4, 4));
            }
            _ => unreachable!("Expected DimensionMismatch"),
        }
    }
}
