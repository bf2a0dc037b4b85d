//! Tests for the end-to-end render of one request

#[cfg(test)]
mod tests {
    use duotile::RenderError;
    use duotile::pattern::{PatternOptions, PatternType};
    use duotile::pipeline::render::output_size;
    use duotile::pipeline::{Adjustments, RenderRequest, Side, render};
    use duotile::raster::surface::Size;
    use duotile::style::{Color, ColorPair};
    use image::{Rgba, RgbaImage};

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn checkerboard() -> RgbaImage {
        RgbaImage::from_fn(2, 2, |x, y| if x == y { WHITE } else { BLACK })
    }

    fn checker_request(side: Side) -> RenderRequest {
        RenderRequest {
            adjustments: Adjustments::new(0, 0, 50),
            pattern: PatternType::Checker,
            options: PatternOptions::default(),
            side,
            colors: ColorPair::new(Color::BLACK, Color::WHITE),
            invert: false,
        }
    }

    // Tests the 2x2 checkerboard scenario with the dark side patterned
    // Verified by selecting the light side for Side::Dark
    #[test]
    fn test_checkerboard_dark_side() {
        let rendered = render(&checkerboard(), &checker_request(Side::Dark)).unwrap();

        assert_eq!(rendered.size(), Size::new(2, 2));
        // Black source pixels fall in the tile's first (filled) checker cell
        assert_eq!(*rendered.output.get_pixel(1, 0), BLACK);
        assert_eq!(*rendered.output.get_pixel(0, 1), BLACK);
        assert_eq!(*rendered.output.get_pixel(0, 0), WHITE);
        assert_eq!(*rendered.output.get_pixel(1, 1), WHITE);
    }

    // Tests the light side patterns the white source pixels instead
    // Verified by ignoring the requested side
    #[test]
    fn test_checkerboard_light_side() {
        let rendered = render(&checkerboard(), &checker_request(Side::Light)).unwrap();

        assert_eq!(*rendered.output.get_pixel(0, 0), BLACK);
        assert_eq!(*rendered.output.get_pixel(1, 1), BLACK);
        // Unselected pixels show the background
        assert_eq!(*rendered.output.get_pixel(1, 0), WHITE);
        assert_eq!(*rendered.output.get_pixel(0, 1), WHITE);
    }

    // Tests the preview is the binary classification of the source
    // Verified by returning the resampled source as preview
    #[test]
    fn test_preview_is_binary() {
        let rendered = render(&checkerboard(), &checker_request(Side::Dark)).unwrap();
        assert_eq!(rendered.preview, checkerboard());
    }

    // Tests inverting swaps color roles exactly
    // Verified by applying invert twice
    #[test]
    fn test_invert_law() {
        let source = RgbaImage::from_fn(64, 48, |x, y| {
            let v = ((x * 4 + y * 3) % 256) as u8;
            Rgba([v, v / 2, 255 - v, 255])
        });
        let a = Color::new(200, 30, 90);
        let b = Color::new(10, 240, 120);

        for pattern in PatternType::ALL {
            let inverted = RenderRequest {
                pattern,
                colors: ColorPair::new(a, b),
                invert: true,
                ..RenderRequest::default()
            };
            let swapped = RenderRequest {
                pattern,
                colors: ColorPair::new(b, a),
                invert: false,
                ..RenderRequest::default()
            };

            assert_eq!(
                render(&source, &inverted).unwrap().output,
                render(&source, &swapped).unwrap().output,
                "{pattern}"
            );
        }
    }

    // Tests large sources are capped and every buffer shares one size
    // Verified by rendering at source size
    #[test]
    fn test_output_capped() {
        let source = RgbaImage::from_pixel(2000, 1000, Rgba([90, 90, 90, 255]));
        let rendered = render(&source, &RenderRequest::default()).unwrap();

        assert_eq!(rendered.output.dimensions(), (1280, 640));
        assert_eq!(rendered.preview.dimensions(), (1280, 640));
    }

    // Tests the output size rule
    // Verified by using a cap of 1024
    #[test]
    fn test_output_size() {
        assert_eq!(output_size(Size::new(1920, 1080)), Size::new(1280, 720));
        assert_eq!(output_size(Size::new(300, 200)), Size::new(300, 200));
    }

    // Tests empty sources abort with a surface error
    // Verified by rendering an empty output
    #[test]
    fn test_empty_source_fails() {
        let result = render(&RgbaImage::new(0, 0), &RenderRequest::default());
        assert!(matches!(
            result,
            Err(RenderError::RenderSurfaceUnavailable { .. })
        ));
    }
}
