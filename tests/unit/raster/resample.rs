//! Tests for output sizing and resampling

#[cfg(test)]
mod tests {
    use duotile::RenderError;
    use duotile::raster::resample::{fit_within, resample};
    use duotile::raster::surface::Size;
    use image::{Rgba, RgbaImage};

    // Tests large sources shrink so the longer edge hits the cap
    // Verified by scaling against the shorter edge
    #[test]
    fn test_fit_within_scales_down() {
        assert_eq!(
            fit_within(Size::new(2560, 1280), 1280),
            Size::new(1280, 640)
        );
        assert_eq!(
            fit_within(Size::new(1000, 4000), 1280),
            Size::new(320, 1280)
        );
    }

    // Tests sources within the cap are never enlarged
    // Verified by always scaling to the cap
    #[test]
    fn test_fit_within_never_upscales() {
        assert_eq!(fit_within(Size::new(640, 480), 1280), Size::new(640, 480));
        assert_eq!(
            fit_within(Size::new(1280, 1280), 1280),
            Size::new(1280, 1280)
        );
    }

    // Tests edges round to the nearest pixel
    // Verified by truncating instead of rounding
    #[test]
    fn test_fit_within_rounds() {
        // 1000 * 1280 / 3000 = 426.67
        assert_eq!(
            fit_within(Size::new(3000, 1000), 1280),
            Size::new(1280, 427)
        );
    }

    // Tests very thin sources keep at least one pixel
    // Verified by removing the one-pixel floor
    #[test]
    fn test_fit_within_keeps_one_pixel() {
        assert_eq!(fit_within(Size::new(10_000, 1), 1280), Size::new(1280, 1));
    }

    // Tests resampling hits the exact target size
    // Verified by returning the source unchanged
    #[test]
    fn test_resample_target_size() {
        let source = RgbaImage::from_pixel(10, 6, Rgba([200, 100, 50, 255]));
        let resized = resample(&source, Size::new(5, 3)).unwrap();

        assert_eq!(resized.dimensions(), (5, 3));
        assert!(resized.pixels().all(|p| p.0 == [200, 100, 50, 255]));
    }

    // Tests same-size resampling is an exact copy
    // Verified by always running the filter
    #[test]
    fn test_resample_same_size_is_copy() {
        let mut source = RgbaImage::new(2, 2);
        source.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        source.put_pixel(1, 1, Rgba([1, 2, 3, 255]));

        let copy = resample(&source, Size::new(2, 2)).unwrap();
        assert_eq!(copy, source);
    }

    // Tests empty sources and targets are rejected
    // Verified by removing the area checks
    #[test]
    fn test_resample_empty_is_unavailable() {
        let empty = RgbaImage::new(0, 0);
        assert!(matches!(
            resample(&empty, Size::new(4, 4)),
            Err(RenderError::RenderSurfaceUnavailable { .. })
        ));

        let source = RgbaImage::new(4, 4);
        assert!(matches!(
            resample(&source, Size::new(0, 4)),
            Err(RenderError::RenderSurfaceUnavailable { .. })
        ));
    }
}
