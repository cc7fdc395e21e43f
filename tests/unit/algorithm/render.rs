//! Tests for rendering a single tile in place

#[cfg(test)]
mod tests {
    use truchet_mosaic::algorithm::orientation::Orientation;
    use truchet_mosaic::algorithm::render::render;
    use truchet_mosaic::spatial::{PixelBuffer, TileGeometry};

    // Tests orientation, colors and fill of a hand-computed 2x2 tile
    #[test]
    fn test_render_two_by_two() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.set(0, 0, [100, 0, 0, 65535]);
        buffer.set(1, 0, [0, 0, 0, 65535]);
        buffer.set(0, 1, [200, 0, 0, 65535]);
        buffer.set(1, 1, [0, 0, 7, 65535]);

        let Ok(rendered) = render(&mut buffer.view_mut(), &TileGeometry::new(0, 0, 2)) else {
            unreachable!("rendering an in-bounds tile failed");
        };

        // Bottom-right differs most from the center (0, 0) once blue is counted
        assert_eq!(rendered.orientation, Orientation::BottomRight);

        let background = [75, 0, 1, 65535];
        let foreground = [66, 0, 2, 65535];
        assert_eq!(rendered.colors.background, background);
        assert_eq!(rendered.colors.foreground, foreground);

        assert_eq!(buffer.get(0, 0), Some(background));
        assert_eq!(buffer.get(1, 0), Some(foreground));
        assert_eq!(buffer.get(0, 1), Some(foreground));
        assert_eq!(buffer.get(1, 1), Some(foreground));
    }

    // Tests only the tile's own rectangle is written
    #[test]
    fn test_render_leaves_neighbours_untouched() {
        let marker = [1, 2, 3, 4];
        let mut buffer = PixelBuffer::filled(12, 8, marker);
        for y in 0..4 {
            for x in 4..8 {
                buffer.set(x, y, [(x * 1000) as u16, (y * 1000) as u16, 0, 65535]);
            }
        }

        let geometry = TileGeometry::new(4, 0, 4);
        assert!(render(&mut buffer.view_mut(), &geometry).is_ok());

        for y in 0..8 {
            for x in 0..12 {
                let inside = geometry.columns().contains(&x) && geometry.rows().contains(&y);
                if !inside {
                    assert_eq!(buffer.get(x, y), Some(marker), "pixel ({x}, {y}) changed");
                }
            }
        }
    }

    // Tests a rendered tile holds exactly the two computed colors
    #[test]
    fn test_rendered_tile_is_two_colored() {
        let mut buffer = PixelBuffer::new(6, 6);
        for y in 0..6 {
            for x in 0..6 {
                buffer.set(x, y, [(x * 9000) as u16, (y * 9000) as u16, 500, 65535]);
            }
        }

        let geometry = TileGeometry::new(0, 0, 6);
        let Ok(rendered) = render(&mut buffer.view_mut(), &geometry) else {
            unreachable!("rendering an in-bounds tile failed");
        };

        let mut foreground_pixels = 0;
        for y in geometry.rows() {
            for x in geometry.columns() {
                let pixel = buffer.get(x, y);
                if pixel == Some(rendered.colors.foreground) {
                    foreground_pixels += 1;
                } else {
                    assert_eq!(pixel, Some(rendered.colors.background));
                }
            }
        }
        assert_eq!(foreground_pixels, rendered.colors.foreground_pixels);
    }

    // Tests a uniform tile renders back to the same color
    #[test]
    fn test_render_uniform_tile_is_stable() {
        let color = [12345, 23456, 34567, 65535];
        let mut buffer = PixelBuffer::filled(5, 5, color);

        let Ok(rendered) = render(&mut buffer.view_mut(), &TileGeometry::new(0, 0, 5)) else {
            unreachable!("rendering an in-bounds tile failed");
        };

        assert_eq!(rendered.orientation, Orientation::BottomLeft);
        assert_eq!(buffer, PixelBuffer::filled(5, 5, color));
    }

    // Tests a tile running off the canvas fails without panicking
    #[test]
    fn test_render_out_of_bounds() {
        let mut buffer = PixelBuffer::new(3, 3);
        assert!(render(&mut buffer.view_mut(), &TileGeometry::new(2, 0, 3)).is_err());
    }
}
