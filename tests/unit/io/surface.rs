//! Tests for the recording drawing surface

#[cfg(test)]
mod tests {
    use fillwalk::algorithm::walker::{PathStyle, WalkerStyle};
    use fillwalk::io::surface::{RecordingSurface, Surface};

    #[test]
    fn test_recording_surface_keeps_calls_in_order() {
        let style = WalkerStyle {
            color: [9, 9, 9, 255],
            highlight_color: [0, 0, 0, 255],
            path_style: PathStyle::Stroke,
            size: 1.0,
            step_size: 1.0,
        };
        let mut surface = RecordingSurface::default();

        surface.stroke_polyline(&[[0.0, 0.0], [1.0, 0.0]], &style);
        surface.stroke_polyline(&[[5.0, 5.0]], &style);
        surface.fill_square([2.0, 2.0], 4.0, [1, 1, 1, 255]);

        assert_eq!(surface.polylines.len(), 2);
        assert_eq!(
            surface.polylines.first(),
            Some(&(vec![[0.0, 0.0], [1.0, 0.0]], [9, 9, 9, 255]))
        );
        assert_eq!(surface.squares, vec![([2.0, 2.0], 4.0, [1, 1, 1, 255])]);
    }
}
