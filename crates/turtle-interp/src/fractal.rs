//! Recursive fractal tree drawing.

use turtle_canvas::{Canvas, Color};

/// Maximum accepted recursion depth. A full tree draws `2^depth - 1`
/// branches, so 20 bounds the walk at about a million segments.
pub const MAX_DEPTH: i32 = 20;

/// Trunk length of a full tree.
pub const TRUNK_LENGTH: f64 = 60.0;

/// Draw a binary branching tree, depth-first.
///
/// Each level sets the pen color from a hue of `depth / 10` on the HSB
/// wheel, draws the branch, recurses at ±30° with the length scaled by
/// 0.7, and backs down the branch, so the walk ends where it started.
/// The pen color of the last-visited level is left behind.
pub fn draw_tree(canvas: &mut dyn Canvas, depth: i32, length: f64) {
    if depth <= 0 {
        return;
    }
    canvas.set_pen_color(Color::from_hsb(depth as f32 / 10.0, 1.0, 1.0));

    let step = length as i32;
    canvas.forward(step);

    canvas.turn(30);
    draw_tree(canvas, depth - 1, length * 0.7);
    canvas.turn(-30);

    canvas.turn(-30);
    draw_tree(canvas, depth - 1, length * 0.7);
    canvas.turn(30);

    canvas.forward(-step);
}

#[cfg(test)]
mod tests {
    use super::*;
    use turtle_canvas::BufferCanvas;

    #[test]
    fn tree_returns_to_the_branch_point() {
        let mut canvas = BufferCanvas::default();
        canvas.set_position(400, 350);
        canvas.set_heading(270);
        draw_tree(&mut canvas, 4, TRUNK_LENGTH);
        assert_eq!(canvas.position(), (400, 350));
        assert_eq!(canvas.heading(), 270);
    }

    #[test]
    fn tree_draws_two_segments_per_branch() {
        // Each of the 2^d - 1 branches is drawn up and back down.
        let mut canvas = BufferCanvas::default();
        draw_tree(&mut canvas, 3, TRUNK_LENGTH);
        assert_eq!(canvas.segments().len(), 2 * (2_usize.pow(3) - 1));
    }

    #[test]
    fn zero_depth_draws_nothing() {
        let mut canvas = BufferCanvas::default();
        draw_tree(&mut canvas, 0, TRUNK_LENGTH);
        assert!(canvas.segments().is_empty());
    }

    #[test]
    fn branch_color_follows_depth_hue() {
        let mut canvas = BufferCanvas::default();
        draw_tree(&mut canvas, 1, TRUNK_LENGTH);
        assert_eq!(canvas.pen_color(), Color::from_hsb(0.1, 1.0, 1.0));
    }
}
