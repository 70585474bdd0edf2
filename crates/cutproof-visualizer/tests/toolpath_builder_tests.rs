//! Toolpath construction: modal carry-over, vertex pairing, fallback

use cutproof_core::Point3;
use cutproof_visualizer::{build_toolpath, interpret, ToolpathOrigin};

#[test]
fn modal_carry_over_uses_previous_result_not_zero() {
    let commands = interpret("G1 X10\nG1 Y5\n");
    let path = build_toolpath(&commands);

    assert_eq!(
        path.vertices(),
        &[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 5.0, 0.0),
        ]
    );
}

#[test]
fn facing_program_yields_eight_vertices_ending_at_final_position() {
    let text = "G21\nG90\nG0 Z5\nG0 X0 Y0\nG1 Z-1 F100\nG1 X50 F200\nG1 Y50\n";
    let path = build_toolpath(&interpret(text));

    assert_eq!(path.len(), 8);
    assert_eq!(path.origin(), ToolpathOrigin::Program);
    assert_eq!(path.end_position().unwrap(), Point3::new(50.0, 50.0, -1.0));
}

#[test]
fn output_length_is_even_when_no_fallback_triggers() {
    let path = build_toolpath(&interpret("G0 X1\nG1 Y2\nG1 Z3\n"));
    assert_eq!(path.len() % 2, 0);
    assert_eq!(path.len(), 6);
}

#[test]
fn all_comment_program_falls_back_to_default_segment() {
    let path = build_toolpath(&interpret("; setup only\n; nothing moves\n"));

    assert_eq!(path.origin(), ToolpathOrigin::Fallback);
    assert_eq!(path.len(), 2);

    // Centered at the origin.
    let mid_x = (path.vertices()[0].x + path.vertices()[1].x) / 2.0;
    assert_eq!(mid_x, 0.0);
}

#[test]
fn modal_only_program_falls_back_too() {
    let path = build_toolpath(&interpret("G21\nG90\nG94\n"));
    assert!(path.is_fallback());
    assert_eq!(path.len(), 2);
}

#[test]
fn bounds_cover_origin_and_every_target() {
    let path = build_toolpath(&interpret("G0 X-20 Y10\nG1 Z-3\nG1 X35\n"));
    let (min, max) = path.bounds();

    assert_eq!(min, Point3::new(-20.0, 0.0, -3.0));
    assert_eq!(max, Point3::new(35.0, 10.0, 0.0));
}
