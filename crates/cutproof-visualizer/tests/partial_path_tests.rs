//! Partial-path rendering: scrub invariant and scene hygiene

use cutproof_visualizer::{
    build_toolpath, interpret, visible_point_count, PartialPathRenderer, RenderObject, Scene,
};
use proptest::prelude::*;

const STYLE: [f32; 4] = [0.9, 0.35, 0.1, 1.0];

fn square_path() -> cutproof_visualizer::Toolpath {
    build_toolpath(&interpret(
        "G0 X2 Y2\nG1 X12\nG1 Y12\nG1 X2\nG1 Y2\n",
    ))
}

#[test]
fn nothing_is_shown_at_progress_zero() {
    let path = square_path();
    let mut scene = Scene::new();
    let mut renderer = PartialPathRenderer::new(STYLE, 2.0);

    renderer.update(&mut scene, &path, 0.0);
    assert!(renderer.current().is_none());
    assert!(scene.is_empty());
}

#[test]
fn everything_is_shown_at_progress_one() {
    let path = square_path();
    let mut scene = Scene::new();
    let mut renderer = PartialPathRenderer::new(STYLE, 2.0);

    renderer.update(&mut scene, &path, 1.0);
    let id = renderer.current().expect("line installed");
    let Some(RenderObject::Path(line)) = scene.get(id) else {
        panic!("expected a path line in the scene");
    };
    assert_eq!(line.vertex_count(), path.len());
}

#[test]
fn scrubbing_replaces_rather_than_accumulates() {
    let path = square_path();
    let mut scene = Scene::new();
    let mut renderer = PartialPathRenderer::new(STYLE, 2.0);

    for progress in [0.1, 0.5, 0.2, 0.9, 0.4, 1.0, 0.0, 0.7] {
        renderer.update(&mut scene, &path, progress);
        // At most the one current line object lives in the scene.
        assert!(scene.len() <= 1);
    }
}

#[test]
fn unchanged_count_does_not_rebuild() {
    let path = square_path();
    let mut scene = Scene::new();
    let mut renderer = PartialPathRenderer::new(STYLE, 2.0);

    renderer.update(&mut scene, &path, 0.45);
    let first = renderer.current();
    // A progress nudge too small to change the visible count keeps the
    // installed object.
    renderer.update(&mut scene, &path, 0.48);
    assert_eq!(renderer.current(), first);
}

#[test]
fn clear_removes_the_displayed_line() {
    let path = square_path();
    let mut scene = Scene::new();
    let mut renderer = PartialPathRenderer::new(STYLE, 2.0);

    renderer.update(&mut scene, &path, 0.8);
    assert_eq!(scene.len(), 1);

    renderer.clear(&mut scene);
    assert!(renderer.current().is_none());
    assert!(scene.is_empty());

    // Clearing twice is harmless.
    renderer.clear(&mut scene);
    assert!(scene.is_empty());
}

proptest! {
    /// The scrub invariant: 0 at 0, total at 1, otherwise
    /// max(2, ceil(total * progress)).
    #[test]
    fn visible_count_matches_formula(total in 2usize..4000, progress in 0.0f64..=1.0) {
        let count = visible_point_count(total, progress);
        if progress <= 0.0 {
            prop_assert_eq!(count, 0);
        } else if progress >= 1.0 {
            prop_assert_eq!(count, total);
        } else {
            let expected = ((total as f64 * progress).ceil() as usize).max(2).min(total);
            prop_assert_eq!(count, expected);
        }
        prop_assert!(count <= total);
    }

    /// The renderer's installed line always matches the formula.
    #[test]
    fn rendered_prefix_matches_count(progress in 0.0f64..=1.0) {
        let path = square_path();
        let mut scene = Scene::new();
        let mut renderer = PartialPathRenderer::new(STYLE, 2.0);

        renderer.update(&mut scene, &path, progress);
        let expected = visible_point_count(path.len(), progress);
        match renderer.current() {
            None => prop_assert_eq!(expected, 0),
            Some(id) => {
                let Some(RenderObject::Path(line)) = scene.get(id) else {
                    panic!("missing path line");
                };
                prop_assert_eq!(line.vertex_count(), expected);
            }
        }
    }
}
