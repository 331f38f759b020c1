use super::*;

#[test]
fn core_starts_empty_with_light_palette() {
    let core = EngineCore::with_seed(1);
    assert!(core.size.is_none());
    assert!(core.field.particles().is_empty());
    assert_eq!(core.palette, Palette::for_theme(false));
}

#[test]
fn first_resize_builds_particles() {
    let mut core = EngineCore::with_seed(1);
    let size = core.resize(800.0, 400.0, 1.0);
    assert!(size.is_some());
    assert_eq!(core.field.particles().len(), 20);
    assert_eq!(core.field.width(), 800.0);
}

#[test]
fn unchanged_layout_skips_rebuild() {
    let mut core = EngineCore::with_seed(5);
    core.resize(800.0, 400.0, 1.0);
    let before = core.field.particles().to_vec();
    assert!(core.resize(800.3, 400.9, 1.0).is_none());
    assert_eq!(core.field.particles(), before.as_slice());
}

#[test]
fn small_boxes_are_clamped_before_comparison() {
    let mut core = EngineCore::with_seed(5);
    core.resize(10.0, 10.0, 1.0);
    assert!(core.resize(200.0, 100.0, 1.0).is_none());
    assert_eq!(core.field.width(), 320.0);
    assert_eq!(core.field.height(), 260.0);
}

#[test]
fn set_dark_swaps_palette() {
    let mut core = EngineCore::with_seed(2);
    core.set_dark(true);
    assert_eq!(core.palette, Palette::for_theme(true));
    core.set_dark(false);
    assert_eq!(core.palette, Palette::for_theme(false));
}

#[test]
fn tick_moves_particles() {
    let mut core = EngineCore::with_seed(9);
    core.resize(640.0, 480.0, 1.0);
    let before = core.field.particles().to_vec();
    core.tick();
    let moved = core
        .field
        .particles()
        .iter()
        .zip(&before)
        .any(|(a, b)| a.x != b.x || a.y != b.y);
    assert!(moved);
}

#[test]
fn same_seed_gives_same_layout() {
    let mut a = EngineCore::with_seed(42);
    let mut b = EngineCore::with_seed(42);
    a.resize(640.0, 480.0, 1.0);
    b.resize(640.0, 480.0, 1.0);
    assert_eq!(a.field.particles(), b.field.particles());
}

#[test]
fn pixel_ratio_change_resizes_backing_but_keeps_particles() {
    let mut core = EngineCore::with_seed(5);
    core.resize(800.0, 400.0, 1.0);
    let before = core.field.particles().to_vec();
    let size = core.resize(800.0, 400.0, 2.0).expect("dpr change applies");
    assert_eq!(size.backing_width, 1600);
    assert_eq!(core.field.particles(), before.as_slice());
}
