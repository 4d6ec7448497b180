use super::*;

fn entry(name: &str, region: &str, income: f64, population: f64, life: f64) -> FrameEntry {
    FrameEntry {
        name: name.to_owned(),
        region: region.to_owned(),
        income,
        population,
        life_expectancy: life,
    }
}

fn frame(year: f64, entries: Vec<FrameEntry>) -> Frame {
    Frame { year, entries }
}

fn sample_frame(year: f64) -> Frame {
    frame(
        year,
        vec![
            entry("Small", "Europe", 2_000.0, 1.0e6, 60.0),
            entry("Huge", "Asia", 1_000.0, 4.0e8, 40.0),
            entry("Mid", "Europe", 5_000.0, 5.0e7, 70.0),
        ],
    )
}

fn setup(initial: &Frame) -> (ChartConfig, ChartScales, ViewTree) {
    let cfg = ChartConfig::default();
    let scales = ChartScales::new(&cfg, initial);
    let tree = ViewTree::build(&cfg, &scales);
    (cfg, scales, tree)
}

#[test]
fn build_has_chrome_but_no_dots() {
    let f = sample_frame(1800.0);
    let (_, _, tree) = setup(&f);
    assert!(tree.dots().is_empty());
    assert_eq!(tree.label.text, "1800");
    assert!(!tree.label.active);
    assert_eq!(tree.x_caption.text, ViewTree::X_CAPTION);
    assert!(tree.y_caption.rotated);
}

#[test]
fn smaller_dots_draw_above_larger_ones() {
    let f = sample_frame(1800.0);
    let (_, scales, mut tree) = setup(&f);
    tree.apply_frame(&f, &scales);
    assert_eq!(tree.draw_order(), vec!["Huge", "Mid", "Small"]);
    assert!(tree.dots().iter().all(|d| d.visible));

    for pair in tree.dots().windows(2) {
        let below = f.get(&pair[0].key).unwrap().population;
        let above = f.get(&pair[1].key).unwrap().population;
        assert!(below >= above);
    }
}

#[test]
fn draw_order_is_recomputed_every_frame() {
    let f = sample_frame(1800.0);
    let (_, scales, mut tree) = setup(&f);
    tree.apply_frame(&f, &scales);

    let grown = frame(
        1900.0,
        vec![
            entry("Small", "Europe", 2_000.0, 4.9e8, 60.0),
            entry("Huge", "Asia", 1_000.0, 4.0e8, 40.0),
            entry("Mid", "Europe", 5_000.0, 5.0e7, 70.0),
        ],
    );
    tree.apply_frame(&grown, &scales);
    assert_eq!(tree.draw_order(), vec!["Small", "Huge", "Mid"]);
}

#[test]
fn applying_the_same_frame_twice_is_idempotent() {
    let f = sample_frame(1850.0);
    let (_, scales, mut tree) = setup(&f);
    tree.apply_frame(&f, &scales);
    let once = tree.clone();
    tree.apply_frame(&f, &scales);
    assert_eq!(tree, once);
    assert_eq!(tree.dots().len(), 3);
}

#[test]
fn elements_persist_across_updates() {
    let f = sample_frame(1800.0);
    let (_, scales, mut tree) = setup(&f);
    tree.apply_frame(&f, &scales);
    let ids: Vec<(String, ElementId)> = tree
        .dots()
        .iter()
        .map(|d| (d.key.clone(), d.id))
        .collect();

    let later = frame(
        1950.0,
        vec![
            entry("Small", "Europe", 9_000.0, 2.0e6, 75.0),
            entry("Huge", "Asia", 3_000.0, 4.5e8, 60.0),
            entry("Mid", "Europe", 20_000.0, 6.0e7, 78.0),
        ],
    );
    tree.apply_frame(&later, &scales);

    for (key, id) in ids {
        assert_eq!(tree.dot(&key).unwrap().id, id);
    }
    assert_eq!(tree.label.text, "1950");
}

#[test]
fn join_adds_and_removes_by_key() {
    let f = sample_frame(1800.0);
    let (_, scales, mut tree) = setup(&f);
    tree.apply_frame(&f, &scales);
    let mid_id = tree.dot("Mid").unwrap().id;

    let next = frame(
        1801.0,
        vec![
            entry("Mid", "Europe", 5_000.0, 5.0e7, 70.0),
            entry("New", "Europe", 700.0, 3.0e6, 30.0),
        ],
    );
    tree.apply_frame(&next, &scales);
    assert_eq!(tree.dots().len(), 2);
    assert!(tree.dot("Huge").is_none());
    assert_eq!(tree.dot("Mid").unwrap().id, mid_id);
    assert!(tree.dot("New").unwrap().id > mid_id);
}

#[test]
fn entities_without_a_log_position_are_hidden() {
    let f = frame(1800.0, vec![entry("Zero", "Europe", 0.0, 1.0e6, 50.0)]);
    let (_, scales, mut tree) = setup(&f);
    tree.apply_frame(&f, &scales);
    let zero = tree.dot("Zero").unwrap();
    assert!(!zero.visible);
    assert_eq!(tree.visible_dots().count(), 0);
}

#[test]
fn hidden_dots_keep_their_identity() {
    let f = sample_frame(1800.0);
    let (_, scales, mut tree) = setup(&f);
    tree.apply_frame(&f, &scales);
    let small = tree.dot("Small").unwrap().clone();

    let broke = frame(
        1801.0,
        vec![
            entry("Small", "Europe", 0.0, 1.0e6, 60.0),
            entry("Huge", "Asia", 1_000.0, 4.0e8, 40.0),
            entry("Mid", "Europe", 5_000.0, 5.0e7, 70.0),
        ],
    );
    tree.apply_frame(&broke, &scales);
    let hidden = tree.dot("Small").unwrap();
    assert_eq!(hidden.id, small.id);
    assert!(!hidden.visible);
    assert_eq!(hidden.center, small.center);
    assert_eq!(tree.visible_dots().count(), 2);
    assert!(!tree.to_svg().contains("<title>Small</title>"));

    tree.apply_frame(&f, &scales);
    let back = tree.dot("Small").unwrap();
    assert_eq!(back.id, small.id);
    assert!(back.visible);
    assert_eq!(*back, small);
    assert!(tree.to_svg().contains("<title>Small</title>"));
}

#[test]
fn dot_geometry_comes_from_the_scales() {
    let f = sample_frame(1800.0);
    let (_, scales, mut tree) = setup(&f);
    tree.apply_frame(&f, &scales);
    let huge = tree.dot("Huge").unwrap();
    let e = f.get("Huge").unwrap();
    assert_eq!(huge.center, scales.center(e));
    assert_eq!(huge.radius, scales.radius(e));
    assert_eq!(huge.fill, scales.fill(e));
    assert_eq!(huge.title(), "Huge");
    // "Europe" was seen first, so it owns the first palette slot.
    assert_eq!(tree.dot("Small").unwrap().fill, crate::config::CATEGORY10[0]);
}

#[test]
fn label_text_rounds_fractional_years() {
    let (_, scales, mut tree) = setup(&sample_frame(1800.0));
    tree.apply_frame(&sample_frame(1903.5), &scales);
    assert_eq!(tree.label.text, "1904");
    tree.apply_frame(&sample_frame(1903.49), &scales);
    assert_eq!(tree.label.text, "1903");
}

#[test]
fn overlay_covers_the_label() {
    let (cfg, _, tree) = setup(&sample_frame(1800.0));
    let plot = cfg.plot_size();
    assert!((tree.overlay.x1 - plot.width).abs() < 1e-9);
    let expected_width = 4.0 * cfg.label.digit_advance_em * cfg.label.font_size;
    assert!((tree.overlay.width() - expected_width).abs() < 1e-9);
    assert!(tree.overlay.y0 < tree.label.anchor.y && tree.overlay.y1 > tree.label.anchor.y);
}

#[test]
fn label_fill_tracks_active_flag() {
    let (_, _, mut tree) = setup(&sample_frame(1800.0));
    assert_eq!(tree.label.fill(), YearLabel::FILL);
    tree.set_label_active(true);
    assert_eq!(tree.label.fill(), YearLabel::FILL_ACTIVE);
}
