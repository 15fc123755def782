use std::time::Duration;

use gr_logo::tiny_skia::Pixmap;
use gr_logo::{
    Component, LogoComponent, ManualClock, RESIZE_DEBOUNCE, Rgba, ThemeName, TimerScheduler, render,
    theme,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> Rgba {
    let c = pixmap.pixel(x, y).unwrap().demultiply();
    Rgba::new(c.red(), c.green(), c.blue(), c.alpha())
}

fn test_logo() -> (ManualClock, LogoComponent<TimerScheduler<ManualClock>>) {
    let clock = ManualClock::new();
    let logo = LogoComponent::with_scheduler(TimerScheduler::new(clock.clone()));
    (clock, logo)
}

#[test]
fn every_theme_resolves_to_a_valid_definition() {
    for name in ThemeName::ALL {
        let resolved = theme::resolve(name.as_str(), None);
        assert_eq!(resolved, name);
        assert!(resolved.definition().validate().is_ok(), "{name}");
    }
}

#[test]
fn random_never_picks_the_test_theme() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..5_000 {
        let name = theme::resolve_with("random", None, &mut rng);
        assert_ne!(name, ThemeName::Test);
    }
}

#[test]
fn original_at_256_end_to_end() {
    let (_, mut logo) = test_logo();
    logo.set_theme("original");
    logo.on_attach(256, 256);
    let canvas = logo.canvas().unwrap();

    assert_eq!(pixel(canvas, 8, 128), Rgba::hex(0xB40000), "base");
    assert_eq!(pixel(canvas, 216, 150), Rgba::WHITE, "primary glyph");
    assert_eq!(pixel(canvas, 40, 112), Rgba::BLACK, "secondary glyph");
    assert_eq!(pixel(canvas, 4, 240), Rgba::BLACK, "bar");

    // Text: white pixels inside the bar band.
    let white = (232..250)
        .flat_map(|y| (14..248).map(move |x| (x, y)))
        .filter(|&(x, y)| pixel(canvas, x, y) == Rgba::WHITE)
        .count();
    assert!(white > 100, "text");
}

#[test]
fn same_theme_and_size_render_identically() {
    let (_, mut logo) = test_logo();
    logo.set_theme("test");
    logo.set_fill(true);
    logo.on_attach(333, 211);
    let first = logo.canvas().unwrap().data().to_vec();

    logo.draw();
    logo.draw();
    assert_eq!(first, logo.canvas().unwrap().data());
}

#[test]
fn ten_rapid_resizes_redraw_once() {
    let (clock, mut logo) = test_logo();
    logo.on_attach(120, 120);
    let before = logo.draw_count();

    for i in 0..10 {
        logo.on_size_changed(200 + i, 180 + i);
        clock.advance(Duration::from_millis(10));
        logo.poll();
    }
    assert_eq!(logo.draw_count(), before);

    clock.advance(RESIZE_DEBOUNCE);
    logo.poll();
    assert_eq!(logo.draw_count(), before + 1);
    assert_eq!(logo.size(), [189, 189]);
}

#[test]
fn refused_fill_renders_like_square_mode() {
    let (_, mut filled) = test_logo();
    filled.set_theme("blackwhite");
    filled.set_fill(true);
    filled.on_attach(300, 180);

    let (_, mut square) = test_logo();
    square.set_theme("blackwhite");
    square.on_attach(300, 180);

    assert_eq!(filled.size(), [180, 180]);
    assert_eq!(
        filled.canvas().unwrap().data(),
        square.canvas().unwrap().data()
    );
}

#[test]
fn padding_is_an_eighth_of_the_short_side() {
    let (_, mut logo) = test_logo();
    logo.on_attach(640, 480);
    assert_eq!(logo.padding(), 60.0);
    assert_eq!(gr_logo::padding_for(100, 40), 5.0);
}

#[test]
fn draw_to_external_surface() {
    let (_, logo) = test_logo();
    let mut target = Pixmap::new(64, 64).unwrap();
    logo.draw_to(&mut target);
    // 64px is below the bar gate: only base and glyphs.
    assert_eq!(pixel(&target, 2, 58), Rgba::hex(0xB40000));

    let mut big = Pixmap::new(200, 200).unwrap();
    render::render(&mut big, ThemeName::Original.definition(), false);
    assert_eq!(pixel(&big, 3, 183), Rgba::BLACK);
}
