// Host-side tests for the scroll-to-section mapper.

use folio_core::{scroll_fraction, section_blend, total_scrollable, SectionBlend};

#[test]
fn blend_stays_in_range_over_whole_page() {
    let total = 2400.0_f32;
    for n in 2..=8usize {
        let mut offset = 0.0_f32;
        while offset <= total {
            let b = section_blend(offset, total, n);
            assert!(b.index <= n - 2, "index {} out of range for n={n}", b.index);
            assert!((0.0..1.0).contains(&b.t), "t {} out of range at {offset}", b.t);
            offset += 7.5;
        }
        let end = section_blend(total, total, n);
        assert_eq!(end.index, n - 2);
        assert!(end.t < 1.0);
    }
}

#[test]
fn zero_height_page_pins_to_first_section() {
    for offset in [0.0, 1.0, 150.0, 1e6] {
        assert_eq!(section_blend(offset, 0.0, 4), SectionBlend { index: 0, t: 0.0 });
    }
    assert_eq!(scroll_fraction(50.0, 0.0), 0.0);
}

#[test]
fn midpoint_of_four_sections_lands_between_one_and_two() {
    assert!((scroll_fraction(150.0, 300.0) - 0.5).abs() < 1e-6);
    let b = section_blend(150.0, 300.0, 4);
    assert_eq!(b.index, 1);
    assert!((b.t - 0.5).abs() < 1e-6);
}

#[test]
fn section_boundaries_start_a_new_leg() {
    // 3 legs over 300px: 100px each
    let b = section_blend(100.0, 300.0, 4);
    assert_eq!(b.index, 1);
    assert!(b.t.abs() < 1e-5);
    let b = section_blend(99.0, 300.0, 4);
    assert_eq!(b.index, 0);
    assert!((b.t - 0.99).abs() < 1e-4);
}

#[test]
fn blend_is_monotonic_in_scroll() {
    let total = 1000.0;
    let mut prev = -1.0_f32;
    for step in 0..=1000 {
        let b = section_blend(step as f32, total, 4);
        let pos = b.index as f32 + b.t;
        assert!(pos >= prev, "position went backwards at {step}");
        prev = pos;
    }
}

#[test]
fn total_scrollable_never_negative() {
    assert_eq!(total_scrollable(3000.0, 800.0), 2200.0);
    assert_eq!(total_scrollable(600.0, 800.0), 0.0);
}
