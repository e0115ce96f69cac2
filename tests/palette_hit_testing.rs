use blobilism::palette::{self, Palette, PaletteEntry};
use blobilism::{PaintConfig, Rgb};
use egui::pos2;

fn three_colors() -> Vec<Rgb> {
    PaintConfig::default().colors
}

#[test]
fn test_hit_inside_each_entry() {
    let colors = three_colors();
    let palette = Palette::new(&colors, true);

    for (i, entry) in palette.entries().iter().enumerate() {
        let c = entry.center;
        // Center and points just inside the 25px clickable radius
        for (dx, dy) in [(0.0, 0.0), (24.0, 0.0), (-24.0, 0.0), (0.0, 24.0), (17.0, 17.0)] {
            assert_eq!(
                palette.hit_test(c.x + dx, c.y + dy),
                Some(colors[i]),
                "entry {} offset ({}, {})",
                i,
                dx,
                dy
            );
        }
    }
}

#[test]
fn test_miss_outside_all_entries() {
    let palette = Palette::new(&three_colors(), true);

    assert_eq!(palette.hit_test(250.0, 250.0), None);
    assert_eq!(palette.hit_test(33.0, 35.0 + 26.0), None);
    assert_eq!(palette.hit_test(0.0, 0.0), None);
    // Past the last entry
    assert_eq!(palette.hit_test(143.0 + 30.0, 35.0), None);
}

#[test]
fn test_boundary_is_inclusive() {
    let palette = Palette::new(&three_colors(), true);
    assert!(palette.hit_test(33.0, 35.0 - 25.0).is_some());
    assert!(palette.hit_test(33.0, 35.0 - 25.01).is_none());
}

#[test]
fn test_first_entry_wins_on_overlap() {
    let red = Rgb::new(1.0, 0.0, 0.0);
    let blue = Rgb::new(0.0, 0.0, 1.0);
    let palette = Palette::from_entries(vec![
        PaletteEntry {
            color: red,
            center: pos2(100.0, 35.0),
            size: 50.0,
        },
        PaletteEntry {
            color: blue,
            center: pos2(110.0, 35.0),
            size: 50.0,
        },
    ]);

    // Closer to blue, but red comes first
    assert_eq!(palette.hit_test(112.0, 35.0), Some(red));
    assert_eq!(palette.entry_at(112.0, 35.0).map(|(i, _)| i), Some(0));
    // Only blue reaches this far
    assert_eq!(palette.hit_test(130.0, 35.0), Some(blue));
}

#[test]
fn test_neighbors_do_not_overlap() {
    let palette = Palette::new(&three_colors(), true);
    let mid = (palette.entries()[0].center.x + palette.entries()[1].center.x) / 2.0;
    assert!(palette.entry_at(mid, 35.0).is_none());
}

#[test]
fn test_positions_follow_index_formula() {
    let colors = vec![Rgb::gray(0.5); 9];
    let untruncated = Palette::new(&colors, false);
    let truncated = Palette::new(&colors, true);

    for i in 0..9 {
        let expected = palette::entry_position(i);
        assert_eq!(untruncated.entries()[i].center, expected);
        assert_eq!(truncated.entries()[i].center.x, expected.x.trunc());
        assert!((expected.x - 55.0 * (i as f32 + 0.6)).abs() < 1e-3);
    }
}
