//! Print the region kind for every mode over a few canned vector sets.
//!
//! Usage:
//!   cargo run -p spanregion --example sweep_modes -- 2d
//!   cargo run -p spanregion --example sweep_modes -- 3d

use spanregion::prelude::*;

fn main() {
    let which = std::env::args().nth(1).unwrap_or_else(|| "2d".to_string());
    match which.as_str() {
        "2d" => sweep_2d(),
        "3d" => sweep_3d(),
        _ => eprintln!("usage: sweep_modes [2d|3d]"),
    }
}

fn sweep_2d() {
    let sets: [(&str, Vec<Vec2<f64>>); 4] = [
        ("single", vec![Vec2::new(1.0, 0.5)]),
        ("opposed", vec![Vec2::new(1.0, 0.0), Vec2::new(-2.0, 0.0)]),
        ("acute", vec![Vec2::new(2.0, 1.0), Vec2::new(1.0, 2.0)]),
        (
            "triangle",
            vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(1.0, 3.0)],
        ),
    ];
    let rect = Rect::default();
    for (name, pts) in &sets {
        for mode in Mode::ALL {
            let r = region_2d(mode, pts, &rect, GeomCfg::default());
            println!("2d {name:<9} {:<10} {:<10} {} pts", mode.name(), r.kind(), r.points().len());
        }
    }
}

fn sweep_3d() {
    let sets: [(&str, Vec<Vec3<f64>>); 3] = [
        ("axis", vec![Vec3::new(0.0, 0.0, 1.0)]),
        ("pair", vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0)]),
        (
            "octant",
            vec![
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
        ),
    ];
    let cube = Cube::default();
    let view = OrbitView::default();
    for (name, pts) in &sets {
        for mode in Mode::ALL {
            let r = region_3d(mode, pts, &cube, &view, GeomCfg::default());
            println!("3d {name:<9} {:<10} {:<10} {} pts", mode.name(), r.kind(), r.points().len());
        }
    }
}
