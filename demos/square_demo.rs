//! Renders the square widget under a few parent constraints and writes one
//! PNG per case.
//!
//! Usage: `cargo run --example square_demo [output_dir]` (defaults to `output`).

use std::path::PathBuf;

use square_view::prelude::*;

fn main() -> Result<(), RenderError> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output"));

    let cases = [
        ("exact_100x50", MeasureSpec::exact(100), MeasureSpec::exact(50)),
        ("at_most_200x80", MeasureSpec::at_most(200), MeasureSpec::at_most(80)),
        (
            "unconstrained",
            MeasureSpec::unconstrained(),
            MeasureSpec::unconstrained(),
        ),
    ];

    for (name, width, height) in cases {
        let mut host = Host::new(square().padding(Padding::symmetric(10, 5)))
            .background_color(Color::WHITE);
        let size = host.layout(width, height);
        host.frame();

        let path = out_dir.join(format!("{}.png", name));
        host.render()?.save_png(&path)?;
        log::info!("{}: {}x{} -> {}", name, size.width, size.height, path.display());
    }

    // Recolor after the first frame; the next frame picks it up.
    let mut host = Host::new(square()).background_color(Color::WHITE);
    host.layout(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());
    host.frame();
    host.root_mut().set_background_color(Color::from_hex(0x2E7D32));
    host.root_mut().set_stroke_color(Color::BLACK);
    if host.frame() {
        let path = out_dir.join("recolored.png");
        host.render()?.save_png(&path)?;
        log::info!("recolored -> {}", path.display());
    }

    Ok(())
}
