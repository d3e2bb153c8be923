//! Preview a font file from the command line.
//!
//! Prints the measured geometry and the display list produced by the paint pass.
//!
//! Run with:
//! ```bash
//! cargo run -p specimen --example preview_font -- /path/to/font.ttf
//! cargo run -p specimen --example preview_font -- file:///usr/share/fonts/DejaVuSans.ttf
//! ```

use specimen::{
    DisplayListSurface, FontKind, FontPreview, Padding, PreviewConfig, PreviewEvent, SurfaceStyle,
};

fn main() {
    specimen::logging::init();

    let Some(locator) = std::env::args().nth(1) else {
        eprintln!("usage: preview_font <path-or-uri> [language]");
        std::process::exit(2);
    };

    let mut config = PreviewConfig::default();
    if let Some(language) = std::env::args().nth(2) {
        config = config.language(language);
    }

    let mut preview = FontPreview::from_config(config);
    preview.connect_loaded(|content| {
        tracing::info!(
            "loaded '{}' ({} sizes, alphabet at {}px)",
            content.text.title,
            content.ladder.sizes.len(),
            content.ladder.alpha_size
        );
    });

    preview.set_locator(locator);
    let _ = preview.block_until_loaded();

    for event in preview.drain_events() {
        if let PreviewEvent::LoadFailed { kind, message, .. } = event {
            eprintln!("{}: {}", kind, message);
            std::process::exit(1);
        }
    }

    let mut surface = DisplayListSurface::new(SurfaceStyle {
        padding: Padding::uniform(6),
        ..SurfaceStyle::default()
    });
    let geometry = preview.measure(&mut surface);
    preview.paint(&mut surface);

    println!("preview size: {}x{}", geometry.width, geometry.height);
    for command in surface.display_list().iter() {
        let font = match command.font {
            FontKind::Previewed => "face",
            FontKind::Fallback => "fallback",
        };
        println!(
            "{:>6.1} {:>7.1}  {:>4}px {:<8} {}",
            command.x, command.y, command.size, font, command.text
        );
    }
}
