//! Render a HUD-style label to `hud_label.png` using settings from
//! `plaque.toml` (see plaque-config), overridable via PLAQUE_* env vars.

use std::sync::Arc;

use anyhow::Result;
use plaque_config::PlaqueConfig;
use plaque_label::Label;
use plaque_raster::{Pixmap, Rgba, parse_color};
use plaque_text::{FontLibrary, OutlineTextProvider, TextProvider};

fn main() -> Result<()> {
    env_logger::init();

    let mut config = PlaqueConfig::load_or_default();
    config.merge_with_env();

    let mut library = FontLibrary::from_system();
    if let Some(file) = &config.font.file {
        library.load_font_file(file)?;
    }
    let provider: Arc<dyn TextProvider> = Arc::new(OutlineTextProvider::new(library));

    let mut label = Label::new(provider, config.font.family.clone());
    label.set_font_size(config.label.size.unwrap_or(24.0));
    label.set_scale(config.label.scale);
    label.set_color(config.label.color.clone());
    if let Some(bg) = config.label.background.as_deref() {
        label.set_background(Some(bg));
    }
    if !config.label.padding.is_empty() {
        label.set_padding_values(&config.label.padding);
    }
    label.set_text(
        config
            .label
            .text
            .clone()
            .unwrap_or_else(|| "Player One".to_string()),
    );

    let mut hud = Pixmap::new(320, 96);
    hud.fill(parse_color("#202830").unwrap_or(Rgba::BLACK));
    label.draw(&mut hud, 16.0, 24.0);
    hud.save_png("hud_label.png")?;

    println!(
        "wrote hud_label.png (label {}x{} logical, {}x{} px)",
        label.width(),
        label.height(),
        label.pixmap().width(),
        label.pixmap().height()
    );
    Ok(())
}
