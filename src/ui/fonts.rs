//! Label font loading

use anyhow::{ensure, Context, Result};
use eframe::egui;
use std::path::Path;
use std::sync::Arc;

/// Family name the label font is registered under.
pub const LABEL_FAMILY: &str = "label";

/// Reads the font file at `path`.
pub fn load(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("TTF_OpenFont failed: cannot read {}", path.display()))?;
    ensure!(!bytes.is_empty(), "TTF_OpenFont failed: {} is empty", path.display());
    log::info!("🔤 font loaded: {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

/// Registers the label font with egui, keeping the default fonts as fallback.
pub fn install(ctx: &egui::Context, bytes: Vec<u8>) {
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        LABEL_FAMILY.to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );

    let mut family = vec![LABEL_FAMILY.to_owned()];
    if let Some(fallback) = fonts.families.get(&egui::FontFamily::Proportional) {
        family.extend(fallback.iter().cloned());
    }
    fonts
        .families
        .insert(egui::FontFamily::Name(LABEL_FAMILY.into()), family);

    ctx.set_fonts(fonts);
}

pub fn label_font(size: f32) -> egui::FontId {
    egui::FontId::new(size, egui::FontFamily::Name(LABEL_FAMILY.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_is_an_error_naming_the_path() {
        let path = Path::new("./definitely/not/here.ttf");
        let err = load(path).unwrap_err();
        assert!(format!("{err:#}").contains("not/here.ttf"));
    }

    #[test]
    fn empty_font_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("tone-button-empty-{}.ttf", std::process::id()));
        std::fs::write(&path, b"").unwrap();
        let result = load(&path);
        let _ = std::fs::remove_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn label_font_uses_named_family() {
        let font = label_font(28.0);
        assert_eq!(font.size, 28.0);
        assert_eq!(font.family, egui::FontFamily::Name(LABEL_FAMILY.into()));
    }
}
