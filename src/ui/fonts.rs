//! Fuentes de sistema de respaldo para el texto en japonés.

use egui::{Context, FontData, FontDefinitions, FontFamily};

#[cfg(target_os = "macos")]
const CJK_FONTS: &[(&str, &str)] = &[
    ("hiragino", "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc"),
    ("arial_unicode", "/System/Library/Fonts/Supplemental/Arial Unicode.ttf"),
];

#[cfg(target_os = "windows")]
const CJK_FONTS: &[(&str, &str)] = &[
    ("meiryo", "C:\\Windows\\Fonts\\meiryo.ttc"),
    ("yugothic", "C:\\Windows\\Fonts\\YuGothM.ttc"),
    ("msgothic", "C:\\Windows\\Fonts\\msgothic.ttc"),
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CJK_FONTS: &[(&str, &str)] = &[
    ("noto_cjk", "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc"),
    ("noto_cjk_alt", "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc"),
    ("takao", "/usr/share/fonts/truetype/takao-gothic/TakaoPGothic.ttf"),
];

/// Añade la primera fuente CJK disponible como respaldo.
/// En web no hay sistema de ficheros: el japonés depende de las fuentes por defecto.
pub fn configure_fonts(ctx: &Context) {
    if cfg!(target_arch = "wasm32") {
        return;
    }
    let mut fonts = FontDefinitions::default();

    for (name, path) in CJK_FONTS {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        fonts
            .font_data
            .insert((*name).to_owned(), FontData::from_owned(bytes).into());
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            if let Some(list) = fonts.families.get_mut(&family) {
                list.push((*name).to_owned());
            }
        }
        log::info!("Fuente de respaldo '{name}' cargada desde {path}");
        ctx.set_fonts(fonts);
        return;
    }
    log::warn!("No se encontró ninguna fuente CJK; el japonés puede verse mal");
}
