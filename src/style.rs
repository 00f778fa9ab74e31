use crate::config::Theme;
use egui::{Color32, Context, Stroke, Style, Visuals};

/// Colors used to paint diff rows, chosen per theme
#[derive(Debug, Clone, Copy)]
pub struct DiffPalette {
    pub removed_line_bg: Color32,
    pub added_line_bg: Color32,
    pub removed_word_bg: Color32,
    pub added_word_bg: Color32,
    pub removed_text: Color32,
    pub added_text: Color32,
    pub modified_text: Color32,
    pub muted_text: Color32,
}

const LIGHT_PALETTE: DiffPalette = DiffPalette {
    removed_line_bg: Color32::from_rgb(255, 230, 230),
    added_line_bg: Color32::from_rgb(230, 255, 230),
    removed_word_bg: Color32::from_rgb(255, 170, 170),
    added_word_bg: Color32::from_rgb(170, 255, 170),
    removed_text: Color32::from_rgb(150, 0, 0),
    added_text: Color32::from_rgb(0, 100, 0),
    modified_text: Color32::from_rgb(150, 100, 0),
    muted_text: Color32::from_gray(140),
};

const DARK_PALETTE: DiffPalette = DiffPalette {
    removed_line_bg: Color32::from_rgb(70, 30, 30),
    added_line_bg: Color32::from_rgb(30, 60, 35),
    removed_word_bg: Color32::from_rgb(130, 45, 45),
    added_word_bg: Color32::from_rgb(40, 110, 55),
    removed_text: Color32::from_rgb(255, 150, 150),
    added_text: Color32::from_rgb(150, 230, 150),
    modified_text: Color32::from_rgb(230, 190, 100),
    muted_text: Color32::from_gray(120),
};

impl DiffPalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT_PALETTE,
            Theme::Dark => DARK_PALETTE,
        }
    }
}

pub fn configure_style(ctx: &Context, theme: Theme) {
    let mut style = Style::default();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(12);

    ctx.set_style(style);

    let mut visuals = match theme {
        Theme::Light => Visuals::light(),
        Theme::Dark => Visuals::dark(),
    };
    visuals.window_shadow = egui::epaint::Shadow::NONE;
    visuals.popup_shadow = egui::epaint::Shadow::NONE;

    if theme == Theme::Light {
        visuals.widgets.hovered.bg_fill = Color32::from_gray(240);
        visuals.widgets.active.bg_fill = Color32::from_gray(230);
        visuals.selection.bg_fill = Color32::from_rgb(200, 220, 255);
        visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(100, 100, 100));
    }

    ctx.set_visuals(visuals);
    tracing::debug!("Applied {:?} theme", theme);
}
