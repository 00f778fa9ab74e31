use crate::config::Theme;
use crate::diff::{DiffStats, Granularity};
use crate::style::DiffPalette;
use egui::{Align, Layout, RichText, Ui};

pub enum ToolbarAction {
    SetGranularity(Granularity),
    SetShowUnchanged(bool),
    Swap,
    Clear,
    CopyDiff,
    CopyJson,
    ToggleTheme,
}

pub struct Toolbar;

pub struct ToolbarState {
    pub granularity: Granularity,
    pub show_unchanged: bool,
    pub stats: DiffStats,
    pub theme: Theme,
    pub has_input: bool,
}

impl Toolbar {
    pub fn show(ui: &mut Ui, state: ToolbarState) -> Option<ToolbarAction> {
        let ToolbarState {
            granularity,
            show_unchanged,
            stats,
            theme,
            has_input,
        } = state;

        let mut action = None;
        let palette = DiffPalette::for_theme(theme);

        ui.horizontal(|ui| {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                ui.label("Compare by");
                let mut selected = granularity;
                egui::ComboBox::from_id_salt("granularity_select")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for option in Granularity::ALL {
                            ui.selectable_value(&mut selected, option, option.label());
                        }
                    });
                if selected != granularity {
                    action = Some(ToolbarAction::SetGranularity(selected));
                }

                let mut show = show_unchanged;
                if ui.checkbox(&mut show, "Show unchanged").changed() {
                    action = Some(ToolbarAction::SetShowUnchanged(show));
                }

                ui.separator();

                if ui
                    .add_enabled(has_input, egui::Button::new("⇄"))
                    .on_hover_text("Swap original and modified")
                    .clicked()
                {
                    action = Some(ToolbarAction::Swap);
                }
                if ui
                    .add_enabled(has_input, egui::Button::new("🗑"))
                    .on_hover_text("Clear both queries")
                    .clicked()
                {
                    action = Some(ToolbarAction::Clear);
                }
                ui.menu_button("📋", |ui| {
                    if ui.button("Copy diff").clicked() {
                        action = Some(ToolbarAction::CopyDiff);
                        ui.close();
                    }
                    if ui.button("Copy as JSON").clicked() {
                        action = Some(ToolbarAction::CopyJson);
                        ui.close();
                    }
                })
                .response
                .on_hover_text("Copy");

                let theme_icon = match theme {
                    Theme::Light => "🌙",
                    Theme::Dark => "☀",
                };
                if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                    action = Some(ToolbarAction::ToggleTheme);
                }
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.spacing_mut().item_spacing.x = 8.0;
                ui.label(
                    RichText::new(format!("~{}", stats.modified))
                        .color(palette.modified_text)
                        .monospace(),
                )
                .on_hover_text("Modified");
                ui.label(
                    RichText::new(format!("-{}", stats.removed))
                        .color(palette.removed_text)
                        .monospace(),
                )
                .on_hover_text("Removed");
                ui.label(
                    RichText::new(format!("+{}", stats.added))
                        .color(palette.added_text)
                        .monospace(),
                )
                .on_hover_text("Added");
            });
        });

        action
    }
}
