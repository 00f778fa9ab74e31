use crate::config::Theme;
use crate::notifier::{NoticeLevel, Toasts};
use crate::style::DiffPalette;
use egui::{Align2, Context, RichText};
use std::time::Instant;

/// Draw the current toast, if any, at the bottom of the window
pub fn show_toast(ctx: &Context, toasts: &mut Toasts, theme: Theme) {
    let now = Instant::now();
    let Some(notice) = toasts.visible(now) else {
        return;
    };

    let palette = DiffPalette::for_theme(theme);
    let (icon, color) = match notice.level {
        NoticeLevel::Info => ("✔", palette.added_text),
        NoticeLevel::Error => ("⚠", palette.removed_text),
    };
    let message = format!("{} {}", icon, notice.message);

    egui::Area::new(egui::Id::new("toast_overlay"))
        .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(ui.visuals().window_fill)
                .stroke(egui::Stroke::new(1.0, color))
                .corner_radius(egui::CornerRadius::same(6))
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.label(RichText::new(message).color(color));
                });
        });

    if let Some(remaining) = toasts.remaining(now) {
        ctx.request_repaint_after(remaining);
    }
}
