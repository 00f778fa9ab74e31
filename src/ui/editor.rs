use crate::messages::Side;
use egui::{FontId, RichText, Ui};

pub enum EditorAction {
    Open,
    Copy,
}

/// One of the two query inputs
pub struct QueryEditor {
    side: Side,
    content: String,
}

impl QueryEditor {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            content: String::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Exchange the texts of two editors, keeping their sides
    pub fn swap_content(a: &mut QueryEditor, b: &mut QueryEditor) {
        std::mem::swap(&mut a.content, &mut b.content);
    }

    /// Draw the editor. Returns whether the text changed this frame and any button action.
    pub fn show(&mut self, ui: &mut Ui, font_size: f32) -> (bool, Option<EditorAction>) {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label(RichText::new(self.side.label()).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!self.content.is_empty(), egui::Button::new("📋"))
                    .on_hover_text("Copy")
                    .clicked()
                {
                    action = Some(EditorAction::Copy);
                }
                if ui.button("📂").on_hover_text("Open file...").clicked() {
                    action = Some(EditorAction::Open);
                }
            });
        });

        let hint = match self.side {
            Side::Original => "Paste the original query here",
            Side::Modified => "Paste the modified query here",
        };

        let response = egui::ScrollArea::vertical()
            .id_salt(self.side.label())
            .max_height(ui.available_height())
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.content)
                        .id_salt(self.side.label())
                        .code_editor()
                        .font(FontId::monospace(font_size))
                        .hint_text(hint)
                        .desired_width(f32::INFINITY)
                        .desired_rows(10),
                )
            })
            .inner;

        (response.changed(), action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_keeps_sides() {
        let mut original = QueryEditor::new(Side::Original);
        let mut modified = QueryEditor::new(Side::Modified);
        original.set_content("SELECT 1".to_string());
        modified.set_content("SELECT 2".to_string());

        QueryEditor::swap_content(&mut original, &mut modified);

        assert_eq!(original.content(), "SELECT 2");
        assert_eq!(modified.content(), "SELECT 1");
        assert_eq!(original.side, Side::Original);
    }
}
