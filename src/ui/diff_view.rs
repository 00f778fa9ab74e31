use crate::config::Theme;
use crate::diff::{BlockKind, DiffBlock, DiffPair, DiffResult, DiffType, Granularity};
use crate::style::DiffPalette;
use egui::{Color32, FontId, RichText, Stroke, TextFormat, Ui, Vec2, text::LayoutJob};
use similar::{ChangeTag, TextDiff};
use std::collections::HashSet;

pub struct DiffViewOptions {
    pub show_unchanged: bool,
    pub collapse_threshold: usize,
    pub font_size: f32,
    pub theme: Theme,
}

/// Renders a [`DiffResult`] block by block.
///
/// Long unchanged blocks start collapsed; the expanded ones are remembered by
/// their start row until [`DiffView::reset`] is called.
#[derive(Default)]
pub struct DiffView {
    expanded: HashSet<usize>,
}

impl DiffView {
    /// Forget expanded blocks, rows no longer point at the same content
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    fn is_collapsed(&self, block: &DiffBlock, threshold: usize) -> bool {
        block.kind == BlockKind::Unchanged
            && threshold > 0
            && block.len() > threshold
            && !self.expanded.contains(&block.start_position)
    }

    pub fn show(&mut self, ui: &mut Ui, result: &DiffResult, options: &DiffViewOptions) {
        if result.pairs.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading("Nothing to compare");
                ui.add_space(10.0);
                ui.label("Paste a query on each side to see what changed.");
            });
            return;
        }

        if result.is_identical() && !options.show_unchanged {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading("Queries are identical");
            });
            return;
        }

        ui.style_mut().spacing.item_spacing.y = 1.0;
        let palette = DiffPalette::for_theme(options.theme);

        for block in &result.blocks {
            if block.kind == BlockKind::Unchanged && !options.show_unchanged {
                continue;
            }

            ui.push_id(block.start_position, |ui| {
                if self.is_collapsed(block, options.collapse_threshold) {
                    let summary = block_summary(block, result.granularity);
                    let button = egui::Button::new(
                        RichText::new(summary)
                            .monospace()
                            .color(palette.muted_text),
                    )
                    .frame(false);
                    if ui.add(button).on_hover_text("Expand").clicked() {
                        self.expanded.insert(block.start_position);
                    }
                    return;
                }

                if self.expanded.contains(&block.start_position) {
                    let button =
                        egui::Button::new(RichText::new("▲ collapse").small().color(palette.muted_text))
                            .frame(false);
                    if ui.add(button).clicked() {
                        self.expanded.remove(&block.start_position);
                    }
                }

                match result.granularity {
                    Granularity::Lines => render_line_block(ui, block, options.font_size, &palette),
                    Granularity::Words | Granularity::Characters => render_inline_block(
                        ui,
                        block,
                        result.granularity,
                        options.font_size,
                        &palette,
                    ),
                }
            });
        }
    }
}

/// One-line stand-in for a collapsed unchanged block
fn block_summary(block: &DiffBlock, granularity: Granularity) -> String {
    format!(
        "⋯ {} unchanged {} (rows {}–{})",
        block.len(),
        granularity.unit(),
        block.start_position,
        block.end_position
    )
}

fn gutter(pair: &DiffPair, marker: &str) -> String {
    let position = |p: Option<usize>| p.map(|n| n.to_string()).unwrap_or_default();
    format!(
        "{:>4} {:>4} {} ",
        position(pair.original_position),
        position(pair.modified_position),
        marker
    )
}

fn plain_format(font_id: &FontId, color: Color32) -> TextFormat {
    TextFormat {
        font_id: font_id.clone(),
        color,
        line_height: Some(font_id.size + 8.0),
        ..Default::default()
    }
}

fn render_line_block(ui: &mut Ui, block: &DiffBlock, font_size: f32, palette: &DiffPalette) {
    let font_id = FontId::monospace(font_size);
    let base_text_color = ui.visuals().text_color();

    for (row_idx, pair) in block.pairs.iter().enumerate() {
        let (marker, fill, content) = match pair.diff_type {
            DiffType::Unchanged => (" ", Color32::TRANSPARENT, pair.original.as_str()),
            DiffType::Added => ("+", palette.added_line_bg, pair.modified.as_str()),
            DiffType::Removed => ("-", palette.removed_line_bg, pair.original.as_str()),
            DiffType::Modified => {
                ui.push_id(row_idx, |ui| {
                    render_modified_row(ui, pair, font_size, palette);
                });
                continue;
            }
        };

        egui::Frame::default()
            .fill(fill)
            .inner_margin(egui::Margin::symmetric(4, 0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                let mut job = LayoutJob::default();
                job.append(
                    &gutter(pair, marker),
                    0.0,
                    plain_format(&font_id, palette.muted_text),
                );
                job.append(content, 0.0, plain_format(&font_id, base_text_color));
                job.wrap.max_width = ui.available_width();
                ui.add(egui::Label::new(job).wrap());
            });
    }
}

/// Side-by-side rendering of a modified line with character-level highlights
fn render_modified_row(ui: &mut Ui, pair: &DiffPair, font_size: f32, palette: &DiffPalette) {
    let col_w = (ui.available_width() / 2.0 - 8.0).max(100.0);

    egui::Grid::new("modified_pair_grid")
        .num_columns(2)
        .min_col_width(0.0)
        .spacing(Vec2::new(0.0, 0.0))
        .show(ui, |ui| {
            render_modified_cell(ui, pair, true, col_w, font_size, palette);
            render_modified_cell(ui, pair, false, col_w, font_size, palette);
            ui.end_row();
        });
}

fn render_modified_cell(
    ui: &mut Ui,
    pair: &DiffPair,
    is_left: bool,
    width: f32,
    font_size: f32,
    palette: &DiffPalette,
) {
    let font_id = FontId::monospace(font_size);
    let base_text_color = ui.visuals().text_color();

    let (line_bg, marker, position) = if is_left {
        (palette.removed_line_bg, "-", pair.original_position)
    } else {
        (palette.added_line_bg, "+", pair.modified_position)
    };

    egui::Frame::default()
        .fill(line_bg)
        .inner_margin(egui::Margin::symmetric(4, 0))
        .show(ui, |ui| {
            ui.set_min_width(width - 8.0);

            let mut job = LayoutJob::default();
            let number = position.map(|n| n.to_string()).unwrap_or_default();
            job.append(
                &format!("{:>4} {} ", number, marker),
                0.0,
                plain_format(&font_id, palette.muted_text),
            );

            // character diff inside the pair, only for display
            let diff = TextDiff::from_chars(pair.original.as_str(), pair.modified.as_str());
            for change in diff.iter_all_changes() {
                let text = change.value();
                match change.tag() {
                    ChangeTag::Equal => {
                        job.append(text, 0.0, plain_format(&font_id, base_text_color));
                    }
                    ChangeTag::Delete if is_left => job.append(
                        text,
                        0.0,
                        TextFormat {
                            background: palette.removed_word_bg,
                            ..plain_format(&font_id, palette.removed_text)
                        },
                    ),
                    ChangeTag::Insert if !is_left => job.append(
                        text,
                        0.0,
                        TextFormat {
                            background: palette.added_word_bg,
                            ..plain_format(&font_id, palette.added_text)
                        },
                    ),
                    ChangeTag::Delete | ChangeTag::Insert => {}
                }
            }

            job.wrap.max_width = width - 8.0;
            ui.add(egui::Label::new(job).wrap());
        });
}

/// Make whitespace tokens visible when they are part of a change
fn visible_token(token: &str) -> &str {
    match token {
        "\n" => "↵\n",
        " " => "·",
        "\t" => "→",
        _ => token,
    }
}

/// Flow a block of words or characters as wrapped text
fn render_inline_block(
    ui: &mut Ui,
    block: &DiffBlock,
    granularity: Granularity,
    font_size: f32,
    palette: &DiffPalette,
) {
    let job = inline_job(
        block,
        granularity,
        font_size,
        ui.visuals().text_color(),
        palette,
        ui.available_width(),
    );
    ui.add(egui::Label::new(job).wrap());
}

fn inline_job(
    block: &DiffBlock,
    granularity: Granularity,
    font_size: f32,
    base_text_color: Color32,
    palette: &DiffPalette,
    wrap_width: f32,
) -> LayoutJob {
    let font_id = FontId::monospace(font_size);
    let separator = match granularity {
        Granularity::Words => " ",
        Granularity::Lines | Granularity::Characters => "",
    };

    let removed = TextFormat {
        background: palette.removed_word_bg,
        strikethrough: Stroke::new(1.0, palette.removed_text),
        ..plain_format(&font_id, palette.removed_text)
    };
    let added = TextFormat {
        background: palette.added_word_bg,
        ..plain_format(&font_id, palette.added_text)
    };

    let mut job = LayoutJob::default();
    for pair in &block.pairs {
        match pair.diff_type {
            DiffType::Unchanged => {
                job.append(&pair.original, 0.0, plain_format(&font_id, base_text_color));
            }
            DiffType::Removed => job.append(visible_token(&pair.original), 0.0, removed.clone()),
            DiffType::Added => job.append(visible_token(&pair.modified), 0.0, added.clone()),
            DiffType::Modified => {
                job.append(visible_token(&pair.original), 0.0, removed.clone());
                job.append(visible_token(&pair.modified), 0.0, added.clone());
            }
        }
        if !separator.is_empty() {
            job.append(separator, 0.0, plain_format(&font_id, base_text_color));
        }
    }
    job.wrap.max_width = wrap_width;
    job
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_diff;

    fn long_unchanged_result() -> DiffResult {
        let original = (1..=12).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let modified = format!("{original}\nLIMIT 1");
        compute_diff(&original, &modified, Granularity::Lines)
    }

    #[test]
    fn long_unchanged_blocks_collapse_until_expanded() {
        let result = long_unchanged_result();
        let mut view = DiffView::default();
        let unchanged = &result.blocks[0];
        let changed = &result.blocks[1];

        assert!(view.is_collapsed(unchanged, 8));
        assert!(!view.is_collapsed(unchanged, 12));
        assert!(!view.is_collapsed(unchanged, 0));
        assert!(!view.is_collapsed(changed, 0));

        view.expanded.insert(unchanged.start_position);
        assert!(!view.is_collapsed(unchanged, 8));

        view.reset();
        assert!(view.is_collapsed(unchanged, 8));
    }

    #[test]
    fn summary_names_rows_and_unit() {
        let result = long_unchanged_result();
        assert_eq!(
            block_summary(&result.blocks[0], Granularity::Lines),
            "⋯ 12 unchanged lines (rows 1–12)"
        );
    }

    #[test]
    fn gutter_leaves_placeholder_blank() {
        let result = compute_diff("A", "A\nC", Granularity::Lines);
        assert_eq!(gutter(&result.pairs[0], " "), "   1    1   ");
        assert_eq!(gutter(&result.pairs[1], "+"), "        2 + ");
    }

    #[test]
    fn inline_words_keep_every_token() {
        let result = compute_diff("select * from t", "select a from t", Granularity::Words);
        let palette = DiffPalette::for_theme(Theme::Light);
        let job = inline_job(
            &result.blocks[1],
            Granularity::Words,
            14.0,
            Color32::BLACK,
            &palette,
            400.0,
        );
        assert_eq!(job.text, "*a ");
    }

    #[test]
    fn changed_whitespace_is_visible() {
        assert_eq!(visible_token("\n"), "↵\n");
        assert_eq!(visible_token(" "), "·");
        assert_eq!(visible_token("x"), "x");
    }
}
