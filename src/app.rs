use crate::clipboard::{SystemClipboard, copy_with_notice};
use crate::config::Config;
use crate::constant::TOAST_SECONDS;
use crate::diff::{self, DiffResult, Granularity};
use crate::loader::{read_query, spawn_open_dialog};
use crate::messages::{ResponseMessage, Side};
use crate::notifier::{Notice, Notifier, Toasts};
use crate::style::configure_style;
use crate::ui::diff_view::{DiffView, DiffViewOptions};
use crate::ui::editor::{EditorAction, QueryEditor};
use crate::ui::toast::show_toast;
use crate::ui::toolbar::{Toolbar, ToolbarAction, ToolbarState};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tracing::{error, info};

pub struct QueryDiffApp {
    config: Config,
    original: QueryEditor,
    modified: QueryEditor,
    granularity: Granularity,
    show_unchanged: bool,
    diff_view: DiffView,
    toasts: Toasts,
    clipboard: SystemClipboard,
    response_sender: Sender<ResponseMessage>,
    response_receiver: Receiver<ResponseMessage>,
}

impl QueryDiffApp {
    /// Build the app, optionally preloading the original and modified queries from files
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        original_file: Option<PathBuf>,
        modified_file: Option<PathBuf>,
    ) -> Self {
        let config = Config::default();
        configure_style(&cc.egui_ctx, config.settings.theme);

        let (response_sender, response_receiver) = mpsc::channel();
        let mut app = Self {
            granularity: config.settings.default_granularity,
            show_unchanged: config.settings.show_unchanged,
            config,
            original: QueryEditor::new(Side::Original),
            modified: QueryEditor::new(Side::Modified),
            diff_view: DiffView::default(),
            toasts: Toasts::new(Duration::from_secs(TOAST_SECONDS)),
            clipboard: SystemClipboard::new(),
            response_sender,
            response_receiver,
        };

        for (side, file) in [
            (Side::Original, original_file),
            (Side::Modified, modified_file),
        ] {
            if let Some(path) = file {
                let result = read_query(&path);
                app.apply_loaded_query(side, path, result);
            }
        }

        app
    }

    fn editor_mut(&mut self, side: Side) -> &mut QueryEditor {
        match side {
            Side::Original => &mut self.original,
            Side::Modified => &mut self.modified,
        }
    }

    fn apply_loaded_query(
        &mut self,
        side: Side,
        path: PathBuf,
        result: Result<String, crate::loader::LoadError>,
    ) {
        match result {
            Ok(content) => {
                info!("Loaded {} from {:?}", side.label(), path);
                self.editor_mut(side).set_content(content);
                self.diff_view.reset();
            }
            Err(e) => {
                error!("Failed to load {:?}: {}", path, e);
                self.toasts
                    .notify(Notice::error(format!("Could not open {}: {}", path.display(), e)));
            }
        }
    }

    fn handle_responses(&mut self) {
        while let Ok(response) = self.response_receiver.try_recv() {
            match response {
                ResponseMessage::QueryLoaded { side, path, result } => {
                    self.apply_loaded_query(side, path, result);
                }
            }
        }
    }

    fn handle_toolbar_action(
        &mut self,
        ctx: &egui::Context,
        action: ToolbarAction,
        result: &DiffResult,
    ) {
        match action {
            ToolbarAction::SetGranularity(granularity) => {
                info!("Comparing by {}", granularity);
                self.granularity = granularity;
                self.diff_view.reset();
            }
            ToolbarAction::SetShowUnchanged(show) => {
                self.show_unchanged = show;
            }
            ToolbarAction::Swap => {
                QueryEditor::swap_content(&mut self.original, &mut self.modified);
                self.diff_view.reset();
            }
            ToolbarAction::Clear => {
                self.original.clear();
                self.modified.clear();
                self.diff_view.reset();
            }
            ToolbarAction::CopyDiff => {
                let text = diff::render_text(&result.pairs, result.granularity);
                copy_with_notice(&mut self.clipboard, &mut self.toasts, "Diff", &text);
            }
            ToolbarAction::CopyJson => match serde_json::to_string_pretty(result) {
                Ok(json) => {
                    copy_with_notice(&mut self.clipboard, &mut self.toasts, "Diff JSON", &json);
                }
                Err(e) => {
                    error!("Failed to serialize diff: {}", e);
                    self.toasts
                        .notify(Notice::error(format!("Could not export diff: {}", e)));
                }
            },
            ToolbarAction::ToggleTheme => {
                let theme = self.config.settings.theme.toggled();
                self.config.settings.theme = theme;
                configure_style(ctx, theme);
                info!("Switched to {:?} theme", theme);
            }
        }
    }

    fn handle_editor_action(&mut self, side: Side, action: EditorAction) {
        match action {
            EditorAction::Open => {
                spawn_open_dialog(side, self.config.data_dir(), self.response_sender.clone());
            }
            EditorAction::Copy => {
                let editor = match side {
                    Side::Original => &self.original,
                    Side::Modified => &self.modified,
                };
                copy_with_notice(
                    &mut self.clipboard,
                    &mut self.toasts,
                    side.label(),
                    editor.content(),
                );
            }
        }
    }
}

impl eframe::App for QueryDiffApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for queries loaded in the background
        self.handle_responses();

        // Recomputed from scratch every frame
        let result = diff::compute_diff(
            self.original.content(),
            self.modified.content(),
            self.granularity,
        );

        // Toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar_panel")
            .show(ctx, |ui| {
                Toolbar::show(
                    ui,
                    ToolbarState {
                        granularity: self.granularity,
                        show_unchanged: self.show_unchanged,
                        stats: result.stats,
                        theme: self.config.settings.theme,
                        has_input: !self.original.content().is_empty()
                            || !self.modified.content().is_empty(),
                    },
                )
            })
            .inner;
        if let Some(action) = toolbar_action {
            self.handle_toolbar_action(ctx, action, &result);
        }

        // Query inputs
        let font_size = self.config.settings.font_size;
        let mut editor_actions = Vec::new();
        let mut edited = false;
        egui::TopBottomPanel::top("editors_panel")
            .resizable(true)
            .default_height(260.0)
            .show(ctx, |ui| {
                ui.columns(2, |columns| {
                    for (column, (side, editor)) in columns.iter_mut().zip([
                        (Side::Original, &mut self.original),
                        (Side::Modified, &mut self.modified),
                    ]) {
                        let (changed, action) = editor.show(column, font_size);
                        edited |= changed;
                        if let Some(action) = action {
                            editor_actions.push((side, action));
                        }
                    }
                });
            });
        for (side, action) in editor_actions {
            self.handle_editor_action(side, action);
        }
        if edited {
            self.diff_view.reset();
            ctx.request_repaint();
        }

        // Diff
        let options = DiffViewOptions {
            show_unchanged: self.show_unchanged,
            collapse_threshold: self.config.settings.collapse_threshold,
            font_size,
            theme: self.config.settings.theme,
        };
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("diff_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.diff_view.show(ui, &result, &options);
                });
        });

        show_toast(ctx, &mut self.toasts, self.config.settings.theme);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.settings.default_granularity = self.granularity;
        self.config.settings.show_unchanged = self.show_unchanged;
        if let Err(e) = self.config.save() {
            error!("Failed to save settings on exit: {}", e);
        }
    }
}
