use query_diff::app::QueryDiffApp;
use query_diff::constant;
use query_diff::ui;
use std::path::PathBuf;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // query-diff [ORIGINAL.sql] [MODIFIED.sql]
    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let original_file = args.next();
    let modified_file = args.next();

    let options = ui::viewport::build_viewport();

    eframe::run_native(
        constant::DEFAULT_WINDOW_TITLE,
        options,
        Box::new(|cc| {
            let app = QueryDiffApp::new(cc, original_file, modified_file);
            Ok(Box::new(app))
        }),
    )
}
