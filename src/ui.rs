pub mod diff_view;
pub mod editor;
pub mod toast;
pub mod toolbar;
pub mod viewport;
