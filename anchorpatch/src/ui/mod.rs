pub mod diff_viewer;
pub mod output_format;
pub mod patch_summary;
pub mod theme;
