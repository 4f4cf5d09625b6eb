pub mod history_log;
pub mod map_view;
pub mod score_panel;
