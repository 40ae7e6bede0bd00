pub mod progress_bar;
pub mod question_card;
pub mod reveal_panel;
pub mod summary;
