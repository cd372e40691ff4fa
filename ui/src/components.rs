pub mod cycling_text;
pub mod nav_bar;
pub mod progress_bar;
pub mod project_card;
pub mod section;
