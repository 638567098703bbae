// Reusable components live here.

pub mod archive_picker;
pub mod article_card;
pub mod cover_image;
pub mod error_banner;
pub mod footer;
pub mod header;
pub mod hero;
pub mod journal_tabs;
pub mod loading_spinner;
pub mod markdown_block;
