pub mod article;
pub mod author;
