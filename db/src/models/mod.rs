pub mod article;
pub mod author;

pub use article::Entity as Article;
pub use author::Entity as Author;
pub use author::PayoutNetwork;
