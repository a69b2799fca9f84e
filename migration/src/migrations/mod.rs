pub mod m202610160001_create_authors;
pub mod m202610160002_create_articles;
