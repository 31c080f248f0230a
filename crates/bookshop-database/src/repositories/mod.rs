//! Repositories for Bookshop entities.

pub mod author;
pub mod book;
pub mod list;

pub use author::AuthorRepository;
pub use book::BookRepository;
pub use list::ListRepository;
