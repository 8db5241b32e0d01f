pub mod not_found;
pub mod resource_page;

pub use not_found::NotFoundPage;
pub use resource_page::ResourcePage;
