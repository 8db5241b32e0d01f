pub mod error_box;
pub mod layout;
pub mod load_more_controls;
pub mod resource_table;

pub use error_box::ErrorBox;
pub use load_more_controls::LoadMoreControls;
pub use resource_table::ResourceTable;
