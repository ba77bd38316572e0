pub mod collection;
pub mod variables;

pub use collection::load_collection;
pub use variables::load_variables;
