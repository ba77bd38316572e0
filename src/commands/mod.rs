pub mod generate;
pub mod list;

pub use generate::{GenerateCommandArgs, GenerationSummary, execute_generate};
pub use list::execute_list;
