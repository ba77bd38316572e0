pub mod collection;
pub mod variables;

pub use collection::{Collection, CollectionInfo, CollectionNode, Folder, HeaderDeclaration, RequestItem, TestScript};
pub use variables::{ACCESS_TOKEN_VAR, ENDPOINT_VAR, VariableMapping};
