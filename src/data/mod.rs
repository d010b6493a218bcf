pub mod directory;
pub mod plan;
pub mod selection;
pub mod validate;
