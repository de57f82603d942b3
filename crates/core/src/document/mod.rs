pub mod model;
pub mod validate;

pub use model::{Block, Document, Section, SECTION_TYPE};
pub use validate::check_grammar;
