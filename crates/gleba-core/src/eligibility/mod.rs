pub mod interpreter;
pub mod resolver;

pub use interpreter::interpret_eligibility;
pub use resolver::{resolve_category_area, resolve_category_area_by_key};
