//! System-prompt templating: session-wide template, variable binding,
//! and request injection.

pub mod context;
pub mod injector;
pub mod templates;
pub mod variables;

pub use context::PromptContext;
pub use injector::intercept_request;
pub use templates::render_template;
pub use variables::{build_variables, VariableSet, FILE_LIST_VAR};
