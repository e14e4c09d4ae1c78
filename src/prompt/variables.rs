//! Contextual variable bindings rebuilt from the live sandbox state.

use std::collections::HashMap;

use tracing::warn;

use crate::traits::SandboxController;

pub type VariableSet = HashMap<String, String>;

/// Placeholder name bound to the sandbox file listing.
pub const FILE_LIST_VAR: &str = "fileList";

/// Bind `fileList` to the JSON-encoded list of sandbox paths. The
/// file tree snapshot is sorted by path, so the binding is stable
/// across calls on an unchanged sandbox.
pub fn build_variables(sandbox: &dyn SandboxController) -> VariableSet {
    let paths: Vec<String> = sandbox.files().into_keys().collect();

    let mut vars = VariableSet::new();
    match serde_json::to_string(&paths) {
        Ok(json) => {
            vars.insert(FILE_LIST_VAR.to_string(), json);
        }
        Err(e) => warn!(error = %e, "file list encoding failed"),
    }
    vars
}
