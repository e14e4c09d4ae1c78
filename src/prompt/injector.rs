//! Writes the resolved system prompt into the outgoing request.

use super::templates::render_template;
use super::variables::VariableSet;
use crate::llm::ChatRequest;

/// Resolve `template` against `vars` and overwrite the request's
/// instruction field. Every other field (model, messages, sampling
/// parameters) passes through untouched. Pure and re-entrant: no I/O,
/// no shared state, safe to call on every outgoing request.
pub fn intercept_request(
    template: &str,
    mut request: ChatRequest,
    vars: &VariableSet,
) -> ChatRequest {
    request.system_prompt = Some(render_template(template, vars));
    request
}
