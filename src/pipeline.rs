//! Pre/post interception facade wired up by the host widget.

use crate::artifact::process_response;
use crate::llm::{ChatRequest, ChatResponse};
use crate::prompt::{build_variables, intercept_request, PromptContext, VariableSet};
use crate::traits::SandboxController;

/// Per-session interceptor pair: system-prompt injection on the way
/// out, artifact extraction on the way back. Collaborators are passed
/// in explicitly rather than reached through globals, so the whole
/// pipeline runs against fakes in tests.
///
/// Both directions are re-entrant: no state is shared between calls
/// beyond the prompt context, which is read fresh on every request.
pub struct MessageInterceptor<'a> {
    context: PromptContext,
    sandbox: Option<&'a dyn SandboxController>,
}

impl<'a> MessageInterceptor<'a> {
    pub fn new(context: PromptContext, sandbox: Option<&'a dyn SandboxController>) -> Self {
        Self { context, sandbox }
    }

    /// Inject the resolved system prompt into an outgoing request.
    /// Variables are rebuilt from the live sandbox on every call, so
    /// the file list always reflects the tree at send time.
    pub fn before_request(&self, request: ChatRequest) -> ChatRequest {
        let vars = match self.sandbox {
            Some(sandbox) => build_variables(sandbox),
            None => VariableSet::new(),
        };
        intercept_request(&self.context.system_prompt(), request, &vars)
    }

    /// Extract artifacts from a completed response before display.
    pub fn after_response(&self, response: ChatResponse) -> ChatResponse {
        process_response(response, self.sandbox)
    }

    /// Handle to the session's prompt context, shared with the
    /// settings UI.
    pub fn context(&self) -> &PromptContext {
        &self.context
    }
}
