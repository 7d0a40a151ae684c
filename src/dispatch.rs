//! The multi-function dispatcher: one submission evaluated against every
//! registered form in turn.

use crate::handler::{FormHandler, Outcome};
use crate::kind::KindConfig;
use crate::render;
use crate::submission::Submission;

/// Navigation control appended to short-circuited responses so the user can
/// return to the blank forms.
pub const BACK_TO_FORM: &str = "<form><input type=\"submit\" value=\"Back to Form\"></form>";

/// An ordered collection of form handlers evaluated against one submission
/// per request.
#[derive(Debug, Default)]
pub struct Dispatcher {
    handlers: Vec<FormHandler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Evaluation order is registration order.
    pub fn register(mut self, handler: FormHandler) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn handlers(&self) -> &[FormHandler] {
        &self.handlers
    }

    /// Merge startup kind declarations into registered handlers by function
    /// name. Declarations for unregistered functions are ignored.
    pub fn apply_kinds(&mut self, config: &KindConfig) {
        for handler in &mut self.handlers {
            if let Some(kinds) = config.get(handler.name()) {
                handler.merge_kinds(kinds);
            }
        }
        for (function, _) in config.iter() {
            if !self.handlers.iter().any(|h| h.name() == function) {
                log::debug!("kind config names unregistered function '{}'", function);
            }
        }
    }

    /// Evaluate every handler against one submission and assemble the
    /// response body.
    ///
    /// The first handler still awaiting its submission or missing required
    /// arguments short-circuits the pass; its form or correction prompt is
    /// returned with a back-to-form control appended, and later handlers are
    /// not evaluated. When every handler was invoked, their rendered results
    /// concatenate in registration order. Handlers whose declarations fail
    /// schema extraction are skipped and logged.
    pub fn dispatch(&self, submission: &dyn Submission) -> String {
        let mut body = String::new();
        for handler in &self.handlers {
            match handler.evaluate(submission) {
                Ok(Outcome::Markup(markup)) => body.push_str(&markup),
                Ok(Outcome::FormRequired(markup)) => {
                    log::debug!("'{}' awaits its submission", handler.name());
                    return with_back_control(markup);
                }
                Ok(Outcome::MissingArguments(names)) => {
                    log::debug!(
                        "'{}' missing arguments: {}",
                        handler.name(),
                        names.join(", ")
                    );
                    return with_back_control(render::missing_arguments(&names));
                }
                Err(err) => {
                    log::warn!("skipping form section '{}': {}", handler.name(), err);
                }
            }
        }
        body
    }

    /// Render every registered form blank, in registration order. This is
    /// the landing page before anything was submitted. Handlers whose
    /// declarations fail schema extraction are skipped and logged.
    pub fn all_forms(&self) -> String {
        let mut body = String::new();
        for handler in &self.handlers {
            match handler.form() {
                Ok(markup) => body.push_str(&markup),
                Err(err) => {
                    log::warn!("skipping form section '{}': {}", handler.name(), err);
                }
            }
        }
        body
    }
}

fn with_back_control(mut markup: String) -> String {
    markup.push_str(BACK_TO_FORM);
    markup
}
