//! The submission evaluator: one registered callable, its parameter
//! declarations, and the state machine that turns a submission into an
//! outcome.
//!
//! A handler sits in one of two states for any given submission. When the
//! hidden trigger field named after the function is absent, the submission
//! is not addressed to it and the outcome is a blank form. When the trigger
//! is present, the handler marshals arguments, reports missing required
//! ones, or invokes the callable and renders what it returns.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{HandlerError, SchemaResult};
use crate::kind::{KindDecl, KindMap};
use crate::render;
use crate::render::form::form_markup;
use crate::schema::{extract_schema, FormSchema, Signature};
use crate::submission::{FieldValue, Submission};
use crate::value::ReturnValue;

/// What a callable returns: a rendering category or its own failure.
pub type HandlerResult = Result<ReturnValue, HandlerError>;

/// The registered callable. It borrows its arguments for the duration of
/// one evaluation, so file handles cannot outlive the request.
pub type HandlerFn = Box<dyn Fn(&CallArgs) -> HandlerResult + Send + Sync>;

/// Typed call arguments marshalled from one submission.
///
/// Required arguments arrive positionally in declaration order and are all
/// present. Optional arguments arrive by name; ones absent from the
/// submission carry no value.
#[derive(Debug)]
pub struct CallArgs<'s> {
    positional: Vec<FieldValue<'s>>,
    named: IndexMap<String, Option<FieldValue<'s>>>,
}

impl<'s> CallArgs<'s> {
    pub fn new(
        positional: Vec<FieldValue<'s>>,
        named: IndexMap<String, Option<FieldValue<'s>>>,
    ) -> Self {
        Self { positional, named }
    }

    /// Required arguments in declaration order.
    pub fn positional(&self) -> &[FieldValue<'s>] {
        &self.positional
    }

    /// An optional argument by name; `None` when the submission omitted it
    /// or the declaration never named it.
    pub fn named(&self, name: &str) -> Option<FieldValue<'s>> {
        self.named.get(name).copied().flatten()
    }

    /// The text content of a required argument.
    pub fn text(&self, index: usize) -> Option<&'s str> {
        self.positional.get(index).and_then(FieldValue::as_text)
    }

    /// The text content of an optional argument.
    pub fn named_text(&self, name: &str) -> Option<&'s str> {
        self.named(name).and_then(|value| value.as_text())
    }
}

/// One evaluation's terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The callable ran; this is its rendered result (or a rendered error
    /// fragment when the callable reported a failure).
    Markup(String),
    /// The submission did not target this function; a blank input form.
    FormRequired(String),
    /// Required arguments absent from the submission, in declaration order.
    MissingArguments(Vec<String>),
}

/// One function exposed as a web form.
pub struct FormHandler {
    name: String,
    about: String,
    signature: Signature,
    kinds: KindMap,
    handler: HandlerFn,
}

impl fmt::Debug for FormHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormHandler")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("kinds", &self.kinds)
            .finish_non_exhaustive()
    }
}

impl FormHandler {
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&CallArgs) -> HandlerResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            about: String::new(),
            signature: Signature::new(),
            kinds: KindMap::new(),
            handler: Box::new(handler),
        }
    }

    /// Attach pre-rendered help markup, shown under the form's legend.
    pub fn about(mut self, markup: impl Into<String>) -> Self {
        self.about = markup.into();
        self
    }

    /// Declare the next required parameter.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.signature.required.push(name.into());
        self
    }

    /// Declare the next optional parameter.
    pub fn optional(mut self, name: impl Into<String>) -> Self {
        self.signature.optional.push(name.into());
        self
    }

    /// Declare a parameter's field kind.
    pub fn kind(mut self, parameter: impl Into<String>, decl: impl Into<KindDecl>) -> Self {
        self.kinds.insert(parameter.into(), decl.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Merge startup kind declarations over the ones registered in code.
    pub(crate) fn merge_kinds(&mut self, kinds: &KindMap) {
        for (parameter, decl) in kinds {
            self.kinds.insert(parameter.clone(), decl.clone());
        }
    }

    /// Derive this handler's form schema, fresh on every call.
    pub fn schema(&self) -> SchemaResult<FormSchema> {
        extract_schema(&self.name, &self.about, &self.signature, &self.kinds)
    }

    /// Render this handler's blank input form.
    pub fn form(&self) -> SchemaResult<String> {
        Ok(form_markup(&self.schema()?))
    }

    /// Evaluate one submission against this handler.
    ///
    /// The schema is derived first either way; declaration defects surface
    /// as `Err` regardless of what was submitted. A submission without the
    /// trigger field yields [`Outcome::FormRequired`]; one with the trigger
    /// but missing required fields yields [`Outcome::MissingArguments`];
    /// otherwise the callable runs and its result (or reported failure) is
    /// rendered into [`Outcome::Markup`].
    pub fn evaluate(&self, submission: &dyn Submission) -> SchemaResult<Outcome> {
        let schema = self.schema()?;

        if submission.value(&self.name).is_none() {
            return Ok(Outcome::FormRequired(form_markup(&schema)));
        }

        let mut positional = Vec::with_capacity(self.signature.required.len());
        let mut missing = Vec::new();
        for name in &self.signature.required {
            match submission.value(name) {
                Some(value) => positional.push(value),
                None => missing.push(name.clone()),
            }
        }
        if !missing.is_empty() {
            return Ok(Outcome::MissingArguments(missing));
        }

        let mut named = IndexMap::with_capacity(self.signature.optional.len());
        for name in &self.signature.optional {
            named.insert(name.clone(), submission.value(name));
        }

        let args = CallArgs { positional, named };
        log::debug!("invoking '{}'", self.name);
        let markup = match (self.handler)(&args) {
            Ok(value) => render::render_return(value),
            Err(err) => {
                log::warn!("handler '{}' failed: {}", self.name, err);
                render::handler_failure(&self.name, err.message())
            }
        };
        Ok(Outcome::Markup(markup))
    }
}
