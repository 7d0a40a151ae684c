//! Multi-function page scenarios: registration, startup kind config, and
//! the short-circuit rules for assembling one response from many forms.

use formbridge::{
    CallArgs, Dispatcher, FormHandler, HandlerResult, KindConfig, MemorySubmission, Record,
    ReturnValue, BACK_TO_FORM,
};

fn sign(args: &CallArgs) -> HandlerResult {
    let name = args.text(0).unwrap_or("anonymous");
    let message = args.text(1).unwrap_or("");
    Ok(ReturnValue::Text(format!("{name} wrote: {message}")))
}

fn entries(_args: &CallArgs) -> HandlerResult {
    Ok(ReturnValue::Records(vec![
        Record::new().set("author", "ada").set("note", "first"),
        Record::new().set("author", "grace").set("note", "second"),
    ]))
}

fn guestbook() -> Dispatcher {
    Dispatcher::new()
        .register(
            FormHandler::new("sign", sign)
                .about("<p>Leave a note.</p>")
                .required("name")
                .required("message")
                .optional("mood"),
        )
        .register(FormHandler::new("entries", entries))
}

#[test]
fn test_landing_page_lists_every_form_without_navigation_controls() {
    let page = guestbook().all_forms();

    assert!(page.contains("<legend>Sign</legend>"));
    assert!(page.contains("<legend>Entries</legend>"));
    assert!(page.contains("<p>Leave a note.</p>"));
    assert!(!page.contains(BACK_TO_FORM));
}

#[test]
fn test_first_unsubmitted_form_short_circuits_the_page() {
    let page = guestbook().dispatch(&MemorySubmission::new());

    assert!(page.contains("<legend>Sign</legend>"));
    assert!(!page.contains("<legend>Entries</legend>"));
    assert!(page.ends_with(BACK_TO_FORM));
}

#[test]
fn test_incomplete_submission_gets_a_correction_prompt() {
    let submission = MemorySubmission::new()
        .text("sign", "sign")
        .text("entries", "entries")
        .text("name", "ada");
    let page = guestbook().dispatch(&submission);

    assert!(page.contains("missing arguments: message."));
    assert!(page.ends_with(BACK_TO_FORM));
    // The entries table never rendered.
    assert!(!page.contains("<table>"));
}

#[test]
fn test_complete_submission_renders_every_section() {
    let submission = MemorySubmission::new()
        .text("sign", "sign")
        .text("entries", "entries")
        .text("name", "ada")
        .text("message", "hello there");
    let page = guestbook().dispatch(&submission);

    let note = page.find("<p>ada wrote: hello there</p>").unwrap();
    let table = page.find("<table>").unwrap();
    assert!(note < table);
    assert!(page.contains("<th>Author</th><th>Note</th>"));
    assert!(!page.contains(BACK_TO_FORM));
}

#[test]
fn test_submission_targeting_one_function_still_waits_on_the_other() {
    // Only entries was triggered; sign still wants its submission, and it
    // is registered first, so its form wins the pass.
    let submission = MemorySubmission::new().text("entries", "entries");
    let page = guestbook().dispatch(&submission);

    assert!(page.contains("<legend>Sign</legend>"));
    assert!(!page.contains("<table>"));
    assert!(page.ends_with(BACK_TO_FORM));
}

#[test]
fn test_kind_config_from_json_turns_fields_into_selects() {
    let config = KindConfig::from_json(
        r#"{"sign": {"mood": ["cheerful", "grumpy", "wistful"]}}"#,
    )
    .unwrap();

    let mut forms = guestbook();
    forms.apply_kinds(&config);
    let page = forms.all_forms();

    assert!(page.contains("<select name=\"mood\" id=\"mood\">"));
    assert!(page.contains("<option value=\"wistful\">Wistful</option>"));
}

#[test]
fn test_unknown_functions_in_kind_config_are_ignored() {
    let config = KindConfig::new().declare("no_such_form", "field", "file");

    let mut forms = guestbook();
    forms.apply_kinds(&config);

    // Page renders exactly as without the config.
    assert_eq!(forms.all_forms(), guestbook().all_forms());
}

#[test]
fn test_registration_order_is_evaluation_order() {
    fn first(_args: &CallArgs) -> HandlerResult {
        Ok(ReturnValue::Text("first".to_string()))
    }
    fn second(_args: &CallArgs) -> HandlerResult {
        Ok(ReturnValue::Text("second".to_string()))
    }

    let forms = Dispatcher::new()
        .register(FormHandler::new("alpha", first))
        .register(FormHandler::new("beta", second));
    let submission = MemorySubmission::new()
        .text("alpha", "alpha")
        .text("beta", "beta");

    assert_eq!(forms.dispatch(&submission), "<p>first</p><p>second</p>");
}
