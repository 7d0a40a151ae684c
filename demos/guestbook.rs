//! A two-function guest book driven the way a host transport would drive
//! it: render the landing page, then dispatch a few submissions.
//!
//! Run with `cargo run --example guestbook`.

use formbridge::{
    CallArgs, Dispatcher, FormHandler, HandlerResult, KindConfig, MemorySubmission, Record,
    ReturnValue,
};

fn sign(args: &CallArgs) -> HandlerResult {
    let name = args.text(0).unwrap_or("anonymous");
    let message = args.text(1).unwrap_or("");
    let mood = args.named_text("mood").unwrap_or("cheerful");
    Ok(ReturnValue::Text(format!(
        "Thanks {name}!\n\nYour {mood} note was recorded:\n\n{message}"
    )))
}

fn entries(_args: &CallArgs) -> HandlerResult {
    Ok(ReturnValue::Records(vec![
        Record::new().set("author", "ada").set("note", "What a lovely machine."),
        Record::new().set("author", "charles").set("note", "Engines ready."),
    ]))
}

fn main() {
    env_logger::init();

    let kinds = KindConfig::from_json(r#"{"sign": {"mood": ["cheerful", "grumpy"]}}"#)
        .expect("static kind config parses");

    let mut forms = Dispatcher::new()
        .register(
            FormHandler::new("sign", sign)
                .about("<p>Leave a note in the guest book.</p>")
                .required("name")
                .required("message")
                .optional("mood"),
        )
        .register(FormHandler::new("entries", entries));
    forms.apply_kinds(&kinds);

    println!("--- landing page ---\n{}", forms.all_forms());

    let complete = MemorySubmission::new()
        .text("sign", "sign")
        .text("entries", "entries")
        .text("name", "Ada")
        .text("message", "What a lovely machine.")
        .text("mood", "grumpy");
    println!("--- complete submission ---\n{}", forms.dispatch(&complete));

    let incomplete = MemorySubmission::new().text("sign", "sign").text("name", "Ada");
    println!("--- incomplete submission ---\n{}", forms.dispatch(&incomplete));
}
