// Language Feature 3: Advanced Delegates - Multicast, Callbacks, Lambdas
// One notification handler fans out to several channels, a callback runs
// after work completes, and closures stand in for named functions.

use oop_design_patterns::console;
use oop_design_patterns::delegate::{HandlerId, Multicast};
use std::cell::RefCell;
use std::rc::Rc;

type NotificationHandler = Multicast<str>;

/// Collects printed lines so the demo output can be asserted on.
#[derive(Debug, Default, Clone)]
struct Outbox {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Outbox {
    fn send(&self, line: String) {
        println!("{}", line);
        self.lines.borrow_mut().push(line);
    }

    fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

fn email_notification(outbox: &Outbox) -> impl Fn(&str) + 'static {
    let outbox = outbox.clone();
    move |message: &str| outbox.send(format!("Email notification: {}", message))
}

fn sms_notification(outbox: &Outbox) -> impl Fn(&str) + 'static {
    let outbox = outbox.clone();
    move |message: &str| outbox.send(format!("SMS notification: {}", message))
}

// ============================================================================
// Example: Multicast Notification
// ============================================================================

struct Notifier {
    handler: NotificationHandler,
    email: HandlerId,
    sms: HandlerId,
}

fn build_notifier(outbox: &Outbox) -> Notifier {
    let mut handler = NotificationHandler::new();
    let email = handler.add(email_notification(outbox));
    let sms = handler.add(sms_notification(outbox));
    Notifier { handler, email, sms }
}

fn multicast_example(outbox: &Outbox) {
    let mut notifier = build_notifier(outbox);
    notifier.handler.invoke("System update completed.");

    // -= on the SMS target
    notifier.handler.remove(notifier.sms);
    println!("(SMS unsubscribed, email id {:?} still attached)", notifier.email);
    notifier.handler.invoke("Maintenance window tonight.");
}

// ============================================================================
// Example: Callback
// ============================================================================

fn process_completed(outbox: &Outbox) {
    outbox.send("Process completed!".to_string());
}

/// Does the work, then runs the callback if one was supplied.
fn after_process(outbox: &Outbox, callback: Option<&dyn Fn()>) {
    outbox.send("Processing...".to_string());
    if let Some(callback) = callback {
        callback();
    }
}

fn callback_example(outbox: &Outbox) {
    let on_done = || process_completed(outbox);
    after_process(outbox, Some(&on_done));
    after_process(outbox, None);
}

// ============================================================================
// Example: Lambda
// ============================================================================

fn lambda_example(outbox: &Outbox) {
    let sink = outbox.clone();
    let lambda_notification =
        NotificationHandler::with(move |message: &str| sink.send(format!("Lambda notification: {}", message)));
    lambda_notification.invoke("New message received.");
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    console::init_logging();
    console::header("Advanced Delegates");
    let outbox = Outbox::default();

    println!("=== Multicast Notification ===");
    multicast_example(&outbox);
    println!();

    println!("=== Callback ===");
    callback_example(&outbox);
    println!();

    println!("=== Lambda ===");
    lambda_example(&outbox);

    tracing::debug!(lines = outbox.lines().len(), "notifications sent");
    console::pause();
}
