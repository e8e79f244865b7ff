use std::sync::Arc;

use crate::cli::app::{ClassifyArgs, Origin};
use crate::config::Config;
use crate::notify::{ErrorEvent, NotificationRequest, ToastBoard};

use super::build_notifier;

pub async fn handle_classify(args: ClassifyArgs, config: &Config) -> anyhow::Result<()> {
    let event = build_event(&args);
    let notifier = build_notifier(
        &config.notifications,
        Arc::new(ToastBoard::new()),
        !args.offline,
    )?;

    let delivery = notifier.classify_and_notify(event);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&delivery.request)?);
    } else {
        print!("{}", render_request(&delivery.request));
        if let Some(handle) = delivery.handle {
            println!("Toast: {handle}");
        }
    }
    Ok(())
}

pub fn build_event(args: &ClassifyArgs) -> ErrorEvent {
    let message = args.message.clone().unwrap_or_default();
    let stack = (!args.stack_lines.is_empty()).then(|| args.stack_lines.clone());
    match args.origin {
        Origin::Http => ErrorEvent::Http {
            status: args.status,
            message,
            stack,
        },
        Origin::Library => ErrorEvent::LibraryRequest {
            status: args.status,
            message,
            stack,
        },
        Origin::Generic => ErrorEvent::Generic {
            name: args.name.clone(),
            message: args.message.clone(),
            stack,
        },
        Origin::Text => ErrorEvent::Text(message),
    }
}

fn render_request(request: &NotificationRequest) -> String {
    let auto_close = match request.auto_close_after_ms() {
        Some(ms) => format!("{ms} ms"),
        None => "never".to_string(),
    };
    let mut out = format!(
        "Kind: {}\nRoute: {:?}\nAuto-close: {auto_close}\n",
        request.kind.as_str(),
        request.route
    );
    if !request.is_suppressed() {
        out.push_str(&format!("Message: {}\n", request.payload.display_text()));
    }
    out
}
