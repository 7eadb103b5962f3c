//! Best-effort clipboard sink. A failure here never aborts generation.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::warn;

pub fn copy_to_clipboard(value: &str) {
    let result = ClipboardContext::new()
        .and_then(|mut ctx| ctx.set_contents(value.to_string()));
    if let Err(err) = result {
        warn!("failed to copy to clipboard: {err}");
    }
}
