use dialog::{Choice, DialogBox};

/// Blocking message box
pub fn msg(title: &str, contents: &str) {
    if let Err(e) = dialog::Message::new(contents).title(title).show() {
        log::warn!("Could not show dialog '{}': {}", title, e);
        log::info!("{}: {}", title, contents);
    }
}

pub fn yesno(title: &str, contents: &str) -> bool {
    if let Ok(prompt) = dialog::Question::new(contents).title(title).show() {
        if prompt == Choice::Yes {
            return true;
        }
    }
    false
}
