//! Class helpers shared by the catalog pages. The rules live in `assets/main.css`.

pub fn button(active: bool) -> &'static str {
    if active {
        "btn btn-active"
    } else {
        "btn"
    }
}

/// Arrow appended to a header label; `Some(true)` is descending.
pub fn sort_indicator(direction: Option<bool>) -> &'static str {
    match direction {
        Some(true) => " ▼",
        Some(false) => " ▲",
        None => "",
    }
}

pub fn state_message(error: bool) -> &'static str {
    if error {
        "state-message state-error"
    } else {
        "state-message"
    }
}
