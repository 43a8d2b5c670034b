//! Template Text
//!
//! Strings and classes the DOM view renders.

/// Text after the bold counter: `<strong>N</strong> item(s) left`
pub fn item_counter_suffix(active: usize) -> &'static str {
    if active == 1 {
        "item left"
    } else {
        "items left"
    }
}

/// Label of the clear-completed button, empty when nothing is completed
pub fn clear_completed_label(completed: usize) -> &'static str {
    if completed > 0 {
        "Clear completed"
    } else {
        ""
    }
}

/// Class list of a list row
pub fn item_class(completed: bool, editing: bool) -> &'static str {
    match (completed, editing) {
        (true, true) => "completed editing",
        (true, false) => "completed",
        (false, true) => "editing",
        (false, false) => "",
    }
}

/// `display` value for a block shown or hidden by a render command
pub fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}
