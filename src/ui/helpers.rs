//! UI helper functions

/// Wrap text to a maximum width, breaking on whitespace and hard-splitting
/// words longer than the width.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        // Hard-split words that cannot fit on any line
        while word.chars().count() > max_width {
            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            let head: String = word.chars().take(max_width).collect();
            word = word.chars().skip(max_width).collect();
            lines.push(head);
        }
        if word.is_empty() {
            continue;
        }
        if current_line.is_empty() {
            current_line = word;
        } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
            current_line.push(' ');
            current_line.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
