use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Green success marker when stdout is a terminal, plain text otherwise.
pub fn success(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

/// Bold section heading when stdout is a terminal.
pub fn heading(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
