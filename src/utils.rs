use console::style;

/// # `MessageType`
/// Trait for message types.
trait MessageType {
    /// The prefix for each message type (e.g., "ERROR")
    const PREFIX: &'static str;

    /// Whether to output to stderr (true) or stdout (false)
    const TO_STDERR: bool = false;

    /// Styles the prefix for terminal output.
    fn styled_prefix() -> String;
}

// Define the message types
struct Error;
struct Success;
struct Info;

// Implement the MessageType trait for each type
impl MessageType for Error {
    const PREFIX: &'static str = "ERROR";
    const TO_STDERR: bool = true;

    fn styled_prefix() -> String {
        style(Self::PREFIX).red().bold().to_string()
    }
}

impl MessageType for Success {
    const PREFIX: &'static str = "SUCCESS";

    fn styled_prefix() -> String {
        style(Self::PREFIX).green().bold().to_string()
    }
}

impl MessageType for Info {
    const PREFIX: &'static str = "INFO";

    fn styled_prefix() -> String {
        style(Self::PREFIX).cyan().to_string()
    }
}

/// # `format_message`
/// Formats a message.
///
/// ## Arguments
/// * `title` - The title of the message.
/// * `details` - The details of the message, omitted when empty.
///
/// ## Returns
/// * String - The formatted message.
fn format_message<T: MessageType>(title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{}: {title}", T::styled_prefix())
    } else {
        format!("{}: {title}\n\n{details}", T::styled_prefix())
    }
}

/// # `print_message`
/// Prints a message to stdout or stderr depending on its type.
fn print_message<T: MessageType>(title: &str, details: &str) {
    let message = format_message::<T>(title, details);

    if T::TO_STDERR {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
}

/// # `print_error`
/// Prints an error message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the error message.
/// - `details`: The details of the error message.
pub fn print_error(title: &str, details: &str) {
    print_message::<Error>(title, details);
}

/// # `print_success`
/// Prints a success message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the success message.
/// - `details`: The details of the success message.
pub fn print_success(title: &str, details: &str) {
    print_message::<Success>(title, details);
}

/// # `print_info`
/// Prints an informational message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the informational message.
/// - `details`: The details of the informational message.
pub fn print_info(title: &str, details: &str) {
    print_message::<Info>(title, details);
}

/// # `format_list`
/// Formats a list of items as an indented bullet list.
///
/// ## Arguments
/// - `items`: The list of items to format.
///
/// ## Returns
/// * String - A formatted string representation of the list.
pub fn format_list<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("  - {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
