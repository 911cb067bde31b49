mod console;
mod prompt;
mod spinner;
mod style;

pub use console::ConsoleView;
pub use prompt::cancellable;
pub use spinner::Spinner;
pub use style::Style;
