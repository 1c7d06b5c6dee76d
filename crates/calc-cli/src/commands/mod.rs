mod clear_history;
mod history;
mod keys;
mod misc;
mod press;
mod session;

pub use clear_history::handle_clear_history;
pub use history::handle_history;
pub use keys::handle_keys;
pub use misc::handle_completions;
pub use press::handle_press;
pub use session::handle_session;
