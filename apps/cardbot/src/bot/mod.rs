// Chat front end: menu dispatch and the single in-flight dialog turn.
// The chat-platform transport lives outside this service; it forwards user
// text here and relays the reply (photo or text with keyboard).

pub mod dialog;
pub mod handlers;
pub mod messages;

pub use dialog::DialogStore;
