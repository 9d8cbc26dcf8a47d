mod app;
mod message;
mod screens;

pub use app::run;
pub use message::Message;
