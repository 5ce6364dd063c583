//! Message-reactive bot rules

pub mod responder;

pub use responder::{MessageSender, PING_TRIGGER, PONG_REPLY, PingResponder, contains_trigger};
