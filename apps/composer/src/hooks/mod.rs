// Profile write hooks: event payloads and the handlers that run the composer.

pub mod event;
pub mod handlers;
