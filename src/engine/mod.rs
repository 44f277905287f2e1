// engine module — opportunity backend boundary

mod interface;
pub mod stub;
mod subscriptions;

pub use interface::{Engine, EngineHandle, Event, Request};
pub use stub::StubEngine;
pub use subscriptions::Subscriptions;
