//! Declarative input (functions, events, response specs) and the compiled
//! template they are applied to.

pub mod response;
pub mod service;
pub mod template;

pub use response::*;
pub use service::*;
pub use template::*;
