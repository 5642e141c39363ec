// Greeter - Tiny stdin greeting function in Rust
// License: Apache-2.0

pub mod config;
pub mod greeting;
pub mod input;
pub mod logger;
pub mod request;
pub mod resolver;

pub use greeting::Greeting;
pub use resolver::{resolve_name, GreetingResolver, DEFAULT_NAME};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
