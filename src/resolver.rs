// Greeter - Name resolution from an input source

use crate::input::InputSource;
use crate::request::GreetingRequest;

/// Name used whenever the input yields nothing usable.
pub const DEFAULT_NAME: &str = "World";

/// Turns an input source into the name to greet. Never fails: every bad or
/// missing input resolves to [`DEFAULT_NAME`].
pub struct GreetingResolver<S> {
    source: S,
}

impl<S: InputSource> GreetingResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn resolve(mut self) -> String {
        if self.source.is_terminal() {
            tracing::debug!("input is a terminal, skipping read");
            return DEFAULT_NAME.to_string();
        }

        let bytes = match self.source.read_all().await {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!(error = %e, "no usable input");
                return DEFAULT_NAME.to_string();
            }
        };

        match GreetingRequest::parse(&bytes) {
            Ok(req) => match req.display_name() {
                Some(name) => name.to_string(),
                None => {
                    tracing::debug!("request has no name");
                    DEFAULT_NAME.to_string()
                }
            },
            Err(e) => {
                tracing::debug!(error = %e, "could not parse request");
                DEFAULT_NAME.to_string()
            }
        }
    }
}

/// Resolve the greeting name from `source`.
pub async fn resolve_name<S: InputSource>(source: S) -> String {
    GreetingResolver::new(source).resolve().await
}
