// Greeter - Output line

use std::fmt;

/// The single line printed for a resolved name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub name: String,
    /// Optional "from ..." annotation naming the runtime that answered.
    pub runtime: Option<String>,
}

impl Greeting {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runtime: None,
        }
    }

    /// Annotate the greeting with this build's name and version.
    pub fn with_runtime(mut self) -> Self {
        self.runtime = Some(runtime_label());
        self
    }
}

/// e.g. `greeter 0.1.0`
pub fn runtime_label() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), crate::VERSION)
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hello {} !!!", self.name)?;
        if let Some(ref rt) = self.runtime {
            write!(f, " from {}", rt)?;
        }
        Ok(())
    }
}
