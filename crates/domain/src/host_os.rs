use std::fmt;

/// Operating system families with their own DNS configuration sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOs {
    Windows,
    Linux,
    MacOs,
    Other,
}

impl HostOs {
    pub fn current() -> Self {
        Self::from_identity(std::env::consts::OS)
    }

    pub fn from_identity(os: &str) -> Self {
        match os.to_lowercase().as_str() {
            "windows" => HostOs::Windows,
            "linux" => HostOs::Linux,
            "macos" | "darwin" => HostOs::MacOs,
            _ => HostOs::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostOs::Windows => "Windows",
            HostOs::Linux => "Linux",
            HostOs::MacOs => "Darwin",
            HostOs::Other => "Other",
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
