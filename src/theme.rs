use serde::{Deserialize, Serialize};

/// One of the two supported visual modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// What the toggle control shows for an active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleDisplay {
    pub icon: &'static str,
    pub label: &'static str,
}

impl Theme {
    pub fn opposite(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Sun while dark, moon while light; the label names the switch target.
    pub fn display(self) -> ToggleDisplay {
        match self {
            Theme::Dark => ToggleDisplay {
                icon: "☀️",
                label: "Switch to light mode",
            },
            Theme::Light => ToggleDisplay {
                icon: "🌙",
                label: "Switch to dark mode",
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(anyhow::anyhow!("unknown theme {other:?}")),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
