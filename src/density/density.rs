use serde::Deserialize;
use serde::Serialize;

/// Shape of the voter distribution along the line.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Density {
    /// Every position carries the same voter mass.
    #[default]
    Uniform,
    /// Standard normal truncated to [-2, 2], binned into M equal intervals.
    Normal,
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

impl TryFrom<&str> for Density {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            "normal" => Ok(Self::Normal),
            other => Err(format!("unknown density: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Density::try_from("Normal"), Ok(Density::Normal));
        assert_eq!(Density::try_from(" uniform "), Ok(Density::Uniform));
        assert!(Density::try_from("bimodal").is_err());
    }

    #[test]
    fn display_parses_back() {
        for density in [Density::Uniform, Density::Normal] {
            assert_eq!(Density::try_from(density.to_string().as_str()), Ok(density));
        }
    }
}
