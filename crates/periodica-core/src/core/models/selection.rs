use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The radiation whose attenuation coefficient shades the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Modality {
    #[default]
    #[serde(rename = "Neutrons")]
    Neutrons,
    #[serde(rename = "X-ray")]
    XRay,
}

impl Modality {
    pub const ALL: [Modality; 2] = [Modality::Neutrons, Modality::XRay];
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modality::Neutrons => f.write_str("Neutrons"),
            Modality::XRay => f.write_str("X-ray"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown modality '{0}'. Expected 'neutrons' or 'x-ray'.")]
pub struct ParseModalityError(String);

impl FromStr for Modality {
    type Err = ParseModalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neutrons" | "neutron" => Ok(Modality::Neutrons),
            "x-ray" | "xray" | "x-rays" => Ok(Modality::XRay),
            _ => Err(ParseModalityError(s.to_string())),
        }
    }
}

/// What the user asked to see for a single render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub modality: Modality,
    /// Extra columns shown on hover, in display order.
    pub displayed_fields: Vec<String>,
}

impl Selection {
    pub fn new<I, S>(modality: Modality, displayed_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modality,
            displayed_fields: displayed_fields.into_iter().map(Into::into).collect(),
        }
    }
}
