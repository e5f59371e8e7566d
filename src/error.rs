// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Palette(PaletteError),
}

/// Errors raised while building or mutating a texture palette.
///
/// These represent caller-contract violations; the runtime interaction paths
/// (pressing cells, swapping images, reading label files) absorb their
/// failure modes locally instead of surfacing them here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// The requested grid side was zero, which would make the value step
    /// `1 / (side * side)` undefined.
    ZeroGridSide,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::ZeroGridSide => {
                write!(f, "palette grid side must be at least 1")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Palette(e) => write!(f, "Palette Error: {}", e),
        }
    }
}

impl From<PaletteError> for Error {
    fn from(err: PaletteError) -> Self {
        Error::Palette(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
