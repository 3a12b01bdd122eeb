use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Expected a <vector> root element, found <{found}>")]
    UnexpectedRoot { found: String },

    #[error("<{element}> is missing required attribute android:{attribute}")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("<aapt:attr name=\"{target}\"> must contain exactly one <gradient>, found {count}")]
    GradientCount { target: String, count: usize },

    #[error("<path> declares more than one inline value for {target}")]
    DuplicateGradient { target: String },

    #[error("Invalid number for {attribute}: {value:?}")]
    InvalidNumber { attribute: String, value: String },

    #[error("Unknown element <{element}> inside <{parent}>")]
    UnknownElement { element: String, parent: String },

    #[error("Unknown gradient type: {gradient_type:?}")]
    UnknownGradientType { gradient_type: String },

    #[error("Unknown inline attribute target: {target:?}")]
    UnknownAaptTarget { target: String },

    #[error("Unsupported color {color:?}: resource and theme references cannot be resolved")]
    UnsupportedColorReference { color: String },

    #[error("Unsupported gradient type: sweep gradients have no SVG equivalent")]
    UnsupportedSweepGradient,
}

/// Coarse failure classification shared by parsing and conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing, duplicate or misnamed required element, or a missing/invalid required value.
    Structural,
    /// Unrecognized element name or gradient type.
    UnknownVariant,
    /// Well-formed input that uses a feature SVG output cannot express.
    UnsupportedFeature,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Xml(_)
            | Error::UnexpectedRoot { .. }
            | Error::MissingAttribute { .. }
            | Error::GradientCount { .. }
            | Error::DuplicateGradient { .. }
            | Error::InvalidNumber { .. } => ErrorKind::Structural,
            Error::UnknownElement { .. }
            | Error::UnknownGradientType { .. }
            | Error::UnknownAaptTarget { .. } => ErrorKind::UnknownVariant,
            Error::UnsupportedColorReference { .. } | Error::UnsupportedSweepGradient => {
                ErrorKind::UnsupportedFeature
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Structural => "structural error",
            ErrorKind::UnknownVariant => "unknown variant",
            ErrorKind::UnsupportedFeature => "unsupported feature",
        })
    }
}
