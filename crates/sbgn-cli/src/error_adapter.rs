//! Error adapter for rendering [`CliError`] as a miette diagnostic.
//!
//! SBGN-ML errors carry no source spans, so the adapter contributes an error
//! code and, where one applies, a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use sbgn::SbgnError;

use crate::error::CliError;

/// Adapter implementing [`MietteDiagnostic`] for a borrowed [`CliError`].
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Io(_) => "sbgn::io",
            CliError::Config(_) => "sbgn::config",
            CliError::Sbgn(SbgnError::Xml(_)) => "sbgn::xml",
            CliError::Sbgn(SbgnError::Structure(_)) => "sbgn::structure",
            CliError::Sbgn(SbgnError::Config { .. }) => "sbgn::fields",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Sbgn(SbgnError::Xml(_)) => "the input is not well-formed XML",
            CliError::Sbgn(SbgnError::Structure(_)) => {
                "an SBGN-ML document has an <sbgn> root declaring its namespace with xmlns"
            }
            CliError::Config(_) => "check the [output] section of the configuration file",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
