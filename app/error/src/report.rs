//! Fault reports and the build mode that shapes them

use core::fmt;
use core::panic::Location;

/// Whether fault reports embed their source location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Reports carry the call-site line and file
    Diagnostic,
    /// Reports carry line `0` and no file
    Release,
}

impl BuildMode {
    /// Check if reports built in this mode carry a location
    pub const fn embeds_location(self) -> bool {
        matches!(self, BuildMode::Diagnostic)
    }
}

/// Build mode selected by the `diagnostic` feature
pub const BUILD_MODE: BuildMode = if cfg!(feature = "diagnostic") {
    BuildMode::Diagnostic
} else {
    BuildMode::Release
};

#[cfg(feature = "defmt")]
impl defmt::Format for BuildMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BuildMode::Diagnostic => defmt::write!(fmt, "Diagnostic"),
            BuildMode::Release => defmt::write!(fmt, "Release"),
        }
    }
}

/// A single fault, as handed to the fault handler
///
/// Built at the call site and passed on immediately. `line` is `0` and
/// `file` is `None` when the location was not embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultReport {
    /// Error code supplied by the caller
    pub error_code: u32,
    /// Line the fault was reported from, or 0
    pub line: u32,
    /// File the fault was reported from
    pub file: Option<&'static str>,
}

impl FaultReport {
    /// Create a report from its raw parts
    pub const fn new(error_code: u32, line: u32, file: Option<&'static str>) -> Self {
        Self {
            error_code,
            line,
            file,
        }
    }

    /// Create a report carrying `location`
    pub fn at(error_code: u32, location: &'static Location<'static>) -> Self {
        Self::new(error_code, location.line(), Some(location.file()))
    }

    /// Create a report without a location
    pub const fn anonymous(error_code: u32) -> Self {
        Self::new(error_code, 0, None)
    }

    /// Create a report for the current build mode
    pub fn capture(error_code: u32, location: &'static Location<'static>) -> Self {
        Self::capture_in(BUILD_MODE, error_code, location)
    }

    /// Create a report as `mode` would
    pub fn capture_in(
        mode: BuildMode,
        error_code: u32,
        location: &'static Location<'static>,
    ) -> Self {
        if mode.embeds_location() {
            Self::at(error_code, location)
        } else {
            Self::anonymous(error_code)
        }
    }

    /// Check if the report names a source file
    pub const fn has_location(&self) -> bool {
        self.file.is_some()
    }
}

impl fmt::Display for FaultReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file {
            Some(file) => write!(f, "fault {:#010X} at {}:{}", self.error_code, file, self.line),
            None => write!(f, "fault {:#010X} (no location)", self.error_code),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FaultReport {}

#[cfg(feature = "defmt")]
impl defmt::Format for FaultReport {
    fn format(&self, fmt: defmt::Formatter) {
        match self.file {
            Some(file) => defmt::write!(
                fmt,
                "fault {=u32:#X} at {=str}:{=u32}",
                self.error_code,
                file,
                self.line
            ),
            None => defmt::write!(fmt, "fault {=u32:#X} (no location)", self.error_code),
        }
    }
}
