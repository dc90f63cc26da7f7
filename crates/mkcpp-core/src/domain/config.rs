//! Project configuration: the three user-confirmed settings.
//!
//! A [`ProjectConfiguration`] is captured once by the configuration-capture
//! stage and is immutable afterwards; every later stage receives it by
//! reference and may only read it.
//!
//! The classification functions in this module are pure: they take one line
//! of raw user input and say what it means. The retry machinery (prompting,
//! diagnostics, end-of-input handling) lives in the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The C++ language standard a generated project compiles against.
///
/// Input token `20` is stored as [`LanguageStandard::Cpp2a`] — the compiler
/// spells the experimental standard `c++2a`, so the normalised form is the
/// *accepted* representation, never the raw `20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageStandard {
    Cpp14,
    Cpp17,
    Cpp2a,
}

impl LanguageStandard {
    /// The standard's short token as it appears in compiler flags.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Cpp14 => "14",
            Self::Cpp17 => "17",
            Self::Cpp2a => "2a",
        }
    }

    /// The full `-std=` compiler flag.
    pub fn flag(&self) -> String {
        format!("-std=c++{}", self.token())
    }
}

impl std::fmt::Display for LanguageStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c++{}", self.token())
    }
}

/// Whether the generated project is built with C++ exceptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExceptionSupport {
    Enabled,
    Disabled,
}

impl ExceptionSupport {
    /// The compiler flag this setting renders as.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Enabled => "-fexceptions",
            Self::Disabled => "-fno-exceptions",
        }
    }
}

impl std::fmt::Display for ExceptionSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// The full set of user-confirmed settings for one generation run.
///
/// Immutable once constructed; no later stage mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfiguration {
    name: String,
    standard: LanguageStandard,
    exceptions: ExceptionSupport,
}

impl ProjectConfiguration {
    /// Build a configuration from already-validated field values.
    ///
    /// The name must be non-empty — the only validity rule the name has.
    /// Anything else, including strings that are awkward as filesystem
    /// paths, is accepted verbatim.
    pub fn new(
        name: impl Into<String>,
        standard: LanguageStandard,
        exceptions: ExceptionSupport,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        Ok(Self {
            name,
            standard,
            exceptions,
        })
    }

    /// Project name: directory root, CMake project name, and executable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn standard(&self) -> LanguageStandard {
        self.standard
    }

    pub fn exceptions(&self) -> ExceptionSupport {
        self.exceptions
    }

    /// The combined compiler-flags string interpolated into the descriptor.
    pub fn compiler_flags(&self) -> String {
        format!("{} {}", self.standard.flag(), self.exceptions.flag())
    }
}

// ── input classification ──────────────────────────────────────────────────────

/// Outcome of classifying one line of user input for a single field.
///
/// `Rejected` covers both recognised-but-unsupported values and unrecognised
/// ones; the reason string carries the field-specific diagnostic that the
/// capture loop echoes before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
    Accepted(T),
    Rejected(String),
}

/// Classify a project-name line. Non-empty input is accepted as-is.
pub fn classify_name(input: &str) -> Validation<String> {
    if input.is_empty() {
        Validation::Rejected("project name must not be empty".into())
    } else {
        Validation::Accepted(input.to_string())
    }
}

/// Classify a language-standard line.
///
/// `14` and `17` are stored verbatim; `20` normalises to `2a`. The historic
/// standards `98`, `03` and `11` are recognised but explicitly unsupported,
/// and get a diagnostic distinct from garbage input.
pub fn classify_standard(input: &str) -> Validation<LanguageStandard> {
    match input {
        "14" => Validation::Accepted(LanguageStandard::Cpp14),
        "17" => Validation::Accepted(LanguageStandard::Cpp17),
        "20" => Validation::Accepted(LanguageStandard::Cpp2a),
        "98" | "03" | "11" => Validation::Rejected(format!(
            "C++{input} is not supported; choose one of 14, 17 or 20"
        )),
        "" => Validation::Rejected("no standard given; choose one of 14, 17 or 20".into()),
        other => Validation::Rejected(format!(
            "unrecognized standard '{other}'; choose one of 14, 17 or 20"
        )),
    }
}

/// Classify a yes/no exceptions line, case-insensitively.
pub fn classify_exceptions(input: &str) -> Validation<ExceptionSupport> {
    match input.to_ascii_lowercase().as_str() {
        "y" | "yes" => Validation::Accepted(ExceptionSupport::Enabled),
        "n" | "no" => Validation::Accepted(ExceptionSupport::Disabled),
        "" => Validation::Rejected("no answer given; please answer y or n".into()),
        other => Validation::Rejected(format!("unrecognized answer '{other}'; please answer y or n")),
    }
}
