use crate::error::PagetextError;
use crate::extraction::lopdf::LopdfExtractor;
use crate::extraction::pdf_extract::PdfExtractExtractor;
use crate::extraction::pdf_oxide::PdfOxideExtractor;
use crate::extraction::PdfExtractor;

/// All extraction backends that can be selected by name.
pub const BACKENDS: &[&str] = &[
    LopdfExtractor::NAME,
    PdfOxideExtractor::NAME,
    PdfExtractExtractor::NAME,
];

/// Backends tried when none are named: lopdf, then pdf_oxide's independent parser.
pub const DEFAULT_BACKENDS: &[&str] = &[LopdfExtractor::NAME, PdfOxideExtractor::NAME];

/// Construct a backend by name.
pub fn load_backend(name: &str) -> Result<Box<dyn PdfExtractor>, PagetextError> {
    match name {
        LopdfExtractor::NAME => Ok(Box::new(LopdfExtractor::new())),
        PdfOxideExtractor::NAME => Ok(Box::new(PdfOxideExtractor::new())),
        PdfExtractExtractor::NAME => Ok(Box::new(PdfExtractExtractor::new())),
        _ => Err(PagetextError::UnknownBackend {
            name: name.to_string(),
            available: BACKENDS.join(", "),
        }),
    }
}

/// Ordered list of extraction strategies, tried one after another until one succeeds.
pub struct FallbackChain {
    strategies: Vec<Box<dyn PdfExtractor>>,
}

impl FallbackChain {
    /// Build a chain from explicit strategies. The list must not be empty.
    pub fn new(strategies: Vec<Box<dyn PdfExtractor>>) -> Result<Self, PagetextError> {
        if strategies.is_empty() {
            return Err(PagetextError::EmptyChain);
        }
        Ok(FallbackChain { strategies })
    }

    /// Build a chain from backend names, in the given order.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, PagetextError> {
        let mut strategies = Vec::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            let name = name.as_ref();
            if names[..i].iter().any(|prev| prev.as_ref() == name) {
                return Err(PagetextError::DuplicateBackend(name.to_string()));
            }
            strategies.push(load_backend(name)?);
        }
        Self::new(strategies)
    }

    pub fn strategies(&self) -> &[Box<dyn PdfExtractor>] {
        &self.strategies
    }

    pub fn backend_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.backend_name()).collect()
    }
}

impl Default for FallbackChain {
    /// lopdf first, pdf_oxide as the fallback.
    fn default() -> Self {
        FallbackChain {
            strategies: vec![
                Box::new(LopdfExtractor::new()),
                Box::new(PdfOxideExtractor::new()),
            ],
        }
    }
}

/// A strategy that failed, with the reason.
#[derive(Debug)]
pub struct AttemptFailure {
    pub backend: String,
    pub error: PagetextError,
}

/// Result of running a chain against one file.
///
/// `text` is only ever the complete output of a single successful strategy.
#[derive(Debug, Default)]
pub struct ExtractionOutcome {
    pub text: Option<String>,
    pub backend: Option<String>,
    pub failures: Vec<AttemptFailure>,
}

impl ExtractionOutcome {
    pub fn is_success(&self) -> bool {
        self.text.is_some()
    }
}
