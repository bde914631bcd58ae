//! Name-keyed linter registry
//!
//! The GS1 data dictionary names the linters that apply to each AI
//! component (`ss`, `mm`, `hh`, ...). The registry resolves those names to
//! linter instances and dispatches field data to them.
//!
//! The registry is built once and then only read, so it can be shared
//! between threads behind a plain reference or `Arc`.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace};

use crate::foundation::{Lint, LintError};
use crate::linters::Seconds;

// ============================================================================
// REGISTRY ERROR
// ============================================================================

/// Errors returned by [`LinterRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// No linter is registered under the requested name.
    #[error("unknown linter '{0}'")]
    UnknownLinter(String),

    /// A linter with the same name is already registered.
    #[error("linter '{0}' is already registered")]
    AlreadyRegistered(&'static str),

    /// The linter ran and rejected the data.
    #[error("linter failed: {0}")]
    Lint(#[from] LintError),
}

impl RegistryError {
    /// Returns the lint failure, if this error is one.
    #[must_use]
    pub fn as_lint(&self) -> Option<&LintError> {
        match self {
            Self::Lint(err) => Some(err),
            _ => None,
        }
    }
}

// ============================================================================
// LINTER REGISTRY
// ============================================================================

/// Maps dictionary linter names to linter instances.
///
/// # Examples
///
/// ```
/// use gs1_lint::registry::LinterRegistry;
///
/// let registry = LinterRegistry::builtin();
/// assert!(registry.lint("ss", "42").is_ok());
/// assert!(registry.lint("ss", "61").is_err());
/// assert!(registry.lint("nope", "42").is_err());
/// ```
#[derive(Default)]
pub struct LinterRegistry {
    linters: BTreeMap<&'static str, Box<dyn Lint>>,
}

impl LinterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every linter shipped with this crate.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(Box::new(Seconds));
        registry
    }

    /// Registers `linter` under its [`Lint::name`].
    pub fn register<L: Lint + 'static>(&mut self, linter: L) -> Result<(), RegistryError> {
        let name = linter.name();
        if self.linters.contains_key(name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        self.insert(Box::new(linter));
        Ok(())
    }

    fn insert(&mut self, linter: Box<dyn Lint>) {
        trace!(linter = linter.name(), "registering linter");
        self.linters.insert(linter.name(), linter);
    }

    /// Looks a linter up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Lint> {
        self.linters.get(name).map(|linter| &**linter)
    }

    /// Returns `true` if a linter is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.linters.contains_key(name)
    }

    /// Registered names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.linters.keys().copied()
    }

    /// Number of registered linters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.linters.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.linters.is_empty()
    }

    /// Runs the linter registered as `name` over `data`.
    pub fn lint(&self, name: &str, data: &str) -> Result<(), RegistryError> {
        let linter = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownLinter(name.to_owned()))?;

        match linter.lint(data) {
            Ok(()) => {
                trace!(linter = name, "lint passed");
                Ok(())
            }
            Err(err) => {
                debug!(
                    linter = name,
                    code = err.kind.code(),
                    offset = err.span.offset,
                    length = err.span.length,
                    "lint failed"
                );
                Err(err.into())
            }
        }
    }
}

impl fmt::Debug for LinterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinterRegistry")
            .field("linters", &self.linters.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
