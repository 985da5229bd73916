//! Write-once holder for the process-wide application instance.

use std::fmt;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Errors raised by [`ApplicationModule`] state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppError {
    /// `get` was called before `init`.
    #[error("Application instance is not initialized.")]
    NotInitialized,

    /// `init` was called a second time.
    #[error("Application instance is already initialized.")]
    AlreadyInitialized,
}

/// Holds one shared application instance, set exactly once.
pub struct ApplicationModule<T> {
    cell: OnceLock<Arc<T>>,
}

impl<T> ApplicationModule<T> {
    /// Create an empty module.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Store the application instance.
    ///
    /// Fails with [`AppError::AlreadyInitialized`] if an instance is already
    /// stored. When several threads race, exactly one wins.
    pub fn init(&self, instance: Arc<T>) -> Result<(), AppError> {
        self.cell
            .set(instance)
            .map_err(|_| AppError::AlreadyInitialized)?;
        tracing::debug!("Application instance initialized");
        Ok(())
    }

    /// Return the stored instance.
    pub fn get(&self) -> Result<Arc<T>, AppError> {
        self.cell.get().cloned().ok_or(AppError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for ApplicationModule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ApplicationModule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationModule")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct App {
        name: &'static str,
    }

    #[test]
    fn test_get_before_init_fails() {
        let module: ApplicationModule<App> = ApplicationModule::new();
        assert_eq!(module.get().unwrap_err(), AppError::NotInitialized);
        assert!(!module.is_initialized());
    }

    #[test]
    fn test_double_init_fails() {
        let module = ApplicationModule::new();
        module.init(Arc::new(App { name: "first" })).unwrap();

        let err = module.init(Arc::new(App { name: "second" })).unwrap_err();
        assert_eq!(err, AppError::AlreadyInitialized);

        // First instance is kept
        assert_eq!(module.get().unwrap().name, "first");
    }

    #[test]
    fn test_get_returns_same_instance() {
        let module = ApplicationModule::new();
        let app = Arc::new(App { name: "app" });
        module.init(app.clone()).unwrap();

        for _ in 0..3 {
            assert!(Arc::ptr_eq(&module.get().unwrap(), &app));
        }
    }

    #[test]
    fn test_concurrent_init_has_single_winner() {
        let module = Arc::new(ApplicationModule::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let module = module.clone();
                std::thread::spawn(move || module.init(Arc::new(App { name: "racer" })).is_ok())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::NotInitialized.to_string(),
            "Application instance is not initialized."
        );
        assert_eq!(
            AppError::AlreadyInitialized.to_string(),
            "Application instance is already initialized."
        );
    }
}
