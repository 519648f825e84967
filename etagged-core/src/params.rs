//! Call-shape normalization.
//!
//! A request may be described as a bare target, as a full set of options, or
//! as a target plus options, each with an optional completion callback.
//! [`Params`] names those shapes explicitly and [`Params::normalize`] turns
//! any of them into a single [`Normalized`] record whose options always carry
//! the target.
//!
//! ```
//! use etagged_core::{Params, RequestOptions};
//!
//! let params: Params<std::io::Error> =
//!     ("http://example.com/r", RequestOptions::new("ignored").header("Accept", "*/*")).into();
//! let normalized = params.normalize();
//! assert_eq!(normalized.options.target, "http://example.com/r");
//! assert!(normalized.callback.is_none());
//! ```

use std::fmt;

use crate::options::RequestOptions;
use crate::response::Completion;

/// Completion handler, invoked exactly once before the completion is handed
/// back to the awaiting caller.
pub type Callback<E> = Box<dyn FnOnce(&Completion<E>) + Send>;

/// The accepted call shapes.
pub enum Params<E> {
    /// Target plus an options value; the target overrides the options' own.
    TargetWithOptions {
        /// Request target.
        target: String,
        /// Remaining options.
        options: RequestOptions,
        /// Completion handler.
        callback: Option<Callback<E>>,
    },
    /// Bare target, all other options defaulted.
    Target {
        /// Request target.
        target: String,
        /// Completion handler.
        callback: Option<Callback<E>>,
    },
    /// Options value that already carries its target.
    Options {
        /// Request options.
        options: RequestOptions,
        /// Completion handler.
        callback: Option<Callback<E>>,
    },
}

/// Canonical `{options, callback}` pair.
pub struct Normalized<E> {
    /// Options with the target populated.
    pub options: RequestOptions,
    /// Completion handler, if any.
    pub callback: Option<Callback<E>>,
}

impl<E> Params<E> {
    /// Attaches a completion handler, replacing any previous one.
    pub fn callback<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&Completion<E>) + Send + 'static,
    {
        let slot = match &mut self {
            Params::TargetWithOptions { callback, .. }
            | Params::Target { callback, .. }
            | Params::Options { callback, .. } => callback,
        };
        *slot = Some(Box::new(f));
        self
    }

    /// Resolves the call shape into options and callback.
    pub fn normalize(self) -> Normalized<E> {
        match self {
            Params::TargetWithOptions {
                target,
                mut options,
                callback,
            } => {
                options.target = target;
                Normalized { options, callback }
            }
            Params::Target { target, callback } => Normalized {
                options: RequestOptions::new(target),
                callback,
            },
            Params::Options { options, callback } => Normalized { options, callback },
        }
    }
}

impl<E> fmt::Debug for Params<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (shape, has_callback) = match self {
            Params::TargetWithOptions { callback, .. } => ("TargetWithOptions", callback.is_some()),
            Params::Target { callback, .. } => ("Target", callback.is_some()),
            Params::Options { callback, .. } => ("Options", callback.is_some()),
        };
        f.debug_struct("Params")
            .field("shape", &shape)
            .field("callback", &has_callback)
            .finish()
    }
}

impl<E> From<&str> for Params<E> {
    fn from(target: &str) -> Self {
        Params::Target {
            target: target.to_owned(),
            callback: None,
        }
    }
}

impl<E> From<String> for Params<E> {
    fn from(target: String) -> Self {
        Params::Target {
            target,
            callback: None,
        }
    }
}

impl<E> From<RequestOptions> for Params<E> {
    fn from(options: RequestOptions) -> Self {
        Params::Options {
            options,
            callback: None,
        }
    }
}

impl<E, T> From<(T, RequestOptions)> for Params<E>
where
    T: Into<String>,
{
    fn from((target, options): (T, RequestOptions)) -> Self {
        Params::TargetWithOptions {
            target: target.into(),
            options,
            callback: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use http::StatusCode;

    use super::*;
    use crate::response::Response;

    type P = Params<std::io::Error>;

    #[test]
    fn target_with_options_merges_target() {
        let options = RequestOptions::new("/old").header("Accept", "*/*").method("GET");
        let normalized = P::from(("/new", options)).normalize();

        assert_eq!(normalized.options.target, "/new");
        assert_eq!(normalized.options.headers.get_ignore_case("accept"), Some("*/*"));
        assert_eq!(normalized.options.method.as_deref(), Some("GET"));
    }

    #[test]
    fn bare_target_defaults_options() {
        let normalized = P::from("/r").normalize();
        assert_eq!(normalized.options, RequestOptions::new("/r"));
        assert!(normalized.callback.is_none());
    }

    #[test]
    fn options_are_used_as_target() {
        let options = RequestOptions::new("/r").method("POST");
        let normalized = P::from(options.clone()).normalize();
        assert_eq!(normalized.options, options);
    }

    #[test]
    fn callback_survives_normalization() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = called.clone();
        let normalized = P::from(String::from("/r"))
            .callback(move |completion| {
                assert_eq!(completion.status(), Some(StatusCode::OK));
                flag.store(true, Ordering::SeqCst);
            })
            .normalize();

        let callback = normalized.callback.unwrap();
        callback(&Completion::ok(Response::new(StatusCode::OK)));
        assert!(called.load(Ordering::SeqCst));
    }
}
