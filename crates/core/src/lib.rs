//! # Attempt
//!
//! A fallible outcome held as a value. [`Attempt<T, E>`] is either a
//! `Success(T)` or a `Failure(E)`, and chains of fallible steps are composed
//! with combinators instead of propagating at every call site.
//!
//! ## Laws
//!
//! - A `Failure` short-circuits every combinator; caller code expecting a
//!   value is never run against it
//! - The failure value that comes out is the one that went in
//! - Lazy operands (`zip`, `zip_with`, `fallback`, `from_option`) are only
//!   evaluated on the branch that needs them
//! - Nothing panics and nothing logs unless asked to via [`AttemptExt`]
//!
//! ## Example
//!
//! ```
//! use attempt::{Attempt, Try};
//!
//! fn port(raw: &str) -> Try<u16> {
//!     Attempt::from_fn(|| raw.trim().parse::<u16>().map_err(anyhow::Error::from))
//! }
//!
//! let endpoint = port("8080")
//!     .perform(|p| if *p == 0 { Err(anyhow::anyhow!("port 0 is reserved")) } else { Ok(()) })
//!     .zip(|| Attempt::success("localhost"))
//!     .map(|(port, host)| Ok(format!("{host}:{port}")));
//!
//! assert_eq!(endpoint.value().map(String::as_str), Some("localhost:8080"));
//! assert!(port("nope").fallback(|| port("80")).is_success());
//! ```

mod attempt;
mod ext;
pub mod iter;

pub use attempt::{Attempt, IntoAttempt};
pub use ext::{AttemptExt, OptionExt};
pub use iter::partition;

/// An attempt whose failure is an opaque [`anyhow::Error`].
pub type Try<T> = Attempt<T, anyhow::Error>;

/// An attempt that produces nothing on success.
pub type TryEmpty = Try<()>;
