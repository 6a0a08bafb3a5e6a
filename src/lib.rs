//! Process properties and OS environment variables behind a single capability.
//!
//! 1. [About](#about)
//! 2. [Namespaces](#namespaces)
//! 3. [Seeding Properties](#seeding-properties)
//! 4. [Cargo Features](#cargo-features)
//! 5. [Quick Example](#quick-example)
//!
//! ## About
//! Every process carries two name-value namespaces: a process-local
//! property table and the environment inherited from the operating
//! system. `sysenv` puts both behind the [`Environment`] trait so that
//! code with environment-sensitive behavior can receive the real thing in
//! production and an in-memory double in tests. Absence is the only
//! failure mode a lookup has: both queries return [`None`] for unset
//! names and never raise an error.
//!
//! ## Namespaces
//! * **Properties** live in a process-wide mutable table, empty at
//!   startup until seeded from command line definitions or
//!   [`set_property`] calls. Writes are visible to every later read from
//!   any thread.
//! * **Variables** are read through a cached snapshot of the OS
//!   environment, captured once per process. On Windows the snapshot
//!   answers lookups case-insensitively, matching platform convention;
//!   on other platforms lookup is exact.
//!
//! ## Seeding Properties
//! Definitions have the form `key=value` and usually arrive as repeated
//! `-D key=value` command line occurrences. With the default
//! `enable_pico` feature, calling `load_sys_args()` at startup collects
//! and applies them; `load_definitions` accepts any batch of definition
//! strings.
//!
//! ## Cargo Features
//!
//! ### Default features
//! 1. `enable_log`, log snapshot capture and property seeding.
//! 2. `enable_pico`, collect `-D` definitions by `pico-args`.
//!
//! ### Optional features
//! 1. `enable_clap`, collect `-D` definitions by `clap`.
//!
//! ## Quick Example
//!
//! ```
//! use sysenv::*;
//!
//! fn shell(env: &dyn Environment) -> String {
//!     env.get_property("force.shell")
//!         .or_else(|| env.get_variable("SHELL"))
//!         .unwrap_or_else(|| "/bin/sh".to_owned())
//! }
//!
//! // Production code forwards to the real process stores.
//! set_property("force.shell", "/bin/zsh");
//! assert_eq!("/bin/zsh", shell(&SystemEnvironment));
//!
//! // Tests inject a double holding exactly the state the scenario needs.
//! let fake = MapEnvironment::new().with_variable("SHELL", "/bin/fish");
//! assert_eq!("/bin/fish", shell(&fake));
//! ```
//!
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    anonymous_parameters,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_qualifications,
    variant_size_differences
)]

mod err;
mod source;
mod system;

pub use crate::err::PropertyError;
pub use crate::source::args::{load_definitions, parse_definition};
#[cfg(feature = "enable_pico")]
#[cfg_attr(docsrs, doc(cfg(feature = "enable_pico")))]
pub use crate::source::args::load_sys_args;
#[cfg(feature = "enable_clap")]
#[cfg_attr(docsrs, doc(cfg(feature = "enable_clap")))]
pub use crate::source::args::{load_sys_args_with, SysArgsParam};
pub use crate::source::env::{env_snapshot, get_variable, EnvSnapshot};
pub use crate::source::map::MapEnvironment;
pub use crate::source::props::{get_property, properties, remove_property, set_property};
pub use crate::system::SystemEnvironment;

pub(crate) const NOT_POSSIBLE: &str = "Not possible";

/// A read-only view of the two name-value namespaces of a running process.
///
/// Implementations answer each query from their own backing store and
/// signal absence with [`None`]; no error is raised for an unknown name.
/// The trait is object-safe on purpose: callers take a
/// `&dyn Environment` (or a boxed one) at construction time, receiving
/// [`SystemEnvironment`] in production and [`MapEnvironment`] in tests.
///
/// Neither query mutates the component, but the backing stores may move
/// underneath it, so callers must not assume a returned value is stable
/// beyond the single call.
pub trait Environment {
    /// Get the value of `name` in the process property table, or [`None`]
    /// when unset.
    fn get_property(&self, name: &str) -> Option<String>;

    /// Get the value of `name` in the OS environment, or [`None`] when
    /// unset.
    fn get_variable(&self, name: &str) -> Option<String>;
}
