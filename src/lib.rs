//! githooks: route every git hook through one dispatcher and run plain shell
//! scripts kept in `.githooks/`.
//!
//! `githooks init` writes `.githooks/_/` (a proxy per hook name plus the shared
//! `hook.sh` dispatcher) and sets `core.hooksPath` to it. From then on git
//! itself runs the proxies, which find and execute `.githooks/<hook>`.

pub mod cli;
pub mod config;
pub mod errors;
pub mod git;
pub mod hooks;
pub mod logger;
pub mod utils;

pub use errors::{GitHooksError, Result};
