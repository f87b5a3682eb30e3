//! # wxss-fix
//!
//! Compatibility patcher for WXSS stylesheets.
//!
//! `wxss-fix` walks a mini-program source tree, finds `.wxss` files and applies
//! an ordered set of regex rewrites that neutralize CSS features the runtime
//! does not support: viewport units, `gap`, `@media`, `::placeholder` and
//! `var()`. A second, independent pass collapses the nested comment markers
//! that repeated or out-of-order patching leaves behind.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use wxss_fix::{config::Config, output, passes::compat::CompatPatcher, runner};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let report = runner::run_pass(Path::new("."), &CompatPatcher, &config, false);
//!
//! print!("{}", output::format_report(&report, &output::OutputFormat::Pretty));
//! ```
//!
//! ## Architecture
//!
//! 1. **[`config`]** — load discovery settings from a TOML file.
//! 2. **[`discovery`]** — collect and sort the stylesheets under a root.
//! 3. **[`passes`]** — the [`passes::Pass`] trait, its rule tables and the
//!    two built-in passes ([`passes::compat`] and [`passes::repair`]).
//! 4. **[`comments`]** — split stylesheet text into code and comment segments.
//! 5. **[`runner`]** — read, transform and conditionally rewrite each file.
//! 6. **[`report`]** — per-file and per-run result types.
//! 7. **[`output`]** — render a report as pretty text or JSON.
//!
//! ## Passes
//!
//! | Pass | Command | Description |
//! |------|---------|-------------|
//! | `patch` | `wxss-fix patch` | Rewrite `vh`/`vw`, comment out `gap`, `@media`, `::placeholder`, `var()` |
//! | `repair` | `wxss-fix repair` | Collapse nested and duplicated comment markers |

pub mod comments;
pub mod config;
pub mod discovery;
pub mod output;
pub mod passes;
pub mod report;
pub mod runner;
