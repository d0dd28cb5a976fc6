//! linebar
//!
//! Single-line terminal reader bar. Pages through a text file one line at a
//! time, splits lines that are too wide for the bar, and remembers where the
//! reader stopped in every file it has seen.
//!
//! Pure core (`model`, `pager`, `state`) with an impure shell around it
//! (`source`, `store`, `instance`, `view`).

pub mod config;
pub mod instance;
pub mod logging;
pub mod model;
pub mod pager;
pub mod source;
pub mod state;
pub mod store;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
