//! ZilTrips: travel planning for Brazil.
//!
//! A static [`catalog`] of destinations, a style-based city [`selector`],
//! the [`session`] holding the user's choices, and the derived outputs:
//! search [`links`], a shareable [`summary`] and a PDF [`export`].
//! The [`ui`] module drives all of it as an interactive terminal form.

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod export;
pub mod links;
pub mod logging;
pub mod selector;
pub mod session;
pub mod summary;
pub mod ui;

pub use error::{Result, ZilTripsError};
