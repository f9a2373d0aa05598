//! # OSK Types
//!
//! This crate provides the key data model of the OSK on-screen keyboard.
//!
//! ## Modules
//!
//! ### Core Modules
//! - [`key_data`] - Key identities: character, popup-aware and emoji leaves plus case and variation selectors
//! - [`keycode`] - Reserved action codes and the printable character threshold
//! - [`key_type`] - Key classification and text field variation
//! - [`popup`] - Long-press popup container
//!
//! ## Integration with the OSK Ecosystem
//!
//! - **osk-config**: Key set documents decode into these types
//! - **osk-cli**: Resolves and renders loaded key sets from the command line
//!
//! Every type in this crate is immutable after construction and `Send + Sync`,
//! a loaded key tree can be shared between threads without locking.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod key_data;
pub mod key_macro;
pub mod key_type;
pub mod keycode;
pub mod popup;
