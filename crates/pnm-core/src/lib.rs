/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all libraries
//!
//! This crate provides a set of core routines shared
//! by the decoder, encoder and raster operations under the `pnm` umbrella
//!
//! It currently contains
//!
//! - A byte reader used by the decoders for exact offset access
//! - Byte source and sink traits abstracting over files, streams and memory
//! - The encoding variant (textual or binary) shared by images
//! - Image decoder and encoder options
//! - A logging shim over the `log` crate
//!
//! # Features
//!  - `log`: Forward the macros in [`log`] to the `log` crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![macro_use]

pub mod bytestream;
pub mod log;
pub mod options;
pub mod serde;
pub mod variant;
