// SPDX-License-Identifier: PMPL-1.0-or-later

//! pgd-sweep — sequential driver for PGD attack configurations.
//!
//! Runs an external attack tool once per configuration file, in a fixed
//! order, waiting for each run to finish before starting the next, and
//! brackets every run with console banners.

pub mod attack;
pub mod types;
