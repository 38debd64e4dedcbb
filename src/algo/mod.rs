/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Module containing all algorithms implementations on named graphs.

pub mod visits;

mod dfs;
pub use dfs::*;

pub mod sccs;

pub mod reachability;
