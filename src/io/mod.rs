// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for video files and annotation exports.

pub mod export;
pub mod media;
