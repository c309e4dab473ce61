// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod advisor;
pub mod logging;
pub mod preview;
pub mod robots_builder;
