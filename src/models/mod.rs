// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod check;
pub mod directive;
pub mod form;
pub mod review;
pub mod version;
