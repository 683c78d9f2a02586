// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod batch;
pub mod reqwest_fetcher;
pub mod traits;
pub mod validators;
