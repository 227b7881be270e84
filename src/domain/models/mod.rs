// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod endpoint;
pub mod method_set;
pub mod target;

pub use endpoint::{endpoints_from_lines, Endpoint};
pub use method_set::{HttpMethod, MethodSet};
pub use target::{Finding, RequestTarget, ResponseRecord, VerboseTrace};
