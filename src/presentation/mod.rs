// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 命令行参数
pub mod cli;

/// 结果输出
pub mod reporter;
