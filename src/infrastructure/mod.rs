// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 与外部资源交互的实现，目前只有字典文件读取
pub mod wordlist;
