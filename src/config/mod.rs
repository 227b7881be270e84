// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理扫描的配置设置，包括目标、分类、传输和并发配置
pub mod settings;
