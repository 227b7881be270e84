// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型
///
/// 端点、方法集合、工作单元与分类结果
pub mod models;

/// 领域服务
///
/// 响应分类与工作划分
pub mod services;
