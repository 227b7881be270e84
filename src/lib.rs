// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理扫描配置、环境变量和命令行覆盖
pub mod config;

/// 领域模块
///
/// 包含端点、方法集合、分类与划分等核心逻辑
pub mod domain;

/// 引擎模块
///
/// 定义传输层接口并提供基于reqwest的实现
pub mod engines;

/// 基础设施模块
///
/// 提供字典文件读取
pub mod infrastructure;

/// 表示层模块
///
/// 命令行参数与行式结果输出
pub mod presentation;

/// 工具模块
///
/// 错误类型与日志初始化
pub mod utils;

/// 工作器模块
///
/// 实现并行请求分发和运行协调
pub mod workers;
