// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::Endpoint;

/// 分配给单个工作器的连续端点片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkChunk {
    /// 工作器序号，合并结果时按此排序
    pub index: usize,
    pub endpoints: Vec<Endpoint>,
}

impl WorkChunk {
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }
}

/// 将端点序列静态划分为`workers`个连续片段
///
/// 片段大小为 `max(1, floor(L / N))`，最后一个片段吸收余数。
/// 端点少于工作器时，前L个片段各含一个端点，其余片段为空。
///
/// # 参数
///
/// * `endpoints` - 端点序列
/// * `workers` - 工作器数量，必须至少为1
///
/// # 返回值
///
/// 恰好`workers`个片段，按序号拼接后等于原序列
pub fn partition(endpoints: &[Endpoint], workers: usize) -> Vec<WorkChunk> {
    debug_assert!(workers >= 1, "worker count is validated before partitioning");
    let workers = workers.max(1);
    let total = endpoints.len();
    let size = (total / workers).max(1);

    (0..workers)
        .map(|index| {
            let start = (index * size).min(total);
            let end = if index + 1 == workers {
                total
            } else {
                ((index + 1) * size).min(total)
            };
            WorkChunk {
                index,
                endpoints: endpoints[start..end].to_vec(),
            }
        })
        .collect()
}
