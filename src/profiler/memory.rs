//! Memory-usage capability and snapshot deltas
//!
//! On Linux the process probe reads `/proc/self/status`. The four snapshot
//! fields map onto the kernel's resident/virtual breakdown:
//!
//! | field           | source      | meaning                               |
//! |-----------------|-------------|---------------------------------------|
//! | `heap_used`     | `RssAnon`   | resident anonymous memory (heap)      |
//! | `heap_total`    | `VmData`    | reserved data + heap segment          |
//! | `external`      | `RssFile`   | resident file-backed mappings         |
//! | `array_buffers` | `RssShmem`  | resident shared memory                |
//!
//! Other platforms report zeros.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Byte counts (or byte deltas) for one process memory reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub heap_used: i64,
    pub heap_total: i64,
    pub external: i64,
    pub array_buffers: i64,
}

impl Sub for MemorySnapshot {
    type Output = MemorySnapshot;

    fn sub(self, rhs: Self) -> Self::Output {
        MemorySnapshot {
            heap_used: self.heap_used - rhs.heap_used,
            heap_total: self.heap_total - rhs.heap_total,
            external: self.external - rhs.external,
            array_buffers: self.array_buffers - rhs.array_buffers,
        }
    }
}

/// Source of memory snapshots
pub trait MemoryProbe {
    fn snapshot(&self) -> MemorySnapshot;
}

impl<M: MemoryProbe + ?Sized> MemoryProbe for &M {
    fn snapshot(&self) -> MemorySnapshot {
        (**self).snapshot()
    }
}

/// Reads the current process's memory counters from procfs
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessMemoryProbe;

impl MemoryProbe for ProcessMemoryProbe {
    fn snapshot(&self) -> MemorySnapshot {
        match std::fs::read_to_string("/proc/self/status") {
            Ok(status) => parse_proc_status(&status),
            Err(e) => {
                tracing::debug!("memory probe unavailable, reporting zeros: {}", e);
                MemorySnapshot::default()
            }
        }
    }
}

/// Parse the relevant `/proc/<pid>/status` lines; missing keys read as zero
fn parse_proc_status(status: &str) -> MemorySnapshot {
    let mut snapshot = MemorySnapshot::default();

    for line in status.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let slot = match key {
            "RssAnon" => &mut snapshot.heap_used,
            "VmData" => &mut snapshot.heap_total,
            "RssFile" => &mut snapshot.external,
            "RssShmem" => &mut snapshot.array_buffers,
            _ => continue,
        };
        if let Some(bytes) = parse_proc_kb(value) {
            *slot = bytes;
        }
    }

    snapshot
}

/// Parse a value like "  12345 kB"
fn parse_proc_kb(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let number = trimmed
        .strip_suffix("kB")
        .or_else(|| trimmed.strip_suffix("KB"))?
        .trim();
    let kb: i64 = number.parse().ok()?;
    Some(kb * 1024)
}
