//! Point-in-time health snapshot of the running process and its host.

use serde::Serialize;
use sysinfo::System;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Snapshot of process/OS health, serialized with the wire field names the
/// service has always exposed.
///
/// Fields are read independently, so the snapshot is not atomic under
/// concurrent system changes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    pub status: &'static str,
    pub available_processors: usize,
    pub system_load: f64,
    #[serde(rename = "usedMemoryMB")]
    pub used_memory_mb: u64,
    #[serde(rename = "maxMemoryMB")]
    pub max_memory_mb: u64,
    pub timestamp: i64,
}

impl HealthSnapshot {
    /// Captures a fresh snapshot at the current instant.
    pub fn capture() -> Self {
        let sys = System::new_all();

        // Resident memory of this process; fall back to system-wide usage
        // if the OS won't report our own PID.
        let used_bytes = sysinfo::get_current_pid()
            .ok()
            .and_then(|pid| sys.process(pid))
            .map(|proc| proc.memory())
            .unwrap_or_else(|| sys.used_memory());

        Self {
            status: "running",
            available_processors: available_processors(),
            system_load: system_load(),
            used_memory_mb: used_bytes / BYTES_PER_MB,
            max_memory_mb: sys.total_memory() / BYTES_PER_MB,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

fn available_processors() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}

/// One-minute load average; `-1.0` where the platform has no such metric.
fn system_load() -> f64 {
    if cfg!(unix) {
        System::load_average().one
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_reports_at_least_one_processor() {
        let snapshot = HealthSnapshot::capture();
        assert!(snapshot.available_processors >= 1);
    }

    #[test]
    fn capture_reports_running_status() {
        let snapshot = HealthSnapshot::capture();
        assert_eq!(snapshot.status, "running");
    }

    #[test]
    fn used_memory_does_not_exceed_max() {
        let snapshot = HealthSnapshot::capture();
        assert!(snapshot.used_memory_mb <= snapshot.max_memory_mb);
    }

    #[test]
    fn timestamps_are_non_decreasing() {
        let first = HealthSnapshot::capture();
        let second = HealthSnapshot::capture();
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let snapshot = HealthSnapshot::capture();
        let json = serde_json::to_value(&snapshot).unwrap();
        let obj = json.as_object().unwrap();

        for key in [
            "status",
            "availableProcessors",
            "systemLoad",
            "usedMemoryMB",
            "maxMemoryMB",
            "timestamp",
        ] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(obj.len(), 6);
    }
}
