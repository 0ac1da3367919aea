//! `neuro top` output.

use crate::presentation::formatters::text::pad_right;
use crate::presentation::formatters::time::format_ctime;
use neuro_types::JobTelemetry;

const TIMESTAMP_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 15;

fn join_row(timestamp: &str, cpu: &str, memory: &str, gpu: &str, gpu_memory: &str) -> String {
    [
        pad_right(timestamp, TIMESTAMP_WIDTH),
        pad_right(cpu, VALUE_WIDTH),
        pad_right(memory, VALUE_WIDTH),
        pad_right(gpu, VALUE_WIDTH),
        pad_right(gpu_memory, VALUE_WIDTH),
    ]
    .join("\t")
}

pub fn telemetry_header() -> String {
    join_row("TIMESTAMP", "CPU", "MEMORY (MB)", "GPU (%)", "GPU_MEMORY (MB)")
}

pub fn format_telemetry(info: &JobTelemetry) -> String {
    let gpu = match info.gpu_duty_cycle {
        Some(cycle) if cycle > 0 => cycle.to_string(),
        _ => "0".to_string(),
    };
    let gpu_memory = match info.gpu_memory {
        Some(memory) if memory != 0.0 => format!("{:.3}", memory),
        _ => "0".to_string(),
    };

    join_row(
        &format_ctime(info.timestamp),
        &format!("{:.3}", info.cpu),
        &format!("{:.3}", info.memory),
        &gpu,
        &gpu_memory,
    )
}
