use neuro_types::Resources;

const INDENT: &str = "  ";

/// `Resources:` block of `neuro status`, two-space indented.
pub fn format_resources(resources: &Resources) -> String {
    let mut lines = vec![
        format!("Memory: {} MB", resources.memory_mb),
        format!("CPU: {:.1}", resources.cpu),
    ];

    if let Some(gpu) = resources.gpu.filter(|&count| count > 0) {
        lines.push(format!(
            "GPU: {:.1} x {}",
            f64::from(gpu),
            resources.gpu_model.as_deref().unwrap_or_default()
        ));
    }

    let mut additional = Vec::new();
    if resources.shm {
        additional.push("Extended SHM space");
    }
    if !additional.is_empty() {
        lines.push(format!("Additional: {}", additional.join(",")));
    }

    let mut out = String::from("Resources:");
    for line in lines {
        out.push('\n');
        out.push_str(INDENT);
        out.push_str(&line);
    }
    out
}
