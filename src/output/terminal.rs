//! Terminal output of a [`NetworkSummary`].

use super::summary::{NetworkSummary, SubnetRow};
use colored::Colorize;
use itertools::Itertools;

/// Format a label left-aligned to `width`, followed by its value.
///
/// # Arguments
/// * `label` - The field name
/// * `value` - The value to print after the label
/// * `width` - The minimum width of the label column
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{label}:");
    format!("{label:<width$} {}", value.to_string())
}

fn yes_no(flag: bool) -> String {
    if flag {
        "yes".green().to_string()
    } else {
        "no".to_string()
    }
}

fn subnet_line(i: usize, row: &SubnetRow) -> String {
    format!(
        "{i:>4}  {network:<18} {first} - {last}  broadcast {broadcast}",
        network = row.network.to_string(),
        first = row.first_usable,
        last = row.last_usable,
        broadcast = row.broadcast,
    )
}

/// Render the summary as the multi-line text printed by `ipcalc`.
pub fn render_summary(summary: &NetworkSummary) -> String {
    const WIDTH: usize = 14;
    let mut lines = vec![
        format_field(
            "Network",
            summary.network.to_string().bold().cyan(),
            WIDTH,
        ),
        format_field("Address", summary.address, WIDTH),
        format_field("Class", summary.class, WIDTH),
        format_field(
            "Net ID",
            format!("{} ({})", summary.net_id, summary.net_id_hex),
            WIDTH,
        ),
        format_field(
            "Broadcast",
            format!("{} ({})", summary.broadcast, summary.broadcast_hex),
            WIDTH,
        ),
        format_field(
            "Mask",
            format!("{} = /{} ({})", summary.mask, summary.mask_bits, summary.mask_hex),
            WIDTH,
        ),
        format_field("Wildcard", &summary.wildcard, WIDTH),
        format_field(
            "Usable",
            format!("{} - {}", summary.first_usable, summary.last_usable),
            WIDTH,
        ),
        format_field("Private", yes_no(summary.is_private), WIDTH),
        format_field("Loopback", yes_no(summary.is_loopback), WIDTH),
        format_field("Max subnets", summary.max_subnet_count, WIDTH),
    ];

    if let Some(subnets) = &summary.subnets {
        lines.push(format!(
            "{} {}",
            "#Subnets".on_blue(),
            subnets.len()
        ));
        lines.extend(
            subnets
                .iter()
                .enumerate()
                .map(|(i, row)| subnet_line(i, row)),
        );
    }

    lines.iter().join("\n")
}
