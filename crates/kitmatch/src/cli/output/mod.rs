//! Rendering and JSON serialization for CLI output.

mod style;

use std::{collections::BTreeSet, process::ExitCode};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use kitmatch_engine::{Analysis, CanonicalTag, EquipmentKit, Preference, RankedKit};
use serde::Serialize;

pub use self::style::{dim, header, indent, rule, subheader, success, warning};

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Joins canonical tags for display, `-` when empty.
fn tag_list(tags: &BTreeSet<CanonicalTag>) -> String {
    if tags.is_empty() {
        return "-".to_string();
    }
    tags.iter()
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Joins string tags for display, `-` when empty.
fn string_list<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let joined = items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() { "-".to_string() } else { joined }
}

/// Renders the token pipeline for a piece of text.
pub fn format_analysis(analysis: &Analysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", dim("tokens:    "), analysis.tokens.join(" ")));
    out.push_str(&format!("{} {}\n", dim("normalized:"), analysis.normalized.join(" ")));
    out.push_str(&format!("{} {}\n", dim("terms:     "), analysis.terms.join(" ")));
    out.push_str(&format!("{} {}\n", dim("flags:     "), analysis.flags));
    out
}

/// Renders an extracted preference.
pub fn format_preference(preference: &Preference) -> String {
    let rows = [
        ("environment", tag_list(&preference.environment)),
        ("focus", tag_list(&preference.focus)),
        ("budget", preference.budget.to_string()),
        ("mobility", preference.mobility.to_string()),
        ("expertise", preference.expertise.to_string()),
        ("audio", preference.audio_priority.to_string()),
        ("stabilization", preference.stabilization_priority.to_string()),
        ("lighting", preference.lighting.to_string()),
    ];
    rows.iter()
        .map(|(label, value)| format!("{} {value}\n", dim(&format!("{label:<14}"))))
        .collect()
}

/// Detail lines shown under a ranked kit.
fn kit_details(kit: &EquipmentKit) -> Vec<String> {
    vec![
        format!(
            "price {} / stock {} / rating {:.1}",
            kit.price, kit.stock, kit.rating
        ),
        format!(
            "focus: {} | environment: {}",
            string_list(&kit.best_for),
            string_list(&kit.environment)
        ),
        format!("components: {}", string_list(&kit.components)),
    ]
}

/// Prints ranked results with their details and justification lines.
pub fn print_results(results: &[RankedKit], catalog: &[EquipmentKit]) {
    if results.is_empty() {
        println!("{}", dim("No kits matched. Try a larger budget or a broader request."));
        return;
    }

    for result in results {
        let kit = catalog.get(result.index);
        let category = kit.map_or("", |k| k.category.as_str());
        println!(
            "{} {} {} {}",
            subheader(&format!("{}.", result.rank)),
            header(&result.name),
            dim(&format!("({category})")),
            success(&format!("{:.3}", result.score))
        );
        for line in kit.map(kit_details).unwrap_or_default() {
            println!("   {}", dim(&line));
        }
        println!("   {}", result.reason);
    }
}

/// Builds the catalog listing table.
pub fn catalog_table(kits: &[EquipmentKit]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "Name",
        "Category",
        "Price",
        "Stock",
        "Rating",
        "Environment",
        "Best for",
    ]);
    for kit in kits {
        table.add_row(vec![
            Cell::new(&kit.name),
            Cell::new(&kit.category),
            Cell::new(kit.price).set_alignment(CellAlignment::Right),
            Cell::new(kit.stock).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", kit.rating)).set_alignment(CellAlignment::Right),
            Cell::new(string_list(&kit.environment)),
            Cell::new(string_list(&kit.best_for)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use kitmatch_engine::{Band, normalize_tags};

    use super::*;

    #[test]
    fn preference_lists_every_field() {
        let preference = Preference {
            environment: BTreeSet::from([CanonicalTag::Outdoor]),
            budget: Band::Low,
            ..Preference::default()
        };
        let text = format_preference(&preference);
        assert!(text.contains("outdoor"));
        assert!(text.contains("low"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn kit_details_list_focus_environment_and_components() {
        let kit = EquipmentKit {
            price: 250,
            stock: 5,
            rating: 4.5,
            best_for: normalize_tags(["vlog", "travel"]),
            environment: normalize_tags(["outdoor"]),
            components: vec!["Sony ZV-1".into(), "Windscreen".into()],
            ..EquipmentKit::new("Sony ZV-1")
        };
        assert_eq!(
            kit_details(&kit),
            vec![
                "price 250 / stock 5 / rating 4.5",
                "focus: travel, vlog | environment: outdoor",
                "components: Sony ZV-1, Windscreen",
            ]
        );

        let bare = kit_details(&EquipmentKit::new("Bare"));
        assert_eq!(bare[1], "focus: - | environment: -");
        assert_eq!(bare[2], "components: -");
    }

    #[test]
    fn empty_tag_sets_render_as_dash() {
        assert_eq!(tag_list(&BTreeSet::new()), "-");
        assert_eq!(string_list(&BTreeSet::<String>::new()), "-");
    }

    #[test]
    fn catalog_table_has_one_row_per_kit() {
        let kits = vec![
            EquipmentKit {
                environment: normalize_tags(["indoor", "outdoor"]),
                ..EquipmentKit::new("A")
            },
            EquipmentKit::new("B"),
        ];
        let rendered = catalog_table(&kits).to_string();
        assert!(rendered.contains("indoor, outdoor"));
        assert!(rendered.contains("Best for"));
        assert_eq!(catalog_table(&kits).row_iter().count(), 2);
    }
}
