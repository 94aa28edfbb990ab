use hd_core::{Country, Observation};
use hd_reconcile::{SeriesRow, SnapshotRow};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `happydata schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for(args.type_name), flags.format)
}

fn schema_for(type_name: SchemaType) -> schemars::Schema {
    match type_name {
        SchemaType::Country => schemars::schema_for!(Country),
        SchemaType::Observation => schemars::schema_for!(Observation),
        SchemaType::SeriesRow => schemars::schema_for!(SeriesRow),
        SchemaType::SnapshotRow => schemars::schema_for!(SnapshotRow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_row_schema_lists_fields() {
        let schema = serde_json::to_value(schema_for(SchemaType::SnapshotRow)).unwrap();
        let properties = schema["properties"].as_object().expect("object schema");
        assert!(properties.contains_key("country"));
        assert!(properties.contains_key("indicator_value"));
        assert!(properties.contains_key("happiness_score"));
    }

    #[test]
    fn country_schema_uses_wire_names() {
        let schema = serde_json::to_value(schema_for(SchemaType::Country)).unwrap();
        assert!(schema["properties"].get("iso2Code").is_some());
    }
}
