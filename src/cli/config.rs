//! Catalog export, schema and init commands

use super::util::{write_output, Context, ExportFormat, SchemaName};
use shipzone::*;
use std::path::PathBuf;

pub fn cmd_export(ctx: &Context, format: ExportFormat, output: &Option<PathBuf>) -> Result<()> {
    let content = match format {
        ExportFormat::Yaml => ctx.catalog().to_yaml()?,
        ExportFormat::Json => ctx.catalog().to_json()?,
    };
    write_output(output, &content)
}

pub fn cmd_schema(name: SchemaName) -> Result<()> {
    match name {
        SchemaName::Catalog => print_schema::<ZoneCatalog>(),
        SchemaName::Config => print_schema::<ShipzoneConfig>(),
        SchemaName::Quote => print_schema::<DeliveryQuote>(),
        SchemaName::Summary => print_schema::<CheckoutSummary>(),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

pub fn cmd_init() -> Result<()> {
    let current_dir = std::env::current_dir().map_err(Error::Io)?;
    let config_file = current_dir.join(CONFIG_FILE);

    if config_file.exists() {
        return Err(format!("{} already exists", config_file.display()).into());
    }

    let mut content = String::from(
        "# shipzone project configuration\n\
         # Set `catalog` to a YAML or JSON file to replace the built-in pricing table.\n\
         # Export the built-in table with: shipzone catalog export > catalog.yaml\n\n",
    );
    content.push_str(&ShipzoneConfig::default().to_yaml()?);

    std::fs::write(&config_file, content).map_err(Error::Io)?;
    println!("✓ Created {}", config_file.display());
    Ok(())
}
