//! Schema command - Print or install the configuration JSON Schema

use std::path::PathBuf;

use clap::Args;

use crate::config::VELLUM_CONFIG_SCHEMA;

#[derive(Args, Default)]
pub struct SchemaArgs {
    /// Write the schema to node_modules/.vellum/vellum.config.schema.json
    /// under this directory instead of printing it
    #[arg(long, value_name = "DIR")]
    pub write: Option<PathBuf>,
}

pub fn run(args: SchemaArgs) {
    let Some(base) = args.write else {
        println!("{VELLUM_CONFIG_SCHEMA}");
        return;
    };

    let schema_dir = base.join("node_modules/.vellum");
    let schema_path = schema_dir.join("vellum.config.schema.json");
    let written = std::fs::create_dir_all(&schema_dir)
        .and_then(|()| std::fs::write(&schema_path, VELLUM_CONFIG_SCHEMA));

    match written {
        Ok(()) => eprintln!("Wrote {}", schema_path.display()),
        Err(e) => {
            eprintln!("Failed to write {}: {}", schema_path.display(), e);
            std::process::exit(1);
        }
    }
}
