use std::path::PathBuf;

use crate::cli::commands::InitArgs;
use crate::io::config_io::{self, CONFIG_FILE_NAME};

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = args.path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    config_io::write_template(&path, args.force)?;
    println!("Wrote {}", path.display());
    println!("  edit it, then try: pb show");
    Ok(())
}
