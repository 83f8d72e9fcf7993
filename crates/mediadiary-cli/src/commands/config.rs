use crate::output::Output;
use color_eyre::Result;
use comfy_table::{modifiers, presets, Attribute, Cell, Table};
use mediadiary_config::{Config, PathManager};
use mediadiary_models::MediaKind;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn show_config(path_manager: &PathManager, config: &Config, output: &Output) -> Result<()> {
    let config_file = path_manager.config_file();
    let data_paths = path_manager.clone().with_data_dir(&config.data_dir);
    let bounds = config.validation.year_bounds();

    if !output.is_human() {
        output.json(&json!({
            "configFile": config_file,
            "configFileExists": config_file.exists(),
            "dataDir": data_paths.data_dir(),
            "catalogs": MediaKind::ALL.map(|kind| data_paths.catalog_file(kind)),
            "validation": { "minYear": bounds.min, "maxYear": bounds.max },
            "logging": {
                "level": config.logging.level,
                "json": config.logging.json,
                "file": config.logging.file,
            },
        }));
        return Ok(());
    }

    if !config_file.exists() {
        output.warn(format!("Configuration file not found at: {}", config_file.display()));
        output.info("Showing defaults. Run 'mediadiary config init' to write them out.");
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Config File").add_attribute(Attribute::Bold),
        Cell::new(config_file.display().to_string()),
    ]);
    table.add_row(vec![Cell::new("Data directory"), Cell::new(data_paths.data_dir().display().to_string())]);
    for kind in MediaKind::ALL {
        let file = data_paths.catalog_file(kind);
        let status = if file.exists() { "".to_string() } else { format!(" {}", "(not created yet)".dimmed()) };
        table.add_row(vec![Cell::new(format!("{} catalog", kind)), Cell::new(format!("{}{}", file.display(), status))]);
    }
    table.add_row(vec![Cell::new("Release years"), Cell::new(format!("{} - {}", bounds.min, bounds.max))]);
    table.add_row(vec![Cell::new("Log level"), Cell::new(&config.logging.level)]);
    table.add_row(vec![
        Cell::new("Log file"),
        Cell::new(config.logging.file.as_ref().map_or_else(|| "stderr".to_string(), |p| p.display().to_string())),
    ]);
    println!("{}", table);
    Ok(())
}

pub fn init_config(path_manager: &PathManager, force: bool, output: &Output) -> Result<()> {
    let config_file = path_manager.config_file();
    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
        return Ok(());
    }

    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write {}: {}", config_file.display(), e))?;
    output.success(format!("Configuration written to {}", config_file.display()));
    Ok(())
}
