use super::*;

pub const DEFAULT_TOML_PATH: &str = "weather-station.toml";

/// Get the current configuration, from weather-station.toml (if it exists) and then the command
/// line.
pub fn build_config() -> Result<MasterConfig, Box<dyn Error>> {
    build_config_with(real_filesystem(), std::env::args().collect())
}

/// Like build_config() but with the filesystem and arguments (including the program name) passed
/// in. Command line arguments win over the TOML file.
pub fn build_config_with(fs: Filesystem, args: Vec<String>) -> Result<MasterConfig, Box<dyn Error>> {
    let mut builder = ConfigBuilder::new(config_entries());
    let mut conf = MasterConfig::default();
    if wants_help(&args) {
        println!("{}", builder.help_text());
        conf.happy_exit = true;
        return Ok(conf);
    }
    let toml = fs
        .read_if_exists(DEFAULT_TOML_PATH)
        .map_err(|e| format!("could not read {}: {}", DEFAULT_TOML_PATH, e))?;
    if let Some(contents) = toml {
        load_toml(DEFAULT_TOML_PATH, &contents, &mut builder)?;
    }
    parse_args(&mut builder, &args)?;
    builder.apply_to(&mut conf)?;
    Ok(conf)
}
