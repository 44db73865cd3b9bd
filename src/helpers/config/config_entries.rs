use super::*;

/// Splits a comma separated list. A blank string is an empty list, but blank items are errors.
fn split_list(value: &str, source: Option<&str>) -> Result<Vec<String>, Box<dyn Error>> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }
    value
        .split(',')
        .map(|item| -> Result<String, Box<dyn Error>> {
            let item = item.trim();
            if item.is_empty() {
                Err(format!(
                    "{} has an empty item in {:?}",
                    source.unwrap_or("default value"),
                    value
                )
                .into())
            } else {
                Ok(item.to_string())
            }
        })
        .collect()
}

fn level_variant(name: &str, help: &str, level: LevelFilter) -> ConfigEntryVariant {
    ConfigEntryVariant::new(name, help, move |conf| conf.log_level = level)
}

/// These entries will be applied in order of returned vec (NOT in the order the user specifies the
/// entry). All entries will always be applied.
pub fn config_entries() -> Vec<Box<dyn ConfigEntry>> {
    vec![
        <dyn ConfigEntry>::new_float(
            "step_delay",
            "seconds to wait between steps, or 0 to not wait",
            1.0,
            |conf, seconds, source| {
                // Rejects negative, NaN, infinite and too-large-for-Duration in one go
                conf.step_delay = Duration::try_from_secs_f64(seconds).map_err(|_| {
                    format!(
                        "{} should be a non-negative number of seconds",
                        source.unwrap_or("default value")
                    )
                })?;
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_string(
            "weather_sequence",
            "comma separated weather for the station to report, in order",
            "sunny,rainy,snowy",
            |conf, value, source| {
                let sequence = split_list(&value, source)?;
                if sequence.is_empty() {
                    return Err(format!(
                        "{} should have at least one weather",
                        source.unwrap_or("default value")
                    )
                    .into());
                }
                conf.weather_sequence = sequence;
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_int(
            "repeat",
            "number of times to report weather_sequence",
            1,
            |conf, repeat, source| {
                if repeat >= 1 && repeat <= u32::MAX as i64 {
                    conf.repeat = repeat as u32;
                    Ok(())
                } else {
                    Err(format!(
                        "{} should be at least 1",
                        source.unwrap_or("default value")
                    )
                    .into())
                }
            },
        ),
        <dyn ConfigEntry>::new_string(
            "displays",
            "comma separated displays to attach (phone, tv, watch), may be empty",
            "phone,tv,watch",
            |conf, value, source| {
                conf.displays = split_list(&value, source)?
                    .iter()
                    .map(|name| name.parse::<DisplayKind>())
                    .collect::<Result<Vec<DisplayKind>, String>>()
                    .map_err(|e| format!("{}: {}", source.unwrap_or("default value"), e))?;
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_bool(
            "list_observers",
            "log the observer list as the demo adds and removes displays",
            true,
            |conf, list, _| {
                conf.list_observers = list;
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_enum(
            "log_level",
            "log level when RUST_LOG is not set",
            vec![
                level_variant("info", "what the station is doing", LevelFilter::Info),
                level_variant(
                    "debug",
                    "also weather changes and no-op removals",
                    LevelFilter::Debug,
                ),
                level_variant(
                    "trace",
                    "also every single notification",
                    LevelFilter::Trace,
                ),
                level_variant("warn", "only problems", LevelFilter::Warn),
                level_variant("error", "only serious problems", LevelFilter::Error),
            ],
        ),
    ]
}
