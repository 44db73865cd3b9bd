use super::*;

fn try_set(
    builder: &mut ConfigBuilder,
    file: &str,
    name: &str,
    value: toml::Value,
) -> Result<(), Box<dyn Error>> {
    if let Some(mut setter) = builder.entry(name) {
        let message = format!("{} in {}", name, file);
        match &mut setter {
            ConfigEntrySetter::Bool(ref mut set) => {
                if let toml::Value::Boolean(v) = value {
                    return set(v, message);
                }
            }
            ConfigEntrySetter::String(ref mut set) => match value {
                toml::Value::String(v) => return set(v, message),
                // Lists are also accepted for the comma separated entries
                toml::Value::Array(ref items) if items.iter().all(toml::Value::is_str) => {
                    let joined = items
                        .iter()
                        .filter_map(toml::Value::as_str)
                        .collect::<Vec<&str>>()
                        .join(",");
                    return set(joined, message);
                }
                _ => (),
            },
            ConfigEntrySetter::Int(ref mut set) => {
                if let toml::Value::Integer(v) = value {
                    return set(v, message);
                }
            }
            ConfigEntrySetter::Float(ref mut set) => match value {
                toml::Value::Float(v) => return set(v, message),
                toml::Value::Integer(v) => return set(v as f64, message),
                _ => (),
            },
        }
        Err(format!("{} is not valid for {} (expected: {})", value, name, setter).into())
    } else {
        Err(format!("{} is not a valid option", name).into())
    }
}

/// Applies the contents of a TOML file, path is only used in error messages
pub fn load_toml(
    path: &str,
    contents: &str,
    builder: &mut ConfigBuilder,
) -> Result<(), Box<dyn Error>> {
    let parsed = contents.parse::<toml::Value>()?;
    match parsed {
        toml::Value::Table(table) => {
            for (name, value) in table {
                try_set(builder, path, &name, value).map_err(|e| format!("{}: {}", path, e))?;
            }
            Ok(())
        }
        _ => Err(format!("toplevel value of {} is not a table", path).into()),
    }
}
