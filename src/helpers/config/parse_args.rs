use super::*;

/// "--weather-sequence" -> "weather_sequence"
fn transform_arg_name(arg_name: &str) -> String {
    arg_name.trim_start_matches('-').replace('-', "_")
}

fn try_set(
    builder: &mut ConfigBuilder,
    arg_name: &str,
    value_str: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let name = transform_arg_name(arg_name);
    let message = format!("{} command line argument", arg_name);
    if let Some(mut setter) = builder.entry(&name) {
        match (&mut setter, value_str) {
            (ConfigEntrySetter::Bool(ref mut set), Some(value_str)) => match value_str {
                "true" => return set(true, message),
                "false" => return set(false, message),
                _ => (),
            },
            (ConfigEntrySetter::Bool(ref mut set), None) => return set(true, message),
            (ConfigEntrySetter::String(ref mut set), Some(value_str)) => {
                return set(value_str.to_owned(), message)
            }
            (ConfigEntrySetter::Int(ref mut set), Some(value_str)) => {
                if let Ok(i) = value_str.parse::<i64>() {
                    return set(i, message);
                }
            }
            (ConfigEntrySetter::Float(ref mut set), Some(value_str)) => {
                if let Ok(f) = value_str.parse::<f64>() {
                    return set(f, message);
                }
            }
            (_, None) => (),
        }
        match value_str {
            Some(value_str) => Err(format!(
                "{:?} is not valid for {} (expected: {})",
                value_str, arg_name, setter
            )
            .into()),
            None => Err(format!("{} argument is required for {}", setter, arg_name).into()),
        }
    } else {
        Err(format!("{} is not a valid command line option", arg_name).into())
    }
}

struct Arg {
    index: usize,
    name: String,
    values: Vec<String>,
}

/// Groups arguments into options and their values. Arguments starting with "-" are option names,
/// "--name=value" is split, everything else is a value of the previous option. Negative numbers
/// such as "-1" following an option are values, not names.
fn parse_list(args: &[String]) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut parsed: Vec<Arg> = Vec::new();
    for (i, arg) in args.iter().enumerate().skip(1) {
        let is_number = arg.parse::<f64>().is_ok();
        if arg.starts_with('-') && (parsed.is_empty() || !is_number) {
            let (name, value) = match arg.find('=') {
                Some(split) => (&arg[..split], Some(arg[split + 1..].to_owned())),
                None => (arg.as_str(), None),
            };
            parsed.push(Arg {
                index: i,
                name: name.to_owned(),
                values: value.into_iter().collect(),
            });
        } else if let Some(last) = parsed.last_mut() {
            last.values.push(arg.to_owned());
        } else {
            return Err(format!(
                "command line argument {} is a value not an --option-name",
                arg
            )
            .into());
        }
    }
    Ok(parsed)
}

/// If the user asked for --help, in which case nothing else matters
pub fn wants_help(args: &[String]) -> bool {
    args.iter().skip(1).any(|arg| arg == "--help" || arg == "-h")
}

/// Applies command line arguments to the builder. args[0] is the program name and is skipped.
pub fn parse_args(builder: &mut ConfigBuilder, args: &[String]) -> Result<(), Box<dyn Error>> {
    for arg in parse_list(args)? {
        match arg.values.as_slice() {
            [] => try_set(builder, &arg.name, None)?,
            [value] => try_set(builder, &arg.name, Some(value.as_str()))?,
            values => {
                return Err(format!(
                    "command line argument {} ({}) has multiple values: {}",
                    arg.index,
                    arg.name,
                    values.join(" ")
                )
                .into())
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("weather-station")
            .chain(list.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn transforms_names() {
        assert_eq!(transform_arg_name("--step-delay"), "step_delay");
        assert_eq!(transform_arg_name("-repeat"), "repeat");
    }

    #[test]
    fn groups_values_with_options() {
        let parsed =
            parse_list(&args(&["--repeat", "3", "--log-level=debug", "--x"])).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].name, "--repeat");
        assert_eq!(parsed[0].values, vec!["3"]);
        assert_eq!(parsed[1].name, "--log-level");
        assert_eq!(parsed[1].values, vec!["debug"]);
        assert!(parsed[2].values.is_empty());
    }

    #[test]
    fn negative_numbers_are_values() {
        let parsed =
            parse_list(&args(&["--step-delay", "-1", "--repeat", "-2.5", "--log-level"])).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].name, "--step-delay");
        assert_eq!(parsed[0].values, vec!["-1"]);
        assert_eq!(parsed[1].name, "--repeat");
        assert_eq!(parsed[1].values, vec!["-2.5"]);
        assert_eq!(parsed[2].name, "--log-level");
    }

    #[test]
    fn leading_value_is_an_error() {
        assert!(parse_list(&args(&["sunny"])).is_err());
    }

    #[test]
    fn program_name_is_skipped() {
        assert!(parse_list(&args(&[])).unwrap().is_empty());
    }

    #[test]
    fn detects_help() {
        assert!(wants_help(&args(&["--repeat", "2", "--help"])));
        assert!(wants_help(&args(&["-h"])));
        assert!(!wants_help(&args(&["--repeat", "2"])));
    }
}
