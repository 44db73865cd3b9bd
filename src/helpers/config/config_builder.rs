use super::*;
use std::collections::HashSet;

pub type SetterFn<'a, T> = Box<dyn FnMut(T, String) -> Result<(), Box<dyn Error>> + 'a>;

/// Sets an entry's value from some source. The String given to the setter describes where the
/// value came from, and is used in error messages.
pub enum ConfigEntrySetter<'a> {
    Bool(SetterFn<'a, bool>),
    String(SetterFn<'a, String>),
    Int(SetterFn<'a, i64>),
    Float(SetterFn<'a, f64>),
}

impl<'a> std::fmt::Display for ConfigEntrySetter<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Bool(_) => "bool",
                Self::String(_) => "string",
                Self::Int(_) => "int",
                Self::Float(_) => "float",
            }
        )
    }
}

type ApplyFn<T> = Box<dyn Fn(&mut MasterConfig, T, Option<&str>) -> Result<(), Box<dyn Error>>>;

pub trait ConfigEntry {
    fn name(&self) -> &str;
    fn help(&self) -> &str;
    /// Describes the default value for --help
    fn default_description(&self) -> String;
    fn setter(&mut self) -> ConfigEntrySetter;
    /// Applies the current value (the default, unless a setter was called) to the config
    fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>>;
}

impl dyn ConfigEntry {
    pub fn new_bool<F>(name: &str, help: &str, default_value: bool, apply: F) -> Box<Self>
    where
        F: Fn(&mut MasterConfig, bool, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        TypedEntry::new(name, help, default_value, apply, |target| {
            ConfigEntrySetter::Bool(target.setter())
        })
    }

    pub fn new_string<F>(name: &str, help: &str, default_value: &str, apply: F) -> Box<Self>
    where
        F: Fn(&mut MasterConfig, String, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        TypedEntry::new(
            name,
            help,
            default_value.to_string(),
            apply,
            |target| ConfigEntrySetter::String(target.setter()),
        )
    }

    pub fn new_int<F>(name: &str, help: &str, default_value: i64, apply: F) -> Box<Self>
    where
        F: Fn(&mut MasterConfig, i64, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        TypedEntry::new(name, help, default_value, apply, |target| {
            ConfigEntrySetter::Int(target.setter())
        })
    }

    pub fn new_float<F>(name: &str, help: &str, default_value: f64, apply: F) -> Box<Self>
    where
        F: Fn(&mut MasterConfig, f64, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        TypedEntry::new(name, help, default_value, apply, |target| {
            ConfigEntrySetter::Float(target.setter())
        })
    }

    /// A string entry that must be one of the variants. The first variant is the default.
    pub fn new_enum(name: &str, help: &str, variants: Vec<ConfigEntryVariant>) -> Box<Self> {
        assert!(!variants.is_empty(), "{} has no variants", name);
        let mut help = help.to_string();
        for variant in &variants {
            help.push_str(&format!("\n      {}: {}", variant.name, variant.help));
        }
        let default_value = variants[0].name.clone();
        TypedEntry::new(
            name,
            &help,
            default_value,
            move |conf, value: String, source| match variants.iter().find(|v| v.name == value) {
                Some(variant) => {
                    (variant.apply_fn)(conf);
                    Ok(())
                }
                None => Err(format!(
                    "{} has invalid value {:?}, valid options are {}",
                    source.unwrap_or("default value"),
                    value,
                    variants
                        .iter()
                        .map(|v| v.name.as_str())
                        .collect::<Vec<&str>>()
                        .join(", "),
                )
                .into()),
            },
            |target| ConfigEntrySetter::String(target.setter()),
        )
    }
}

/// One possible value of an enum entry
pub struct ConfigEntryVariant {
    pub name: String,
    pub help: String,
    pub apply_fn: Box<dyn Fn(&mut MasterConfig)>,
}

impl ConfigEntryVariant {
    pub fn new<F: Fn(&mut MasterConfig) + 'static>(name: &str, help: &str, apply: F) -> Self {
        Self {
            name: name.to_string(),
            help: help.to_string(),
            apply_fn: Box::new(apply),
        }
    }
}

pub struct SetterTarget<T> {
    value: T,
    /// Some if the value is not default, describes how it was set
    source: Option<String>,
}

impl<T> SetterTarget<T> {
    fn setter<'a>(&'a mut self) -> SetterFn<'a, T> {
        Box::new(move |value, source| {
            self.value = value;
            self.source = Some(source);
            Ok(())
        })
    }
}

struct TypedEntry<T> {
    name: String,
    help: String,
    default_value: T,
    target: SetterTarget<T>,
    apply_fn: ApplyFn<T>,
    setter_builder: Box<dyn Fn(&mut SetterTarget<T>) -> ConfigEntrySetter>,
}

impl<T: Clone + 'static> TypedEntry<T> {
    fn new<APPLY, SETTER>(
        name: &str,
        help: &str,
        default_value: T,
        apply_fn: APPLY,
        setter_builder: SETTER,
    ) -> Box<Self>
    where
        APPLY: Fn(&mut MasterConfig, T, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
        SETTER: Fn(&mut SetterTarget<T>) -> ConfigEntrySetter + 'static,
    {
        Box::new(Self {
            name: name.to_string(),
            help: help.to_string(),
            default_value: default_value.clone(),
            target: SetterTarget {
                value: default_value,
                source: None,
            },
            apply_fn: Box::new(apply_fn),
            setter_builder: Box::new(setter_builder),
        })
    }
}

impl<T: Clone + std::fmt::Debug + 'static> ConfigEntry for TypedEntry<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self) -> &str {
        &self.help
    }

    fn default_description(&self) -> String {
        format!("{:?}", self.default_value)
    }

    fn setter(&mut self) -> ConfigEntrySetter {
        (self.setter_builder)(&mut self.target)
    }

    fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        (self.apply_fn)(
            target,
            self.target.value.clone(),
            self.target.source.as_deref(),
        )
    }
}

pub struct ConfigBuilder {
    entries: Vec<Box<dyn ConfigEntry>>,
}

impl ConfigBuilder {
    pub fn new(entries: Vec<Box<dyn ConfigEntry>>) -> Self {
        let mut names = HashSet::new();
        for entry in &entries {
            if !names.insert(entry.name()) {
                panic!("duplicate configuration entry {}", entry.name());
            }
        }
        Self { entries }
    }

    pub fn entry(&mut self, name: &str) -> Option<ConfigEntrySetter> {
        self.entries
            .iter_mut()
            .find(|entry| entry.name() == name)
            .map(|entry| entry.setter())
    }

    pub fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        for entry in &self.entries {
            entry
                .apply_to(target)
                .map_err(|e| format!("{} configuration option: {}", entry.name(), e))?;
        }
        Ok(())
    }

    pub fn help_text(&self) -> String {
        let mut text = format!(
            "Options can be set in {} or on the command line as --name value\n",
            DEFAULT_TOML_PATH
        );
        for entry in &self.entries {
            text.push_str(&format!(
                "\n  --{} (default {})\n      {}",
                entry.name().replace('_', "-"),
                entry.default_description(),
                entry.help()
            ));
        }
        text
    }
}
