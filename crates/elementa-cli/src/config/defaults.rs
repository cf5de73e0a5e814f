pub const QUALIFIER: &str = "org";
pub const ORGANIZATION: &str = "elementa";
pub const APPLICATION: &str = "elementa";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub struct DefaultsConfig {
    pub reject_non_positive: bool,
    pub replace_builtin_reactions: bool,
    pub replace_builtin_substances: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            reject_non_positive: false,
            replace_builtin_reactions: false,
            replace_builtin_substances: false,
        }
    }
}
