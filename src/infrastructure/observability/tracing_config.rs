use crate::presentation::config::Environment;

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            json_format: false,
        }
    }
}

impl TracingConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            // Structured JSON everywhere except local shells.
            json_format: !environment.is_local(),
            environment,
        }
    }
}
