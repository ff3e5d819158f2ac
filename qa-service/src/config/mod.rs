use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_PROHIBITED_WORDS: &str = "spam,illegal,malware";
const DEFAULT_TECHNICAL_KEYWORDS: &str = "how,why,what,explain,steps,guide";

#[derive(Debug, Clone, Deserialize)]
pub struct QaConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub environment: Environment,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub validation: ValidationConfig,
    pub classifier: ClassifierConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Prod,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    pub min_question_length: usize,
    pub max_question_length: usize,
    pub prohibited_words: Vec<String>,
    pub technical_keywords: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_question_length: 3,
            max_question_length: 1000,
            prohibited_words: split_list(DEFAULT_PROHIBITED_WORDS),
            technical_keywords: split_list(DEFAULT_TECHNICAL_KEYWORDS),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    pub model_name: String,
    /// Mark the model ready during startup. When false nothing loads it later, so
    /// `/questions` answers 503 for the life of the process.
    pub load_on_startup: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_name: "qa_categorizer_v1".to_string(),
            load_on_startup: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwaggerConfig {
    pub enabled: bool,
}

impl QaConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let env_str = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
        let environment: Environment = env_str
            .parse()
            .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?;

        let is_prod = environment == Environment::Prod;

        let config = QaConfig {
            common: common_config,
            environment: environment.clone(),
            service_name: get_env("SERVICE_NAME", Some("smart-qa-portal"), is_prod)?,
            service_version: get_env("SERVICE_VERSION", Some(env!("CARGO_PKG_VERSION")), is_prod)?,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            validation: ValidationConfig {
                min_question_length: parse_env("QA_MIN_QUESTION_LENGTH", "3", is_prod)?,
                max_question_length: parse_env("QA_MAX_QUESTION_LENGTH", "1000", is_prod)?,
                prohibited_words: split_list(&get_env(
                    "QA_PROHIBITED_WORDS",
                    Some(DEFAULT_PROHIBITED_WORDS),
                    is_prod,
                )?),
                technical_keywords: split_list(&get_env(
                    "QA_TECHNICAL_KEYWORDS",
                    Some(DEFAULT_TECHNICAL_KEYWORDS),
                    is_prod,
                )?),
            },
            classifier: ClassifierConfig {
                model_name: get_env("QA_MODEL_NAME", Some("qa_categorizer_v1"), is_prod)?,
                load_on_startup: flag_env("QA_LOAD_MODEL_ON_STARTUP", "true", is_prod)?,
            },
            swagger: SwaggerConfig {
                enabled: flag_env("ENABLE_SWAGGER", "true", is_prod)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.validation.min_question_length > self.validation.max_question_length {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "QA_MIN_QUESTION_LENGTH ({}) must not exceed QA_MAX_QUESTION_LENGTH ({})",
                self.validation.min_question_length,
                self.validation.max_question_length
            )));
        }

        if self.classifier.model_name.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "QA_MODEL_NAME must not be empty"
            )));
        }

        if self.environment == Environment::Prod && self.swagger.enabled {
            tracing::warn!("Swagger UI is publicly accessible in production");
        }

        Ok(())
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

fn parse_env(key: &str, default: &str, is_prod: bool) -> Result<usize, AppError> {
    get_env(key, Some(default), is_prod)?
        .parse()
        .map_err(|e: std::num::ParseIntError| {
            AppError::ConfigError(anyhow::anyhow!("{}: {}", key, e))
        })
}

fn flag_env(key: &str, default: &str, is_prod: bool) -> Result<bool, AppError> {
    parse_flag(key, &get_env(key, Some(default), is_prod)?)
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(AppError::ConfigError(anyhow::anyhow!(
            "{}: expected a boolean, got {:?}",
            key,
            other
        ))),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "test" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}
