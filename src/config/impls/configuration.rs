use std::fs::File;
use std::io::Write;
use log::info;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::logging::parse_log_level;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_prefix: String::new(),
            http_server: HttpServerConfig::default(),
            sentry_config: SentryConfig::default(),
            cache: vec!(
                CacheConfig::default()
            )
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())
                    .map_err(|e| CustomError::new(&e.to_string()))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("created {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }

        let host_check = Regex::new(r"^[A-Za-z0-9_.\-\[\]:]+:[0-9]{1,5}$")
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        for cache in &self.cache {
            if !host_check.is_match(&cache.host) {
                return Err(ConfigurationError::ValidationError(format!("[CACHE: {}] host \"{}\" is not address:port", cache.name, cache.host)));
            }
            if cache.db < 0 {
                return Err(ConfigurationError::ValidationError(format!("[CACHE: {}] db index {} is negative", cache.name, cache.db)));
            }
        }

        let mut names: Vec<&str> = self.cache.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        if let Some(window) = names.windows(2).find(|w| w[0] == w[1]) {
            return Err(ConfigurationError::ValidationError(format!("cache name \"{}\" is used more than once", window[0])));
        }

        info!("[VALIDATE] {} cache backend(s) configured", self.cache.len());
        Ok(())
    }
}
