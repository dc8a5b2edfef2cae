// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.


//! This module provides the default configurations for Greeter.

use crate::error::{GreeterError, Result};
use ini::Ini;
use lazy_static::lazy_static;

lazy_static! {
    /// Global settings.
    pub static ref GREETER_CONF: Ini = Ini::load_from_str(include_str!("./greeter.toml")).unwrap();

    /// The greeting returned by the greeter function.
    pub static ref GREETER_MESSAGE: String = GREETER_CONF["greeting"]["message"].to_string();

    /// Successful response status.
    pub static ref GREETER_STATUS_OK: u16 = GREETER_CONF["http"]["ok"].parse::<u16>().unwrap();
    /// Missing resource response status.
    pub static ref GREETER_STATUS_NOT_FOUND: u16 = GREETER_CONF["http"]["not_found"].parse::<u16>().unwrap();
    /// Failed request response status.
    pub static ref GREETER_STATUS_INTERNAL_ERROR: u16 = GREETER_CONF["http"]["internal_error"].parse::<u16>().unwrap();
    /// Content type of JSON bodies.
    pub static ref GREETER_JSON_CONTENT_TYPE: String = GREETER_CONF["http"]["json_content_type"].to_string();
    /// Content type of HTML bodies.
    pub static ref GREETER_HTML_CONTENT_TYPE: String = GREETER_CONF["http"]["html_content_type"].to_string();

    /// Name of the environment variable holding the site bucket.
    pub static ref GREETER_SITE_BUCKET_ENV: String = GREETER_CONF["site"]["bucket_env"].to_string();
    /// Object served for the site root.
    pub static ref GREETER_SITE_INDEX: String = GREETER_CONF["site"]["index_document"].to_string();

    /// Name of the environment variable holding the counter parameter name.
    pub static ref GREETER_COUNTER_PARAMETER_ENV: String = GREETER_CONF["counter"]["parameter_env"].to_string();
    /// Parameter type used when the counter is written back.
    pub static ref GREETER_COUNTER_PARAMETER_TYPE: String = GREETER_CONF["counter"]["parameter_type"].to_string();
}

/// Reads a required environment variable.
///
/// # Arguments
/// * `name` - The name of the environment variable.
pub fn env_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|e| GreeterError::Config(format!("{}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn setting_shows() -> Result<()> {
        let conf = Ini::load_from_str(include_str!("./greeter.toml")).unwrap();

        for (sec, prop) in &conf {
            println!("Section: {:?}", sec);
            for (key, value) in prop.iter() {
                println!("{:?}:{:?}", key, value);
            }
        }

        assert_eq!("Hello from Lambda!", &conf["greeting"]["message"]);
        assert_eq!(200, (&conf["http"]["ok"]).parse::<u16>().unwrap());
        assert_eq!(404, (&conf["http"]["not_found"]).parse::<u16>().unwrap());
        assert_eq!("S3_BUCKET", &conf["site"]["bucket_env"]);
        assert_eq!("PARAMETER_NAME", &conf["counter"]["parameter_env"]);

        Ok(())
    }

    #[test]
    fn typed_settings() {
        assert_eq!(*GREETER_STATUS_OK, 200);
        assert_eq!(*GREETER_STATUS_INTERNAL_ERROR, 500);
        assert_eq!(*GREETER_JSON_CONTENT_TYPE, "application/json");
        assert_eq!(*GREETER_SITE_INDEX, "index.html");
        assert_eq!(*GREETER_COUNTER_PARAMETER_TYPE, "SecureString");
    }

    #[test]
    fn missing_env_var_is_config_error() {
        let err = env_var("GREETER_SURELY_UNSET_VARIABLE").unwrap_err();
        assert!(matches!(err, GreeterError::Config(_)));
        assert!(err.to_string().contains("GREETER_SURELY_UNSET_VARIABLE"));
    }
}
