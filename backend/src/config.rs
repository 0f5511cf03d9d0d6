use std::env;
use std::path::PathBuf;

/// Runtime settings, read from the process environment once at startup.
///
/// Everything below `main` receives these by value or reference; no other
/// module consults the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Directory holding the collection files (`media.json`, `reviews.json`).
    pub data_dir: PathBuf,
    /// Directory served at `/img`; uploaded posters land under `img/media/`.
    pub public_dir: PathBuf,
    /// External base URL written into poster fields after an upload.
    pub public_base_url: String,
    pub mail: Option<MailSettings>,
    pub omdb_api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MailSettings {
    pub api_key: String,
    pub domain: String,
}

impl Settings {
    pub fn from_env() -> Settings {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3001);
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));
        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));

        // Mail needs both halves; with either one missing the mailer stays off.
        let mail = match (env::var("MAIL_API_KEY"), env::var("MAIL_DOMAIN")) {
            (Ok(api_key), Ok(domain)) => Some(MailSettings { api_key, domain }),
            _ => None,
        };
        let omdb_api_key = env::var("OMDB_API_KEY").ok();

        Settings {
            host,
            port,
            data_dir,
            public_dir,
            public_base_url,
            mail,
            omdb_api_key,
        }
    }
}
