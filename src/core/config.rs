use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub site: SiteConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Which implementation signs and verifies admin tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenBackend {
    #[default]
    JsonWebToken,
    Hmac,
}

impl FromStr for TokenBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jsonwebtoken" | "jwt" => Ok(Self::JsonWebToken),
            "hmac" => Ok(Self::Hmac),
            other => Err(format!(
                "TOKEN_BACKEND must be 'jsonwebtoken' or 'hmac', got '{}'",
                other
            )),
        }
    }
}

/// Admin authentication settings
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret (at least 32 bytes)
    pub jwt_secret: String,
    pub token_backend: TokenBackend,
    pub admin_username: String,
    /// Accepted password hashes; more than one during a password rotation
    pub admin_password_hashes: Vec<String>,
    /// Mark the admin cookie `Secure` (site served over HTTPS)
    pub cookie_secure: bool,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"***")
            .field("token_backend", &self.token_backend)
            .field("admin_username", &self.admin_username)
            .field("admin_password_hashes", &self.admin_password_hashes.len())
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

/// S3-compatible object storage for uploaded images
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// S3 endpoint URL
    pub endpoint: String,
    /// Base URL under which uploaded objects are publicly reachable (defaults to endpoint)
    pub public_endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub region: String,
    /// Key prefix for uploaded images (e.g., "products")
    pub image_prefix: String,
}

/// Public site settings used by the sitemap builder
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Canonical site origin written into sitemap entries
    pub site_url: String,
    /// Base URL of the public catalog API the sitemap walks
    pub public_api_url: String,
    pub fetch_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        let app = AppConfig::from_env()?;
        let site = SiteConfig::from_env(&app)?;

        Ok(Config {
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            app,
            site,
        })
    }
}

fn env_flag(name: &str) -> Result<bool, String> {
    match env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(format!("{} must be a boolean", name)),
        },
        Err(_) => Ok(false),
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl AuthConfig {
    const MIN_SECRET_LEN: usize = 32;
    const DEFAULT_ADMIN_USERNAME: &'static str = "admin";

    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET environment variable is required".to_string())?;
        if jwt_secret.len() < Self::MIN_SECRET_LEN {
            return Err(format!(
                "JWT_SECRET must be at least {} bytes",
                Self::MIN_SECRET_LEN
            ));
        }

        let token_backend = match env::var("TOKEN_BACKEND") {
            Ok(value) => value.parse::<TokenBackend>()?,
            Err(_) => TokenBackend::default(),
        };

        let admin_username = env::var("ADMIN_USERNAME")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ADMIN_USERNAME.to_string());

        let admin_password_hashes = Self::parse_password_hashes(
            &env::var("ADMIN_PASSWORD_HASHES").map_err(|_| {
                "ADMIN_PASSWORD_HASHES environment variable is required \
                 (generate one with `netcatalog hash-password <password>`)"
                    .to_string()
            })?,
        );
        if admin_password_hashes.is_empty() {
            return Err("ADMIN_PASSWORD_HASHES must contain at least one hash".to_string());
        }

        let cookie_secure = env_flag("COOKIE_SECURE")?;

        Ok(Self {
            jwt_secret,
            token_backend,
            admin_username,
            admin_password_hashes,
            cookie_secure,
        })
    }
}

impl AuthConfig {
    /// PHC strings contain commas, so the list is whitespace separated
    fn parse_password_hashes(raw: &str) -> Vec<String> {
        raw.split_whitespace().map(str::to_string).collect()
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        let endpoint =
            env::var("S3_ENDPOINT").unwrap_or_else(|_| "http://localhost:9000".to_string());

        // Public endpoint defaults to the main endpoint if not specified
        let public_endpoint = env::var("S3_PUBLIC_ENDPOINT").unwrap_or_else(|_| endpoint.clone());

        let access_key = env::var("S3_ACCESS_KEY")
            .map_err(|_| "S3_ACCESS_KEY environment variable is required".to_string())?;

        let secret_key = env::var("S3_SECRET_KEY")
            .map_err(|_| "S3_SECRET_KEY environment variable is required".to_string())?;

        let bucket = env::var("S3_BUCKET").unwrap_or_else(|_| "netcatalog-images".to_string());

        let region = env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string());

        let image_prefix = env::var("S3_IMAGE_PREFIX").unwrap_or_else(|_| "products".to_string());

        Ok(Self {
            endpoint,
            public_endpoint,
            access_key,
            secret_key,
            bucket,
            region,
            image_prefix,
        })
    }
}

impl SiteConfig {
    const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

    pub fn from_env(app: &AppConfig) -> Result<Self, String> {
        let site_url = env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        // Defaults to this server, which serves the public catalog API itself
        let public_api_url = env::var("PUBLIC_API_URL")
            .unwrap_or_else(|_| format!("http://{}", app.server_address()))
            .trim_end_matches('/')
            .to_string();

        let fetch_timeout_secs = env::var("SITEMAP_FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_FETCH_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "SITEMAP_FETCH_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            site_url,
            public_api_url,
            fetch_timeout_secs,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Netcatalog API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Catalog, enquiry and admin API".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
