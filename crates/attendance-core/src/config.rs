use serde::de::DeserializeOwned;

/// Environment-backed service settings.
///
/// Each field of the implementing struct maps to the upper-cased env var of
/// the same name (`jwt_secret` reads `JWT_SECRET`). Optional settings carry a
/// `#[serde(default = ...)]`.
pub trait Config: Sized + DeserializeOwned {
    /// Load `.env` from the working directory when present, then read the
    /// process environment. Real env vars take precedence over `.env`.
    fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Read from an explicit variable list instead of the process environment.
    fn from_iter<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
