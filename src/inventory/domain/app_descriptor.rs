use crate::shared::Result;

/// Maximum length for app identifiers (security limit)
const MAX_APP_ID_LENGTH: usize = 128;

/// NewType wrapper for an app identifier with validation
///
/// The identifier is passed as a command argument to the external tool,
/// so only a conservative character set is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: String) -> Result<Self> {
        if id.trim().is_empty() {
            anyhow::bail!("App id cannot be empty");
        }

        if id.len() > MAX_APP_ID_LENGTH {
            anyhow::bail!(
                "App id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_APP_ID_LENGTH
            );
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "App id '{}' contains invalid characters. Only ASCII alphanumeric, hyphens, underscores and dots are allowed.",
                id
            );
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// AppDescriptor - one application as reported by the enumerator
///
/// Every field is optional because the external tool's output is not
/// validated. Defaults are applied when a [`DependencyRecord`] is created.
///
/// [`DependencyRecord`]: super::DependencyRecord
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppDescriptor {
    pub display_name: Option<String>,
    pub app_id: Option<String>,
    pub environment_name: Option<String>,
    pub created_time: Option<String>,
    pub last_modified_time: Option<String>,
    pub owner_email: Option<String>,
}

impl AppDescriptor {
    pub fn new(display_name: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            app_id: Some(app_id.into()),
            ..Self::default()
        }
    }

    pub fn with_environment(mut self, environment_name: impl Into<String>) -> Self {
        self.environment_name = Some(environment_name.into());
        self
    }

    pub fn with_times(
        mut self,
        created_time: impl Into<String>,
        last_modified_time: impl Into<String>,
    ) -> Self {
        self.created_time = Some(created_time.into());
        self.last_modified_time = Some(last_modified_time.into());
        self
    }

    pub fn with_owner(mut self, owner_email: impl Into<String>) -> Self {
        self.owner_email = Some(owner_email.into());
        self
    }

    /// Name used for display and artifact naming: the display name, or the
    /// app id when no display name was reported.
    pub fn effective_name(&self) -> &str {
        non_empty(self.display_name.as_deref())
            .or_else(|| non_empty(self.app_id.as_deref()))
            .unwrap_or("")
    }

    /// Validated identifier for download commands
    pub fn validated_id(&self) -> Result<AppId> {
        AppId::new(self.app_id.clone().unwrap_or_default())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
