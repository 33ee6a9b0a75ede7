use async_trait::async_trait;
use canvas_inventory::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock AppEnumerator returning a fixed app list
#[derive(Clone, Default)]
pub struct MockAppEnumerator {
    apps: Vec<AppDescriptor>,
    list_error: Option<String>,
    pub authenticated: Arc<Mutex<Vec<String>>>,
}

impl MockAppEnumerator {
    pub fn new(apps: Vec<AppDescriptor>) -> Self {
        Self {
            apps,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            list_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn auth_count(&self) -> usize {
        self.authenticated.lock().unwrap().len()
    }
}

#[async_trait]
impl AppEnumerator for MockAppEnumerator {
    async fn authenticate(&self, environment: &str) -> Result<()> {
        self.authenticated
            .lock()
            .unwrap()
            .push(environment.to_string());
        Ok(())
    }

    async fn list_apps(&self, _environment: &str) -> Result<Vec<AppDescriptor>> {
        match &self.list_error {
            Some(message) => anyhow::bail!("{}", message),
            None => Ok(self.apps.clone()),
        }
    }
}
