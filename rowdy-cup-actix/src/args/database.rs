use super::types::Args;
use sql_middleware::middleware::DatabaseType;

impl Args {
    /// Validate the secrets based on the mode
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database configuration is invalid
    pub fn validate(&mut self) -> Result<(), String> {
        if self.db_type == DatabaseType::Postgres {
            let secrets_locations = ["/secrets/db_password", "/run/secrets/db_password"];

            if self.db_user.is_none() {
                return Err("Postgres user is required".to_string());
            }
            if self.db_host.as_deref().is_none_or(str::is_empty) {
                return Err("Postgres host is required".to_string());
            }
            if self.db_port.is_none() {
                return Err("Postgres port is required".to_string());
            }
            match self.db_password.as_deref() {
                None => return Err("Postgres password is required".to_string()),
                Some(password) if secrets_locations.contains(&password) => {
                    // the flag points at a secrets file, swap in its contents
                    let contents = std::fs::read_to_string(password)
                        .map_err(|e| format!("Could not read password file '{password}': {e}"))?;
                    self.db_password = Some(contents.trim().to_string());
                }
                Some(_) => {}
            }
        }

        if self.admin_password.is_empty() {
            return Err("Admin password must not be empty".to_string());
        }

        Ok(())
    }
}
