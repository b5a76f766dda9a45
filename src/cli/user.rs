use repostore::error::Result;
use repostore::logger::Logger;
use repostore::models::User;

/// Validate an email address the way stored users are validated
pub fn validate(email: String) -> Result<()> {
    let user = User::new(None, None, Some(email));
    user.validate()?;
    Logger::info(&format!(
        "Valid email address: {}",
        user.email.as_deref().unwrap_or_default()
    ));
    Ok(())
}
