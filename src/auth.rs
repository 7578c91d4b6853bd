//! Interactive credential collection
//!
//! Username is a plain line; the password prompt disables echo. Both are
//! trimmed. The one-time password starts out unset and is attached to the
//! session only if the service raises the 2FA challenge.

use crate::error::{Error, Result};
use crate::types::Credentials;
use dialoguer::{Input, Password};

/// Prompt for username and password on the terminal.
pub fn prompt_credentials() -> Result<Credentials> {
    let username: String = Input::new()
        .with_prompt("GitHub Username")
        .interact_text()
        .map_err(|e| Error::Io(std::io::Error::other(format!("Failed to read username: {e}"))))?;

    let password = Password::new()
        .with_prompt("GitHub Password")
        .interact()
        .map_err(|e| Error::Io(std::io::Error::other(format!("Failed to read password: {e}"))))?;

    Ok(Credentials {
        username: username.trim().to_string(),
        password: password.trim().to_string(),
        otp: None,
    })
}
