//! Login, signup, logout, whoami.

use secrecy::SecretString;
use shoplink_client::ShopLinkClient;

use super::CliError;
use crate::credentials::CredentialsFile;

/// Log in and persist the token for later invocations.
#[allow(clippy::print_stdout)]
pub async fn login(
    client: &ShopLinkClient,
    credentials: &CredentialsFile,
    email: &str,
    password: String,
) -> Result<(), CliError> {
    let password = SecretString::from(password);
    let user = match client.login(email, &password).await {
        Ok(user) => user,
        Err(e) if e.is_auth_failure() => {
            println!("Login failed: invalid email or password");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    persist_token(client, credentials).await?;
    println!(
        "Logged in as {} ({})",
        user.full_name.as_deref().unwrap_or("unnamed"),
        user.email
    );
    Ok(())
}

/// Create an account, then persist the token like `login`.
#[allow(clippy::print_stdout)]
pub async fn signup(
    client: &ShopLinkClient,
    credentials: &CredentialsFile,
    email: &str,
    password: String,
    full_name: Option<&str>,
    phone: Option<&str>,
) -> Result<(), CliError> {
    let password = SecretString::from(password);
    let user = client.signup(email, &password, full_name, phone).await?;

    persist_token(client, credentials).await?;
    println!("Account created for {}", user.email);
    Ok(())
}

/// Clear both the in-memory session and the persisted token.
#[allow(clippy::print_stdout)]
pub async fn logout(
    client: &ShopLinkClient,
    credentials: &CredentialsFile,
) -> Result<(), CliError> {
    client.logout().await;
    credentials.clear()?;
    println!("Logged out");
    Ok(())
}

/// Show the account behind the stored token.
#[allow(clippy::print_stdout)]
pub async fn whoami(client: &ShopLinkClient) -> Result<(), CliError> {
    let user = match client.current_user().await {
        Ok(user) => user,
        Err(e) if e.is_auth_failure() => {
            println!("{}", CliError::LOGIN_HINT);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{} <{}>", user.full_name.as_deref().unwrap_or("unnamed"), user.email);
    if let Some(phone) = &user.phone {
        println!("phone: {phone}");
    }
    println!("verified: {}", user.is_verified);
    Ok(())
}

async fn persist_token(
    client: &ShopLinkClient,
    credentials: &CredentialsFile,
) -> Result<(), CliError> {
    if let Some(token) = client.session().expose_token().await {
        credentials.store(&token)?;
    }
    Ok(())
}
