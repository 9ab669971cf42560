use business::domain::auth::use_cases::login::LoginParams;

use crate::setup::dependency_injection::DependencyContainer;

pub async fn login(container: &DependencyContainer, email: String) -> anyhow::Result<()> {
    let session = container.login.execute(LoginParams { email }).await?;
    println!(
        "Signed in as {}",
        session.email.as_deref().unwrap_or("unknown")
    );
    Ok(())
}

pub fn logout(container: &DependencyContainer) -> anyhow::Result<()> {
    container.logout.execute();
    println!("Signed out");
    Ok(())
}

pub fn whoami(container: &DependencyContainer) -> anyhow::Result<()> {
    match container.session.email() {
        Some(email) if container.session.is_authenticated() => println!("{}", email),
        _ => println!("Not signed in"),
    }
    Ok(())
}
