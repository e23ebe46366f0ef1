use serde::Serialize;
use tracing::info;

use crate::models::user::{Role, User};
use crate::state::{AppState, CurrentUser};
use crate::utils::error::AppError;
use crate::utils::response::{empty_success, success, Notice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginRole {
    Customer,
    Admin,
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub username: String,
    pub name: String,
    pub is_admin: bool,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            name: user.name().to_string(),
            is_admin: user.is_admin(),
        }
    }
}

/// Registers a customer. The display name starts out as the username.
pub fn create_account(
    state: &mut AppState,
    username: &str,
    password: &str,
) -> Result<Notice<Profile>, AppError> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err(AppError::ValidationError(
            "Enter username and password to create account.".to_string(),
        ));
    }
    if state.customers.iter().any(|c| c.username() == username) {
        return Err(AppError::Conflict("Username already exists.".to_string()));
    }

    let customer = User::customer(username, password, username);
    let profile = Profile::from(&customer);
    state.customers.push(customer);
    state.save_customers()?;

    info!(username = %username, "Customer account created");
    Ok(success(profile, "Account created. You can now log in."))
}

pub fn login(
    state: &mut AppState,
    username: &str,
    password: &str,
    role: LoginRole,
) -> Result<Notice<Profile>, AppError> {
    let username = username.trim();
    let password = password.trim();

    match role {
        LoginRole::Customer => {
            let customer = state
                .customers
                .iter()
                .find(|c| {
                    matches!(c.role(), Role::Customer { .. })
                        && c.username() == username
                        && c.check_password(password)
                })
                .ok_or_else(|| AppError::AuthError("Invalid customer credentials.".to_string()))?;

            let profile = Profile::from(customer);
            let message = format!("Welcome, {}!", customer.name());
            state.set_current_user(Some(CurrentUser::Customer(username.to_string())));
            info!(username = %username, "Customer logged in");
            Ok(success(profile, message))
        }
        LoginRole::Admin => {
            if username != state.config.admin_username || password != state.config.admin_password
            {
                return Err(AppError::AuthError(
                    "Invalid admin credentials.".to_string(),
                ));
            }

            let admin = User::admin(username, password, "Administrator");
            let profile = Profile::from(&admin);
            state.set_current_user(Some(CurrentUser::Admin(admin)));
            info!(username = %username, "Admin logged in");
            Ok(success(profile, "Logged in as Admin."))
        }
    }
}

pub fn logout(state: &mut AppState) -> Notice<()> {
    state.set_current_user(None);
    empty_success("Logged out.")
}

/// Current display name, used to pre-fill the profile form.
pub fn profile(state: &AppState) -> Result<Notice<Profile>, AppError> {
    let customer = state.current_customer()?;
    Ok(success(Profile::from(customer), "Profile loaded"))
}

pub fn edit_profile(state: &mut AppState, name: &str) -> Result<Notice<Profile>, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::ValidationError(
            "Name cannot be empty.".to_string(),
        ));
    }

    let customer = state.current_customer_mut()?;
    customer.set_name(name);
    let profile = Profile::from(&*customer);
    state.save_customers()?;

    Ok(success(profile, "Your display name has been updated."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::event::Event;
    use crate::services::system_manager::SystemData;
    use crate::storage::MemoryStore;

    fn state() -> AppState {
        AppState::open(
            Config::default(),
            Box::new(MemoryStore::<Vec<User>>::new()),
            Box::new(MemoryStore::<Vec<Event>>::new()),
            Box::new(MemoryStore::<SystemData>::new()),
        )
    }

    #[test]
    fn test_create_account_rejects_blank_and_duplicate() {
        let mut state = state();
        assert!(matches!(
            create_account(&mut state, "  ", "pw"),
            Err(AppError::ValidationError(_))
        ));

        create_account(&mut state, "sultan", "pw").unwrap();
        assert!(matches!(
            create_account(&mut state, "sultan", "other"),
            Err(AppError::Conflict(_))
        ));
        assert_eq!(state.customers.len(), 1);
        assert_eq!(state.customers[0].name(), "sultan");
    }

    #[test]
    fn test_customer_login_checks_password() {
        let mut state = state();
        create_account(&mut state, "sultan", "pw").unwrap();

        assert!(login(&mut state, "sultan", "nope", LoginRole::Customer).is_err());
        assert!(state.current_user().is_none());

        let notice = login(&mut state, " sultan ", "pw", LoginRole::Customer).unwrap();
        assert_eq!(notice.message.as_deref(), Some("Welcome, sultan!"));
        assert_eq!(
            state.current_user(),
            Some(&CurrentUser::Customer("sultan".to_string()))
        );
    }

    #[test]
    fn test_customer_login_rejects_admin_roster_entry() {
        let mut state = AppState::open(
            Config::default(),
            Box::new(MemoryStore::with_value(vec![User::admin("boss", "pw", "Boss")])),
            Box::new(MemoryStore::<Vec<Event>>::new()),
            Box::new(MemoryStore::<SystemData>::new()),
        );

        assert!(matches!(
            login(&mut state, "boss", "pw", LoginRole::Customer),
            Err(AppError::AuthError(_))
        ));
        assert!(state.current_user().is_none());
    }

    #[test]
    fn test_admin_login_uses_configured_credentials() {
        let mut state = state();
        assert!(matches!(
            login(&mut state, "admin", "wrong", LoginRole::Admin),
            Err(AppError::AuthError(_))
        ));

        let notice = login(&mut state, "admin", "admin", LoginRole::Admin).unwrap();
        assert!(notice.data.unwrap().is_admin);

        logout(&mut state);
        assert!(state.current_user().is_none());
    }

    #[test]
    fn test_edit_profile_updates_name() {
        let mut state = state();
        create_account(&mut state, "sultan", "pw").unwrap();
        login(&mut state, "sultan", "pw", LoginRole::Customer).unwrap();

        assert!(edit_profile(&mut state, "   ").is_err());
        edit_profile(&mut state, "Sultan A.").unwrap();

        let notice = profile(&state).unwrap();
        assert_eq!(notice.data.unwrap().name, "Sultan A.");
    }
}
