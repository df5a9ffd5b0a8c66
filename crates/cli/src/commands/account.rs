//! Account registration and profile display.

use clap::Args;

use shopfront::users::UserRole;
use shopfront_app::{context::AppContext, session::NewSignup};

use crate::{
    commands::{CliError, signed_in_user},
    config::AccountArgs,
};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RoleArg {
    Customer,
    Admin,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Customer => Self::Customer,
            RoleArg::Admin => Self::Admin,
        }
    }
}

#[derive(Debug, Args)]
pub struct SignupArgs {
    /// Display name for the profile
    #[arg(long)]
    pub full_name: String,

    /// Account role
    #[arg(long, value_enum, default_value_t = RoleArg::Customer)]
    pub role: RoleArg,
}

pub(crate) async fn signup(
    ctx: &AppContext,
    account: &AccountArgs,
    args: SignupArgs,
) -> Result<(), CliError> {
    let (email, password) = account.credentials().ok_or(CliError::MissingCredentials)?;

    let user = ctx
        .session
        .sign_up(NewSignup {
            email: email.to_string(),
            password: password.as_str().to_string(),
            full_name: args.full_name,
            role: args.role.into(),
        })
        .await?;

    println!("Welcome, {} <{}>", user.full_name, user.email);

    Ok(())
}

pub(crate) async fn profile(ctx: &AppContext, account: &AccountArgs) -> Result<(), CliError> {
    let user = signed_in_user(ctx, account).await?;

    println!("{} <{}>", user.full_name, user.email);
    println!("Role: {}", user.role);
    println!("Member since: {}", user.created_at);

    Ok(())
}
