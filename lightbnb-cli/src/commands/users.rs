//! User lookup and registration

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use lightbnb_db::{BookingStore, NewUser};

use super::print_json;

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Look up a user by email or id
    Get(GetUserArgs),
    /// Register a new user
    Add(AddUserArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("key").required(true).args(["email", "id"])))]
pub struct GetUserArgs {
    /// Exact email address
    #[arg(long)]
    pub email: Option<String>,

    /// User id
    #[arg(long)]
    pub id: Option<i32>,
}

#[derive(Parser, Debug)]
pub struct AddUserArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (must be unique)
    #[arg(long)]
    pub email: String,

    /// Password or password hash, stored as given
    #[arg(long, env = "LIGHTBNB_NEW_USER_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run_user<S, W>(store: &S, args: UserArgs, out: &mut W) -> Result<()>
where
    S: BookingStore + ?Sized,
    W: Write,
{
    match args.command {
        UserCommand::Get(args) => {
            let (user, key) = match (args.email, args.id) {
                (Some(email), _) => (
                    store.get_user_with_email(&email).await?,
                    format!("email {}", email),
                ),
                (None, Some(id)) => (store.get_user_with_id(id).await?, format!("id {}", id)),
                (None, None) => bail!("either --email or --id is required"),
            };

            match user {
                Some(user) => print_json(out, &user),
                None => bail!("no user with {}", key),
            }
        }
        UserCommand::Add(args) => {
            let new_user = NewUser::new(&args.name, &args.email, &args.password)
                .context("Invalid user")?;
            let user = store.add_user(new_user).await?;
            print_json(out, &user)
        }
    }
}
