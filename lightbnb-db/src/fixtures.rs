//! JSON fixtures for seeding a database
//!
//! Accepts `users.json` / `properties.json` either as an object keyed by
//! id (`{"1": {...}, "2": {...}}`) or as an array of records with an
//! optional `id` field. Fixture ids are only used to re-link property
//! owners to the ids the database actually assigns.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DbError, Result};
use crate::models::{NewProperty, NewPropertyParams, NewUser, NewUserParams};
use crate::store::BookingStore;

/// A fixture record with the id it had in the file, if any
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture<T> {
    pub id: Option<i32>,
    pub record: T,
}

#[derive(Deserialize)]
struct Entry<T> {
    #[serde(default)]
    id: Option<i32>,
    #[serde(flatten)]
    record: T,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Records<T> {
    Keyed(BTreeMap<String, Entry<T>>),
    List(Vec<Entry<T>>),
}

fn parse_records<P, T>(content: &str, path: &Path) -> Result<Vec<Fixture<T>>>
where
    P: DeserializeOwned,
    T: TryFrom<P, Error = crate::models::ValidationError>,
{
    let records: Records<P> = serde_json::from_str(content)
        .map_err(|e| DbError::fixture(path, format!("invalid JSON: {}", e)))?;

    let mut entries: Vec<(Option<i32>, P)> = match records {
        Records::Keyed(map) => map
            .into_iter()
            .map(|(key, entry)| (key.parse().ok().or(entry.id), entry.record))
            .collect(),
        Records::List(list) => list.into_iter().map(|e| (e.id, e.record)).collect(),
    };
    // Keyed maps iterate "1", "10", "2"; restore numeric order
    entries.sort_by_key(|(id, _)| id.unwrap_or(i32::MAX));

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (id, params))| {
            let record = T::try_from(params).map_err(|e| {
                let which = id.unwrap_or(index as i32);
                DbError::fixture(path, format!("record {}: {}", which, e))
            })?;
            Ok(Fixture { id, record })
        })
        .collect()
}

pub fn parse_users(content: &str, path: &Path) -> Result<Vec<Fixture<NewUser>>> {
    parse_records::<NewUserParams, NewUser>(content, path)
}

pub fn parse_properties(content: &str, path: &Path) -> Result<Vec<Fixture<NewProperty>>> {
    parse_records::<NewPropertyParams, NewProperty>(content, path)
}

pub fn load_users(path: &Path) -> Result<Vec<Fixture<NewUser>>> {
    parse_users(&read(path)?, path)
}

pub fn load_properties(path: &Path) -> Result<Vec<Fixture<NewProperty>>> {
    parse_properties(&read(path)?, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| DbError::fixture(path, e.to_string()))
}

/// Outcome of [`seed`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub users_added: usize,
    /// Users whose email was already taken
    pub users_skipped: usize,
    pub properties_added: usize,
}

/// Insert fixture users, then fixture properties with owners re-linked to
/// the ids assigned to the seeded users.
///
/// Users whose email already exists are skipped, and their fixture ids map
/// to the existing account. Any other failure stops the run and is returned.
pub async fn seed<S>(
    store: &S,
    users: Vec<Fixture<NewUser>>,
    properties: Vec<Fixture<NewProperty>>,
) -> Result<SeedReport>
where
    S: BookingStore + ?Sized,
{
    let mut report = SeedReport::default();
    let mut owners: HashMap<i32, i32> = HashMap::new();

    for fixture in users {
        let email = fixture.record.email().to_owned();
        let user = match store.add_user(fixture.record).await {
            Ok(user) => {
                report.users_added += 1;
                user
            }
            Err(DbError::Conflict { .. }) => {
                tracing::warn!(fixture_id = ?fixture.id, "user already exists, skipping");
                report.users_skipped += 1;
                // The existing account keeps ownership of this fixture's listings
                match store.get_user_with_email(&email).await? {
                    Some(existing) => existing,
                    None => continue,
                }
            }
            Err(e) => return Err(e),
        };
        if let Some(old) = fixture.id {
            owners.insert(old, user.id);
        }
    }

    for fixture in properties {
        let property = fixture.record;
        let owner = owners
            .get(&property.owner_id())
            .copied()
            .unwrap_or(property.owner_id());
        store.add_property(property.with_owner(owner)).await?;
        report.properties_added += 1;
    }

    tracing::info!(
        users_added = report.users_added,
        users_skipped = report.users_skipped,
        properties_added = report.properties_added,
        "seed complete"
    );
    Ok(report)
}
