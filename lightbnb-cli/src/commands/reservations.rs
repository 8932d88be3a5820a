use std::io::Write;

use anyhow::{ensure, Result};
use clap::Parser;
use lightbnb_db::{BookingStore, DEFAULT_LIMIT};
use tracing::debug;

use super::print_json;

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest whose reservations to list
    #[arg(long)]
    pub guest: i32,

    /// Maximum number of reservations
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: i64,
}

pub async fn run_reservations<S, W>(store: &S, args: ReservationsArgs, out: &mut W) -> Result<()>
where
    S: BookingStore + ?Sized,
    W: Write,
{
    ensure!(args.limit >= 0, "--limit must not be negative");

    let reservations = store.get_all_reservations(args.guest, args.limit).await?;
    debug!(guest = args.guest, count = reservations.len(), "listed reservations");
    print_json(out, &reservations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::sample_store;

    async fn run(args: ReservationsArgs) -> Result<serde_json::Value> {
        let store = sample_store();
        let mut out = Vec::new();
        run_reservations(&store, args, &mut out).await?;
        Ok(serde_json::from_slice(&out)?)
    }

    #[tokio::test]
    async fn lists_earliest_first() {
        let json = run(ReservationsArgs {
            guest: 1,
            limit: DEFAULT_LIMIT,
        })
        .await
        .unwrap();
        let ids: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![4, 1]);
        assert_eq!(json[0]["start_date"], "2014-10-21");
        assert_eq!(json[0]["cost_per_night"], 8500);
    }

    #[tokio::test]
    async fn limit_is_passed_through() {
        let json = run(ReservationsArgs { guest: 1, limit: 1 }).await.unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_guest_prints_empty_list() {
        let json = run(ReservationsArgs {
            guest: 42,
            limit: DEFAULT_LIMIT,
        })
        .await
        .unwrap();
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn negative_limit_is_rejected() {
        let err = run(ReservationsArgs {
            guest: 1,
            limit: -1,
        })
        .await
        .unwrap_err();
        assert!(err.to_string().contains("--limit"));
    }

    #[test]
    fn limit_defaults() {
        let args = ReservationsArgs::try_parse_from(["reservations", "--guest", "3"]).unwrap();
        assert_eq!(args.limit, DEFAULT_LIMIT);
    }
}
