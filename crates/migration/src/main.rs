use sea_orm::Database;
use sea_orm_migration::prelude::*;

const DEFAULT_DATABASE_URL: &str = "sqlite:./tally.db?mode=rwc";

/// `TALLY_DATABASE_URL` (shared with the `tally` binary), then `DATABASE_URL`.
fn database_url(var: impl Fn(&str) -> Option<String>) -> String {
    ["TALLY_DATABASE_URL", "DATABASE_URL"]
        .into_iter()
        .filter_map(|key| var(key))
        .find(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    let url = database_url(|key| std::env::var(key).ok());

    let db = Database::connect(url.as_str()).await?;

    match cmd.as_str() {
        "up" => migration::Migrator::up(&db, None).await?,
        "down" => migration::Migrator::down(&db, Some(1)).await?,
        "fresh" => migration::Migrator::fresh(&db).await?,
        "status" => migration::Migrator::status(&db).await?,
        other => {
            eprintln!("unknown command '{other}', expected one of: up, down, fresh, status");
            std::process::exit(2);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (ToString::to_string(k), ToString::to_string(v)))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn tally_url_wins_over_generic_url() {
        let vars = lookup(&[
            ("TALLY_DATABASE_URL", "sqlite:./a.db"),
            ("DATABASE_URL", "sqlite:./b.db"),
        ]);
        assert_eq!(database_url(vars), "sqlite:./a.db");
        assert_eq!(
            database_url(lookup(&[("DATABASE_URL", "sqlite:./b.db")])),
            "sqlite:./b.db"
        );
    }

    #[test]
    fn falls_back_to_the_app_default() {
        assert_eq!(database_url(lookup(&[])), DEFAULT_DATABASE_URL);
        assert_eq!(
            database_url(lookup(&[("TALLY_DATABASE_URL", "  ")])),
            DEFAULT_DATABASE_URL
        );
        assert_eq!(
            database_url(lookup(&[
                ("TALLY_DATABASE_URL", ""),
                ("DATABASE_URL", "sqlite:./b.db"),
            ])),
            "sqlite:./b.db"
        );
    }
}
