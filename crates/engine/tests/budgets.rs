use sea_orm::Database;

use engine::{Budget, Engine, EngineError, Money, Month};
use migration::MigratorTrait;

async fn engine() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

fn month(s: &str) -> Month {
    s.parse().unwrap()
}

#[tokio::test]
async fn set_then_get_round_trips() {
    let engine = engine().await;
    let may = month("2024-05");

    let set = engine.set_budget(may, Money::new(50000)).await.unwrap();
    assert_eq!(
        set,
        Budget {
            month: may,
            amount: Money::new(50000)
        }
    );
    assert_eq!(engine.budget(may).await.unwrap(), Some(set));
}

#[tokio::test]
async fn setting_again_overwrites_the_same_month_only() {
    let engine = engine().await;
    let may = month("2024-05");
    let june = month("2024-06");

    engine.set_budget(may, Money::new(50000)).await.unwrap();
    engine.set_budget(june, Money::new(10000)).await.unwrap();
    engine.set_budget(may, Money::new(42000)).await.unwrap();

    assert_eq!(
        engine.budget(may).await.unwrap().map(|b| b.amount),
        Some(Money::new(42000))
    );
    assert_eq!(
        engine.budget(june).await.unwrap().map(|b| b.amount),
        Some(Money::new(10000))
    );

    let all = engine.budgets().await.unwrap();
    let months: Vec<Month> = all.iter().map(|b| b.month).collect();
    assert_eq!(months, vec![may, june]);
}

#[tokio::test]
async fn missing_budget_is_none_and_zero_budget_is_kept() {
    let engine = engine().await;
    let june = month("2024-06");

    assert_eq!(engine.budget(june).await.unwrap(), None);

    engine.set_budget(june, Money::ZERO).await.unwrap();
    assert_eq!(
        engine.budget(june).await.unwrap().map(|b| b.amount),
        Some(Money::ZERO)
    );
}

#[tokio::test]
async fn negative_budget_is_rejected() {
    let engine = engine().await;
    let may = month("2024-05");

    let err = engine.set_budget(may, Money::new(-1)).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
    assert_eq!(engine.budget(may).await.unwrap(), None);
}

#[tokio::test]
async fn clear_removes_budget_and_reports_missing_one() {
    let engine = engine().await;
    let may = month("2024-05");

    engine.set_budget(may, Money::new(100)).await.unwrap();
    engine.clear_budget(may).await.unwrap();
    assert_eq!(engine.budget(may).await.unwrap(), None);

    assert_eq!(
        engine.clear_budget(may).await.unwrap_err(),
        EngineError::BudgetNotConfigured(may)
    );
}
