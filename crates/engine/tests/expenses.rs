use chrono::NaiveDate;
use sea_orm::{Database, DatabaseConnection};

use engine::{Engine, EngineError, ExpenseDraft, ExpenseListFilter, Money, Month};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

#[tokio::test]
async fn add_assigns_ids_and_persists_fields() {
    let (engine, _db) = engine_with_db().await;

    let draft = ExpenseDraft::new(date(2024, 5, 2), money("120.00"), "Food").note(" groceries ");
    let first = engine.add_expense(draft).await.unwrap();
    let second = engine
        .add_expense(ExpenseDraft::new(date(2024, 5, 3), money("80.50"), "Transport"))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.note.as_deref(), Some("groceries"));
    assert_eq!(second.note, None);

    let stored = engine.expense(first.id).await.unwrap();
    assert_eq!(stored, first);
    assert_eq!(stored.amount, Money::new(12000));
    assert_eq!(stored.date, date(2024, 5, 2));
}

#[tokio::test]
async fn add_rejects_invalid_input_before_writing() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .add_expense(ExpenseDraft::new(date(2024, 5, 2), Money::ZERO, "Food"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let err = engine
        .add_expense(ExpenseDraft::new(date(2024, 5, 2), money("-3"), "Food"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let err = engine
        .add_expense(ExpenseDraft::new(date(2024, 5, 2), money("3"), "  "))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidName(_)));

    let all = engine
        .list_expenses(&ExpenseListFilter::default())
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn list_orders_by_date_then_id_and_filters() {
    let (engine, _db) = engine_with_db().await;

    let late = engine
        .add_expense(ExpenseDraft::new(date(2024, 6, 1), money("5"), "Food"))
        .await
        .unwrap();
    let early = engine
        .add_expense(ExpenseDraft::new(date(2024, 5, 31), money("7"), "Fees"))
        .await
        .unwrap();
    let same_day = engine
        .add_expense(ExpenseDraft::new(date(2024, 5, 31), money("9"), "Food"))
        .await
        .unwrap();

    let all = engine
        .list_expenses(&ExpenseListFilter::default())
        .await
        .unwrap();
    let ids: Vec<i64> = all.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![early.id, same_day.id, late.id]);

    let may = Month::new(2024, 5).unwrap();
    let in_may = engine
        .list_expenses(&ExpenseListFilter::month(may))
        .await
        .unwrap();
    assert_eq!(in_may.len(), 2);
    assert!(in_may.iter().all(|e| may.contains(e.date)));

    let food_in_may = engine
        .list_expenses(&ExpenseListFilter {
            month: Some(may),
            category: Some("Food".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(food_in_may.len(), 1);
    assert_eq!(food_in_may[0].id, same_day.id);

    let lowercase = engine
        .list_expenses(&ExpenseListFilter {
            month: None,
            category: Some("food".to_string()),
        })
        .await
        .unwrap();
    assert!(lowercase.is_empty());
}

#[tokio::test]
async fn category_filter_is_trimmed_like_stored_categories() {
    let (engine, _db) = engine_with_db().await;
    engine
        .add_expense(ExpenseDraft::new(date(2024, 5, 2), money("1.00"), " Food "))
        .await
        .unwrap();
    engine
        .add_expense(ExpenseDraft::new(date(2024, 5, 3), money("2.00"), "Travel"))
        .await
        .unwrap();

    let padded = ExpenseListFilter {
        month: None,
        category: Some(" Food ".to_string()),
    };
    let found = engine.list_expenses(&padded).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category, "Food");

    let blank = ExpenseListFilter {
        month: None,
        category: Some("   ".to_string()),
    };
    assert_eq!(engine.list_expenses(&blank).await.unwrap().len(), 2);
}

#[tokio::test]
async fn delete_returns_record_and_missing_id_is_not_found() {
    let (engine, _db) = engine_with_db().await;

    let expense = engine
        .add_expense(ExpenseDraft::new(date(2024, 5, 2), money("12.5"), "Food"))
        .await
        .unwrap();

    let deleted = engine.delete_expense(expense.id).await.unwrap();
    assert_eq!(deleted, expense);

    assert_eq!(
        engine.expense(expense.id).await.unwrap_err(),
        EngineError::ExpenseNotFound(expense.id)
    );
    assert_eq!(
        engine.delete_expense(expense.id).await.unwrap_err(),
        EngineError::ExpenseNotFound(expense.id)
    );
    assert_eq!(
        engine.delete_expense(9999).await.unwrap_err(),
        EngineError::ExpenseNotFound(9999)
    );
}

#[tokio::test]
async fn data_survives_a_new_engine_on_the_same_database() {
    let (engine, db) = engine_with_db().await;
    engine
        .add_expense(ExpenseDraft::new(date(2024, 5, 2), money("1.99"), "Food"))
        .await
        .unwrap();

    let reopened = Engine::builder().database(db).build().await.unwrap();
    let all = reopened
        .list_expenses(&ExpenseListFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].amount, Money::new(199));
}

#[tokio::test]
async fn builder_without_database_fails() {
    assert!(Engine::builder().build().await.is_err());
}
