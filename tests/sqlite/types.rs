use sqlx::sqlite::SqliteConnection;
use sqlx::{Connection, Executor, Row};
use sqlx_datestring::{DateLayout, DateString};

// Make a new in-memory connection with the `holidays` table
async fn new() -> anyhow::Result<SqliteConnection> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut conn = SqliteConnection::connect("sqlite::memory:").await?;

    conn.execute(
        r#"
CREATE TABLE holidays (
    id          INTEGER PRIMARY KEY,
    name        TEXT    NOT NULL,
    observed_on TEXT
)
        "#,
    )
    .await?;

    Ok(conn)
}

async fn insert(
    conn: &mut SqliteConnection,
    name: &str,
    date: DateString,
) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO holidays (name, observed_on) VALUES (?, ?)")
        .bind(name)
        .bind(date)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

#[tokio::test]
async fn it_binds_valid_dates_as_text() -> anyhow::Result<()> {
    let mut conn = new().await?;

    insert(&mut conn, "valentines", DateString::from_value("2023-02-14")).await?;

    let stored: Option<String> = sqlx::query_scalar("SELECT observed_on FROM holidays")
        .fetch_one(&mut conn)
        .await?;
    assert_eq!(stored.as_deref(), Some("2023-02-14"));

    let date: DateString = sqlx::query_scalar("SELECT observed_on FROM holidays")
        .fetch_one(&mut conn)
        .await?;
    assert!(date.is_valid());
    assert_eq!(date, DateString::from_value("2023-02-14"));

    Ok(())
}

#[tokio::test]
async fn it_binds_null_dates_as_null() -> anyhow::Result<()> {
    let mut conn = new().await?;

    insert(&mut conn, "someday", DateString::from_value("2023-02-30")).await?;
    insert(&mut conn, "never", DateString::null()).await?;

    let nulls: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM holidays WHERE observed_on IS NULL")
            .fetch_one(&mut conn)
            .await?;
    assert_eq!(nulls, 2);

    let rows: Vec<(String, DateString)> =
        sqlx::query_as("SELECT name, observed_on FROM holidays ORDER BY id")
            .fetch_all(&mut conn)
            .await?;

    assert_eq!(rows.len(), 2);
    for (name, date) in rows {
        assert!(date.is_null(), "{name}");
        assert_eq!(date.value(), "");
    }

    Ok(())
}

#[tokio::test]
async fn it_trusts_text_from_the_database() -> anyhow::Result<()> {
    let mut conn = new().await?;

    conn.execute("INSERT INTO holidays (name, observed_on) VALUES ('party', 'next friday')")
        .await?;

    let row = sqlx::query("SELECT observed_on FROM holidays")
        .fetch_one(&mut conn)
        .await?;
    let date: DateString = row.try_get("observed_on")?;

    assert!(date.is_valid());
    assert_eq!(date.value(), "next friday");
    assert!(!date.check_valid(&DateLayout::ISO_8601));

    Ok(())
}

#[tokio::test]
async fn it_round_trips_through_json_and_sql() -> anyhow::Result<()> {
    let mut conn = new().await?;

    let from_json = DateString::from_json("\"2023-12-25\"")?;
    insert(&mut conn, "christmas", from_json).await?;
    insert(&mut conn, "unknown", DateString::from_json("null")?).await?;

    let dates: Vec<DateString> =
        sqlx::query_scalar("SELECT observed_on FROM holidays ORDER BY id")
            .fetch_all(&mut conn)
            .await?;

    let encoded = dates
        .iter()
        .map(DateString::to_json)
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(encoded, ["\"2023-12-25\"", "null"]);

    Ok(())
}
