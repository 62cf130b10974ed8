use sqlx::SqlitePool;

use crate::models::{NewSubmission, Submission};

pub async fn create(pool: &SqlitePool, new: &NewSubmission) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions (first_name, last_name, email, company, phone, message)
         VALUES (?, ?, ?, ?, ?, ?) RETURNING *",
    )
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(&new.email)
    .bind(&new.company)
    .bind(&new.phone)
    .bind(&new.message)
    .fetch_one(pool)
    .await
}
