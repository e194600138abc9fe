mod read;
mod types;
mod write;

use super::PostgresRepositories;

const POST_COLUMNS: &str =
    "id, title, summary, body, active, views, category_id, created_at, updated_at";
