//! Builds the parameterized statements used by the Postgres person store.
//!
//! The schema/table/column mapping is declared once in [`PersonTable`]; the
//! [`crate::model::Person`] type carries no persistence metadata.

/// Column order used in every SELECT/INSERT/RETURNING list.
pub const PERSON_COLUMNS: [&str; 5] = ["id", "name", "age", "email", "country"];

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(columns: &[&str]) -> String {
    columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// Where person rows live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonTable {
    pub schema: String,
    pub table: String,
}

impl Default for PersonTable {
    fn default() -> Self {
        PersonTable::new("public")
    }
}

impl PersonTable {
    pub const TABLE_NAME: &'static str = "people";

    pub fn new(schema: impl Into<String>) -> Self {
        PersonTable {
            schema: schema.into(),
            table: Self::TABLE_NAME.to_string(),
        }
    }

    /// Full qualified table name.
    pub fn qualified(&self) -> String {
        format!("{}.{}", quoted(&self.schema), quoted(&self.table))
    }

    pub fn create_schema(&self) -> String {
        format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(&self.schema))
    }

    pub fn create_table(&self) -> String {
        format!(
            r#"CREATE TABLE IF NOT EXISTS {} (
                "id" UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                "name" TEXT NOT NULL DEFAULT '',
                "age" INTEGER NOT NULL DEFAULT 0,
                "email" TEXT NOT NULL DEFAULT '',
                "country" TEXT NOT NULL DEFAULT ''
            )"#,
            self.qualified()
        )
    }

    /// No ORDER BY: rows come back in the order the database yields them.
    pub fn select_all(&self) -> String {
        format!("SELECT {} FROM {}", column_list(&PERSON_COLUMNS), self.qualified())
    }

    /// `$1` = id.
    pub fn select_by_id(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE \"id\" = $1",
            column_list(&PERSON_COLUMNS),
            self.qualified()
        )
    }

    pub fn count(&self) -> String {
        format!("SELECT COUNT(*) FROM {}", self.qualified())
    }

    /// Insert without id so the column default assigns one. `$1..$4` = name, age, email, country.
    pub fn insert_generated_id(&self) -> String {
        format!(
            "INSERT INTO {} ({}) VALUES ($1, $2, $3, $4) RETURNING {}",
            self.qualified(),
            column_list(&PERSON_COLUMNS[1..]),
            column_list(&PERSON_COLUMNS)
        )
    }

    /// Multi-row insert with explicit ids. Placeholders run row by row in column order.
    pub fn insert_rows(&self, rows: usize) -> String {
        let width = PERSON_COLUMNS.len();
        let values = (0..rows)
            .map(|r| {
                let placeholders = (1..=width)
                    .map(|c| format!("${}", r * width + c))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("({})", placeholders)
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES {} RETURNING {}",
            self.qualified(),
            column_list(&PERSON_COLUMNS),
            values,
            column_list(&PERSON_COLUMNS)
        )
    }

    /// Full replace of every non-key column. `$1` = id, `$2..$5` = name, age, email, country.
    pub fn replace(&self) -> String {
        format!(
            "UPDATE {} SET \"name\" = $2, \"age\" = $3, \"email\" = $4, \"country\" = $5 WHERE \"id\" = $1 RETURNING {}",
            self.qualified(),
            column_list(&PERSON_COLUMNS)
        )
    }

    /// Merge update: a zero-valued parameter leaves its column untouched.
    /// `$1` = id, `$2..$5` = name, age, email, country.
    pub fn merge(&self) -> String {
        format!(
            "UPDATE {} SET \
             \"name\" = COALESCE(NULLIF($2, ''), \"name\"), \
             \"age\" = COALESCE(NULLIF($3, 0), \"age\"), \
             \"email\" = COALESCE(NULLIF($4, ''), \"email\"), \
             \"country\" = COALESCE(NULLIF($5, ''), \"country\") \
             WHERE \"id\" = $1",
            self.qualified()
        )
    }

    /// `$1` = id.
    pub fn delete(&self) -> String {
        format!("DELETE FROM {} WHERE \"id\" = $1", self.qualified())
    }
}

/// Postgres allows at most this many bind parameters in one statement.
pub const MAX_BIND_PARAMS: usize = 65_535;

/// Largest row count a single multi-row insert may carry.
pub fn max_rows_per_insert() -> usize {
    MAX_BIND_PARAMS / PERSON_COLUMNS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifies_and_quotes_table() {
        let t = PersonTable::new("world");
        assert_eq!(t.qualified(), "\"world\".\"people\"");
        let weird = PersonTable::new("we\"ird");
        assert_eq!(weird.qualified(), "\"we\"\"ird\".\"people\"");
    }

    #[test]
    fn select_by_id_binds_one_param() {
        let sql = PersonTable::default().select_by_id();
        assert_eq!(
            sql,
            "SELECT \"id\", \"name\", \"age\", \"email\", \"country\" FROM \"public\".\"people\" WHERE \"id\" = $1"
        );
    }

    #[test]
    fn generated_id_insert_omits_id_column() {
        let sql = PersonTable::default().insert_generated_id();
        assert!(sql.starts_with(
            "INSERT INTO \"public\".\"people\" (\"name\", \"age\", \"email\", \"country\") VALUES ($1, $2, $3, $4)"
        ));
        assert!(sql.ends_with("RETURNING \"id\", \"name\", \"age\", \"email\", \"country\""));
    }

    #[test]
    fn multi_row_insert_numbers_placeholders_sequentially() {
        let sql = PersonTable::default().insert_rows(2);
        assert!(sql.contains("VALUES ($1, $2, $3, $4, $5), ($6, $7, $8, $9, $10)"));
    }

    #[test]
    fn merge_keeps_columns_for_zero_values() {
        let sql = PersonTable::default().merge();
        assert!(sql.contains("\"age\" = COALESCE(NULLIF($3, 0), \"age\")"));
        assert!(sql.contains("\"name\" = COALESCE(NULLIF($2, ''), \"name\")"));
        assert!(sql.ends_with("WHERE \"id\" = $1"));
    }

    #[test]
    fn insert_row_cap_fits_parameter_limit() {
        assert!(max_rows_per_insert() * PERSON_COLUMNS.len() <= MAX_BIND_PARAMS);
    }
}
