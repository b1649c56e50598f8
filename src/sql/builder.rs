//! Builds the parameterized statements for the Cadastro table.

use crate::error::ConfigError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

pub const DEFAULT_TABLE: &str = "Cadastro";

/// Columns read back for every row. `id` is widened so SERIAL and BIGSERIAL both decode as i64.
const RETURNED_COLUMNS: &str = "id::bigint AS id, nome, email, celular";

/// Path ids arrive as text; the cast lets PostgreSQL decide whether they are valid.
const ID_PARAM_CAST: &str = "::text::bigint";

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$").expect("static pattern")
    })
}

/// Table identifier, optionally schema-qualified. Emitted unquoted so PostgreSQL folds case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        if identifier_re().is_match(s) {
            Ok(TableName(s.to_string()))
        } else {
            Err(ConfigError::Invalid {
                key: "table",
                value: s.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TableName {
    fn default() -> Self {
        TableName(DEFAULT_TABLE.to_string())
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// All statements used by the service, rendered once per table.
#[derive(Clone, Debug)]
pub struct Statements {
    pub select_all: String,
    /// `$1` = id.
    pub select_by_id: String,
    /// `$1..$3` = nome, email, celular.
    pub insert: String,
    /// `$1..$3` = nome, email, celular; `$4` = id.
    pub update: String,
    /// `$1` = id.
    pub delete: String,
    pub ping: &'static str,
}

impl Statements {
    pub fn for_table(table: &TableName) -> Self {
        Statements {
            select_all: format!("SELECT {} FROM {}", RETURNED_COLUMNS, table),
            select_by_id: format!(
                "SELECT {} FROM {} WHERE id = $1{}",
                RETURNED_COLUMNS, table, ID_PARAM_CAST
            ),
            insert: format!(
                "INSERT INTO {} (nome, email, celular) VALUES ($1, $2, $3) RETURNING {}",
                table, RETURNED_COLUMNS
            ),
            update: format!(
                "UPDATE {} SET nome = $1, email = $2, celular = $3 WHERE id = $4{} RETURNING {}",
                table, ID_PARAM_CAST, RETURNED_COLUMNS
            ),
            delete: format!(
                "DELETE FROM {} WHERE id = $1{} RETURNING {}",
                table, ID_PARAM_CAST, RETURNED_COLUMNS
            ),
            ping: "SELECT 1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_accepts_plain_and_schema_qualified() {
        assert_eq!(TableName::parse("Cadastro").unwrap().as_str(), "Cadastro");
        assert_eq!(TableName::parse("public.cadastro").unwrap().as_str(), "public.cadastro");
    }

    #[test]
    fn table_name_rejects_injection() {
        for bad in ["", "1abc", "Cadastro; DROP TABLE x", "a.b.c", "\"Cadastro\"", "a b"] {
            assert!(TableName::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn statements_use_placeholders_only() {
        let s = Statements::for_table(&TableName::default());
        assert_eq!(s.select_all, "SELECT id::bigint AS id, nome, email, celular FROM Cadastro");
        assert_eq!(
            s.insert,
            "INSERT INTO Cadastro (nome, email, celular) VALUES ($1, $2, $3) RETURNING id::bigint AS id, nome, email, celular"
        );
        assert!(s.update.contains("SET nome = $1, email = $2, celular = $3 WHERE id = $4::text::bigint"));
        assert!(s.delete.starts_with("DELETE FROM Cadastro WHERE id = $1::text::bigint RETURNING"));
        assert!(s.select_by_id.ends_with("WHERE id = $1::text::bigint"));
    }
}
