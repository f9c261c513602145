//! SQL statements for the agents relation, rendered per connector dialect

use roster_core::agent::TABLE;
use roster_types::Connector;

/// Every statement the executor issues, rendered once for a connector
#[derive(Debug, Clone)]
pub struct Statements {
    pub count_all: String,
    pub list_active: String,
    pub find_by_id: String,
    pub list_by_type: String,
    pub random_active: String,
    pub search: String,
    pub count_by_type: String,
}

impl Statements {
    /// Render the statements for the given connector
    pub fn for_connector(connector: Connector) -> Self {
        let render = |sql: String| number_placeholders(&sql, connector);

        Self {
            count_all: render(format!("SELECT COUNT(*) AS total FROM {TABLE}")),
            list_active: render(format!(
                "SELECT * FROM {TABLE} WHERE status = ? ORDER BY name LIMIT ? OFFSET ?"
            )),
            find_by_id: render(format!("SELECT * FROM {TABLE} WHERE id = ?")),
            list_by_type: render(format!(
                "SELECT * FROM {TABLE} WHERE type = ? AND status = ? ORDER BY name"
            )),
            random_active: render(format!(
                "SELECT * FROM {TABLE} WHERE status = ? ORDER BY {} LIMIT 1",
                connector.random_function()
            )),
            search: render(format!(
                "SELECT * FROM {TABLE} WHERE (name LIKE ? OR type LIKE ? OR capabilities LIKE ?) \
                 AND status = ? LIMIT ?"
            )),
            count_by_type: render(format!(
                "SELECT type, COUNT(*) AS count FROM {TABLE} GROUP BY type ORDER BY count DESC"
            )),
        }
    }
}

/// Rewrite `?` placeholders to `$1..$n` for connectors that need numbered ones
///
/// Statements are fixed and carry no string literals, so every `?` is a placeholder.
pub fn number_placeholders(statement: &str, connector: Connector) -> String {
    if !connector.uses_numbered_placeholders() {
        return statement.to_string();
    }

    let mut rendered = String::with_capacity(statement.len() + 8);
    let mut index = 0;
    for ch in statement.chars() {
        if ch == '?' {
            index += 1;
            rendered.push('$');
            rendered.push_str(&index.to_string());
        } else {
            rendered.push(ch);
        }
    }
    rendered
}

/// `LIKE` pattern matching `q` anywhere in the column
pub fn contains_pattern(q: &str) -> String {
    format!("%{}%", q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_placeholders_postgres() {
        assert_eq!(
            number_placeholders("SELECT * FROM agents WHERE a = ? AND b = ?", Connector::Postgres),
            "SELECT * FROM agents WHERE a = $1 AND b = $2"
        );
    }

    #[test]
    fn test_number_placeholders_untouched_elsewhere() {
        let sql = "SELECT * FROM agents WHERE id = ?";
        assert_eq!(number_placeholders(sql, Connector::Sqlite), sql);
        assert_eq!(number_placeholders(sql, Connector::Mysql), sql);
    }

    #[test]
    fn test_sqlite_statements() {
        let statements = Statements::for_connector(Connector::Sqlite);
        assert_eq!(
            statements.list_active,
            "SELECT * FROM agents WHERE status = ? ORDER BY name LIMIT ? OFFSET ?"
        );
        assert!(statements.random_active.contains("ORDER BY RANDOM() LIMIT 1"));
        assert!(statements.count_by_type.ends_with("ORDER BY count DESC"));
    }

    #[test]
    fn test_postgres_search_statement() {
        let statements = Statements::for_connector(Connector::Postgres);
        assert!(statements
            .search
            .contains("(name LIKE $1 OR type LIKE $2 OR capabilities LIKE $3) AND status = $4 LIMIT $5"));
    }

    #[test]
    fn test_mysql_random_statement() {
        let statements = Statements::for_connector(Connector::Mysql);
        assert!(statements.random_active.contains("ORDER BY RAND()"));
    }

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern("scout"), "%scout%");
        assert_eq!(contains_pattern(""), "%%");
    }
}
