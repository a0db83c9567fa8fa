use std::io::{self, Write};

use chrono::NaiveDate;

/// A literal value in an emitted statement.
#[derive(Debug, Clone, Copy)]
pub enum SqlValue<'a> {
    Id(u64),
    Bool(bool),
    Text(&'a str),
    Date(NaiveDate),
    /// Fixed-point weight rendered with 10 fractional digits.
    Weight(f64),
}

/// Append-only sink emitting one `INSERT` statement per line.
///
/// Statement order is preserved and nothing is buffered beyond the inner
/// writer; a write error is fatal to the run.
#[derive(Debug)]
pub struct SqlEmitter<W: Write> {
    writer: W,
    statements: u64,
    bytes: u64,
}

impl<W: Write> SqlEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            statements: 0,
            bytes: 0,
        }
    }

    pub fn insert(
        &mut self,
        table: &str,
        columns: &[&str],
        values: &[SqlValue<'_>],
    ) -> io::Result<()> {
        assert_eq!(
            columns.len(),
            values.len(),
            "insert into {table}: column/value arity mismatch"
        );
        let mut line = String::with_capacity(96);
        line.push_str("INSERT INTO ");
        line.push_str(table);
        line.push_str(" (");
        for (index, column) in columns.iter().enumerate() {
            if index > 0 {
                line.push_str(", ");
            }
            line.push_str(column);
        }
        line.push_str(") VALUES (");
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                line.push_str(", ");
            }
            render(&mut line, value);
        }
        line.push_str(");\n");

        self.writer.write_all(line.as_bytes())?;
        self.statements += 1;
        self.bytes += line.len() as u64;
        Ok(())
    }

    pub fn statements(&self) -> u64 {
        self.statements
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

fn render(out: &mut String, value: &SqlValue<'_>) {
    match value {
        SqlValue::Id(id) => out.push_str(&id.to_string()),
        SqlValue::Bool(value) => out.push_str(if *value { "true" } else { "false" }),
        SqlValue::Text(text) => {
            out.push('\'');
            for ch in text.chars() {
                // Single quotes are doubled per the SQL literal syntax.
                if ch == '\'' {
                    out.push('\'');
                }
                out.push(ch);
            }
            out.push('\'');
        }
        SqlValue::Date(date) => {
            out.push('\'');
            out.push_str(&date.format("%Y-%m-%d").to_string());
            out.push('\'');
        }
        SqlValue::Weight(weight) => out.push_str(&format!("{weight:.10}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(values: &[SqlValue<'_>], columns: &[&str]) -> String {
        let mut buffer = Vec::new();
        let mut emitter = SqlEmitter::new(&mut buffer);
        emitter.insert("t", columns, values).expect("emit");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn renders_a_full_statement() {
        let line = emit(
            &[SqlValue::Text("Дыба"), SqlValue::Id(4), SqlValue::Bool(false)],
            &["_name", "monster_id", "is_working"],
        );
        assert_eq!(
            line,
            "INSERT INTO t (_name, monster_id, is_working) VALUES ('Дыба', 4, false);\n"
        );
    }

    #[test]
    fn doubles_embedded_single_quotes() {
        let line = emit(&[SqlValue::Text("d'Arc")], &["_name"]);
        assert_eq!(line, "INSERT INTO t (_name) VALUES ('d''Arc');\n");
    }

    #[test]
    fn renders_dates_quoted() {
        let date = NaiveDate::from_ymd_opt(1943, 1, 1).expect("valid date");
        let line = emit(&[SqlValue::Date(date)], &["_date"]);
        assert_eq!(line, "INSERT INTO t (_date) VALUES ('1943-01-01');\n");
    }

    #[test]
    fn renders_weights_with_ten_digits() {
        let line = emit(&[SqlValue::Weight(0.25)], &["_weight"]);
        assert_eq!(line, "INSERT INTO t (_weight) VALUES (0.2500000000);\n");
    }

    #[test]
    fn counts_statements_and_bytes() {
        let mut buffer = Vec::new();
        let mut emitter = SqlEmitter::new(&mut buffer);
        emitter
            .insert("t", &["_name"], &[SqlValue::Text("a")])
            .expect("emit");
        emitter
            .insert("t", &["_name"], &[SqlValue::Text("b")])
            .expect("emit");
        let statements = emitter.statements();
        let bytes = emitter.bytes_written();
        assert_eq!(statements, 2);
        assert_eq!(bytes, buffer.len() as u64);
    }
}
