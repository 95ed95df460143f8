//! Database module for Season Scoreboard
//! Caches the last imported season in SQLite

use crate::types::{SeasonFile, SeasonScore, Student, StudentMap, WeeklyScore};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Result};
use std::path::Path;
use tracing::debug;

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        debug!(path = %path.display(), "Database opened");
        Ok(db)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS students (
                student_id TEXT PRIMARY KEY,
                display_name TEXT
            );

            CREATE TABLE IF NOT EXISTS season_scores (
                position INTEGER PRIMARY KEY,
                student_id TEXT NOT NULL,
                rank INTEGER NOT NULL,
                weekly TEXT NOT NULL,
                best_n INTEGER NOT NULL,
                total_final REAL NOT NULL,
                percent_100 REAL NOT NULL
            );

            CREATE TABLE IF NOT EXISTS metadata (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Replace the cached season with `season`. Input order is kept in
    /// `position` so equal sort keys stay in the order the backend sent.
    pub fn replace_season(&self, season: &SeasonFile) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM season_scores", [])?;
        tx.execute("DELETE FROM students", [])?;

        {
            let mut insert_student = tx.prepare(
                "INSERT INTO students (student_id, display_name) VALUES (?1, ?2)
                 ON CONFLICT(student_id) DO UPDATE SET display_name = excluded.display_name",
            )?;
            for student in &season.students {
                insert_student.execute(params![student.student_id, student.display_name])?;
            }

            let mut insert_score = tx.prepare(
                "INSERT INTO season_scores
                    (position, student_id, rank, weekly, best_n, total_final, percent_100)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for (position, score) in season.scores.iter().enumerate() {
                let weekly = serde_json::to_string(&score.weekly)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
                insert_score.execute(params![
                    position as i64,
                    score.student_id,
                    score.rank,
                    weekly,
                    score.best_n,
                    score.total_final,
                    score.percent_100
                ])?;
            }
        }

        let imported_at = chrono::Utc::now().to_rfc3339();
        Self::set_metadata_in(&tx, "imported_at", &imported_at)?;
        match &season.season {
            Some(label) => Self::set_metadata_in(&tx, "season", label)?,
            None => {
                tx.execute("DELETE FROM metadata WHERE key = 'season'", [])?;
            }
        }
        tx.commit()?;

        debug!(
            scores = season.scores.len(),
            students = season.students.len(),
            "Season imported"
        );
        Ok(season.scores.len())
    }

    /// All scores in import order
    pub fn get_scores(&self) -> Result<Vec<SeasonScore>> {
        let mut stmt = self.conn.prepare(
            "SELECT student_id, rank, weekly, best_n, total_final, percent_100
             FROM season_scores ORDER BY position",
        )?;

        let scores = stmt
            .query_map([], |row| {
                let weekly_json: String = row.get(2)?;
                let weekly: Vec<WeeklyScore> = serde_json::from_str(&weekly_json)
                    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
                Ok(SeasonScore {
                    student_id: row.get(0)?,
                    rank: row.get(1)?,
                    weekly,
                    best_n: row.get(3)?,
                    total_final: row.get(4)?,
                    percent_100: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>>>()?;

        Ok(scores)
    }

    pub fn get_students(&self) -> Result<StudentMap> {
        let mut stmt = self
            .conn
            .prepare("SELECT student_id, display_name FROM students")?;

        let students = stmt
            .query_map([], |row| {
                Ok(Student {
                    student_id: row.get(0)?,
                    display_name: row.get(1)?,
                })
            })?
            .map(|r| r.map(|s| (s.student_id.clone(), s)))
            .collect::<Result<StudentMap>>()?;

        Ok(students)
    }

    pub fn score_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM season_scores", [], |r| r.get(0))?;
        Ok(count as usize)
    }

    pub fn season_label(&self) -> Result<Option<String>> {
        self.get_metadata("season")
    }

    /// RFC 3339 timestamp of the last import
    pub fn imported_at(&self) -> Result<Option<String>> {
        self.get_metadata("imported_at")
    }

    fn get_metadata(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM metadata WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;

        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    fn set_metadata_in(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO metadata (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}
