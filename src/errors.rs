//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing / input validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid weekday {0}: expected 0 (Monday) to 6 (Sunday)")]
    InvalidWeekday(u32),

    #[error("Invalid hour {0}: expected 0-23")]
    InvalidHour(u32),

    #[error("Invalid minute {0}: expected 0-59")]
    InvalidMinute(u32),

    #[error("Invalid flag '{0}': expected NAME or NAME=true/false")]
    InvalidFlag(String),

    #[error("Session end must be strictly after its start")]
    InvalidInterval,

    // ---------------------------
    // Timer state
    // ---------------------------
    #[error("A timer is already running")]
    TimerAlreadyRunning,

    #[error("No timer is currently running")]
    TimerNotRunning,

    // ---------------------------
    // Lookups
    // ---------------------------
    #[error("Priority item {0} not found")]
    ItemNotFound(i64),

    #[error("Work session {0} not found")]
    SessionNotFound(i64),

    #[error("Resource link {0} not found")]
    LinkNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
