//! Recording mock driver shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use siphon_core::{ConnectParams, Connection, Cursor, Driver, DriverError, SqlValue};

/// Connect parameters captured as owned strings for later assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedParams {
    pub driver_name: String,
    pub conn_string: String,
    pub user: String,
    pub password: String,
    pub driver_file: String,
}

/// Counters observed by tests, shared across the driver and everything
/// it hands out.
#[derive(Debug, Default)]
pub struct DriverLog {
    pub connect_attempts: AtomicUsize,
    pub closes: AtomicUsize,
    pub cursors_dropped: AtomicUsize,
    pub executes: AtomicUsize,
    pub last_params: Mutex<Option<RecordedParams>>,
}

/// Scripted behavior for a mock extraction run.
#[derive(Debug, Clone)]
pub enum Behavior {
    Ok {
        headers: Vec<String>,
        rows: Vec<Vec<SqlValue>>,
    },
    FailConnect(String),
    FailExecute(String),
    FailFetch(String),
}

pub struct MockDriver {
    pub log: Arc<DriverLog>,
    behavior: Behavior,
}

impl MockDriver {
    pub fn with_behavior(behavior: Behavior) -> Self {
        Self {
            log: Arc::new(DriverLog::default()),
            behavior,
        }
    }

    pub fn returning(headers: Vec<String>, rows: Vec<Vec<SqlValue>>) -> Self {
        Self::with_behavior(Behavior::Ok { headers, rows })
    }
}

impl Driver for MockDriver {
    fn connect(&self, params: &ConnectParams<'_>) -> Result<Box<dyn Connection>, DriverError> {
        self.log.connect_attempts.fetch_add(1, Ordering::SeqCst);
        *self.log.last_params.lock().unwrap() = Some(RecordedParams {
            driver_name: params.driver_name.to_string(),
            conn_string: params.conn_string.to_string(),
            user: params.user.to_string(),
            password: params.password.to_string(),
            driver_file: params.driver_file.to_string(),
        });

        if let Behavior::FailConnect(message) = &self.behavior {
            return Err(DriverError::new(message.clone()));
        }

        Ok(Box::new(MockConnection {
            log: Arc::clone(&self.log),
            behavior: self.behavior.clone(),
        }))
    }
}

pub struct MockConnection {
    log: Arc<DriverLog>,
    behavior: Behavior,
}

impl Connection for MockConnection {
    fn cursor(&mut self) -> Result<Box<dyn Cursor + '_>, DriverError> {
        Ok(Box::new(MockCursor {
            log: Arc::clone(&self.log),
            behavior: self.behavior.clone(),
            executed: false,
        }))
    }

    fn close(&mut self) -> Result<(), DriverError> {
        self.log.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct MockCursor {
    log: Arc<DriverLog>,
    behavior: Behavior,
    executed: bool,
}

impl Cursor for MockCursor {
    fn execute(&mut self, _sql: &str) -> Result<(), DriverError> {
        self.log.executes.fetch_add(1, Ordering::SeqCst);
        if let Behavior::FailExecute(message) = &self.behavior {
            return Err(DriverError::new(message.clone()));
        }
        self.executed = true;
        Ok(())
    }

    fn description(&self) -> Result<Vec<String>, DriverError> {
        if !self.executed {
            return Err(DriverError::new("no statement executed"));
        }
        match &self.behavior {
            Behavior::Ok { headers, .. } => Ok(headers.clone()),
            Behavior::FailFetch(_) => Ok(Vec::new()),
            _ => Err(DriverError::new("no result set")),
        }
    }

    fn fetch_all(&mut self) -> Result<Vec<Vec<SqlValue>>, DriverError> {
        match &self.behavior {
            Behavior::Ok { rows, .. } => Ok(rows.clone()),
            Behavior::FailFetch(message) => Err(DriverError::new(message.clone())),
            _ => Err(DriverError::new("no result set")),
        }
    }
}

impl Drop for MockCursor {
    fn drop(&mut self) {
        self.log.cursors_dropped.fetch_add(1, Ordering::SeqCst);
    }
}
