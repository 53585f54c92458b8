//! In-memory record store.
//!
//! Counts and aggregates are always computed on read from the stored
//! records, never cached; the store is the single source of truth. A
//! production deployment would back the same operations with a document
//! database, surfacing failures as
//! [`StoreUnavailable`](crate::error::EngineError::StoreUnavailable).

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::calculation::ThirteenthMonthWindow;
use crate::error::EngineResult;
use crate::models::{
    BasicPayRecord, Candidate, Employee, JobPosting, PayrollRecord, PayrollResult, PeriodKey,
};

/// An in-memory document store for payroll and recruitment data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: RwLock<BTreeMap<String, Employee>>,
    payroll: RwLock<HashMap<PeriodKey, PayrollRecord>>,
    basic_pay: RwLock<HashMap<(String, i32, u32), BasicPayRecord>>,
    jobs: RwLock<BTreeMap<String, JobPosting>>,
    candidates: RwLock<BTreeMap<String, Candidate>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or replaces an employee record, keyed by id.
    pub async fn upsert_employee(&self, employee: Employee) -> EngineResult<()> {
        self.employees
            .write()
            .await
            .insert(employee.id.clone(), employee);
        Ok(())
    }

    /// Lists all employee records, ordered by id.
    pub async fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.read().await.values().cloned().collect())
    }

    /// Fetches one employee record.
    pub async fn get_employee(&self, id: &str) -> EngineResult<Option<Employee>> {
        Ok(self.employees.read().await.get(id).cloned())
    }

    /// Saves a payroll record for a period key, idempotently.
    ///
    /// A repeat save for the same key updates the stored result in place
    /// and keeps the original record id. Returns the stored record.
    pub async fn upsert_payroll(
        &self,
        key: PeriodKey,
        result: PayrollResult,
    ) -> EngineResult<PayrollRecord> {
        let mut payroll = self.payroll.write().await;
        let record_id = payroll
            .get(&key)
            .map(|existing| existing.record_id)
            .unwrap_or_else(Uuid::new_v4);

        let record = PayrollRecord {
            record_id,
            key: key.clone(),
            result,
            saved_at: Utc::now(),
        };
        payroll.insert(key, record.clone());
        Ok(record)
    }

    /// Fetches the payroll record stored under a period key.
    pub async fn get_payroll(&self, key: &PeriodKey) -> EngineResult<Option<PayrollRecord>> {
        Ok(self.payroll.read().await.get(key).cloned())
    }

    /// The number of stored payroll records.
    pub async fn payroll_count(&self) -> EngineResult<usize> {
        Ok(self.payroll.read().await.len())
    }

    /// Saves the basic-pay figure for one employee and month, idempotently.
    ///
    /// The `(employee_id, year, month)` bucket holds exactly one record;
    /// re-saving rewrites it.
    pub async fn upsert_basic_pay(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
        amount: Decimal,
    ) -> EngineResult<()> {
        let record = BasicPayRecord {
            employee_id: employee_id.to_string(),
            year,
            month,
            amount,
        };
        self.basic_pay
            .write()
            .await
            .insert((employee_id.to_string(), year, month), record);
        Ok(())
    }

    /// Creates or replaces a job posting, keyed by id.
    pub async fn upsert_job(&self, job: JobPosting) -> EngineResult<()> {
        self.jobs.write().await.insert(job.id.clone(), job);
        Ok(())
    }

    /// Lists all job postings, ordered by id.
    pub async fn list_jobs(&self) -> EngineResult<Vec<JobPosting>> {
        Ok(self.jobs.read().await.values().cloned().collect())
    }

    /// Creates or replaces a candidate record, keyed by id.
    ///
    /// Re-saving a candidate with a new stage moves them through the
    /// pipeline; no count is stored anywhere, so the move is complete the
    /// moment the record is.
    pub async fn upsert_candidate(&self, candidate: Candidate) -> EngineResult<()> {
        self.candidates
            .write()
            .await
            .insert(candidate.id.clone(), candidate);
        Ok(())
    }

    /// Lists all candidate records, ordered by id.
    pub async fn list_candidates(&self) -> EngineResult<Vec<Candidate>> {
        Ok(self.candidates.read().await.values().cloned().collect())
    }

    /// Fetches an employee's basic-pay records inside a thirteenth-month
    /// window.
    pub async fn basic_pay_in_window(
        &self,
        employee_id: &str,
        window: ThirteenthMonthWindow,
    ) -> EngineResult<Vec<BasicPayRecord>> {
        Ok(self
            .basic_pay
            .read()
            .await
            .values()
            .filter(|r| r.employee_id == employee_id && window.contains(r.year, r.month))
            .cloned()
            .collect())
    }
}
