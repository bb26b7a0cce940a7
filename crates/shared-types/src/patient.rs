use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Shown wherever a value could not be computed.
pub const PLACEHOLDER: &str = "—";

/// Patient identifier of the form `EPN-{year}-{nnnnn}`, where the suffix is
/// the last five digits of the epoch-millisecond timestamp.
pub fn patient_id<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    let suffix = now.timestamp_millis().rem_euclid(100_000);
    format!("EPN-{}-{:05}", now.year(), suffix)
}

/// Whole years between `dob` and `today`. `None` when the birth date lies in
/// the future.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(dob)
}

/// Hands out registration file numbers, starting at 1.
#[derive(Debug, Clone)]
pub struct FileCounter {
    next: u32,
}

impl Default for FileCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl FileCounter {
    pub fn next_number(&mut self) -> u32 {
        let n = self.next;
        self.next += 1;
        n
    }
}

/// Fields of the new-patient registration form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPatientForm {
    pub full_name: String,
    pub dob: Option<NaiveDate>,
    pub delivery_mode: String,
    pub service: String,
    pub nok_name: String,
    pub nok_phone: String,
    /// Pre-filled file number, if the clerk typed one.
    pub file_no: Option<u32>,
    /// Pre-filled patient id, if the clerk typed one.
    pub patient_id: Option<String>,
}

impl NewPatientForm {
    /// Labels of the required fields left blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("Full name");
        }
        if self.service.trim().is_empty() {
            missing.push("Service");
        }
        missing
    }

    /// Turn the form into a registered summary, generating the file number
    /// and patient id when the form left them empty.
    pub fn register<Tz: TimeZone>(
        self,
        counter: &mut FileCounter,
        now: &DateTime<Tz>,
    ) -> PatientSummary {
        let today = now.date_naive();
        let file_no = self.file_no.unwrap_or_else(|| counter.next_number());
        let patient_id = self
            .patient_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| patient_id(now));
        PatientSummary {
            date: today,
            file_no,
            patient_id,
            age: self.dob.and_then(|dob| age_on(dob, today)),
            full_name: self.full_name.trim().to_string(),
            delivery_mode: self.delivery_mode,
            service: self.service,
            nok_name: self.nok_name,
            nok_phone: self.nok_phone,
        }
    }
}

/// The live summary shown after a registration is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub date: NaiveDate,
    pub file_no: u32,
    pub patient_id: String,
    pub full_name: String,
    pub age: Option<u32>,
    pub delivery_mode: String,
    pub service: String,
    pub nok_name: String,
    pub nok_phone: String,
}

impl PatientSummary {
    pub fn age_text(&self) -> String {
        self.age
            .map(|a| a.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn next_of_kin(&self) -> String {
        format!("{} ({})", self.nok_name, self.nok_phone)
    }
}
