use crate::workflows::loan::Applicant;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum ApplicantImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ApplicantImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicantImportError::Io(err) => write!(f, "failed to read applicant file: {}", err),
            ApplicantImportError::Csv(err) => write!(f, "invalid applicant CSV data: {}", err),
        }
    }
}

impl std::error::Error for ApplicantImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApplicantImportError::Io(err) => Some(err),
            ApplicantImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ApplicantImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ApplicantImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct ApplicantRow {
    name: String,
    age: u32,
    income: u64,
    credit_score: i32,
}

/// Reads applicant batches from CSV (`name,age,income,credit_score`).
pub struct ApplicantImporter;

impl ApplicantImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<Applicant>, ApplicantImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Applicant>, ApplicantImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut applicants = Vec::new();
        for row in csv_reader.deserialize::<ApplicantRow>() {
            let row = row?;
            applicants.push(Applicant::new(
                row.name,
                row.age,
                row.income,
                row.credit_score,
            ));
        }

        Ok(applicants)
    }
}
